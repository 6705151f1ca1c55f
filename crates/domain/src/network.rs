use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// Address family restriction applied to resolution and selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkFamily {
    #[default]
    #[serde(alias = "ip")]
    Any,
    #[serde(alias = "ip4")]
    Ipv4,
    #[serde(alias = "ip6")]
    Ipv6,
}

impl NetworkFamily {
    /// Returns the address normalised to this family, or `None` when it does
    /// not belong to it. IPv4-mapped IPv6 addresses count as IPv4.
    #[inline]
    pub fn accept(&self, ip: IpAddr) -> Option<IpAddr> {
        match (self, ip) {
            (Self::Any, ip) => Some(ip),
            (Self::Ipv4, IpAddr::V4(_)) => Some(ip),
            (Self::Ipv4, IpAddr::V6(v6)) => v6.to_ipv4_mapped().map(IpAddr::V4),
            (Self::Ipv6, IpAddr::V6(_)) => Some(ip),
            (Self::Ipv6, IpAddr::V4(_)) => None,
        }
    }

    /// Order-preserving filter.
    pub fn filter(&self, addresses: &[IpAddr]) -> Vec<IpAddr> {
        if *self == Self::Any {
            return addresses.to_vec();
        }
        addresses.iter().filter_map(|ip| self.accept(*ip)).collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
        }
    }
}

impl FromStr for NetworkFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" | "ip" => Ok(Self::Any),
            "ipv4" | "ip4" => Ok(Self::Ipv4),
            "ipv6" | "ip6" => Ok(Self::Ipv6),
            other => Err(format!("Unknown network family: {other}")),
        }
    }
}

impl fmt::Display for NetworkFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport requested by a connect call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Network {
    #[default]
    Tcp,
    Tcp4,
    Tcp6,
    Udp,
    Udp4,
    Udp6,
}

impl Network {
    pub fn family(&self) -> NetworkFamily {
        match self {
            Self::Tcp4 | Self::Udp4 => NetworkFamily::Ipv4,
            Self::Tcp6 | Self::Udp6 => NetworkFamily::Ipv6,
            Self::Tcp | Self::Udp => NetworkFamily::Any,
        }
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Tcp | Self::Tcp4 | Self::Tcp6)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tcp => "tcp",
            Self::Tcp4 => "tcp4",
            Self::Tcp6 => "tcp6",
            Self::Udp => "udp",
            Self::Udp4 => "udp4",
            Self::Udp6 => "udp6",
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tcp" => Ok(Self::Tcp),
            "tcp4" => Ok(Self::Tcp4),
            "tcp6" => Ok(Self::Tcp6),
            "udp" => Ok(Self::Udp),
            "udp4" => Ok(Self::Udp4),
            "udp6" => Ok(Self::Udp6),
            other => Err(format!("Unknown network: {other}")),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
