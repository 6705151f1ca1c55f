//! # dnscache
//!
//! Command-line front end for the resolution cache: resolve hostnames
//! through it or dial a `host:port` target with cached resolution.

mod bootstrap;
mod commands;
mod di;

use clap::{Parser, Subcommand};
use dnscache_domain::{CliOverrides, Network, NetworkFamily, SelectionPolicy};
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "dnscache")]
#[command(version)]
#[command(about = "Caching hostname resolution with stale-while-revalidate refresh")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Seconds an entry is served without resolving
    #[arg(long)]
    ttl: Option<u64>,

    /// Extra seconds an expired entry is served while refreshing
    #[arg(long)]
    stale: Option<u64>,

    /// Address selection policy: first, random, round_robin
    #[arg(long)]
    policy: Option<SelectionPolicy>,

    /// Address family to resolve: any, ipv4, ipv6
    #[arg(long)]
    network: Option<NetworkFamily>,

    /// Per-resolution timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve hostnames through the cache
    Resolve {
        #[arg(required = true)]
        hosts: Vec<String>,

        /// Number of rounds
        #[arg(short = 'n', long, default_value = "1")]
        repeat: u32,

        /// Pause between rounds in milliseconds
        #[arg(long, default_value = "1000")]
        interval_ms: u64,
    },

    /// Connect to HOST:PORT using cached resolution
    Dial {
        address: String,

        /// tcp, tcp4, tcp6, udp, udp4, udp6
        #[arg(long, default_value = "tcp")]
        network: Network,

        /// Dial the unresolved address when resolution fails
        #[arg(long)]
        fallback: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let fallback = match cli.command {
        Command::Dial { fallback: true, .. } => Some(true),
        _ => None,
    };
    let overrides = CliOverrides {
        ttl_secs: cli.ttl,
        stale_secs: cli.stale,
        policy: cli.policy,
        network: cli.network,
        timeout_ms: cli.timeout_ms,
        fallback_on_failure: fallback,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        ttl_secs = config.cache.ttl_secs,
        stale_secs = config.cache.stale_secs,
        policy = %config.cache.policy,
        network = %config.cache.network,
        "Configuration loaded"
    );

    let services = di::CacheServices::new(&config);

    match cli.command {
        Command::Resolve {
            hosts,
            repeat,
            interval_ms,
        } => {
            commands::run_resolve(
                &services.cache,
                &hosts,
                repeat,
                Duration::from_millis(interval_ms),
            )
            .await
        }
        Command::Dial {
            address, network, ..
        } => commands::run_dial(&services.dialer, network, &address).await,
    }
}
