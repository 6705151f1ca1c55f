pub mod connector;

pub use connector::{Connection, TokioConnector};
