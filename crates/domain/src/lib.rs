//! loopdns Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod server_endpoint;

pub use config::{CliOverrides, Config, ResolutionMode};
pub use dns_query::DnsQuery;
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use server_endpoint::{ServerEndpoint, DNS_PORT};
