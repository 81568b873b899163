use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    TransportError { server: String, reason: String },

    #[error("Could not resolve name server {0} to an address")]
    UnresolvedNameServer(String),

    #[error("No further information from {server} for {domain}")]
    NoFurtherInformation { server: String, domain: String },

    #[error("Too many CNAME redirections (limit {0})")]
    TooManyRedirections(usize),

    #[error("Resolution exhausted after {0} referral hops")]
    ResolutionExhausted(usize),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
