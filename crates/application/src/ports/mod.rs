mod dns_resolver;
mod response_cache;
mod upstream_query;

pub use dns_resolver::DnsResolver;
pub use response_cache::ResponseCachePort;
pub use upstream_query::UpstreamQuery;

// Re-export for convenience
pub use loopdns_domain::DnsQuery;
