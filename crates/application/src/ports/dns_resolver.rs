use async_trait::async_trait;
use hickory_proto::op::Message;
use loopdns_domain::{DnsQuery, DomainError};

/// Resolves a cache miss into a full upstream message.
///
/// Implemented once per resolution mode. A returned `Ok` must carry the
/// answer set the client will be served; every `Err` means the client gets
/// no response at all.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<Message, DomainError>;

    /// Short label used in logs.
    fn mode_name(&self) -> &'static str;
}
