use async_trait::async_trait;
use hickory_proto::op::Message;
use loopdns_domain::{DomainError, ServerEndpoint};
use std::time::Duration;

/// One question to one remote server, one reply or a failure.
#[async_trait]
pub trait UpstreamQuery: Send + Sync {
    async fn query(
        &self,
        domain: &str,
        server: ServerEndpoint,
        timeout: Duration,
    ) -> Result<Message, DomainError>;
}
