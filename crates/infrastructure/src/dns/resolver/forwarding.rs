use super::config::ResolverConfig;
use async_trait::async_trait;
use hickory_proto::op::Message;
use loopdns_application::ports::{DnsResolver, UpstreamQuery};
use loopdns_domain::{DnsQuery, DomainError};
use std::sync::Arc;
use tracing::{debug, info};

/// Hands the whole lookup to the public resolver and returns its reply
/// untouched, whatever it contains.
pub struct ForwardingResolver {
    upstream: Arc<dyn UpstreamQuery>,
    config: ResolverConfig,
}

impl ForwardingResolver {
    pub fn new(upstream: Arc<dyn UpstreamQuery>, config: ResolverConfig) -> Self {
        info!(
            public_resolver = %config.public_resolver,
            timeout_ms = config.forward_timeout.as_millis() as u64,
            "Forwarding DNS resolver created"
        );

        Self { upstream, config }
    }
}

#[async_trait]
impl DnsResolver for ForwardingResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Message, DomainError> {
        debug!(
            domain = %query.domain,
            upstream = %self.config.public_resolver,
            "Asking the public DNS server"
        );

        let message = self
            .upstream
            .query(
                &query.domain,
                self.config.public_resolver,
                self.config.forward_timeout,
            )
            .await?;

        debug!(
            domain = %query.domain,
            answers = message.answers().len(),
            "Forwarded query answered"
        );

        Ok(message)
    }

    fn mode_name(&self) -> &'static str {
        "forward"
    }
}
