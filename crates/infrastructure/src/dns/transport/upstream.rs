use super::udp::UdpTransport;
use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use async_trait::async_trait;
use hickory_proto::op::Message;
use loopdns_application::ports::UpstreamQuery;
use loopdns_domain::{DomainError, ServerEndpoint};
use std::time::Duration;
use tracing::debug;

/// `UpstreamQuery` over plain UDP: build an A question, exchange it on a
/// fresh socket, decode the reply.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpUpstream;

impl UdpUpstream {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UpstreamQuery for UdpUpstream {
    async fn query(
        &self,
        domain: &str,
        server: ServerEndpoint,
        timeout: Duration,
    ) -> Result<Message, DomainError> {
        let (id, request) = MessageBuilder::build_query_with_id(domain)?;

        debug!(domain = %domain, server = %server, id, "Querying server");

        let transport = UdpTransport::new(server.socket_addr());
        let reply = transport.send(&request, timeout).await?;

        ResponseParser::parse(&reply)
    }
}
