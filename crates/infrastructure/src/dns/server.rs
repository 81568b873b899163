use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use loopdns_application::use_cases::HandleDnsQueryUseCase;
use loopdns_domain::{DnsQuery, RecordType};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Turns one client datagram into at most one reply datagram.
///
/// `None` means the client gets nothing back: the request did not decode,
/// carried no question, or resolution failed.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn handle_datagram(&self, bytes: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let request = match ResponseParser::parse(bytes) {
            Ok(message) => message,
            Err(e) => {
                warn!(client = %client, error = %e, "Dropping undecodable request");
                return None;
            }
        };

        let Some(question) = request.queries().first() else {
            warn!(client = %client, id = request.id(), "Dropping request without a question");
            return None;
        };

        let domain = question.name().to_string();
        // Upstream questions are always type A, the client's type is kept for logs only.
        let query = DnsQuery::new(
            domain.as_str(),
            RecordType::from(u16::from(question.query_type())),
        );

        info!(
            domain = %domain,
            record_type = %query.record_type,
            client = %client,
            "DNS query received"
        );

        let outcome = self.use_case.execute(&query).await.ok()?;

        let response = match MessageBuilder::build_response(&request, &outcome.answers) {
            Ok(response) => response,
            Err(e) => {
                warn!(domain = %domain, error = %e, "Failed to build response");
                return None;
            }
        };

        match MessageBuilder::serialize_message(&response) {
            Ok(wire) => {
                debug!(
                    domain = %domain,
                    answers = outcome.answers.len(),
                    cache_hit = outcome.cache_hit,
                    elapsed_us = outcome.elapsed.as_micros() as u64,
                    "Query answered"
                );
                Some(wire)
            }
            Err(e) => {
                warn!(domain = %domain, error = %e, "Failed to serialize response");
                None
            }
        }
    }
}
