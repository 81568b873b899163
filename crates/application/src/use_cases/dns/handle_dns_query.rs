use crate::ports::{DnsResolver, ResponseCachePort};
use hickory_proto::rr::Record;
use loopdns_domain::{DnsQuery, DomainError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Answer records for one client query, still owned by the names the
/// upstream used. Owner rewriting happens when the response is built.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub answers: Vec<Record>,
    pub cache_hit: bool,
    pub elapsed: Duration,
}

pub struct HandleDnsQueryUseCase {
    resolver: Arc<dyn DnsResolver>,
    cache: Arc<dyn ResponseCachePort>,
}

impl HandleDnsQueryUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>, cache: Arc<dyn ResponseCachePort>) -> Self {
        Self { resolver, cache }
    }

    pub fn mode_name(&self) -> &'static str {
        self.resolver.mode_name()
    }

    pub async fn execute(&self, query: &DnsQuery) -> Result<QueryOutcome, DomainError> {
        let start = Instant::now();

        if let Some(cached) = self.cache.lookup(&query.domain) {
            debug!(domain = %query.domain, record_type = %query.record_type, "Cache hit");
            return Ok(QueryOutcome {
                answers: cached.answers().to_vec(),
                cache_hit: true,
                elapsed: start.elapsed(),
            });
        }

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            mode = self.resolver.mode_name(),
            "Cache miss, resolving"
        );

        match self.resolver.resolve(query).await {
            Ok(message) => {
                let answers = message.answers().to_vec();
                self.cache.store(&query.domain, message);

                Ok(QueryOutcome {
                    answers,
                    cache_hit: false,
                    elapsed: start.elapsed(),
                })
            }
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    mode = self.resolver.mode_name(),
                    error = %e,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Failed to resolve domain"
                );
                Err(e)
            }
        }
    }
}
