use super::entry::CacheEntry;
use super::metrics::CacheMetrics;
use crate::dns::forwarding::ResponseParser;
use dashmap::DashMap;
use hickory_proto::op::Message;
use loopdns_application::ports::ResponseCachePort;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Resolved messages keyed by the name exactly as the client sent it.
///
/// Entries live for the whole process unless `respect_ttl` is on, in which
/// case each one expires after the smallest TTL in its answer section and
/// is dropped the next time it is looked up. Messages without answers are
/// never given a TTL.
pub struct ResponseCache {
    entries: DashMap<Arc<str>, CacheEntry>,
    respect_ttl: bool,
    metrics: Arc<CacheMetrics>,
}

impl ResponseCache {
    pub fn new(respect_ttl: bool) -> Self {
        info!(respect_ttl, "Response cache initialized");

        Self {
            entries: DashMap::new(),
            respect_ttl,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    fn ttl_for(&self, message: &Message) -> Option<Duration> {
        if !self.respect_ttl {
            return None;
        }
        ResponseParser::min_answer_ttl(message).map(|ttl| Duration::from_secs(u64::from(ttl)))
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ResponseCachePort for ResponseCache {
    fn lookup(&self, name: &str) -> Option<Message> {
        let expired = match self.entries.get(name) {
            Some(entry) if !entry.is_expired() => {
                self.metrics.record_hit();
                return Some(entry.message.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            // Re-check under the write lock, a fresh store may have raced in.
            if self
                .entries
                .remove_if(name, |_, entry| entry.is_expired())
                .is_some()
            {
                self.metrics.record_expiration();
                debug!(domain = %name, "Cache entry expired");
            }
        }

        self.metrics.record_miss();
        None
    }

    fn store(&self, name: &str, message: Message) {
        let ttl = self.ttl_for(&message);
        self.entries
            .insert(Arc::from(name), CacheEntry::new(message, ttl));
        self.metrics.record_insertion();
        debug!(domain = %name, ttl_secs = ttl.map(|t| t.as_secs()), "Cached response");
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::op::{MessageType, OpCode};
    use hickory_proto::rr::rdata::A;
    use hickory_proto::rr::{Name, RData, Record};
    use std::net::Ipv4Addr;
    use std::str::FromStr;

    fn answer(ttl: u32) -> Message {
        let mut message = Message::new(7, MessageType::Response, OpCode::Query);
        message.add_answer(Record::from_rdata(
            Name::from_str("example.com.").unwrap(),
            ttl,
            RData::A(A(Ipv4Addr::new(93, 184, 216, 34))),
        ));
        message
    }

    #[test]
    fn test_ttl_ignored_by_default() {
        let cache = ResponseCache::default();
        cache.store("example.com", answer(0));
        assert!(cache.lookup("example.com").is_some());
    }

    #[test]
    fn test_zero_ttl_expires_immediately_when_respected() {
        let cache = ResponseCache::new(true);
        cache.store("example.com", answer(0));

        assert!(cache.lookup("example.com").is_none());
        assert_eq!(cache.len(), 0);
        assert_eq!(
            cache
                .metrics()
                .expirations
                .load(std::sync::atomic::Ordering::Relaxed),
            1
        );
    }

    #[test]
    fn test_empty_answer_never_expires() {
        let cache = ResponseCache::new(true);
        cache.store(
            "nothing.test",
            Message::new(1, MessageType::Response, OpCode::Query),
        );
        assert!(cache.lookup("nothing.test").is_some());
    }
}
