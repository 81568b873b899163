use hickory_proto::op::Message;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub message: Message,
    pub stored_at: Instant,
    /// `None` means the entry never expires.
    pub ttl: Option<Duration>,
}

impl CacheEntry {
    pub fn new(message: Message, ttl: Option<Duration>) -> Self {
        Self {
            message,
            stored_at: Instant::now(),
            ttl,
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.ttl {
            Some(ttl) => now.saturating_duration_since(self.stored_at) >= ttl,
            None => false,
        }
    }
}
