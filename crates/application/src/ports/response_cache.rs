use hickory_proto::op::Message;

/// Process-wide store of resolved messages keyed by the queried name as
/// received. Each call is atomic on its own; nothing coordinates a lookup
/// with a later store.
pub trait ResponseCachePort: Send + Sync {
    fn lookup(&self, name: &str) -> Option<Message>;

    /// Overwrites any previous entry for `name`.
    fn store(&self, name: &str, message: Message);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
