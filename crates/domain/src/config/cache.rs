use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Expire entries after the smallest TTL in their answer set.
    /// Off by default: entries then live until the process exits.
    #[serde(default)]
    pub respect_ttl: bool,
}
