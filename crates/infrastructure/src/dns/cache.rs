mod entry;
mod metrics;
mod store;

pub use entry::CacheEntry;
pub use metrics::CacheMetrics;
pub use store::ResponseCache;
