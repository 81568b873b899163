pub mod cache;
pub mod errors;
pub mod logging;
pub mod resolution;
pub mod root;
pub mod server;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolution::{ResolutionConfig, ResolutionMode};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
