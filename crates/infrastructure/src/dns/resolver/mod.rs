pub mod builder;
pub mod config;
pub mod forwarding;
pub mod iterative;

pub use builder::ResolverBuilder;
pub use config::ResolverConfig;
pub use forwarding::ForwardingResolver;
pub use iterative::IterativeResolver;
