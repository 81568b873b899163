pub mod cache;
pub mod forwarding;
pub mod listener;
pub mod resolver;
pub mod server;
pub mod transport;

pub use cache::{CacheMetrics, ResponseCache};
pub use listener::UdpListener;
pub use resolver::{ForwardingResolver, IterativeResolver, ResolverBuilder};
pub use server::DnsServerHandler;
pub use transport::UdpUpstream;
