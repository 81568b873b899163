pub mod udp;
pub mod upstream;

pub use udp::UdpTransport;
pub use upstream::UdpUpstream;
