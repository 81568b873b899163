mod dns_server_mock;
mod scripted_upstream;

pub use dns_server_mock::MockDnsServer;
pub use scripted_upstream::*;
