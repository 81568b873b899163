use loopdns_domain::config::ResolutionConfig;
use loopdns_domain::{DomainError, ServerEndpoint};
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ResolverConfig {
    pub public_resolver: ServerEndpoint,

    pub root_servers: Vec<ServerEndpoint>,

    /// Timeout for questions sent to the public resolver.
    pub forward_timeout: Duration,

    /// Timeout for each hop of the iterative walk.
    pub hop_timeout: Duration,

    pub max_cname_chain: usize,

    pub max_referral_hops: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            public_resolver: ServerEndpoint::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8))),
            root_servers: vec![
                ServerEndpoint::new(IpAddr::V4(Ipv4Addr::new(198, 41, 0, 4))),
                ServerEndpoint::new(IpAddr::V4(Ipv4Addr::new(199, 9, 14, 201))),
                ServerEndpoint::new(IpAddr::V4(Ipv4Addr::new(192, 33, 4, 12))),
            ],
            forward_timeout: Duration::from_secs(5),
            hop_timeout: Duration::from_secs(2),
            max_cname_chain: 8,
            max_referral_hops: 16,
        }
    }
}

impl TryFrom<&ResolutionConfig> for ResolverConfig {
    type Error = DomainError;

    fn try_from(config: &ResolutionConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            public_resolver: config.public_resolver_endpoint()?,
            root_servers: config.root_endpoints()?,
            forward_timeout: Duration::from_millis(config.forward_timeout_ms),
            hop_timeout: Duration::from_millis(config.hop_timeout_ms),
            max_cname_chain: config.max_cname_chain,
            max_referral_hops: config.max_referral_hops,
        })
    }
}

impl ResolverConfig {
    pub fn with_public_resolver(mut self, endpoint: ServerEndpoint) -> Self {
        self.public_resolver = endpoint;
        self
    }

    pub fn with_root_servers(mut self, roots: Vec<ServerEndpoint>) -> Self {
        self.root_servers = roots;
        self
    }

    pub fn with_timeouts(mut self, forward: Duration, hop: Duration) -> Self {
        self.forward_timeout = forward;
        self.hop_timeout = hop;
        self
    }

    pub fn with_limits(mut self, max_cname_chain: usize, max_referral_hops: usize) -> Self {
        self.max_cname_chain = max_cname_chain;
        self.max_referral_hops = max_referral_hops;
        self
    }
}
