use super::config::ResolverConfig;
use super::forwarding::ForwardingResolver;
use super::iterative::IterativeResolver;
use crate::dns::transport::UdpUpstream;
use loopdns_application::ports::{DnsResolver, UpstreamQuery};
use loopdns_domain::ResolutionMode;
use std::sync::Arc;
use tracing::info;

pub struct ResolverBuilder {
    upstream: Arc<dyn UpstreamQuery>,
    config: ResolverConfig,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self {
            upstream: Arc::new(UdpUpstream::new()),
            config: ResolverConfig::default(),
        }
    }

    pub fn with_upstream(mut self, upstream: Arc<dyn UpstreamQuery>) -> Self {
        self.upstream = upstream;
        self
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self, mode: ResolutionMode) -> Arc<dyn DnsResolver> {
        info!(mode = %mode, "Building DNS resolver");

        match mode {
            ResolutionMode::Forward => Arc::new(ForwardingResolver::new(self.upstream, self.config)),
            ResolutionMode::Iterative => {
                Arc::new(IterativeResolver::new(self.upstream, self.config))
            }
        }
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
