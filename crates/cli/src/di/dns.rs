use loopdns_application::use_cases::HandleDnsQueryUseCase;
use loopdns_domain::{Config, ResolutionMode};
use loopdns_infrastructure::dns::resolver::{ResolverBuilder, ResolverConfig};
use loopdns_infrastructure::dns::{DnsServerHandler, ResponseCache};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub cache: Arc<ResponseCache>,
    pub handler: Arc<DnsServerHandler>,
}

impl DnsServices {
    pub fn new(config: &Config, mode: ResolutionMode) -> anyhow::Result<Self> {
        let resolver_config = ResolverConfig::try_from(&config.resolution)?;

        info!(
            mode = %mode,
            public_resolver = %resolver_config.public_resolver,
            roots = resolver_config.root_servers.len(),
            "Initializing DNS services"
        );

        let resolver = ResolverBuilder::new()
            .with_config(resolver_config)
            .build(mode);

        let cache = Arc::new(ResponseCache::new(config.cache.respect_ttl));
        let use_case = Arc::new(HandleDnsQueryUseCase::new(resolver, cache.clone()));

        Ok(Self {
            cache,
            handler: Arc::new(DnsServerHandler::new(use_case)),
        })
    }
}
