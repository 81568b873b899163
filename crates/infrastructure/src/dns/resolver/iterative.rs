//! Iterative resolution: root server, then whatever the authority section
//! points at, until a reply carries an A record.
//!
//! Both loops are bounded. A CNAME restarts the walk for its target at a
//! freshly picked root, at most `max_cname_chain` times; a single walk sends
//! at most `max_referral_hops` questions. Any transport failure ends the
//! resolution on the spot, there is no retry against another server.

use super::config::ResolverConfig;
use crate::dns::forwarding::{ReplyKind, ResponseParser};
use async_trait::async_trait;
use hickory_proto::op::Message;
use hickory_proto::rr::Name;
use loopdns_application::ports::{DnsResolver, UpstreamQuery};
use loopdns_domain::{DnsQuery, DomainError, ServerEndpoint};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info};

enum WalkOutcome {
    Answer(Message),
    Alias(Name),
}

pub struct IterativeResolver {
    upstream: Arc<dyn UpstreamQuery>,
    config: ResolverConfig,
}

impl IterativeResolver {
    pub fn new(upstream: Arc<dyn UpstreamQuery>, config: ResolverConfig) -> Self {
        info!(
            roots = config.root_servers.len(),
            hop_timeout_ms = config.hop_timeout.as_millis() as u64,
            max_cname_chain = config.max_cname_chain,
            max_referral_hops = config.max_referral_hops,
            "Iterative DNS resolver created"
        );

        Self { upstream, config }
    }

    pub async fn resolve_name(&self, domain: &str) -> Result<Message, DomainError> {
        let mut current = domain.to_string();

        for redirects in 0..=self.config.max_cname_chain {
            match self.walk(&current).await? {
                WalkOutcome::Answer(message) => {
                    debug!(domain = %domain, resolved = %current, redirects, "Walk finished");
                    return Ok(message);
                }
                WalkOutcome::Alias(target) => {
                    debug!(from = %current, cname = %target, "Found CNAME, restarting at root");
                    current = target.to_string();
                }
            }
        }

        Err(DomainError::TooManyRedirections(self.config.max_cname_chain))
    }

    async fn walk(&self, domain: &str) -> Result<WalkOutcome, DomainError> {
        let mut server = self.pick_root()?;

        for hop in 0..self.config.max_referral_hops {
            debug!(domain = %domain, server = %server, hop, "Querying server");

            let reply = self
                .upstream
                .query(domain, server, self.config.hop_timeout)
                .await?;

            match ResponseParser::classify(&reply) {
                ReplyKind::Alias(target) => return Ok(WalkOutcome::Alias(target)),
                ReplyKind::Answer => return Ok(WalkOutcome::Answer(reply)),
                ReplyKind::Referral(ns_name) => {
                    server = self.resolve_name_server(&ns_name).await?;
                    debug!(ns = %ns_name, next = %server, "Following referral");
                }
                ReplyKind::Dead => {
                    return Err(DomainError::NoFurtherInformation {
                        server: server.to_string(),
                        domain: domain.to_string(),
                    });
                }
            }
        }

        Err(DomainError::ResolutionExhausted(
            self.config.max_referral_hops,
        ))
    }

    /// NS names are looked up at the public resolver, never by a nested walk.
    async fn resolve_name_server(&self, ns_name: &Name) -> Result<ServerEndpoint, DomainError> {
        let ns = ns_name.to_string();

        let reply = self
            .upstream
            .query(
                &ns,
                self.config.public_resolver,
                self.config.forward_timeout,
            )
            .await
            .map_err(|e| {
                debug!(ns = %ns, error = %e, "Name server lookup failed");
                DomainError::UnresolvedNameServer(ns.clone())
            })?;

        ResponseParser::first_ipv4(&reply)
            .map(|ip| ServerEndpoint::new(IpAddr::V4(ip)))
            .ok_or(DomainError::UnresolvedNameServer(ns))
    }

    fn pick_root(&self) -> Result<ServerEndpoint, DomainError> {
        let roots = &self.config.root_servers;
        if roots.is_empty() {
            return Err(DomainError::ConfigError(
                "No root servers configured".to_string(),
            ));
        }
        Ok(roots[fastrand::usize(..roots.len())])
    }
}

#[async_trait]
impl DnsResolver for IterativeResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Message, DomainError> {
        self.resolve_name(&query.domain).await
    }

    fn mode_name(&self) -> &'static str {
        "iterative"
    }
}
