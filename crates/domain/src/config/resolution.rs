use crate::ServerEndpoint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How cache misses are resolved. Chosen once at startup.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMode {
    /// Delegate the whole lookup to the public resolver.
    Forward,

    /// Walk from a root server down to the authoritative server.
    Iterative,
}

impl ResolutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Iterative => "iterative",
        }
    }

    /// Numeric selector used by the interactive prompt: 0 forwards, 1 iterates.
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            0 => Some(Self::Forward),
            1 => Some(Self::Iterative),
            _ => None,
        }
    }
}

impl fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "forward" | "0" => Ok(Self::Forward),
            "iterative" | "1" => Ok(Self::Iterative),
            other => Err(format!("Unknown resolution mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolutionConfig {
    /// `None` means ask on the terminal at startup.
    #[serde(default)]
    pub mode: Option<ResolutionMode>,

    #[serde(default = "default_public_resolver")]
    pub public_resolver: String,

    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<String>,

    #[serde(default = "default_forward_timeout_ms")]
    pub forward_timeout_ms: u64,

    #[serde(default = "default_hop_timeout_ms")]
    pub hop_timeout_ms: u64,

    #[serde(default = "default_max_cname_chain")]
    pub max_cname_chain: usize,

    #[serde(default = "default_max_referral_hops")]
    pub max_referral_hops: usize,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            mode: None,
            public_resolver: default_public_resolver(),
            root_servers: default_root_servers(),
            forward_timeout_ms: default_forward_timeout_ms(),
            hop_timeout_ms: default_hop_timeout_ms(),
            max_cname_chain: default_max_cname_chain(),
            max_referral_hops: default_max_referral_hops(),
        }
    }
}

impl ResolutionConfig {
    pub fn public_resolver_endpoint(&self) -> Result<ServerEndpoint, crate::DomainError> {
        self.public_resolver.parse()
    }

    pub fn root_endpoints(&self) -> Result<Vec<ServerEndpoint>, crate::DomainError> {
        self.root_servers.iter().map(|s| s.parse()).collect()
    }
}

fn default_public_resolver() -> String {
    "8.8.8.8".to_string()
}

fn default_root_servers() -> Vec<String> {
    vec![
        "198.41.0.4".to_string(),   // a.root-servers.net
        "199.9.14.201".to_string(), // b.root-servers.net
        "192.33.4.12".to_string(),  // c.root-servers.net
    ]
}

fn default_forward_timeout_ms() -> u64 {
    5000
}

fn default_hop_timeout_ms() -> u64 {
    2000
}

fn default_max_cname_chain() -> usize {
    8
}

fn default_max_referral_hops() -> usize {
    16
}
