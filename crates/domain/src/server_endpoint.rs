use crate::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

pub const DNS_PORT: u16 = 53;

/// A DNS server reachable on UDP port 53: a root server, the public
/// resolver, or a name server discovered during a referral walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServerEndpoint {
    ip: IpAddr,
    port: u16,
}

impl ServerEndpoint {
    pub fn new(ip: IpAddr) -> Self {
        Self { ip, port: DNS_PORT }
    }

    /// Endpoint on a non-standard port. Only loopback test servers need this.
    pub fn with_port(ip: IpAddr, port: u16) -> Self {
        Self { ip, port }
    }

    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port)
    }
}

impl From<IpAddr> for ServerEndpoint {
    fn from(ip: IpAddr) -> Self {
        Self::new(ip)
    }
}

impl From<SocketAddr> for ServerEndpoint {
    fn from(addr: SocketAddr) -> Self {
        Self::with_port(addr.ip(), addr.port())
    }
}

impl FromStr for ServerEndpoint {
    type Err = DomainError;

    /// Accepts a bare IP (`8.8.8.8`, port 53 implied) or a socket address
    /// (`127.0.0.1:5300`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(Self::new(ip));
        }
        s.parse::<SocketAddr>()
            .map(Self::from)
            .map_err(|_| DomainError::InvalidIpAddress(s.to_string()))
    }
}

impl fmt::Display for ServerEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.socket_addr())
    }
}
