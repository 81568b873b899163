use super::forwarding::message_builder::MAX_DATAGRAM_SIZE;
use super::server::DnsServerHandler;
use loopdns_domain::DomainError;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

/// Long-lived UDP socket that spawns one task per datagram.
///
/// At most `max_concurrent` datagrams are in flight. Once the cap is reached
/// the receive loop waits for a slot instead of reading more, so excess
/// requests queue in the kernel socket buffer.
pub struct UdpListener {
    socket: Arc<UdpSocket>,
    handler: Arc<DnsServerHandler>,
    permits: Arc<Semaphore>,
}

impl UdpListener {
    pub async fn bind(
        addr: SocketAddr,
        handler: Arc<DnsServerHandler>,
        max_concurrent: usize,
    ) -> Result<Self, DomainError> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind {}: {}", addr, e)))?;

        info!(bind_address = %addr, max_concurrent, "DNS listener bound");

        Ok(Self {
            socket: Arc::new(socket),
            handler,
            permits: Arc::new(Semaphore::new(max_concurrent.max(1))),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.socket
            .local_addr()
            .map_err(|e| DomainError::IoError(e.to_string()))
    }

    /// Serves until `shutdown` resolves. Tasks already spawned keep running
    /// and may still send their reply.
    pub async fn run<F>(self, shutdown: F) -> Result<(), DomainError>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut recv_buf = [0u8; MAX_DATAGRAM_SIZE];

        loop {
            let permit = tokio::select! {
                _ = &mut shutdown => break,
                permit = Arc::clone(&self.permits).acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(_) => break,
                },
            };

            let (len, client) = tokio::select! {
                _ = &mut shutdown => break,
                received = self.socket.recv_from(&mut recv_buf) => match received {
                    Ok(received) => received,
                    Err(e) if is_transient(&e) => {
                        debug!(error = %e, "Ignoring transient receive error");
                        continue;
                    }
                    Err(e) => {
                        error!(error = %e, "UDP receive failed");
                        return Err(DomainError::IoError(e.to_string()));
                    }
                },
            };

            let request: Arc<[u8]> = Arc::from(&recv_buf[..len]);
            let handler = Arc::clone(&self.handler);
            let socket = Arc::clone(&self.socket);

            tokio::spawn(async move {
                let _permit = permit;
                if let Some(response) = handler.handle_datagram(&request, client).await {
                    if let Err(e) = socket.send_to(&response, client).await {
                        warn!(client = %client, error = %e, "Failed to send response");
                    }
                }
            });
        }

        info!("DNS listener stopped");
        Ok(())
    }
}

// Windows reports ICMP port unreachable from an earlier send as a receive error.
fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::ConnectionReset | io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
    )
}
