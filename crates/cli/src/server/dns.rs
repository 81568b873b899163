use loopdns_infrastructure::dns::{CacheMetrics, DnsServerHandler, UdpListener};
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{error, info};

pub async fn start_dns_server(
    socket_addr: SocketAddr,
    handler: Arc<DnsServerHandler>,
    max_concurrent: usize,
    metrics: Arc<CacheMetrics>,
) -> anyhow::Result<()> {
    let listener = UdpListener::bind(socket_addr, handler, max_concurrent).await?;
    info!("DNS server ready on {}", listener.local_addr()?);

    listener
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
            info!("Shutting down");
        })
        .await?;

    info!(
        hits = metrics.hits.load(Ordering::Relaxed),
        misses = metrics.misses.load(Ordering::Relaxed),
        insertions = metrics.insertions.load(Ordering::Relaxed),
        expirations = metrics.expirations.load(Ordering::Relaxed),
        hit_rate_pct = metrics.hit_rate(),
        "Cache statistics"
    );

    Ok(())
}
