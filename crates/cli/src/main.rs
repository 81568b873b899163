use clap::Parser;
use loopdns_domain::{CliOverrides, ResolutionMode};
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "loopdns")]
#[command(version = "0.1.0")]
#[command(about = "loopdns - local DNS proxy with forwarding and iterative resolution")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Resolution mode: forward (0) or iterative (1). Prompts when unset
    #[arg(short = 'm', long)]
    mode: Option<ResolutionMode>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Public resolver used in forward mode and for name server lookups
    #[arg(long, value_name = "IP")]
    public_resolver: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        mode: cli.mode,
        public_resolver: cli.public_resolver.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting loopdns v{}", env!("CARGO_PKG_VERSION"));

    let mode = bootstrap::resolve_mode(config.resolution.mode).await?;
    info!(mode = %mode, "Resolution mode selected");

    let dns_services = di::DnsServices::new(&config, mode)?;

    server::start_dns_server(
        config.server.listen_address()?,
        dns_services.handler,
        config.server.max_concurrent_requests,
        dns_services.cache.metrics(),
    )
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
