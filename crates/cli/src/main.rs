use clap::Parser;
use dns_export_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;
mod session;

#[derive(Parser)]
#[command(name = "dns-export")]
#[command(version)]
#[command(about = "Passive DNS answer statistics from captures or live traffic, exported to syslog")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Read packets from a pcap or pcapng file
    #[arg(short = 'r', long, value_name = "FILE", conflicts_with = "interface")]
    pcap_file: Option<String>,

    /// Capture live on this interface ("any" for all)
    #[arg(short = 'i', long, value_name = "IFACE")]
    interface: Option<String>,

    /// Syslog collector (host, host:port or address)
    #[arg(short = 's', long, value_name = "SERVER")]
    syslog_server: Option<String>,

    /// Seconds between statistics exports in live mode
    #[arg(short = 't', long, value_name = "SECONDS")]
    interval: Option<u64>,

    /// Keep answers of unsupported record types
    #[arg(long)]
    include_unknown: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        pcap_file: cli.pcap_file,
        interface: cli.interface,
        syslog_server: cli.syslog_server,
        export_interval_secs: cli.interval,
        include_unknown: cli.include_unknown,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config.logging);

    info!("Starting dns-export v{}", env!("CARGO_PKG_VERSION"));

    let use_cases = di::UseCases::new(&config);

    match (&config.capture.pcap_file, &config.capture.interface) {
        (Some(path), _) => session::run_offline(path, &config.capture, &use_cases).await?,
        (None, Some(interface)) => {
            session::run_live(interface, &config.capture, &config.stats, &use_cases).await?
        }
        (None, None) => anyhow::bail!("Either a capture file or an interface is required"),
    }

    info!("dns-export finished");
    Ok(())
}
