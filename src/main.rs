use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use receipt_processor::config::{self, Config};
use receipt_processor::server::{self, AppState};
use receipt_processor::store::ReceiptStore;

const EXIT_CONFIG: i32 = 4;
const EXIT_SERVER: i32 = 5;

#[derive(Parser, Debug)]
#[command(name = "receipt-processor")]
#[command(about = "Receipt scoring HTTP service", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/receipt-processor/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Address to bind (overrides server.host)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory for rolling log files (overrides log.dir)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Cli {
    /// CLI flags take precedence over the config file
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(ref dir) = self.log_dir {
            config.log.dir = Some(dir.clone());
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load config
    let config_path = cli.config.as_ref().map(PathBuf::from);
    let mut config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    cli.apply_overrides(&mut config);

    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Guard must outlive the server so file logs are flushed
    let log_guard = match receipt_processor::logging::init_logging(&config.log, cli.verbose) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Logging error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let request_timeout = match config.server.request_timeout.as_deref() {
        Some(s) => match config::parse_timeout(s) {
            Ok(d) => Some(d),
            Err(e) => {
                eprintln!("Config error: server.request_timeout: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        },
        None => None,
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        "Starting receipt processor"
    );

    let state = AppState::new(Arc::new(ReceiptStore::new()));
    if let Err(e) = server::run(
        &config.server.host,
        config.server.port,
        request_timeout,
        state,
    )
    .await
    {
        tracing::error!(error = %format!("{:#}", e), "Server failed");
        eprintln!("Server error: {:#}", e);
        drop(log_guard);
        std::process::exit(EXIT_SERVER);
    }
}
