//! nazca CLI - trailing-window trading statistics over HTTP.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod server;

#[derive(Parser)]
#[command(name = "nazca")]
#[command(about = "Trailing-window trading statistics service", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service (the default when no command is given)
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (host, port) = match cli.command {
        Some(Commands::Serve { host, port }) => (host, port),
        None => ("127.0.0.1".to_string(), 8000),
    };

    server::serve(&host, port).await
}

/// Initializes the tracing subscriber, honoring `RUST_LOG` when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("nazca={level}")));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
