//! linkdir: a static link directory server
//!
//! Serves a tree of categories and links described in a TOML file. Every
//! category page is rendered once at startup; links become redirects.
//!
//! # Architecture Overview
//!
//! ```text
//!     linkdir.toml
//!          │
//!          ▼
//!     ┌─────────┐    ┌───────────┐    ┌──────────┐    ┌─────────────┐
//!     │ config  │───▶│  content  │───▶│  render  │───▶│  RouteTable │
//!     │ loader  │    │ compiler  │    │ minijinja│    │  (routing)  │
//!     └─────────┘    └───────────┘    └──────────┘    └──────┬──────┘
//!                                                            │
//!     Client Request    ┌─────────┐    ┌──────────────┐      │
//!     ─────────────────▶│   net   │───▶│ http server  │◀─────┘
//!     ◀─────────────────│ tcp/tls │◀───│  dispatch    │
//!     Client Response   └─────────┘    └──────────────┘
//!
//!     Cross-cutting: observability (tracing, metrics), security headers,
//!     lifecycle (startup, signals, graceful shutdown)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "linkdir", version, about = "Serve a static directory of links")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match linkdir::lifecycle::run(&cli.config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
