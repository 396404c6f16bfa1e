//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Compile the content tree (pre-render every page)
//! - Start background tasks (signals, metrics)
//! - Bind listeners and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listeners start last: a bad config never binds a port

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::net::TcpListener;

use crate::assets::asset_routes;
use crate::config::{load_config, ConfigError, SiteConfig};
use crate::content::{CompileError, Compiler};
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::spawn_signal_listener;
use crate::net::tls::load_tls_config;
use crate::observability::{logging, metrics};
use crate::render::{RenderError, TemplateRenderer};
use crate::routing::RouteTable;

/// Errors that stop the process before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("couldn't load config file {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    #[error("couldn't load page templates: {0}")]
    Templates(#[from] RenderError),

    #[error("error parsing content: {0}")]
    Compile(#[from] CompileError),

    #[error("couldn't load TLS certificates: {0}")]
    Tls(#[source] std::io::Error),

    #[error("couldn't bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Compile the content tree of a validated config, assets included.
pub fn build_routes(config: &SiteConfig) -> Result<RouteTable, StartupError> {
    let renderer = TemplateRenderer::new()?;
    let assets = asset_routes().map_err(CompileError::from)?;
    let routes = Compiler::with_routes(&renderer, assets).compile(&config.content)?;
    Ok(routes)
}

/// Load `config_path`, compile it, and serve until a termination signal.
pub async fn run(config_path: &Path) -> Result<(), StartupError> {
    let config = load_config(config_path).map_err(|source| StartupError::Config {
        path: config_path.to_path_buf(),
        source,
    })?;

    logging::init(&config.observability.log_level);
    tracing::info!(
        config = %config_path.display(),
        host = %config.host_name,
        bind_address = %config.listener.bind_address,
        tls = config.listener.tls,
        "Configuration loaded"
    );

    let routes = build_routes(&config)?;
    tracing::info!(routes = routes.len(), "Content compiled");

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }
    metrics::record_routes(routes.len());

    let addr: SocketAddr = config
        .listener
        .bind_address
        .parse()
        .map_err(|e| StartupError::Bind {
            addr: config.listener.bind_address.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
        })?;

    let shutdown = Shutdown::new();
    spawn_signal_listener(shutdown.clone());

    let tls = config.listener.tls;
    let cert_dir = PathBuf::from(&config.cert_dir);
    let server = HttpServer::new(config, routes);

    if tls {
        let tls_config = load_tls_config(&cert_dir).await.map_err(StartupError::Tls)?;
        server
            .run_tls(addr, tls_config, shutdown.subscribe())
            .await
            .map_err(StartupError::Serve)?;
    } else {
        let listener = TcpListener::bind(addr).await.map_err(|source| StartupError::Bind {
            addr: addr.to_string(),
            source,
        })?;
        server
            .run(listener, shutdown.subscribe())
            .await
            .map_err(StartupError::Serve)?;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
