//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with a single dispatch handler
//! - Wire up middleware (tracing, request ID, access log, security headers, timeout)
//! - Bind server to listener, plain or TLS
//! - Dispatch requests against the compiled route table
//! - Stop accepting and drain on shutdown, bounded by `timeouts.shutdown_secs`

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware,
    response::Response,
    Router,
};
use axum_server::tls_rustls::RustlsConfig;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, oneshot};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::http::response;
use crate::observability::logging::access_log;
use crate::routing::matcher::{match_uri, request_path};
use crate::routing::RouteTable;
use crate::security;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
}

/// HTTP server for the link directory.
pub struct HttpServer {
    router: Router,
    config: SiteConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `routes`.
    pub fn new(config: SiteConfig, routes: RouteTable) -> Self {
        let state = AppState {
            routes: Arc::new(routes),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let router = Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        security::headers::apply(router, &config.security)
            .layer(middleware::from_fn_with_state(
                config.listener.log_name(),
                access_log,
            ))
            .layer(propagate_request_id_layer())
            .layer(set_request_id_layer())
            .layer(TraceLayer::new_for_http())
    }

    /// The fully layered router, for embedding or testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server over plain HTTP on `listener` until `shutdown` fires.
    ///
    /// Open connections get `timeouts.shutdown_secs` to drain; whatever is
    /// still running after that is dropped.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let grace = Duration::from_secs(self.config.timeouts.shutdown_secs);
        let (draining_tx, draining_rx) = oneshot::channel::<()>();
        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        let server = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
                let _ = draining_tx.send(());
            })
            .into_future();

        let drain_deadline = async move {
            match draining_rx.await {
                Ok(()) => tokio::time::sleep(grace).await,
                Err(_) => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            result = server => result?,
            _ = drain_deadline => {
                tracing::warn!(grace_secs = grace.as_secs(), "Drain timed out, dropping open connections");
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Run the server over HTTPS on `addr` until `shutdown` fires.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        tls: RustlsConfig,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        tracing::info!(address = %addr, host = %self.config.host_name, "HTTPS server starting");

        let handle = axum_server::Handle::new();
        let grace = Duration::from_secs(self.config.timeouts.shutdown_secs);
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            let _ = shutdown.recv().await;
            tracing::info!("Shutdown signal received");
            shutdown_handle.graceful_shutdown(Some(grace));
        });

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();
        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(app)
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

/// Look up the request path and answer from the route table.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    match match_uri(&state.routes, request.uri()) {
        Some(handler) => {
            tracing::debug!(path = %request.uri().path(), kind = handler.kind(), "Route matched");
            response::respond(handler, request.method(), request.headers())
        }
        None => {
            tracing::debug!(path = %request_path(request.uri()), "No route matched");
            response::not_found()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{Handler, RouteTableBuilder, StaticPage};
    use axum::http::{header, Method, StatusCode};
    use tower::ServiceExt;

    fn test_server() -> HttpServer {
        let mut routes = RouteTableBuilder::new();
        routes
            .insert("/", Handler::StaticPage(StaticPage::html("<h1>Home</h1>")))
            .unwrap();
        routes
            .insert(
                "/go",
                Handler::Redirect {
                    target: "https://go.dev".into(),
                },
            )
            .unwrap();
        HttpServer::new(SiteConfig::default(), routes.build())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_page_served() {
        let response = test_server().router().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html; charset=utf-8");
        assert!(response.headers().contains_key(header::ETAG));
    }

    #[tokio::test]
    async fn test_redirect_served() {
        let response = test_server().router().oneshot(get("/go")).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "https://go.dev");
    }

    #[tokio::test]
    async fn test_no_fallback_search() {
        for uri in ["/missing", "/go/", "/go/deeper", "/GO"] {
            let response = test_server().router().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_any_method_dispatched() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/go")
            .body(Body::empty())
            .unwrap();
        let response = test_server().router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
    }

    #[tokio::test]
    async fn test_security_headers_and_request_id() {
        let response = test_server().router().oneshot(get("/missing")).await.unwrap();
        let headers = response.headers();
        assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert!(headers.contains_key(header::STRICT_TRANSPORT_SECURITY));
        assert!(headers.contains_key(header::CONTENT_SECURITY_POLICY));
        assert!(headers.contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_security_headers_disabled() {
        let mut config = SiteConfig::default();
        config.security.enable_headers = false;
        let server = HttpServer::new(config, RouteTable::default());
        let response = server.router().oneshot(get("/")).await.unwrap();
        assert!(!response.headers().contains_key(header::X_FRAME_OPTIONS));
    }

    #[tokio::test]
    async fn test_drain_is_bounded_by_shutdown_timeout() {
        use tokio::io::AsyncWriteExt;

        let mut config = SiteConfig::default();
        config.timeouts.shutdown_secs = 1;
        let server = HttpServer::new(config, RouteTable::default());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = broadcast::channel(1);
        let running = tokio::spawn(server.run(listener, rx));

        // A request whose head never finishes keeps its connection busy.
        let mut stalled = tokio::net::TcpStream::connect(addr).await.unwrap();
        stalled.write_all(b"GET / HTTP/1.1\r\nHost: linkdir\r\n").await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        tx.send(()).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(5), running)
            .await
            .expect("server should stop within the shutdown timeout")
            .unwrap();
        assert!(result.is_ok());
        drop(stalled);
    }
}
