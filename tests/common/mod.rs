//! Shared utilities for integration testing.

use std::net::SocketAddr;

use linkdir::config::parse_config;
use linkdir::http::HttpServer;
use linkdir::lifecycle::{build_routes, Shutdown};
use tokio::net::TcpListener;

/// The example site used across integration tests.
pub const SITE: &str = r#"
    host_name = "links.example.com"
    email = "me@example.com"
    cert_dir = "/var/lib/linkdir"

    [content]
    description = "Places worth going"

    [content.category]
    title = "Home"

    [[content.category.items]]
    name = "go"
    description = "The Go language"
    link = { url = "https://go.dev" }

    [[content.category.items]]
    name = "docs"
    description = "Reference material"

    [content.category.items.category]
    title = "Docs"

    [[content.category.items.category.items]]
    name = "rust"
    link = { url = "https://doc.rust-lang.org/std/?search=a b" }
"#;

/// A running server bound to an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Compile `toml` and serve it on `127.0.0.1:0`.
pub async fn start_server(toml: &str) -> TestServer {
    let mut config = parse_config(toml).expect("config should parse");
    config.listener.bind_address = "127.0.0.1:0".into();
    let routes = build_routes(&config).expect("content should compile");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, routes);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestServer { addr, shutdown }
}

/// A client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
