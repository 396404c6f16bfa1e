//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! listener.tls = false:
//!     tokio TcpListener → axum::serve
//!
//! listener.tls = true:
//!     tls.rs (load cert.pem / key.pem from cert_dir)
//!     → axum_server rustls acceptor → same Router
//! ```
//!
//! # Design Decisions
//! - Certificates are provisioned out of band; this crate only reads them
//! - TLS is optional and handled transparently to routing

pub mod tls;
