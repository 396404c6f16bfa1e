//! TLS configuration and certificate loading.

use std::path::{Path, PathBuf};

use axum_server::tls_rustls::RustlsConfig;

/// Certificate chain file name inside `cert_dir`.
pub const CERT_FILE: &str = "cert.pem";

/// Private key file name inside `cert_dir`.
pub const KEY_FILE: &str = "key.pem";

/// Certificate and key paths for `cert_dir`.
pub fn pem_paths(cert_dir: &Path) -> (PathBuf, PathBuf) {
    (cert_dir.join(CERT_FILE), cert_dir.join(KEY_FILE))
}

/// Load TLS configuration from the PEM files in `cert_dir`.
pub async fn load_tls_config(cert_dir: &Path) -> Result<RustlsConfig, std::io::Error> {
    let (cert_path, key_path) = pem_paths(cert_dir);

    if !cert_path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Certificate file not found: {:?}", cert_path),
        ));
    }
    if !key_path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Private key file not found: {:?}", key_path),
        ));
    }

    RustlsConfig::from_pem_file(cert_path, key_path).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pem_paths() {
        let (cert, key) = pem_paths(Path::new("/var/lib/linkdir"));
        assert_eq!(cert, Path::new("/var/lib/linkdir/cert.pem"));
        assert_eq!(key, Path::new("/var/lib/linkdir/key.pem"));
    }

    #[tokio::test]
    async fn test_missing_files_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_tls_config(dir.path()).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("cert.pem"));

        std::fs::write(dir.path().join(CERT_FILE), "").unwrap();
        let err = load_tls_config(dir.path()).await.unwrap_err();
        assert!(err.to_string().contains("key.pem"));
    }
}
