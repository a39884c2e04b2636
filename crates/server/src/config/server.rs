use serde::Deserialize;

/// HTTP server bind configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Graceful shutdown timeout in seconds.
    ///
    /// Maximum time in-flight requests get to finish once a shutdown signal
    /// arrives.
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
    /// External origin used when building `fileUrl` locators
    /// (e.g. `https://comics.example.com`).
    ///
    /// If not set, the request's `Host` header is used, falling back to
    /// `http://localhost:{port}`.
    pub public_url: Option<String>,
    /// Largest accepted request body in bytes. Applies to uploads.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            shutdown_timeout_seconds: default_shutdown_timeout(),
            public_url: None,
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl ServerConfig {
    /// Origin used for locators when a request carries no `Host` header.
    pub fn fallback_origin(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

fn default_shutdown_timeout() -> u64 {
    30
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

fn default_port() -> u16 {
    5000
}

fn default_max_upload_bytes() -> usize {
    50 * 1024 * 1024
}
