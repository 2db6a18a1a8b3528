use std::sync::LazyLock;

use crate::config::HttpClientSettings;

/// Process-wide HTTP client shared by alarm callbacks
///
/// Initialized lazily from `HttpClientSettings::default()` and reused for
/// every delivery, so callbacks never manage connection pooling themselves.
///
/// # Features
/// - **Connection pooling**: idle connections are reused per host
/// - **Timeouts**: 30s request timeout, 10s connect timeout
/// - **Security**: Uses Rustls for TLS (no OpenSSL dependency)
///
/// Use [`build_client`] when the timeouts come from loaded settings.
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    build_client(&HttpClientSettings::default()).expect("Failed to build HTTP client")
});

/// Builds an HTTP client from settings
///
/// # Errors
/// Returns the underlying reqwest error if the TLS backend cannot be
/// initialized.
pub fn build_client(settings: &HttpClientSettings) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        // Timeouts
        .timeout(settings.timeout())
        .connect_timeout(settings.connect_timeout())
        // Connection pooling
        .pool_max_idle_per_host(settings.pool_max_idle_per_host)
        .pool_idle_timeout(settings.pool_idle_timeout())
        // Enable compression for response bodies
        .gzip(true)
        .deflate(true)
        .brotli(true)
        .zstd(true)
        .user_agent(settings.user_agent.as_str())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_initialization() {
        // Access the client to ensure it initializes without panicking
        let _ = &*HTTP_CLIENT;
    }

    #[test]
    fn test_build_client_from_settings() {
        let settings = HttpClientSettings {
            timeout_seconds: 5,
            connect_timeout_seconds: 2,
            user_agent: "ops-alerts/1.0".to_string(),
            ..HttpClientSettings::default()
        };
        assert!(build_client(&settings).is_ok());
    }
}
