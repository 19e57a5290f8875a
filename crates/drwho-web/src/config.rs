use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
///
/// The backend client carries its own configuration; this covers only the
/// HTTP server itself.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the server binds to.
    pub bind_addr: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `DRWHO_BIND_ADDR`: listen address (default "127.0.0.1:3000")
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr =
            std::env::var("DRWHO_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

        if bind_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(AppError::Config(format!(
                "DRWHO_BIND_ADDR is not a valid socket address: {bind_addr}"
            )));
        }

        Ok(Self { bind_addr })
    }
}
