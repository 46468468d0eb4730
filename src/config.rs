use anyhow::{Context, Result};

/// Demo server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
}

impl ServerConfig {
    /// | Env Var     | Default   |
    /// |-------------|-----------|
    /// | `RESP_HOST` | `0.0.0.0` |
    /// | `RESP_PORT` | `8080`    |
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("RESP_HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("RESP_PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .context("RESP_PORT must be a valid u16")?;

        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
