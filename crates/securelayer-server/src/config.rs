use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_address: SocketAddr,

    /// Path to RocksDB database
    pub database_path: PathBuf,

    /// Directory served as the static site, if any
    pub static_dir: Option<PathBuf>,

    /// Allowed CORS origins; empty means any origin
    pub cors_allowed_origins: Vec<String>,

    /// Pass storage error text through to clients
    pub expose_error_details: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()?;

        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| "./data/securelayer.db".to_string())
            .into();

        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .map(|origins| parse_origins(&origins))
            .unwrap_or_default();

        let expose_error_details = match std::env::var("EXPOSE_ERROR_DETAILS") {
            Ok(value) => parse_flag(&value)?,
            Err(_) => false,
        };

        Ok(Config {
            bind_address,
            database_path,
            static_dir,
            cors_allowed_origins,
            expose_error_details,
        })
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("Invalid boolean value for EXPOSE_ERROR_DETAILS: {}", other),
    }
}
