use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl ServerConfig {
    /// Reads `RISK_API_HOST`, `RISK_API_PORT` and `RISK_API_CORS_ORIGINS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("RISK_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host
            .parse()
            .with_context(|| format!("RISK_API_HOST is not an IP address: {}", host))?;

        let port = match lookup("RISK_API_PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("RISK_API_PORT is not a port number: {}", port))?,
            None => DEFAULT_PORT,
        };

        let cors_origins = match lookup("RISK_API_CORS_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(|o| o.trim().trim_end_matches('/').to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            None => Self::default().cors_origins,
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
            cors_origins,
        })
    }
}
