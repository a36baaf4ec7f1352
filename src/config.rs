use std::env;
use anyhow::{Context, Result};
use deadpool_postgres::{Config, Pool, Runtime, PoolConfig};
use tokio_postgres::NoTls;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const POOL_MAX_SIZE: usize = 16;

/// Settings read once at startup and handed to the pool and server builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_port: u16,
    pub listen_port: u16,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let db_port = get("PG_PORT", "3306")
            .trim()
            .parse::<u16>()
            .context("PG_PORT must be a valid port number")?;
        let listen_port = get("PORT", "3000")
            .trim()
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let allowed_origins = get("ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS)
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            db_host: get("PG_HOST", "localhost"),
            db_user: get("PG_USER", "root"),
            db_password: get("PG_PASS", "root"),
            db_name: get("PG_DB", "MyDatabase"),
            db_port,
            listen_port,
            allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.listen_port)
    }

    /// Creates the connection pool. Connections are opened lazily on first checkout.
    pub fn pg_pool(&self) -> Result<Pool> {
        let mut cfg = Config::new();
        cfg.host = Some(self.db_host.clone());
        cfg.user = Some(self.db_user.clone());
        cfg.password = Some(self.db_password.clone());
        cfg.dbname = Some(self.db_name.clone());
        cfg.port = Some(self.db_port);

        let mut pool_cfg = PoolConfig::default();
        pool_cfg.max_size = POOL_MAX_SIZE;
        cfg.pool = Some(pool_cfg);

        cfg.create_pool(Some(Runtime::Tokio1), NoTls)
            .context("failed to create postgres pool")
    }
}
