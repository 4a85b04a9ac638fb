use std::env;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_port: u16,
    pub request_timeout: Duration,
    pub docs_dir: String,
    pub database: DatabaseConfig,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    // Full connection URL; takes precedence over the individual parts.
    pub url: Option<String>,
    pub max_connections: u32,
    pub max_lifetime: Duration,
    pub connect_attempts: u32,
    pub connect_retry_delay: Duration,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("max_connections", &self.max_connections)
            .field("max_lifetime", &self.max_lifetime)
            .field("connect_attempts", &self.connect_attempts)
            .field("connect_retry_delay", &self.connect_retry_delay)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values count
    /// as unset and unparsable numbers fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let string = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());
        let secs = |key: &str, default: u64| {
            Duration::from_secs(var(key).and_then(|s| s.parse().ok()).unwrap_or(default))
        };

        let api_port = var("PORT").and_then(|s| s.parse().ok()).unwrap_or(8080);
        let request_timeout = secs("REQUEST_TIMEOUT_SECS", 15);
        let docs_dir = string("DOCS_DIR", "./docs");

        let database = DatabaseConfig {
            host: string("DB_HOST", "localhost"),
            port: var("DB_PORT").and_then(|s| s.parse().ok()).unwrap_or(5432),
            user: string("DB_USER", "root"),
            password: string("DB_PASSWORD", "root"),
            name: string("DB_NAME", "userdb"),
            url: var("DATABASE_URL"),
            max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(25),
            max_lifetime: secs("DB_MAX_LIFETIME_SECS", 300),
            connect_attempts: var("DB_CONNECT_ATTEMPTS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            connect_retry_delay: secs("DB_CONNECT_RETRY_DELAY_SECS", 2),
        };

        if database.max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if database.connect_attempts == 0 {
            anyhow::bail!("DB_CONNECT_ATTEMPTS must be at least 1");
        }

        Ok(Self {
            api_port,
            request_timeout,
            docs_dir,
            database,
        })
    }
}
