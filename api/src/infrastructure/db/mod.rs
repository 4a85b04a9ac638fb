use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};
use tokio::time::sleep;

use crate::bootstrap::config::DatabaseConfig;

pub type PgPool = Pool<Postgres>;

pub fn connect_options(cfg: &DatabaseConfig) -> anyhow::Result<PgConnectOptions> {
    if let Some(url) = &cfg.url {
        return Ok(url.parse::<PgConnectOptions>()?);
    }
    Ok(PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .username(&cfg.user)
        .password(&cfg.password)
        .database(&cfg.name))
}

/// Opens the pool, retrying a bounded number of times so the service can start
/// before the database accepts connections.
pub async fn connect_pool(cfg: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let options = connect_options(cfg)?;
    let mut attempt = 0;
    loop {
        attempt += 1;
        tracing::info!(attempt, max_attempts = cfg.connect_attempts, "database_connect_attempt");
        let res = PgPoolOptions::new()
            .max_connections(cfg.max_connections)
            .max_lifetime(cfg.max_lifetime)
            .connect_with(options.clone())
            .await;
        match res {
            Ok(pool) => {
                tracing::info!(attempt, "database_connected");
                return Ok(pool);
            }
            Err(e) if attempt < cfg.connect_attempts => {
                tracing::warn!(attempt, error = %e, "database_connect_failed");
                sleep(cfg.connect_retry_delay).await;
            }
            Err(e) => {
                return Err(anyhow::Error::new(e).context(format!(
                    "could not connect to database after {attempt} attempts"
                )));
            }
        }
    }
}

pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    // Uses compile-time embedded migrations under ./migrations
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub mod repositories;
