use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "postgres" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow!(
                "STORE_BACKEND must be 'postgres' or 'memory', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub run_migrations: bool,
    pub port: u16,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
}

impl Config {
    pub fn init() -> Result<Self> {
        let store_backend = match std::env::var("STORE_BACKEND") {
            Ok(value) => StoreBackend::parse(&value)?,
            Err(_) => StoreBackend::Postgres,
        };

        let database_url = match store_backend {
            StoreBackend::Postgres => Some(
                std::env::var("DATABASE_URL")
                    .context("Missing environment variable: DATABASE_URL")?,
            ),
            StoreBackend::Memory => std::env::var("DATABASE_URL").ok(),
        };

        let run_migrations = match std::env::var("RUN_MIGRATIONS").as_deref() {
            Ok("true") | Err(_) => true,
            Ok("false") => false,
            Ok(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = env_or("PORT", 3000u16)?;
        let db_min_conn = env_or("DB_MIN_CONN", 1u32)?;
        let db_max_conn = env_or("DB_MAX_CONN", 5u32)?;

        if db_min_conn > db_max_conn {
            return Err(anyhow!(
                "DB_MIN_CONN ({}) must not exceed DB_MAX_CONN ({})",
                db_min_conn,
                db_max_conn
            ));
        }

        Ok(Self {
            store_backend,
            database_url,
            run_migrations,
            port,
            db_min_conn,
            db_max_conn,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number")),
        Err(_) => Ok(default),
    }
}
