use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/starwars.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so it can be exercised without
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("APP_PORT").or_else(|| lookup("PORT")) {
            Some(p) => p
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid port {p:?}: {e}"))?,
            None => 3000,
        };
        let run_migrations = lookup("RUN_MIGRATIONS")
            .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(true);
        Ok(Self {
            port,
            database_url,
            host,
            run_migrations,
        })
    }
}
