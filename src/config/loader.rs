//! Load settings: defaults, then the JSON file at `CONFIG_PATH`, then environment variables.

use crate::config::types::{AppConfig, FileConfig};
use crate::error::ConfigError;
use crate::routes::DEFAULT_BODY_LIMIT;
use crate::sql::TableName;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Read `.env`, the config file and the process environment.
pub fn load() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let file = load_file(Path::new(&path))?;
    resolve(file, |key| std::env::var(key).ok())
}

/// A missing file is not an error; an unreadable or malformed one is.
pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults and environment");
        return Ok(FileConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&text).map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))
}

/// Merge file values with environment overrides. `env` returns the value of a variable if set.
pub fn resolve<F>(file: FileConfig, env: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let host = env("HOST")
        .or(file.host)
        .unwrap_or_else(|| DEFAULT_HOST.into());
    let port = parse_env(&env, "PORT")?.or(file.port).unwrap_or(DEFAULT_PORT);
    let max_connections = parse_env(&env, "DATABASE_MAX_CONNECTIONS")?
        .or(file.max_connections)
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);
    let acquire_timeout_secs = parse_env(&env, "DATABASE_ACQUIRE_TIMEOUT_SECS")?
        .or(file.acquire_timeout_secs)
        .unwrap_or(DEFAULT_ACQUIRE_TIMEOUT_SECS);
    let body_limit_bytes = parse_env(&env, "BODY_LIMIT_BYTES")?
        .or(file.body_limit_bytes)
        .unwrap_or(DEFAULT_BODY_LIMIT);

    let table = match env("CADASTRO_TABLE").or(file.table) {
        Some(t) => TableName::parse(&t)?,
        None => TableName::default(),
    };

    let database_url = env("DATABASE_URL")
        .or(file.database_url)
        .filter(|u| !u.trim().is_empty())
        .ok_or(ConfigError::Missing("database_url"))?;
    let lower = database_url.to_lowercase();
    if !(lower.starts_with("postgres://") || lower.starts_with("postgresql://")) {
        return Err(ConfigError::Invalid {
            key: "database_url",
            value: "must start with postgres:// or postgresql://".into(),
        });
    }
    if max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: "max_connections",
            value: "0".into(),
        });
    }

    Ok(AppConfig {
        host,
        port,
        database_url,
        table,
        max_connections,
        acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        body_limit_bytes,
    })
}

fn parse_env<F, T>(env: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match env(key) {
        None => Ok(None),
        Some(v) => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: v }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn port_defaults_to_3000() {
        let cfg = resolve(
            FileConfig::default(),
            env_of(&[("DATABASE_URL", "postgres://localhost/cadastro")]),
        )
        .unwrap();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.table.as_str(), "Cadastro");
        assert_eq!(cfg.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
        assert_eq!(cfg.acquire_timeout, Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS));
    }

    #[test]
    fn ipv6_hosts_are_bracketed() {
        let url = ("DATABASE_URL", "postgres://localhost/db");
        let cfg = resolve(FileConfig::default(), env_of(&[url, ("HOST", "::")])).unwrap();
        assert_eq!(cfg.bind_addr(), "[::]:3000");
        assert!(cfg.bind_addr().parse::<std::net::SocketAddr>().is_ok());

        let cfg = resolve(FileConfig::default(), env_of(&[url, ("HOST", "[::1]"), ("PORT", "8080")])).unwrap();
        assert_eq!(cfg.bind_addr(), "[::1]:8080");

        let cfg = resolve(FileConfig::default(), env_of(&[url, ("HOST", "localhost")])).unwrap();
        assert_eq!(cfg.bind_addr(), "localhost:3000");
    }

    #[test]
    fn env_overrides_file() {
        let file = FileConfig {
            port: Some(8080),
            database_url: Some("postgres://file/db".into()),
            ..Default::default()
        };
        let cfg = resolve(file, env_of(&[("PORT", "9090")])).unwrap();
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.database_url, "postgres://file/db");
    }

    #[test]
    fn file_accepts_url_connection_key() {
        let file: FileConfig =
            serde_json::from_str(r#"{"urlConnection": "postgresql://u:p@h/db", "port": 4000}"#).unwrap();
        let cfg = resolve(file, env_of(&[])).unwrap();
        assert_eq!(cfg.database_url, "postgresql://u:p@h/db");
        assert_eq!(cfg.port, 4000);
    }

    #[test]
    fn database_url_is_required_and_must_be_postgres() {
        assert!(matches!(
            resolve(FileConfig::default(), env_of(&[])),
            Err(ConfigError::Missing("database_url"))
        ));
        assert!(matches!(
            resolve(FileConfig::default(), env_of(&[("DATABASE_URL", "mysql://x/y")])),
            Err(ConfigError::Invalid { key: "database_url", .. })
        ));
    }

    #[test]
    fn bad_numbers_and_tables_are_rejected() {
        let base = [("DATABASE_URL", "postgres://localhost/db")];
        let with = |extra: (&'static str, &'static str)| {
            let mut pairs = base.to_vec();
            pairs.push(extra);
            resolve(FileConfig::default(), env_of(&pairs))
        };
        assert!(with(("PORT", "abc")).is_err());
        assert!(with(("PORT", "70000")).is_err());
        assert!(with(("DATABASE_MAX_CONNECTIONS", "0")).is_err());
        assert!(with(("CADASTRO_TABLE", "x; drop")).is_err());
        assert_eq!(with(("CADASTRO_TABLE", "public.cadastro")).unwrap().table.as_str(), "public.cadastro");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load_file(Path::new("/nonexistent/cadastro-config.json")).unwrap();
        assert!(cfg.port.is_none());
    }
}
