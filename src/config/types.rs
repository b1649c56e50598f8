//! Raw file config and the resolved settings the server runs with.

use crate::sql::TableName;
use serde::Deserialize;
use std::net::Ipv6Addr;
use std::time::Duration;

/// Shape of the optional JSON config file. Every key may be omitted.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default, alias = "urlConnection")]
    pub database_url: Option<String>,
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub max_connections: Option<u32>,
    #[serde(default)]
    pub acquire_timeout_secs: Option<u64>,
    #[serde(default)]
    pub body_limit_bytes: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub table: TableName,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub body_limit_bytes: usize,
}

impl AppConfig {
    /// `host:port`, with IPv6 literals bracketed. Hostnames are left for the resolver.
    pub fn bind_addr(&self) -> String {
        let host = self.host.trim_start_matches('[').trim_end_matches(']');
        if host.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]:{}", host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}
