//! Process configuration read from the environment.

use std::net::SocketAddr;

use anyhow::{bail, Context};

/// Address the server binds when `CATALOG_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub const BIND_ADDR_VAR: &str = "CATALOG_BIND_ADDR";
pub const SEED_DEMO_VAR: &str = "CATALOG_SEED_DEMO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Insert the demo products at startup.
    pub seed_demo: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<SocketAddr>()
                .with_context(|| format!("{BIND_ADDR_VAR}: invalid socket address '{raw}'"))?,
            None => {
                tracing::info!("{BIND_ADDR_VAR} not set; using {DEFAULT_BIND_ADDR}");
                DEFAULT_BIND_ADDR.parse::<SocketAddr>()?
            }
        };

        let seed_demo = match lookup(SEED_DEMO_VAR) {
            Some(raw) => parse_flag(&raw).with_context(|| format!("{SEED_DEMO_VAR}: invalid flag"))?,
            None => false,
        };

        Ok(Self {
            bind_addr,
            seed_demo,
        })
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("expected true/false, got '{other}'"),
    }
}
