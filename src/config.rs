use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use dotenvy::dotenv;

const DEFAULT_NEO4J_URI: &str = "bolt://127.0.0.1:7687";
const DEFAULT_NEO4J_USER: &str = "neo4j";
const DEFAULT_MAX_CONNECTIONS: usize = 16;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3009";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub neo4j_uri: String,
    pub neo4j_user: String,
    pub neo4j_password: String,
    pub neo4j_max_connections: usize,
    /// Signing secret for bearer tokens. Only `None` when auth is disabled.
    pub jwt_secret: Option<String>,
    pub auth_disabled: bool,
    pub graphiql_enabled: bool,
    pub introspection_enabled: bool,
    pub bind_addr: SocketAddr,
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, applying defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_disabled = flag(&lookup, "AUTH_DISABLED", false);

        let jwt_secret = lookup("JWT_SECRET").filter(|s| !s.trim().is_empty());
        if jwt_secret.is_none() && !auth_disabled {
            return Err(ConfigError::Missing("JWT_SECRET"));
        }

        let neo4j_max_connections = match lookup("NEO4J_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "NEO4J_MAX_CONNECTIONS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            var: "BIND_ADDR",
            value: raw_addr.clone(),
        })?;

        Ok(Self {
            neo4j_uri: lookup("NEO4J_URI").unwrap_or_else(|| DEFAULT_NEO4J_URI.to_string()),
            neo4j_user: lookup("NEO4J_USER").unwrap_or_else(|| DEFAULT_NEO4J_USER.to_string()),
            neo4j_password: lookup("NEO4J_PASSWORD").ok_or(ConfigError::Missing("NEO4J_PASSWORD"))?,
            neo4j_max_connections,
            jwt_secret,
            auth_disabled,
            graphiql_enabled: flag(&lookup, "GRAPHIQL_ENABLED", true),
            introspection_enabled: flag(&lookup, "INTROSPECTION_ENABLED", true),
            bind_addr,
            log_dir: lookup("LOG_DIR").map(PathBuf::from),
        })
    }
}

fn flag<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}
