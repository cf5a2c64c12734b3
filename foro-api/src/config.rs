use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_SERVER_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error parsing .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    #[error("Error parsing environment: {0}")]
    Envy(#[from] envy::Error),
}

/// Process configuration, read once at startup.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize)]
pub struct Env {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_database: String,
    #[serde(default = "default_db_port")]
    pub db_port: u16,
    #[serde(default = "default_server_address")]
    pub server_address: IpAddr,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

fn default_db_port() -> u16 {
    DEFAULT_DB_PORT
}

fn default_server_address() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_server_port() -> u16 {
    DEFAULT_SERVER_PORT
}

impl Env {
    /// Loads `.env` if there is one, then reads the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if e.not_found() {
                debug!("No .env file found");
            } else {
                return Err(e.into());
            }
        }

        envy::from_env().map_err(ConfigError::from)
    }

    #[must_use]
    pub fn server_socket_address(&self) -> SocketAddr {
        SocketAddr::new(self.server_address, self.port)
    }

    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_database)
    }
}
