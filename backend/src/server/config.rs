//! Server settings and the resolved configuration handed to [`super::create_server`].

use std::net::{IpAddr, SocketAddr};

use actix_web::cookie::{Key, SameSite};
use ortho_config::OrthoConfig;
use serde::Deserialize;

use tourbook::inbound::http::session_config::SessionSettings;
use tourbook::outbound::persistence::{DbPool, PoolConfig};

const DEFAULT_HOST: &str = "0.0.0.0";

/// Listener and store settings loaded from `TOURBOOK_*` variables, config
/// files, and CLI flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TOURBOOK")]
pub struct ServerSettings {
    /// Interface to bind; defaults to every interface.
    pub host: Option<String>,
    /// Listening port.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// PostgreSQL URL. Without one the server keeps everything in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub pool_max_size: Option<u32>,
}

impl ServerSettings {
    /// Socket address built from `host` and `port`.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid TOURBOOK_HOST '{host}': {err}"),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Pool settings when a database URL is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref()?.trim();
        if url.is_empty() {
            return None;
        }
        let config = PoolConfig::new(url);
        Some(match self.pool_max_size {
            Some(size) => config.with_max_size(size),
            None => config,
        })
    }
}

/// Everything the HTTP server needs once settings are resolved.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        let SessionSettings {
            key,
            cookie_secure,
            same_site,
        } = session;
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
        }
    }

    /// Back the repositories with PostgreSQL instead of the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
