//! In-process mock of the REST API.
//!
//! Serves `/products` and `/users` from in-memory repositories so the
//! console (and the integration tests) talk to real HTTP without an
//! external backend.

pub mod error;
pub mod fixtures;
pub mod repository;
pub mod routes;
pub mod shutdown;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;

pub use error::{ServerError, StartupError};
pub use repository::Repository;
pub use routes::{build_router, Repositories};
pub use shutdown::ShutdownManager;

/// Ports tried after the configured one when it is busy.
const PORT_FALLBACK_RANGE: u16 = 100;

pub struct ApiServer {
    pub addr: SocketAddr,
    /// Populated by try_bind(), consumed by run().
    listener: Option<TcpListener>,
    repositories: Repositories,
    delay: Duration,
    shutdown: Arc<ShutdownManager>,
}

impl ApiServer {
    pub fn new(config: &ServerConfig) -> Result<Self, StartupError> {
        let addr = config
            .bind_addr
            .parse::<SocketAddr>()
            .map_err(|source| StartupError::InvalidAddr {
                addr: config.bind_addr.clone(),
                source,
            })?;
        let repositories = if config.seed_fixtures {
            Repositories::seeded()
        } else {
            Repositories::default()
        };
        Ok(Self {
            addr,
            listener: None,
            repositories,
            delay: config.response_delay(),
            shutdown: Arc::new(ShutdownManager::new()),
        })
    }

    /// Bind the configured address, falling back to the next ports if busy.
    ///
    /// The listener is kept until run() so nothing else can claim the port
    /// in between.
    pub async fn try_bind(&mut self) -> Result<SocketAddr, StartupError> {
        let start = self.addr.port();
        let end = start.saturating_add(PORT_FALLBACK_RANGE);
        let host = self.addr.ip();

        for port in start..=end {
            match TcpListener::bind(SocketAddr::new(host, port)).await {
                Ok(listener) => {
                    let actual = listener.local_addr()?;
                    self.addr = actual;
                    self.listener = Some(listener);
                    tracing::info!(addr = %actual, "Mock API bound");
                    return Ok(actual);
                }
                Err(e) => {
                    tracing::debug!(port, error = %e, "Port busy");
                }
            }
        }

        Err(StartupError::NoFreePort { start, end })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn repositories(&self) -> Repositories {
        self.repositories.clone()
    }

    pub fn router(&self) -> Router {
        build_router(self.repositories.clone(), self.delay)
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serve until shutdown is signalled. Call try_bind() first.
    pub async fn run(self) -> Result<(), StartupError> {
        let listener = self.listener.ok_or(StartupError::NotBound)?;
        let app = build_router(self.repositories, self.delay);

        tracing::info!(addr = %self.addr, "Starting mock API server");

        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.wait_for_shutdown().await })
            .into_future()
            .await?;

        tracing::info!("Mock API server stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(bind_addr: &str, seed: bool) -> ServerConfig {
        ServerConfig {
            bind_addr: bind_addr.to_string(),
            response_delay_ms: 0,
            seed_fixtures: seed,
        }
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = ApiServer::new(&config("localhost", true)).err().unwrap();
        assert!(matches!(err, StartupError::InvalidAddr { .. }));
    }

    #[test]
    fn seeding_follows_config() {
        let seeded = ApiServer::new(&config("127.0.0.1:0", true)).unwrap();
        assert!(!seeded.repositories().products.is_empty());
        let empty = ApiServer::new(&config("127.0.0.1:0", false)).unwrap();
        assert!(empty.repositories().users.is_empty());
    }

    #[tokio::test]
    async fn falls_back_to_next_port_when_busy() {
        let blocker = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let busy = blocker.local_addr().unwrap();

        let mut server = ApiServer::new(&config(&busy.to_string(), false)).unwrap();
        let addr = server.try_bind().await.unwrap();
        assert_ne!(addr.port(), busy.port());
        assert!(addr.port() > busy.port());
    }

    #[tokio::test]
    async fn run_without_bind_fails() {
        let server = ApiServer::new(&config("127.0.0.1:0", false)).unwrap();
        assert!(matches!(server.run().await, Err(StartupError::NotBound)));
    }
}
