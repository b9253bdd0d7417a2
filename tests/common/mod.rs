//! Shared test utilities and fake infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fake_api;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use catalog_console::config::ServerConfig;
use catalog_console::domain::{Product, Role, Status, User};
use catalog_console::server::{ApiServer, ServerHandle};
use tempfile::TempDir;

pub use fake_api::{Call, FakeApi};

pub fn product(id: &str, name: &str, category: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price: 10.0,
        description: format!("About {name}"),
        category: category.to_string(),
    }
}

pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: Role::User,
        status: Status::Active,
    }
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// A running mock API server on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    handle: ServerHandle,
}

impl TestServer {
    pub async fn start(seed: bool) -> Self {
        let config = ServerConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            response_delay_ms: 0,
            seed_fixtures: seed,
        };
        let mut server = ApiServer::new(&config).expect("valid server config");
        let addr = server.try_bind().await.expect("Failed to bind mock API");
        let handle = server.handle();
        tokio::spawn(async move {
            server.run().await.ok();
        });
        assert!(wait_for_server(addr, Duration::from_secs(2)).await);
        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.shutdown();
    }
}

/// Wait for a server to become available.
pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}
