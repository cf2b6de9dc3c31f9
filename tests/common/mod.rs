//! Shared utilities for gateway integration tests.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use edge_gate::config::EdgeConfig;
use edge_gate::{HttpServer, Shutdown};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// `echo -n id:pass | base64`
pub const SECRET: &str = "Basic aWQ6cGFzcw==";

/// A running gateway and the handles needed to drive and stop it.
pub struct Gateway {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub config_updates: mpsc::UnboundedSender<EdgeConfig>,
}

impl Gateway {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Config accepting `SECRET` and serving `root`.
pub fn config_for(root: &Path) -> EdgeConfig {
    let mut config = EdgeConfig::default();
    config.filter.credential = Some(SECRET.into());
    config.origin.root = root.display().to_string();
    config.cors.allow_methods = Some("GET,POST".into());
    config.cors.allow_origins = Some("https://app.example.com".into());
    config
}

/// Lay out a small static site under `root`.
pub fn write_site(root: &Path) {
    std::fs::write(root.join("index.html"), "home").unwrap();
    std::fs::create_dir_all(root.join("docs")).unwrap();
    std::fs::write(root.join("docs/index.html"), "docs").unwrap();
    std::fs::create_dir_all(root.join("about")).unwrap();
    std::fs::write(root.join("about/index.html"), "about").unwrap();
    std::fs::write(root.join("app.js"), "console.log(1);").unwrap();
}

/// Start the gateway on an ephemeral port.
pub async fn start_gateway(config: EdgeConfig) -> Gateway {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let (config_updates, updates_rx) = mpsc::unbounded_channel();
    let server = HttpServer::new(config).unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, updates_rx, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;

    Gateway {
        addr,
        shutdown,
        config_updates,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
