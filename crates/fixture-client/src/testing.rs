//! In-process fixture server for tests
//!
//! Serves a router on an ephemeral local port and hands back a client that
//! already points at it. `start` returns only once `/health` answers.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::{FixtureClient, Result};

const READY_TIMEOUT: Duration = Duration::from_secs(2);
const READY_INTERVAL: Duration = Duration::from_millis(5);

/// A fixture server bound to `127.0.0.1:0`; stops when dropped
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: FixtureClient,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Serve `router` and wait for it to report healthy
    ///
    /// ```ignore
    /// let server = TestServer::start(create_router(AppState::default())).await?;
    /// let page = server.client.get_csrf().await?;
    /// ```
    pub async fn start(router: axum::Router) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let served = axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
            if let Err(e) = served {
                tracing::error!(error = %e, "Test server stopped with an error");
            }
        });

        let client = FixtureClient::with_config(
            &format!("http://{}", addr),
            Duration::from_secs(5),
            READY_TIMEOUT,
        )?;
        let server = Self {
            addr,
            client,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        };

        server.wait_ready().await?;
        Ok(server)
    }

    /// Poll `/health` until it succeeds or the readiness deadline passes
    async fn wait_ready(&self) -> Result<()> {
        let deadline = Instant::now() + READY_TIMEOUT;
        loop {
            match self.client.health().await {
                Ok(_) => return Ok(()),
                Err(e) if Instant::now() >= deadline => return Err(e),
                Err(e) => {
                    tracing::trace!(error = %e, "Test server not ready yet");
                    tokio::time::sleep(READY_INTERVAL).await;
                }
            }
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop accepting connections and wait for in-flight requests
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
