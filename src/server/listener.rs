use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::Config;
use crate::device::DeviceFacade;
use crate::http::connection::Connection;
use crate::http::router::Router;

/// A bounded accept loop.
///
/// Each accepted connection runs in its own task while holding a semaphore
/// permit; once `max_connections` tasks are in flight, accepting waits for
/// a slot to free up.
pub struct Server {
    listener: TcpListener,
    router: Arc<Router>,
    connection_limit: Arc<Semaphore>,
}

impl Server {
    /// Binds the listening socket. Failure here is fatal to the process.
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(&cfg.listen_addr)
            .await
            .with_context(|| format!("Failed to bind {}", cfg.listen_addr))?;

        let addr = listener.local_addr()?;
        info!(
            %addr,
            max_connections = cfg.max_connections,
            "Listening"
        );

        let facade = DeviceFacade::new(cfg.device.clone());

        Ok(Self {
            listener,
            router: Arc::new(Router::new(facade)),
            connection_limit: Arc::new(Semaphore::new(cfg.max_connections)),
        })
    }

    /// The actual bound address; useful when the port was configured as 0.
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        loop {
            let permit = self.connection_limit.clone().acquire_owned().await?;

            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to accept connection");
                    continue;
                }
            };
            tracing::debug!(%peer, "Accepted connection");

            let router = self.router.clone();
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, router);
                if let Err(e) = conn.run().await {
                    tracing::error!(%peer, error = %e, "Connection error");
                }
                drop(permit);
            });
        }
    }
}
