use devsim::config::Config;
use devsim::server::listener::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();

    tracing::info!(
        device_ip = %cfg.endpoint.ip,
        device_port = cfg.endpoint.port,
        "Device endpoint configured (simulation only, never dialed)"
    );

    let server = Server::bind(&cfg).await?;

    tokio::select! {
        res = server.run() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
