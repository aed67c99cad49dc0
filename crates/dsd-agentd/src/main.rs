mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use dsd_discover::{DockerRuntime, Extractor, Publisher, TargetFileWriter, poll};
use dsd_observe::init_logger;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::config::AgentConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // 1) Config + logger
    let cfg = AgentConfig::from_env()?;
    init_logger(&cfg.logger).context("logger initialization")?;
    info!(
        level = %cfg.logger.level,
        target_file = %cfg.discover.target_file.display(),
        interval_ms = cfg.discover.interval_ms,
        hostname_mode = ?cfg.discover.hostname_mode,
        "configuration loaded"
    );

    // 2) Runtime
    let runtime = DockerRuntime::connect(&cfg.discover.docker_socket)
        .with_context(|| format!("connecting to {}", cfg.discover.docker_socket))?;
    if let Err(e) = runtime.ping().await {
        warn!(socket = %cfg.discover.docker_socket, error = %e, "docker engine not reachable yet");
    }

    // 3) Publisher
    let publisher = Publisher::new(
        Arc::new(runtime),
        Extractor::new(cfg.discover.hostname_mode),
        TargetFileWriter::new(&cfg.discover.target_file),
    );

    // 4) Poll until signalled
    let token = CancellationToken::new();
    let period = cfg.discover.interval();
    let task = {
        let token = token.clone();
        tokio::spawn(async move { poll(&publisher, period, token).await })
    };

    shutdown_signal().await?;
    info!("shutting down...");
    token.cancel();
    task.await.context("discovery task panicked")?;

    Ok(())
}

#[cfg(unix)]
async fn shutdown_signal() -> Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut term = signal(SignalKind::terminate()).context("installing SIGTERM handler")?;
    tokio::select! {
        res = tokio::signal::ctrl_c() => res.context("waiting for ctrl-c")?,
        _ = term.recv() => {}
    }
    Ok(())
}

#[cfg(not(unix))]
async fn shutdown_signal() -> Result<()> {
    tokio::signal::ctrl_c().await.context("waiting for ctrl-c")
}
