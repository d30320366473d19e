//! `todolist` server entry point.
//!
//! # Responsibility
//! - Load configuration, start logging and open the store once.
//! - Serve HTTP until Ctrl-C, then drop the store connection.

use anyhow::Context;
use log::{error, info};
use std::sync::Arc;
use todolist_core::{core_version, init_logging, SqliteTodoRepository, TodoService};
use todolist_web::{router, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    let _logger =
        init_logging(&config.log_level, config.log_dir.as_deref()).map_err(anyhow::Error::msg)?;
    let addr = config.bind_addr()?;

    // A store that fails to open is logged and the server still starts.
    let repo = SqliteTodoRepository::connect(&config.db_path);
    let service = Arc::new(TodoService::new(repo));
    let app = router(service, &config.static_dir);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(
        "event=server_start module=web status=ok addr={addr} version={}",
        core_version()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("event=server_stop module=web status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("event=server_stop module=web status=error error_code=signal_failed error={err}");
        std::future::pending::<()>().await;
    }
}
