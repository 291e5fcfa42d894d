mod bootstrap;

use kodo_api::AppState;
use kodo_config::Config;
use kodo_events::{AppEvent, EventBus};
use kodo_storage::{KodoStore, StorageAdapter};
use crate::bootstrap::{config, logging, router, server};
use anyhow::Result;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    logging::initialize();

    let events = EventBus::new(false);
    events.emit(AppEvent::Starting);

    let config_path = std::env::var("KODO_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let config = config::load(&config_path, &events).await?;

    let upload_dir = server::initialize_upload_dir(&config, &events).await?;

    let store = initialize_storage(&config, &events)?;

    let app_state = AppState::new(store, upload_dir, Arc::clone(&events));
    let app = router::build(&config, app_state);
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let listener = bind_server(&addr).await?;

    events.emit(AppEvent::Ready {
        addr: addr.clone(),
        origin: config.storage.origin.clone(),
    });

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutdown signal received, initiating graceful shutdown...");
    };

    axum::serve(listener, app.into_make_service())
        .tcp_nodelay(config.server.tcp_nodelay)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    events.emit(AppEvent::Shutdown);
    Ok(())
}

fn initialize_storage(config: &Config, events: &Arc<EventBus>) -> Result<Arc<dyn StorageAdapter>> {
    let store = KodoStore::from_settings(&config.storage).map_err(|e| {
        events.emit(AppEvent::Error {
            context: "storage".to_string(),
            error: e.to_string(),
        });
        e
    })?;

    tracing::info!(
        "Initialized Kodo storage: bucket={}, upload={}",
        config.storage.bucket,
        config.storage.upload_endpoint()
    );

    events.emit(AppEvent::StorageReady {
        bucket: config.storage.bucket.clone(),
        endpoint: config.storage.upload_endpoint().to_string(),
    });

    Ok(Arc::new(store) as Arc<dyn StorageAdapter>)
}

async fn bind_server(addr: &str) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            let port = addr.split(':').last().unwrap_or("unknown");
            tracing::error!("❌ Port {} is already in use", port);
            tracing::error!("Another application is using this port");
            tracing::error!("Solutions:");
            tracing::error!("1. Stop the other application");
            tracing::error!("2. Change the port in config.toml");
            #[cfg(target_os = "windows")]
            tracing::error!("3. Find process: netstat -ano | findstr :{}", port);
            #[cfg(not(target_os = "windows"))]
            tracing::error!("3. Find process: lsof -i :{}", port);
        } else {
            tracing::error!("❌ Failed to bind server on {}: {}", addr, e);
        }
        anyhow::anyhow!("Failed to bind server: {}", e)
    })
}
