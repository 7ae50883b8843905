use std::{env, net::SocketAddr, sync::Arc};

use anyhow::Result;
use chat_core::{ChatEngine, ChatStore, MemoryChatStore};
use chat_server::{router, AppState};
use dotenvy::dotenv;
use llm_provider::ResilientProvider;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "chat_server=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()?;

    let store: Arc<dyn ChatStore> = Arc::new(MemoryChatStore::new());
    let engine = Arc::new(ChatEngine::new(
        store.clone(),
        ResilientProvider::from_env(),
    ));
    let app = router(AppState { store, engine });

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("chat server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
