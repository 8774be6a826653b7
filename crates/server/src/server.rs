use axum::{
    Router,
    routing::{get, put},
};

use std::sync::Arc;

use crate::{collection::Collection, items};

#[derive(Clone)]
pub struct ServerState {
    pub items: Arc<Collection>,
}

/// Routes for the `/items` collection resource.
pub fn router(items: Arc<Collection>) -> Router {
    let state = ServerState { items };

    Router::new()
        .route("/items", get(items::list).post(items::create))
        .route("/items/{id}", put(items::replace).delete(items::remove))
        .with_state(state)
}

pub async fn run_with_listener(
    items: Collection,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(Arc::new(items))).await
}

pub fn spawn_with_listener(
    items: Collection,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(items, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
