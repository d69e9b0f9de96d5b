pub mod error;
pub mod handlers;

use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::DefaultBodyLimit;
use axum::{routing, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use workbench_store::Store;

use crate::service::{self, InteractionService};
use self::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<Store>>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` against the store on the blocking pool, holding the lock for its duration.
    ///
    /// A panic in `f` poisons the lock and later callers recover it. Open
    /// transactions roll back as the closure unwinds.
    pub async fn run<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(InteractionService<'_>) -> service::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || {
            let guard = store.lock().unwrap_or_else(PoisonError::into_inner);
            f(InteractionService::new(&guard)).map_err(ApiError::from)
        })
        .await
        .map_err(|err| {
            error!(error = %err, "store worker failed");
            ApiError::internal("store worker failed")
        })?
    }
}

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", routing::get(handlers::index))
        .route("/_health", routing::get(handlers::health))
        .route(
            "/customer-interaction/upload",
            routing::post(handlers::upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/customer-interaction/search",
            routing::post(handlers::search),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: AppState, bind: &str, max_upload_bytes: usize) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router(state, max_upload_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(err) => error!(error = %err, "failed to listen for ctrl-c"),
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::service;
    use workbench_core::InteractionFilter;
    use workbench_store::Store;

    #[tokio::test]
    async fn store_survives_a_panicking_worker() {
        let store = Store::open_in_memory().expect("open in memory");
        store.migrate().expect("migrate");
        let state = AppState::new(store);

        let failed = state
            .run(|_| -> service::Result<()> { panic!("worker blew up") })
            .await;
        assert!(failed.is_err());

        let page = state
            .run(|service| service.search(&InteractionFilter::default(), 0, 10))
            .await
            .expect("search after panic");
        assert_eq!(page.total_elements, 0);
    }
}
