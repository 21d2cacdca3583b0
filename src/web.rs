//! HTTP front door
//!
//! `GET /{ids}` takes a `.`-separated list of comic ids and answers with an
//! HTML page holding one fragment per comic, in request order.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::aggregator::fetch_batch;
use crate::client::XkcdClient;
use crate::comic::render_page;
use crate::error::ComicError;

/// Shared application state
#[derive(Clone)]
struct AppState {
    client: Arc<XkcdClient>,
}

/// GET / - an empty id list is malformed
async fn index_handler(State(state): State<AppState>) -> Response {
    comics_response(&state, "").await
}

/// GET /{ids}
async fn comics_handler(State(state): State<AppState>, Path(ids): Path<String>) -> Response {
    comics_response(&state, &ids).await
}

async fn comics_response(state: &AppState, ids: &str) -> Response {
    let results = match fetch_batch(&state.client, ids).await {
        Ok(results) => results,
        Err(e) => {
            log::warn!("Rejected request {:?}: {}", ids, e);
            return (e.status_code(), e.to_string()).into_response();
        }
    };

    match results.into_iter().collect::<Result<Vec<_>, ComicError>>() {
        Ok(comics) => Html(render_page(&comics)).into_response(),
        Err(e) => {
            log::warn!("Failed to fetch comics {:?}: {}", ids, e);
            e.status_code().into_response()
        }
    }
}

/// Fallback for paths with more than one segment
async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Build the web server router
pub fn create_router(client: Arc<XkcdClient>) -> Router {
    let state = AppState { client };

    Router::new()
        .route("/", get(index_handler))
        .route("/{ids}", get(comics_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

/// Start the web server and run until Ctrl-C
pub async fn serve(client: Arc<XkcdClient>, port: u16) -> std::io::Result<()> {
    let app = create_router(client);
    let addr = format!("0.0.0.0:{}", port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Comic server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("Failed to listen for shutdown signal: {}", e);
            }
            log::info!("Shutting down");
        })
        .await
}
