// Single-page form served over HTTP.
// GET / returns the page; the page posts to /api/recommendations and renders
// the returned outcome client-side.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Html,
    routing::{get, post},
};
use log::{info, warn};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::clients::errors::{Error, Result};
use crate::discoverer::Discoverer;
use crate::genre::{GenreChoice, GenreSelection};
use crate::render::{Outcome, failure_message};

const INDEX_HTML: &str = include_str!("index.html");

/// Shared state for the web form
pub struct AppState {
    pub discoverer: Discoverer,
}

impl AppState {
    pub fn new(discoverer: Discoverer) -> Self {
        AppState { discoverer }
    }
}

/// Body of a discovery request, mirroring the form fields
#[derive(Debug, Deserialize)]
pub struct DiscoverRequest {
    pub genre: String,
    #[serde(default)]
    pub custom: Option<String>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/genres", get(genres))
        .route("/api/recommendations", post(recommendations))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn genres() -> Json<Vec<&'static str>> {
    Json(GenreChoice::labels())
}

async fn recommendations(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<DiscoverRequest>, JsonRejection>,
) -> (StatusCode, Json<Outcome>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected discovery request: {rejection}");
            let message = failure_message(&Error::InvalidRequest(rejection.body_text()));
            return (rejection.status(), Json(Outcome::Error { message }));
        }
    };

    let selection = match resolve(&request) {
        Ok(selection) => selection,
        Err(e) => {
            let message = failure_message(&e);
            return (StatusCode::BAD_REQUEST, Json(Outcome::Error { message }));
        }
    };

    let result = state.discoverer.discover(&selection).await;
    if let Err(e) = &result {
        warn!("Discovery for {selection} failed: {e}");
    }
    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(e) => status_for(e),
    };
    (status, Json(Outcome::from_result(result)))
}

fn resolve(request: &DiscoverRequest) -> Result<GenreSelection> {
    let choice: GenreChoice = request.genre.parse()?;
    GenreSelection::resolve(choice, request.custom.as_deref())
}

fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::InvalidGenre(_) | Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        Error::ConfigurationError(_) | Error::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// Serve the form until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    info!("Serving genre form on http://{local}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;
    Ok(())
}
