//! API route definitions.
//!
//! Maps HTTP paths to handler functions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tracing::error;

use crate::handlers::{handle_node_summary, handle_transact, HandlerError};
use crate::server::AppState;
use crate::types::ErrorBody;

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = match self {
            HandlerError::Node(_) => StatusCode::BAD_GATEWAY,
            HandlerError::NotEnoughAccounts(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!("request failed: {self}");
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

async fn node_summary(State(state): State<AppState>) -> Response {
    match handle_node_summary(&state).await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => e.into_response(),
    }
}

// State-changing, yet exposed as GET.
async fn transact(State(state): State<AppState>) -> Response {
    match handle_transact(&state).await {
        Ok(receipt) => Json(receipt).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Builds the axum router with all API routes.
///
/// Routes:
/// - `GET /` — node info, block number, mnemonic, accounts and balances
/// - `GET /transact` — send the test transfer and return its receipt
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(node_summary))
        .route("/transact", get(transact))
        .with_state(state)
}
