//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::error;

use crate::confirm::{ConfirmError, Token};
use crate::resolve::Query;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/query", post(query_station))
        .route("/confirm", post(confirm_station))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station name in catalog order.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let stations = state
        .responder
        .resolver()
        .catalog()
        .names()
        .map(str::to_string)
        .collect();

    Json(StationListResponse { stations })
}

/// Answer a station query.
async fn query_station(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<ReplyResponse>, AppError> {
    let query = Query::from_args(req.args.as_slice());
    let reply = state.responder.query(req.conversation, &query).await?;
    Ok(Json(reply.into()))
}

/// Answer an accept/decline button press.
///
/// Unknown, used and empty tokens all get the retry prompt.
async fn confirm_station(
    State(state): State<AppState>,
    Json(req): Json<ConfirmRequest>,
) -> Result<Json<ReplyResponse>, AppError> {
    let token = Token::from(req.token);
    let reply = state.responder.answer(&token, req.accepted).await?;
    Ok(Json(reply.into()))
}

/// Failures that reach the client as a JSON error body.
///
/// Invalid tokens are not among them: they are answered with a normal reply.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl From<ConfirmError> for AppError {
    fn from(e: ConfirmError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
