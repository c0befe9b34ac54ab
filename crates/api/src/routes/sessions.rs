//! Session lifecycle routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use orcamento_core::{
    ledger::{DraftItem, LineItem},
    session::{Session, SessionError},
    summary::BudgetSummary,
};
use orcamento_shared::types::SessionId;
use serde::Serialize;
use tracing::info;

use crate::{ApiError, ApiPath, AppState};

/// Creates the session routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/{session_id}", get(get_session).delete(close_session))
}

/// Full view of a session.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Session ID.
    pub id: SessionId,
    /// Current draft item.
    pub draft: DraftItem,
    /// Submitted items in order.
    pub items: Vec<LineItem>,
    /// Current summary, if computed.
    pub summary: Option<BudgetSummary>,
    /// Whether the summary is in edit mode.
    pub editing: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last change timestamp.
    pub updated_at: DateTime<Utc>,
}

impl SessionResponse {
    /// Snapshots a session.
    #[must_use]
    pub fn new(id: SessionId, session: &Session) -> Self {
        Self {
            id,
            draft: session.draft().clone(),
            items: session.ledger().items().to_vec(),
            summary: session.summary().cloned(),
            editing: session.is_editing(),
            created_at: session.created_at(),
            updated_at: session.updated_at(),
        }
    }
}

/// POST `/sessions` - Open a new session.
async fn create_session(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let id = state.sessions.create();
    let response = state
        .sessions
        .with_session(id, |session| SessionResponse::new(id, session))?;

    info!(session_id = %id, "Session opened");
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET `/sessions/{session_id}` - Full session state.
async fn get_session(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<SessionId>,
) -> Result<Json<SessionResponse>, ApiError> {
    let response = state
        .sessions
        .with_session(session_id, |session| SessionResponse::new(session_id, session))?;
    Ok(Json(response))
}

/// DELETE `/sessions/{session_id}` - Close a session.
async fn close_session(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<SessionId>,
) -> Result<StatusCode, ApiError> {
    if !state.sessions.remove(session_id) {
        return Err(SessionError::NotFound(session_id).into());
    }

    info!(session_id = %session_id, "Session closed");
    Ok(StatusCode::NO_CONTENT)
}
