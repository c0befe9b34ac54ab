//! Summary computation and override routes.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::State,
    routing::{post, put},
};
use orcamento_core::{
    BudgetField,
    session::{ComputeOutcome, Session},
    summary::BudgetSummary,
};
use orcamento_shared::{AppError, types::SessionId, types::parse_number};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{ApiError, ApiJson, ApiPath, AppState, FormValue};

/// Creates the summary routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sessions/{session_id}/summary",
            post(compute_summary).get(get_summary),
        )
        .route("/sessions/{session_id}/editing", post(toggle_editing))
        .route(
            "/sessions/{session_id}/summary/{field}",
            put(override_field),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for a manual override.
#[derive(Debug, Deserialize)]
pub struct OverrideRequest {
    /// New value, as form text or a JSON number.
    pub value: FormValue,
}

/// Summary state of a session.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Current summary, if any.
    pub summary: Option<BudgetSummary>,
    /// Whether the summary is in edit mode.
    pub editing: bool,
}

impl SummaryResponse {
    fn new(session: &Session) -> Self {
        Self {
            summary: session.summary().cloned(),
            editing: session.is_editing(),
        }
    }
}

/// Response for a compute request.
#[derive(Debug, Serialize)]
pub struct ComputeResponse {
    /// Whether a new summary was produced.
    pub outcome: ComputeOutcome,
    /// Summary state after the request.
    #[serde(flatten)]
    pub state: SummaryResponse,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/sessions/{session_id}/summary` - Average the ledger.
///
/// An empty ledger changes nothing and reports `empty_ledger`.
async fn compute_summary(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<SessionId>,
) -> Result<Json<ComputeResponse>, ApiError> {
    let response = state.sessions.with_session(session_id, |session| {
        let outcome = session.compute_summary()?;
        Ok::<_, ApiError>(ComputeResponse {
            outcome,
            state: SummaryResponse::new(session),
        })
    })??;

    match response.outcome {
        ComputeOutcome::Computed => info!(session_id = %session_id, "Summary computed"),
        ComputeOutcome::EmptyLedger => {
            debug!(session_id = %session_id, "Ledger empty, summary unchanged");
        }
    }

    Ok(Json(response))
}

/// GET `/sessions/{session_id}/summary` - Current summary and mode.
async fn get_summary(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<SessionId>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let response = state
        .sessions
        .with_session(session_id, |session| SummaryResponse::new(session))?;
    Ok(Json(response))
}

/// POST `/sessions/{session_id}/editing` - Toggle edit mode.
async fn toggle_editing(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<SessionId>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let response = state.sessions.with_session(session_id, |session| {
        session.toggle_editing()?;
        Ok::<_, ApiError>(SummaryResponse::new(session))
    })??;

    debug!(session_id = %session_id, editing = response.editing, "Edit mode toggled");
    Ok(Json(response))
}

/// PUT `/sessions/{session_id}/summary/{field}` - Override one figure.
///
/// The other two figures are inferred from the new value.
async fn override_field(
    State(state): State<AppState>,
    ApiPath((session_id, field)): ApiPath<(SessionId, String)>,
    ApiJson(request): ApiJson<OverrideRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let field = BudgetField::from_str(&field).map_err(AppError::Validation)?;
    let value = parse_number(&FormValue::text(Some(&request.value)))?;

    let response = state.sessions.with_session(session_id, |session| {
        session.override_field(field, value)?;
        Ok::<_, ApiError>(SummaryResponse::new(session))
    })??;

    info!(session_id = %session_id, field = %field, value = %value, "Summary overridden");
    Ok(Json(response))
}
