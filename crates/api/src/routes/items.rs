//! Draft item and ledger routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use orcamento_core::ledger::{DraftItem, LineItem};
use orcamento_shared::types::SessionId;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{ApiError, ApiJson, ApiPath, AppState, FormValue};

/// Creates the draft and item routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sessions/{session_id}/draft", put(update_draft))
        .route(
            "/sessions/{session_id}/items",
            get(list_items).post(add_item),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body replacing the draft item.
///
/// Numbers may be form text or JSON numbers. Missing, null or blank numbers
/// are zero.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateDraftRequest {
    /// Item name.
    #[serde(default)]
    pub name: String,
    /// Time estimate.
    #[serde(default)]
    pub time: Option<FormValue>,
    /// Complexity score.
    #[serde(default)]
    pub complexity: Option<FormValue>,
    /// Cost estimate.
    #[serde(default)]
    pub cost: Option<FormValue>,
}

/// Response for the item list.
#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    /// Items in insertion order.
    pub items: Vec<LineItem>,
    /// Number of items.
    pub count: usize,
}

/// Response for an add-item request.
#[derive(Debug, Serialize)]
pub struct AddItemResponse {
    /// False when the draft had no name and nothing was added.
    pub added: bool,
    /// The appended item.
    pub item: Option<LineItem>,
    /// Ledger size after the request.
    pub count: usize,
    /// Draft after the request (zeroed when an item was added).
    pub draft: DraftItem,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// PUT `/sessions/{session_id}/draft` - Replace the draft item.
async fn update_draft(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<SessionId>,
    ApiJson(request): ApiJson<UpdateDraftRequest>,
) -> Result<Json<DraftItem>, ApiError> {
    let draft = DraftItem::parse(
        &request.name,
        &FormValue::text(request.time.as_ref()),
        &FormValue::text(request.complexity.as_ref()),
        &FormValue::text(request.cost.as_ref()),
    )?;

    state.sessions.with_session(session_id, |session| {
        session.set_draft(draft.clone());
    })?;

    debug!(session_id = %session_id, "Draft updated");
    Ok(Json(draft))
}

/// GET `/sessions/{session_id}/items` - List submitted items.
async fn list_items(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<SessionId>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let items = state
        .sessions
        .with_session(session_id, |session| session.ledger().items().to_vec())?;

    Ok(Json(ItemsResponse {
        count: items.len(),
        items,
    }))
}

/// POST `/sessions/{session_id}/items` - Append the draft to the ledger.
///
/// A draft without a name is ignored and reported with `added: false`.
async fn add_item(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<SessionId>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state.sessions.with_session(session_id, |session| {
        let item = session.add_item().cloned();
        AddItemResponse {
            added: item.is_some(),
            item,
            count: session.ledger().len(),
            draft: session.draft().clone(),
        }
    })?;

    let status = if response.added {
        info!(session_id = %session_id, count = response.count, "Item added");
        StatusCode::CREATED
    } else {
        debug!(session_id = %session_id, "Draft has no name, item not added");
        StatusCode::OK
    };

    Ok((status, Json(response)))
}
