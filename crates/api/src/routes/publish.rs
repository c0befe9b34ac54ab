//! Summary export and share routes.

use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
};
use orcamento_core::publish::{ShareLinks, SummaryDocument, render_pdf};
use orcamento_shared::types::SessionId;
use serde::Serialize;
use tracing::info;

use crate::{ApiError, ApiPath, AppState};

/// Creates the export and share routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sessions/{session_id}/export", get(export_summary))
        .route("/sessions/{session_id}/share", get(share_summary))
}

/// Response for the share links.
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    /// Plain-text message the links carry.
    pub text: String,
    /// Share targets.
    pub links: ShareLinks,
}

/// Builds the summary document for a session.
fn summary_document(state: &AppState, session_id: SessionId) -> Result<SummaryDocument, ApiError> {
    let document = state.sessions.with_session(session_id, |session| {
        session
            .require_summary()
            .map(|summary| SummaryDocument::new(summary, &state.config.export))
    })??;
    Ok(document)
}

/// GET `/sessions/{session_id}/export` - Download the summary as PDF.
async fn export_summary(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<SessionId>,
) -> Result<impl IntoResponse, ApiError> {
    let document = summary_document(&state, session_id)?;
    let bytes = render_pdf(&document);

    info!(
        session_id = %session_id,
        filename = %document.filename,
        size = bytes.len(),
        "Summary exported"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", document.filename),
            ),
        ],
        bytes,
    ))
}

/// GET `/sessions/{session_id}/share` - Share links for the summary.
async fn share_summary(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<SessionId>,
) -> Result<Json<ShareResponse>, ApiError> {
    let document = summary_document(&state, session_id)?;
    let links = ShareLinks::new(&document, &state.config.share);

    Ok(Json(ShareResponse {
        text: document.share_text(),
        links,
    }))
}
