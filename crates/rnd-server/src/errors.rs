use std::sync::Arc;

use axum::extract::{Extension, Json, Path, State};
use rnd_core::{DomainError, LanguageId};
use rnd_response::{ErrorReply, FormatArg, Payload, Reply, ResponseFormatter};
use serde::Deserialize;

/// Shared state for the error rendering endpoints
#[derive(Clone)]
pub struct ErrorsState {
    pub formatter: Arc<ResponseFormatter>,
}

/// Request body for formatted error rendering
#[derive(Debug, Deserialize)]
pub struct FormatBody {
    #[serde(default)]
    pub values: Vec<FormatArg>,
}

/// Request body for unique-violation rendering
#[derive(Debug, Deserialize)]
pub struct UniqueViolationBody {
    /// Raw duplicate-key detail reported by the database
    pub detail: String,
}

/// Render the response a handler would send for the error `slug`
pub async fn render_error(
    State(state): State<ErrorsState>,
    Extension(language): Extension<LanguageId>,
    Path(slug): Path<String>,
) -> ErrorReply {
    let err = DomainError::from_slug(slug);
    state.formatter.emit_error(&err, language).await
}

/// Render the error `slug` with positional values interpolated
pub async fn render_formatted_error(
    State(state): State<ErrorsState>,
    Extension(language): Extension<LanguageId>,
    Path(slug): Path<String>,
    Json(body): Json<FormatBody>,
) -> ErrorReply {
    let err = DomainError::from_slug(slug);
    state.formatter.emit_error_formatted(&err, language, &body.values).await
}

/// Render the duplicate-entry response for a unique-constraint violation
pub async fn render_unique_violation(
    State(state): State<ErrorsState>,
    Json(body): Json<UniqueViolationBody>,
) -> ErrorReply {
    state.formatter.emit_unique_violation(&body.detail)
}

/// Canned success envelope
pub async fn ok_handler() -> Reply<Payload<()>> {
    rnd_response::emit_ok(None)
}
