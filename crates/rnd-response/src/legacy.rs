//! Status-only responders kept for callers that predate the formatter
//!
//! These write a raw error string without localization or a slug.

use axum::http::StatusCode;

use crate::{ErrorReply, Payload, Reply, ResponseEnvelope};

#[deprecated(note = "use `rnd_response::emit_ok`")]
pub fn throw_status_ok<T>(payload: Option<T>) -> Reply<Payload<T>> {
    crate::emit_ok(payload)
}

#[deprecated(note = "use `ResponseFormatter::emit_error`")]
pub fn throw_status_bad_request(message: impl Into<String>) -> ErrorReply {
    status_only(StatusCode::BAD_REQUEST, message.into())
}

#[deprecated(note = "use `ResponseFormatter::emit_error`")]
pub fn throw_status_internal_server_error(message: impl Into<String>) -> ErrorReply {
    status_only(StatusCode::INTERNAL_SERVER_ERROR, message.into())
}

#[deprecated(note = "use `ResponseFormatter::emit_unauthorized`")]
pub fn throw_status_unauthorized(message: impl Into<String>) -> ErrorReply {
    status_only(StatusCode::UNAUTHORIZED, message.into())
}

fn status_only(status: StatusCode, message: String) -> ErrorReply {
    Reply::new(status, ResponseEnvelope::error(status, message, None))
}
