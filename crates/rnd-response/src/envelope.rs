use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// JSON body describing the outcome of a request
///
/// Fields without a value are omitted from the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_slug: Option<String>,
}

impl ResponseEnvelope {
    /// Canned success body: `{status_code, message: "OK"}`
    pub fn ok(status: StatusCode) -> Self {
        Self::message(status, "OK")
    }

    /// Body carrying a plain message
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: Some(message.into()),
            error: None,
            error_slug: None,
        }
    }

    /// Body carrying localized error text and its slug
    ///
    /// An empty error text is omitted, as happens when even the generic
    /// catalog entry could not be resolved.
    pub fn error(status: StatusCode, error: impl Into<String>, slug: Option<String>) -> Self {
        let error = error.into();
        Self {
            status_code: status.as_u16(),
            message: None,
            error: (!error.is_empty()).then_some(error),
            error_slug: slug,
        }
    }
}

/// Body of a success response: the caller's payload or the canned envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Data(T),
    Envelope(ResponseEnvelope),
}

/// Terminal response for a request: a status code and a JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply<T = ResponseEnvelope> {
    status: StatusCode,
    body: T,
}

/// Reply produced by every error-emitting operation
pub type ErrorReply = Reply<ResponseEnvelope>;

impl<T> Reply<T> {
    pub const fn new(status: StatusCode, body: T) -> Self {
        Self { status, body }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub const fn body(&self) -> &T {
        &self.body
    }

    pub fn into_body(self) -> T {
        self.body
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// 200 with `payload` verbatim, or the canned `OK` envelope when absent
pub fn emit_ok<T>(payload: Option<T>) -> Reply<Payload<T>> {
    success(StatusCode::OK, payload)
}

/// 201 with `payload` verbatim, or the canned `OK` envelope when absent
pub fn emit_created<T>(payload: Option<T>) -> Reply<Payload<T>> {
    success(StatusCode::CREATED, payload)
}

fn success<T>(status: StatusCode, payload: Option<T>) -> Reply<Payload<T>> {
    let body = match payload {
        Some(data) => Payload::Data(data),
        None => Payload::Envelope(ResponseEnvelope::ok(status)),
    };
    Reply::new(status, body)
}
