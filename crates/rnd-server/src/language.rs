use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use rnd_core::language_from_headers;

/// Middleware that resolves the caller's catalog language
///
/// Stores the `X-Language-Id` header value as a `LanguageId` extension;
/// requests without a usable header get `LanguageId::UNSET`, which the
/// formatter replaces with the default language.
pub async fn language_middleware(mut request: Request, next: Next) -> Response {
    let language = language_from_headers(request.headers());
    tracing::trace!(%language, "request language");

    request.extensions_mut().insert(language);

    next.run(request).await
}
