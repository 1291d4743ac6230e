use http::HeaderMap;

use crate::LanguageId;

/// Request header carrying the caller's catalog language id
pub const LANGUAGE_ID_HEADER: &str = "x-language-id";

/// Read the language id from request headers
///
/// A missing, malformed or non-positive header yields [`LanguageId::UNSET`],
/// which the formatter replaces with its default language.
pub fn language_from_headers(headers: &HeaderMap) -> LanguageId {
    headers
        .get(LANGUAGE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<LanguageId>().ok())
        .filter(|language| language.get() > 0)
        .unwrap_or(LanguageId::UNSET)
}
