//! Request extractors that reject with JSON error bodies.

use axum::extract::{FromRequest, FromRequestParts};
use serde::Deserialize;

use crate::ApiError;

/// JSON body extractor; malformed bodies become `VALIDATION_ERROR`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path extractor; unparseable segments become `NOT_FOUND`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// A numeric form field, sent either as text or as a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// Text as typed into the form.
    Text(String),
    /// A JSON number.
    Number(serde_json::Number),
}

impl FormValue {
    /// Text handed to the number parser. `None` is a blank field.
    #[must_use]
    pub fn text(value: Option<&Self>) -> String {
        match value {
            Some(Self::Text(text)) => text.clone(),
            Some(Self::Number(number)) => number.to_string(),
            None => String::new(),
        }
    }
}
