use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::domain::tts::{LanguageCatalog, LanguageEntry};

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub default: Option<String>,
    pub languages: Vec<LanguageEntry>,
}

/// GET /api/languages - Labels accepted by /api/convert, in selector order
pub async fn list_languages(State(catalog): State<Arc<LanguageCatalog>>) -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        default: catalog.default_label().map(str::to_string),
        languages: catalog.entries().to_vec(),
    })
}
