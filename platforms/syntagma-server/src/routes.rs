use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use syntagma_protocol::TextRecord;

use crate::engine::AnnotatorClient;

/// Input used when the query omits `text`.
pub const DEFAULT_TEXT: &str = "The quick brown fox jumped over the lazy dog.";

#[derive(Debug, Deserialize)]
pub struct AnnotateQuery {
    pub text: Option<String>,
}

pub fn router(client: AnnotatorClient) -> Router {
    Router::new()
        .route("/annotate", get(annotate))
        .route("/health", get(health))
        .with_state(client)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// GET /annotate?text=... — forward the raw text to the annotation engine
/// and return the converted record tree.
///
/// Engine failures and malformed engine output both surface as 502: the
/// fault is upstream of this service either way.
async fn annotate(
    State(client): State<AnnotatorClient>,
    Query(params): Query<AnnotateQuery>,
) -> Result<Json<TextRecord>, (StatusCode, String)> {
    let text = params.text.as_deref().unwrap_or(DEFAULT_TEXT);
    tracing::debug!(chars = text.len(), "forwarding text to annotation engine");

    let document = client
        .annotate(text)
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;
    let model = syntagma_ingest::build_text(&document)
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    Ok(Json(syntagma_convert::convert(&model)))
}
