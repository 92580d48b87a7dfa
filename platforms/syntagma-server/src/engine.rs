use syntagma_ingest::AnnotatedDocument;
use thiserror::Error;

/// Annotators requested from the engine: everything the record conversion
/// needs and nothing more.
const ANNOTATORS: &str = "tokenize,ssplit,pos,lemma,parse,depparse";

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("annotation engine request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the external annotation engine. The engine is a black
/// box: raw text goes in, one annotated JSON document comes out.
#[derive(Debug, Clone)]
pub struct AnnotatorClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnnotatorClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub async fn annotate(&self, text: &str) -> Result<AnnotatedDocument, EngineError> {
        let properties = serde_json::json!({
            "annotators": ANNOTATORS,
            "outputFormat": "json",
        });
        let response = self
            .http
            .post(&self.base_url)
            .query(&[("properties", properties.to_string())])
            .body(text.to_string())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
