use serde::Deserialize;

/// One annotation-engine response for a single raw text: sentence splits
/// with tokens, a constituency parse string and typed dependency edges.
/// Field names follow the engine's JSON output; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotatedDocument {
    #[serde(default)]
    pub sentences: Vec<AnnotatedSentence>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnnotatedSentence {
    /// Constituency parse in bracket notation.
    pub parse: String,
    pub tokens: Vec<AnnotatedToken>,
    #[serde(rename = "basicDependencies", default)]
    pub basic_dependencies: Vec<AnnotatedDependency>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnnotatedToken {
    pub word: String,
    pub lemma: String,
    pub pos: String,
    /// Surface form before tokenizer normalization, when it differs.
    #[serde(rename = "originalText", default)]
    pub original_text: Option<String>,
    /// Whitespace between this token and the next.
    #[serde(default)]
    pub after: Option<String>,
}

/// One edge of the engine's dependency parse. Endpoints are 1-based token
/// indices within the sentence; governor 0 is the virtual root.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotatedDependency {
    pub dep: String,
    pub governor: usize,
    pub dependent: usize,
}
