use serde::{Deserialize, Serialize};

use crate::ids::{SentenceNo, WordId};
use crate::tags::{DependencyTag, PosTag};

/// The whole annotated text in transport shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub sentences: Vec<SentenceRecord>,
}

/// One sentence of the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceRecord {
    pub sentence_no: SentenceNo,
    /// The sentence text, copied verbatim from the model.
    pub text: String,
    /// The words contained in this sentence, in position order. Words whose
    /// part-of-speech tag is outside the transport vocabulary are absent;
    /// the ids of the remaining words are not renumbered.
    pub words: Vec<WordRecord>,
    /// The constituency tree of the sentence in bracket notation.
    pub constituency_tree: String,
}

/// One word of a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub id: WordId,
    pub text: String,
    pub lemma: String,
    pub pos_tag: PosTag,
    pub sentence_no: SentenceNo,
    pub incoming_dependencies: Vec<IncomingDependencyRecord>,
    pub outgoing_dependencies: Vec<OutgoingDependencyRecord>,
}

/// A typed dependency edge arriving at the owning word. Only the other
/// endpoint is stored; the owning word is implicit from context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingDependencyRecord {
    pub dependency_type: DependencyTag,
    pub source_word_id: WordId,
}

/// A typed dependency edge leaving the owning word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingDependencyRecord {
    pub dependency_type: DependencyTag,
    pub target_word_id: WordId,
}
