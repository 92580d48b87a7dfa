//! Transport contract shared across the Syntagma services: closed tag
//! vocabularies, 1-based identifiers, and the record types serialized to
//! external consumers.

pub mod ids;
pub mod records;
pub mod tags;

// Re-export core types for convenience
pub use ids::{SentenceNo, WordId};
pub use records::{
    IncomingDependencyRecord, OutgoingDependencyRecord, SentenceRecord, TextRecord, WordRecord,
};
pub use tags::{
    DependencyTag, PhraseType, PosTag, UnknownDependencyTag, UnknownPhraseLabel, UnknownPosTag,
};
