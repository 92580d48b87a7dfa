//! Arena-style model of one annotated text: flat word and phrase tables, a
//! typed dependency graph, and the builder that validates the structural
//! invariants before a snapshot can be read.
//!
//! The model is a read-only input to the record conversion. It stores the
//! annotation engine's output as-is (including raw part-of-speech labels) and
//! deliberately does not store the interleaving order of a phrase's direct
//! words and child phrases; that order is reconstructed downstream from word
//! positions.

pub mod builder;
pub mod graph;
pub mod ids;
pub mod text;

// Re-export core types for convenience
pub use builder::{ModelError, TextBuilder};
pub use graph::DependencyGraph;
pub use ids::{PhraseIndex, SentenceIndex, WordIndex};
pub use text::{Phrase, Sentence, Text, Word};
