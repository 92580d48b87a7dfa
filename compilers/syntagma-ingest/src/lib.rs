//! Ingest side of the pipeline: decoding of the annotation engine's JSON
//! output, bracket-notation tree parsing, and assembly of the arena text
//! model the record conversion reads.

pub mod assembly;
pub mod document;
pub mod treebank;

pub use assembly::{build_text, AssemblyError};
pub use document::{AnnotatedDependency, AnnotatedDocument, AnnotatedSentence, AnnotatedToken};
pub use treebank::{ParseTree, TreebankError};
