//! The conversion core: walks an annotated-text snapshot and produces the
//! flat transport records — per-sentence bracket-notation constituency trees
//! reconstructed from unordered child collections, and per-word dependency
//! lists partitioned into incoming and outgoing, keyed by relation tag.
//!
//! Everything here is a pure, synchronous function of one immutable
//! snapshot; each call allocates a disjoint record tree and is safe to run
//! concurrently for independent inputs.

pub mod assemble;
pub mod collect;
pub mod linearize;

#[cfg(test)]
mod testutil;

pub use assemble::convert;
pub use collect::collect;
pub use linearize::linearize;
