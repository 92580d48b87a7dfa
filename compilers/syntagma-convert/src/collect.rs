use syntagma_model::{Text, WordIndex};
use syntagma_protocol::{
    DependencyTag, IncomingDependencyRecord, OutgoingDependencyRecord, WordId,
};

/// Gathers one word's dependency edges into transport records, partitioned
/// into incoming and outgoing.
///
/// The full closed tag set is scanned in declared order, not just the tags
/// present on this word; within one tag the related words come back from the
/// model in position order. Each record stores only the other endpoint's
/// 1-based id — the owning word is implicit from context.
pub fn collect(
    text: &Text,
    word: WordIndex,
) -> (Vec<IncomingDependencyRecord>, Vec<OutgoingDependencyRecord>) {
    let mut incoming = Vec::new();
    let mut outgoing = Vec::new();
    for &tag in DependencyTag::ALL {
        for source in text.dependencies().sources_of(word, tag) {
            incoming.push(IncomingDependencyRecord {
                dependency_type: tag,
                source_word_id: WordId::from_position(source.index()),
            });
        }
        for target in text.dependencies().targets_of(word, tag) {
            outgoing.push(OutgoingDependencyRecord {
                dependency_type: tag,
                target_word_id: WordId::from_position(target.index()),
            });
        }
    }
    (incoming, outgoing)
}
