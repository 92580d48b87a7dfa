use syntagma_protocol::PhraseType;

use crate::graph::DependencyGraph;
use crate::ids::{PhraseIndex, SentenceIndex, WordIndex};

/// One annotated word.
///
/// The part-of-speech label is kept exactly as the annotation engine produced
/// it; mapping into the closed transport tagset happens downstream and may
/// fail per word.
#[derive(Debug, Clone)]
pub struct Word {
    pub text: String,
    pub lemma: String,
    pub pos: String,
    pub sentence: SentenceIndex,
    /// The most specific phrase owning this word directly.
    pub phrase: PhraseIndex,
}

#[derive(Debug, Clone)]
pub struct Sentence {
    pub text: String,
    /// Word positions, ascending.
    pub words: Vec<WordIndex>,
    /// Top-level phrases; the first entry is the root of the sentence tree.
    pub phrases: Vec<PhraseIndex>,
}

#[derive(Debug, Clone)]
pub struct Phrase {
    pub tag: PhraseType,
    /// Every word in this phrase's subtree, ascending by position.
    pub words: Vec<WordIndex>,
    /// Direct child phrases. The original interleaving of direct words and
    /// children is not stored; it must be reconstructed from word positions.
    pub children: Vec<PhraseIndex>,
}

/// An immutable annotated-text snapshot with arena-style storage: flat word
/// and phrase tables cross-referenced by index.
///
/// Only [`crate::TextBuilder`] constructs a `Text`, and it rejects snapshots
/// that violate the structural invariants (exclusive phrase ownership,
/// document-ordered words, one attachment per phrase). Accessors assume a
/// valid snapshot; indices from a different text are out of contract.
#[derive(Debug)]
pub struct Text {
    pub(crate) words: Vec<Word>,
    pub(crate) sentences: Vec<Sentence>,
    pub(crate) phrases: Vec<Phrase>,
    pub(crate) dependencies: DependencyGraph,
}

impl Text {
    pub fn word(&self, index: WordIndex) -> &Word {
        &self.words[index.index()]
    }

    pub fn sentence(&self, index: SentenceIndex) -> &Sentence {
        &self.sentences[index.index()]
    }

    pub fn phrase(&self, index: PhraseIndex) -> &Phrase {
        &self.phrases[index.index()]
    }

    /// Number of words in the text.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sentences in document order.
    pub fn sentences(&self) -> impl Iterator<Item = (SentenceIndex, &Sentence)> {
        self.sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| (SentenceIndex::new(index), sentence))
    }

    /// The sentence's first top-level phrase.
    pub fn root_phrase(&self, sentence: SentenceIndex) -> PhraseIndex {
        self.sentences[sentence.index()].phrases[0]
    }

    /// Words owned directly by `phrase` (not claimed by any descendant), in
    /// position order.
    pub fn direct_words(&self, phrase: PhraseIndex) -> Vec<WordIndex> {
        self.phrase(phrase)
            .words
            .iter()
            .copied()
            .filter(|&word| self.word(word).phrase == phrase)
            .collect()
    }

    /// Smallest word position contained in the phrase's subtree, if any.
    pub fn min_position(&self, phrase: PhraseIndex) -> Option<usize> {
        self.phrase(phrase).words.first().map(|word| word.index())
    }

    pub fn dependencies(&self) -> &DependencyGraph {
        &self.dependencies
    }
}
