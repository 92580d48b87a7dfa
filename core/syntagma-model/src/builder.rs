use syntagma_protocol::{DependencyTag, PhraseType};
use thiserror::Error;

use crate::graph::DependencyGraph;
use crate::ids::{PhraseIndex, SentenceIndex, WordIndex};
use crate::text::{Phrase, Sentence, Text, Word};

/// Structural violations rejected when assembling a [`Text`].
///
/// The conversion side never sees these: a snapshot that fails to build is a
/// contract violation by the annotation side, reported here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("sentence {sentence} has no words")]
    EmptySentence { sentence: usize },
    #[error("sentence {sentence} has words but no phrase tree")]
    MissingRoot { sentence: usize },
    #[error("sentence word lists do not partition the text in document order")]
    OutOfOrderWords,
    #[error("phrase {phrase} references word {word} outside the text")]
    PhraseWordOutOfRange { phrase: usize, word: usize },
    #[error("phrase {phrase} lists word {word} more than once")]
    DuplicatePhraseWord { phrase: usize, word: usize },
    #[error("reference to phrase {phrase} that was never built")]
    UnknownPhrase { phrase: usize },
    #[error("phrase {phrase} lists child {child}, which is not built before it")]
    InvalidChild { phrase: usize, child: usize },
    #[error("phrase {phrase} is attached in {count} places, expected exactly one")]
    MisattachedPhrase { phrase: usize, count: usize },
    #[error("phrase {child} contains words outside its parent {parent}")]
    ChildOutsideParent { parent: usize, child: usize },
    #[error("top-level phrase {phrase} contains word {word} from another sentence")]
    ForeignWord { phrase: usize, word: usize },
    #[error("word {word} is not contained in any phrase of its sentence")]
    UncoveredWord { word: usize },
    #[error("word {word} is directly owned by more than one phrase")]
    ContestedWord { word: usize },
    #[error("dependency edge {src} -> {target} references a word outside the text")]
    EdgeOutOfRange { src: usize, target: usize },
}

#[derive(Debug)]
struct PendingWord {
    text: String,
    lemma: String,
    pos: String,
    sentence: SentenceIndex,
}

/// Assembles a [`Text`] bottom-up and validates the structural invariants in
/// [`TextBuilder::finish`]. The `add_*` methods never fail; all violations
/// are reported at the end so callers build in a single pass.
#[derive(Debug, Default)]
pub struct TextBuilder {
    words: Vec<PendingWord>,
    sentences: Vec<Sentence>,
    phrases: Vec<Phrase>,
    edges: Vec<(WordIndex, WordIndex, DependencyTag)>,
}

impl TextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_sentence(&mut self, text: impl Into<String>) -> SentenceIndex {
        let index = SentenceIndex::new(self.sentences.len());
        self.sentences.push(Sentence {
            text: text.into(),
            words: Vec::new(),
            phrases: Vec::new(),
        });
        index
    }

    /// Appends a word to the text and to the given sentence. Words must be
    /// added in document order.
    pub fn add_word(
        &mut self,
        sentence: SentenceIndex,
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: impl Into<String>,
    ) -> WordIndex {
        let index = WordIndex::new(self.words.len());
        self.words.push(PendingWord {
            text: text.into(),
            lemma: lemma.into(),
            pos: pos.into(),
            sentence,
        });
        self.sentences[sentence.index()].words.push(index);
        index
    }

    /// Adds a phrase node. `words` is the full contained word set of the
    /// subtree; children must have been added before their parent.
    pub fn add_phrase(
        &mut self,
        tag: PhraseType,
        words: Vec<WordIndex>,
        children: Vec<PhraseIndex>,
    ) -> PhraseIndex {
        let index = PhraseIndex::new(self.phrases.len());
        self.phrases.push(Phrase { tag, words, children });
        index
    }

    /// Appends a top-level phrase to the sentence; the first one attached
    /// becomes the sentence's root.
    pub fn attach_phrase(&mut self, sentence: SentenceIndex, phrase: PhraseIndex) {
        self.sentences[sentence.index()].phrases.push(phrase);
    }

    /// Records a typed dependency edge from the governing word to the
    /// dependent word.
    pub fn add_dependency(&mut self, source: WordIndex, target: WordIndex, tag: DependencyTag) {
        self.edges.push((source, target, tag));
    }

    pub fn finish(mut self) -> Result<Text, ModelError> {
        self.check_sentences()?;
        self.normalize_phrases()?;
        self.check_topology()?;
        let owners = self.assign_owners()?;

        let TextBuilder {
            words,
            sentences,
            phrases,
            edges,
        } = self;

        let mut text_words = Vec::with_capacity(words.len());
        for (pending, phrase) in words.into_iter().zip(owners) {
            text_words.push(Word {
                text: pending.text,
                lemma: pending.lemma,
                pos: pending.pos,
                sentence: pending.sentence,
                phrase,
            });
        }

        let mut dependencies = DependencyGraph::new(text_words.len());
        for (source, target, tag) in edges {
            if source.index() >= text_words.len() || target.index() >= text_words.len() {
                return Err(ModelError::EdgeOutOfRange {
                    src: source.index(),
                    target: target.index(),
                });
            }
            dependencies.add_edge(source, target, tag);
        }

        Ok(Text {
            words: text_words,
            sentences,
            phrases,
            dependencies,
        })
    }

    /// Sentence word lists must partition 0..n in document order.
    fn check_sentences(&self) -> Result<(), ModelError> {
        let mut expected = 0usize;
        for (index, sentence) in self.sentences.iter().enumerate() {
            if sentence.words.is_empty() {
                return Err(ModelError::EmptySentence { sentence: index });
            }
            if sentence.phrases.is_empty() {
                return Err(ModelError::MissingRoot { sentence: index });
            }
            for &word in &sentence.words {
                if word.index() != expected {
                    return Err(ModelError::OutOfOrderWords);
                }
                expected += 1;
            }
        }
        if expected != self.words.len() {
            return Err(ModelError::OutOfOrderWords);
        }
        Ok(())
    }

    /// Sorts each phrase's contained-word set and rejects duplicates and
    /// out-of-range positions.
    fn normalize_phrases(&mut self) -> Result<(), ModelError> {
        let word_count = self.words.len();
        for (index, phrase) in self.phrases.iter_mut().enumerate() {
            phrase.words.sort_unstable();
            if let Some(&last) = phrase.words.last() {
                if last.index() >= word_count {
                    return Err(ModelError::PhraseWordOutOfRange {
                        phrase: index,
                        word: last.index(),
                    });
                }
            }
            if let Some(pair) = phrase.words.windows(2).find(|pair| pair[0] == pair[1]) {
                return Err(ModelError::DuplicatePhraseWord {
                    phrase: index,
                    word: pair[0].index(),
                });
            }
        }
        Ok(())
    }

    fn check_topology(&self) -> Result<(), ModelError> {
        let mut attachments = vec![0usize; self.phrases.len()];

        for (index, sentence) in self.sentences.iter().enumerate() {
            for &top in &sentence.phrases {
                if top.index() >= self.phrases.len() {
                    return Err(ModelError::UnknownPhrase { phrase: top.index() });
                }
                attachments[top.index()] += 1;
                // A top-level phrase may only span words of its own sentence.
                let sentence_index = SentenceIndex::new(index);
                for &word in &self.phrases[top.index()].words {
                    if self.words[word.index()].sentence != sentence_index {
                        return Err(ModelError::ForeignWord {
                            phrase: top.index(),
                            word: word.index(),
                        });
                    }
                }
            }
        }

        for (index, phrase) in self.phrases.iter().enumerate() {
            for &child in &phrase.children {
                // Children precede parents, which also rules out cycles.
                if child.index() >= index {
                    return Err(ModelError::InvalidChild {
                        phrase: index,
                        child: child.index(),
                    });
                }
                attachments[child.index()] += 1;
                if !is_sorted_subset(&self.phrases[child.index()].words, &phrase.words) {
                    return Err(ModelError::ChildOutsideParent {
                        parent: index,
                        child: child.index(),
                    });
                }
            }
        }

        for (index, &count) in attachments.iter().enumerate() {
            if count != 1 {
                return Err(ModelError::MisattachedPhrase {
                    phrase: index,
                    count,
                });
            }
        }
        Ok(())
    }

    /// Resolves each word's direct owner: the phrase containing it whose
    /// children do not. Exactly one phrase may claim each word.
    fn assign_owners(&self) -> Result<Vec<PhraseIndex>, ModelError> {
        let mut owners: Vec<Option<PhraseIndex>> = vec![None; self.words.len()];

        for (index, phrase) in self.phrases.iter().enumerate() {
            let mut child_words: Vec<WordIndex> = phrase
                .children
                .iter()
                .flat_map(|&child| self.phrases[child.index()].words.iter().copied())
                .collect();
            child_words.sort_unstable();

            for &word in &phrase.words {
                if child_words.binary_search(&word).is_ok() {
                    continue;
                }
                let slot = &mut owners[word.index()];
                if slot.is_some() {
                    return Err(ModelError::ContestedWord { word: word.index() });
                }
                *slot = Some(PhraseIndex::new(index));
            }
        }

        let mut resolved = Vec::with_capacity(owners.len());
        for (word, owner) in owners.into_iter().enumerate() {
            match owner {
                Some(phrase) => resolved.push(phrase),
                None => return Err(ModelError::UncoveredWord { word }),
            }
        }
        Ok(resolved)
    }
}

fn is_sorted_subset(inner: &[WordIndex], outer: &[WordIndex]) -> bool {
    let mut outer_iter = outer.iter();
    'next_inner: for item in inner {
        for candidate in outer_iter.by_ref() {
            if candidate == item {
                continue 'next_inner;
            }
            if candidate > item {
                return false;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(index: usize) -> WordIndex {
        WordIndex::new(index)
    }

    fn p(index: usize) -> PhraseIndex {
        PhraseIndex::new(index)
    }

    /// "The dog runs ." with an NP under the root clause.
    fn sample_builder() -> TextBuilder {
        let mut builder = TextBuilder::new();
        let sentence = builder.begin_sentence("The dog runs.");
        let the = builder.add_word(sentence, "The", "the", "DT");
        let dog = builder.add_word(sentence, "dog", "dog", "NN");
        let runs = builder.add_word(sentence, "runs", "run", "VBZ");
        let dot = builder.add_word(sentence, ".", ".", ".");

        let np = builder.add_phrase(PhraseType::NounPhrase, vec![the, dog], vec![]);
        let s = builder.add_phrase(
            PhraseType::Sentence,
            vec![the, dog, runs, dot],
            vec![np],
        );
        builder.attach_phrase(sentence, s);
        builder.add_dependency(runs, dog, DependencyTag::NominalSubject);
        builder
    }

    #[test]
    fn test_builds_valid_snapshot() {
        let text = sample_builder().finish().expect("valid text");

        assert_eq!(text.len(), 4);
        assert_eq!(text.sentence(SentenceIndex::new(0)).words.len(), 4);
        assert_eq!(text.root_phrase(SentenceIndex::new(0)), p(1));

        // "The" and "dog" belong to the NP; "runs" and "." stay with the clause.
        assert_eq!(text.word(w(0)).phrase, p(0));
        assert_eq!(text.word(w(1)).phrase, p(0));
        assert_eq!(text.word(w(2)).phrase, p(1));
        assert_eq!(text.direct_words(p(1)), vec![w(2), w(3)]);
        assert_eq!(text.min_position(p(0)), Some(0));
        assert_eq!(
            text.dependencies().sources_of(w(1), DependencyTag::NominalSubject),
            vec![w(2)]
        );
    }

    #[test]
    fn test_rejects_empty_sentence() {
        let mut builder = TextBuilder::new();
        builder.begin_sentence("");
        assert_eq!(
            builder.finish().unwrap_err(),
            ModelError::EmptySentence { sentence: 0 }
        );
    }

    #[test]
    fn test_rejects_missing_root() {
        let mut builder = TextBuilder::new();
        let sentence = builder.begin_sentence("Hi.");
        builder.add_word(sentence, "Hi", "hi", "UH");
        assert_eq!(
            builder.finish().unwrap_err(),
            ModelError::MissingRoot { sentence: 0 }
        );
    }

    #[test]
    fn test_rejects_interleaved_sentences() {
        let mut builder = TextBuilder::new();
        let first = builder.begin_sentence("A.");
        let second = builder.begin_sentence("B.");
        let a = builder.add_word(second, "B", "b", "NN");
        let b = builder.add_word(first, "A", "a", "NN");
        let pa = builder.add_phrase(PhraseType::Fragment, vec![b], vec![]);
        let pb = builder.add_phrase(PhraseType::Fragment, vec![a], vec![]);
        builder.attach_phrase(first, pa);
        builder.attach_phrase(second, pb);
        assert_eq!(builder.finish().unwrap_err(), ModelError::OutOfOrderWords);
    }

    #[test]
    fn test_rejects_child_outside_parent() {
        let mut builder = TextBuilder::new();
        let sentence = builder.begin_sentence("a b");
        let a = builder.add_word(sentence, "a", "a", "NN");
        let b = builder.add_word(sentence, "b", "b", "NN");
        let inner = builder.add_phrase(PhraseType::NounPhrase, vec![a, b], vec![]);
        let outer = builder.add_phrase(PhraseType::Sentence, vec![a], vec![inner]);
        builder.attach_phrase(sentence, outer);
        // `b` is missing from the parent's contained set.
        assert_eq!(
            builder.finish().unwrap_err(),
            ModelError::ChildOutsideParent { parent: 1, child: 0 }
        );
    }

    #[test]
    fn test_rejects_contested_word() {
        let mut builder = TextBuilder::new();
        let sentence = builder.begin_sentence("a b");
        let a = builder.add_word(sentence, "a", "a", "NN");
        let b = builder.add_word(sentence, "b", "b", "NN");
        // Two sibling subtrees both claim `a` directly.
        let left = builder.add_phrase(PhraseType::NounPhrase, vec![a], vec![]);
        let right = builder.add_phrase(PhraseType::NounPhrase, vec![a, b], vec![]);
        let root = builder.add_phrase(PhraseType::Sentence, vec![a, b], vec![left, right]);
        builder.attach_phrase(sentence, root);
        assert_eq!(
            builder.finish().unwrap_err(),
            ModelError::ContestedWord { word: 0 }
        );
    }

    #[test]
    fn test_rejects_uncovered_word() {
        let mut builder = TextBuilder::new();
        let sentence = builder.begin_sentence("a b");
        let a = builder.add_word(sentence, "a", "a", "NN");
        builder.add_word(sentence, "b", "b", "NN");
        let root = builder.add_phrase(PhraseType::Sentence, vec![a], vec![]);
        builder.attach_phrase(sentence, root);
        assert_eq!(
            builder.finish().unwrap_err(),
            ModelError::UncoveredWord { word: 1 }
        );
    }

    #[test]
    fn test_rejects_doubly_attached_phrase() {
        let mut builder = TextBuilder::new();
        let sentence = builder.begin_sentence("a");
        let a = builder.add_word(sentence, "a", "a", "NN");
        let np = builder.add_phrase(PhraseType::NounPhrase, vec![a], vec![]);
        let root = builder.add_phrase(PhraseType::Sentence, vec![a], vec![np]);
        builder.attach_phrase(sentence, root);
        builder.attach_phrase(sentence, np);
        assert_eq!(
            builder.finish().unwrap_err(),
            ModelError::MisattachedPhrase { phrase: 0, count: 2 }
        );
    }

    #[test]
    fn test_rejects_edge_outside_text() {
        let mut builder = sample_builder();
        builder.add_dependency(w(0), w(9), DependencyTag::Conjunct);
        assert_eq!(
            builder.finish().unwrap_err(),
            ModelError::EdgeOutOfRange { src: 0, target: 9 }
        );
    }
}
