use syntagma_model::{Sentence, SentenceIndex, Text, WordIndex};
use syntagma_protocol::{PosTag, SentenceNo, SentenceRecord, TextRecord, WordId, WordRecord};

use crate::collect::collect;
use crate::linearize::linearize;

/// Converts one annotated-text snapshot into its transport record tree.
///
/// Total for any snapshot the model builder accepts. The only per-word
/// fallout is a part-of-speech label outside the transport tagset: that
/// word's record is dropped from its sentence and nothing else changes —
/// surviving words keep their position-derived ids.
pub fn convert(text: &Text) -> TextRecord {
    TextRecord {
        sentences: text
            .sentences()
            .map(|(index, sentence)| sentence_record(text, index, sentence))
            .collect(),
    }
}

fn sentence_record(text: &Text, index: SentenceIndex, sentence: &Sentence) -> SentenceRecord {
    SentenceRecord {
        sentence_no: SentenceNo::from_index(index.index()),
        text: sentence.text.clone(),
        words: sentence
            .words
            .iter()
            .filter_map(|&word| word_record(text, word))
            .collect(),
        constituency_tree: linearize(text, text.root_phrase(index)),
    }
}

fn word_record(text: &Text, index: WordIndex) -> Option<WordRecord> {
    let word = text.word(index);
    let pos_tag = match PosTag::from_tag(&word.pos) {
        Ok(tag) => tag,
        Err(err) => {
            tracing::debug!(%err, word = %word.text, "dropping word from record output");
            return None;
        }
    };
    let (incoming, outgoing) = collect(text, index);
    Some(WordRecord {
        id: WordId::from_position(index.index()),
        text: word.text.clone(),
        lemma: word.lemma.clone(),
        pos_tag,
        sentence_no: SentenceNo::from_index(word.sentence.index()),
        incoming_dependencies: incoming,
        outgoing_dependencies: outgoing,
    })
}
