use std::collections::VecDeque;

use syntagma_model::{PhraseIndex, Text, WordIndex};

const TREE_OPEN_BRACKET: char = '(';
const TREE_CLOSE_BRACKET: char = ')';
const TREE_SEPARATOR: char = ' ';

/// Renders the bracket-notation constituency tree of one phrase subtree.
///
/// The model does not store how a phrase's direct words interleave with its
/// child phrases, so the order is reconstructed by merging two
/// position-sorted queues: the next element is the direct word while its
/// position is strictly smaller than the head child's minimum contained
/// position, otherwise the head child. A subtree occupies the span starting
/// at its smallest contained position, so for well-formed trees this
/// recovers the original sentence order exactly.
pub fn linearize(text: &Text, phrase: PhraseIndex) -> String {
    let mut rendered = String::new();
    subtree(text, phrase, &mut rendered);
    rendered
}

fn subtree(text: &Text, phrase: PhraseIndex, out: &mut String) {
    let mut words: VecDeque<WordIndex> = text.direct_words(phrase).into();
    let mut sorted_children: Vec<PhraseIndex> = text.phrase(phrase).children.clone();
    sorted_children.sort_by_key(|&child| text.min_position(child).unwrap_or(usize::MAX));
    let mut children: VecDeque<PhraseIndex> = sorted_children.into();

    out.push(TREE_OPEN_BRACKET);
    out.push_str(text.phrase(phrase).tag.as_tag());
    loop {
        let word_next = match (words.front(), children.front()) {
            (None, None) => break,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (Some(&word), Some(&child)) => {
                word.index() < text.min_position(child).unwrap_or(usize::MAX)
            }
        };
        out.push(TREE_SEPARATOR);
        if word_next {
            if let Some(word) = words.pop_front() {
                leaf(text, word, out);
            }
        } else if let Some(child) = children.pop_front() {
            subtree(text, child, out);
        }
    }
    out.push(TREE_CLOSE_BRACKET);
}

/// Leaves carry the engine's raw part-of-speech label. A word whose label
/// has no transport equivalent still shows up here even though its word
/// record is dropped; the tree is rendered from the model alone.
fn leaf(text: &Text, word: WordIndex, out: &mut String) {
    let word = text.word(word);
    out.push(TREE_OPEN_BRACKET);
    out.push_str(&word.pos);
    out.push(TREE_SEPARATOR);
    out.push_str(&word.text);
    out.push(TREE_CLOSE_BRACKET);
}
