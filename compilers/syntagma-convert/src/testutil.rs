//! Hand-built text snapshots shared by the conversion tests.

use std::ops::Range;

use syntagma_model::{PhraseIndex, Text, TextBuilder, WordIndex};
use syntagma_protocol::{DependencyTag, PhraseType};

/// Single sentence "The dog runs" as a flat clause with three tagged leaves.
pub(crate) fn flat_dog() -> Text {
    let mut builder = TextBuilder::new();
    let sentence = builder.begin_sentence("The dog runs");
    let the = builder.add_word(sentence, "The", "the", "DT");
    let dog = builder.add_word(sentence, "dog", "dog", "NN");
    let runs = builder.add_word(sentence, "runs", "run", "VBZ");
    let s = builder.add_phrase(PhraseType::Sentence, vec![the, dog, runs], vec![]);
    builder.attach_phrase(sentence, s);
    builder.finish().expect("valid text")
}

/// Six words a..f; the clause holds a..c directly and a verb phrase that owns
/// word f (position 5) directly next to a noun-phrase child starting at
/// position 3. Returns the verb phrase for direct linearization.
pub(crate) fn interleaved_verb_phrase() -> (Text, PhraseIndex) {
    let mut builder = TextBuilder::new();
    let sentence = builder.begin_sentence("a b c d e f");
    let words: Vec<WordIndex> = ["a", "b", "c", "d", "e", "f"]
        .iter()
        .map(|token| builder.add_word(sentence, *token, *token, "NN"))
        .collect();

    let np = builder.add_phrase(PhraseType::NounPhrase, vec![words[3], words[4]], vec![]);
    let vp = builder.add_phrase(
        PhraseType::VerbPhrase,
        vec![words[3], words[4], words[5]],
        vec![np],
    );
    let s = builder.add_phrase(PhraseType::Sentence, words.clone(), vec![vp]);
    builder.attach_phrase(sentence, s);
    let text = builder.finish().expect("valid text");
    (text, vp)
}

/// Two sentences with dependency edges:
/// "The dog runs ." and "It barks ." (7 words in total).
pub(crate) fn two_sentence_text() -> Text {
    let mut builder = TextBuilder::new();

    let first = builder.begin_sentence("The dog runs.");
    let the = builder.add_word(first, "The", "the", "DT");
    let dog = builder.add_word(first, "dog", "dog", "NN");
    let runs = builder.add_word(first, "runs", "run", "VBZ");
    let dot = builder.add_word(first, ".", ".", ".");
    let np = builder.add_phrase(PhraseType::NounPhrase, vec![the, dog], vec![]);
    let vp = builder.add_phrase(PhraseType::VerbPhrase, vec![runs], vec![]);
    let s1 = builder.add_phrase(PhraseType::Sentence, vec![the, dog, runs, dot], vec![np, vp]);
    builder.attach_phrase(first, s1);
    builder.add_dependency(dog, the, DependencyTag::Determiner);
    builder.add_dependency(runs, dog, DependencyTag::NominalSubject);
    builder.add_dependency(runs, dot, DependencyTag::Punctuation);

    let second = builder.begin_sentence("It barks.");
    let it = builder.add_word(second, "It", "it", "PRP");
    let barks = builder.add_word(second, "barks", "bark", "VBZ");
    let dot2 = builder.add_word(second, ".", ".", ".");
    let np2 = builder.add_phrase(PhraseType::NounPhrase, vec![it], vec![]);
    let vp2 = builder.add_phrase(PhraseType::VerbPhrase, vec![barks], vec![]);
    let s2 = builder.add_phrase(PhraseType::Sentence, vec![it, barks, dot2], vec![np2, vp2]);
    builder.attach_phrase(second, s2);
    builder.add_dependency(barks, it, DependencyTag::NominalSubject);
    builder.add_dependency(barks, dot2, DependencyTag::Punctuation);

    builder.finish().expect("valid text")
}

/// "Well - formed": the hyphen carries the engine-only tag HYPH, which has no
/// transport equivalent.
pub(crate) fn hyphenated_text() -> Text {
    let mut builder = TextBuilder::new();
    let sentence = builder.begin_sentence("Well - formed");
    let well = builder.add_word(sentence, "Well", "well", "UH");
    let hyphen = builder.add_word(sentence, "-", "-", "HYPH");
    let formed = builder.add_word(sentence, "formed", "form", "VBN");
    let frag = builder.add_phrase(PhraseType::Fragment, vec![well, hyphen, formed], vec![]);
    builder.attach_phrase(sentence, frag);
    builder.finish().expect("valid text")
}

/// One sentence of `word_count` words (w0..wN, all tagged NN) under a
/// pseudo-randomly nested but well-formed phrase tree: every subtree spans a
/// contiguous range, sibling spans are disjoint.
pub(crate) fn random_tree_text(word_count: usize, seed: u64) -> Text {
    let mut builder = TextBuilder::new();
    let raw: Vec<String> = (0..word_count).map(|i| format!("w{i}")).collect();
    let sentence = builder.begin_sentence(raw.join(" "));
    let words: Vec<WordIndex> = raw
        .iter()
        .map(|token| builder.add_word(sentence, token, token, "NN"))
        .collect();

    let mut rng = Lcg(seed | 1);
    let root = random_phrase(&mut builder, &words, 0..word_count, &mut rng, 4);
    builder.attach_phrase(sentence, root);
    builder.finish().expect("generated tree is well-formed")
}

// Splitmix-style generator; keeps fixtures reproducible per seed without
// pulling a rand dependency into the tests.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

fn random_phrase(
    builder: &mut TextBuilder,
    words: &[WordIndex],
    range: Range<usize>,
    rng: &mut Lcg,
    depth: usize,
) -> PhraseIndex {
    let contained = words[range.clone()].to_vec();
    if range.len() <= 1 || depth == 0 {
        return builder.add_phrase(PhraseType::NounPhrase, contained, vec![]);
    }

    // Cut the range into contiguous segments; each either nests as a child
    // subtree or stays as direct words of this phrase.
    let mut children = Vec::new();
    let mut start = range.start;
    while start < range.end {
        let remaining = range.end - start;
        let take = 1 + (rng.next() as usize % remaining);
        let whole_range = start == range.start && take == remaining;
        if !whole_range && rng.next() % 2 == 0 {
            children.push(random_phrase(builder, words, start..start + take, rng, depth - 1));
        }
        start += take;
    }
    builder.add_phrase(PhraseType::Sentence, contained, children)
}
