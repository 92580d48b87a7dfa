use syntagma_model::{ModelError, PhraseIndex, Text, TextBuilder, WordIndex};
use syntagma_protocol::{DependencyTag, PhraseType, UnknownPhraseLabel};
use thiserror::Error;

use crate::document::{AnnotatedDocument, AnnotatedSentence, AnnotatedToken};
use crate::treebank::{self, ParseTree, TreebankError};

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("sentence {sentence}: {source}")]
    Parse {
        sentence: usize,
        source: TreebankError,
    },
    #[error("sentence {sentence}: {source}")]
    Label {
        sentence: usize,
        source: UnknownPhraseLabel,
    },
    #[error("sentence {sentence}: constituency tree has {leaves} leaves for {tokens} tokens")]
    LeafMismatch {
        sentence: usize,
        leaves: usize,
        tokens: usize,
    },
    #[error("sentence {sentence}: constituency parse is a bare leaf")]
    LeafRoot { sentence: usize },
    #[error("sentence {sentence}: dependency endpoint {index} is outside the sentence")]
    DependencyOutOfRange { sentence: usize, index: usize },
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Assembles the arena text model from one engine response.
pub fn build_text(document: &AnnotatedDocument) -> Result<Text, AssemblyError> {
    let mut builder = TextBuilder::new();
    for (index, sentence) in document.sentences.iter().enumerate() {
        build_sentence(&mut builder, index, sentence)?;
    }
    Ok(builder.finish()?)
}

fn build_sentence(
    builder: &mut TextBuilder,
    index: usize,
    sentence: &AnnotatedSentence,
) -> Result<(), AssemblyError> {
    let handle = builder.begin_sentence(sentence_text(&sentence.tokens));
    let words: Vec<WordIndex> = sentence
        .tokens
        .iter()
        .map(|token| builder.add_word(handle, &token.word, &token.lemma, &token.pos))
        .collect();

    let tree = treebank::parse(&sentence.parse).map_err(|source| AssemblyError::Parse {
        sentence: index,
        source,
    })?;
    let leaves = tree.leaves().len();
    if leaves != words.len() {
        return Err(AssemblyError::LeafMismatch {
            sentence: index,
            leaves,
            tokens: words.len(),
        });
    }

    let root = match &tree {
        ParseTree::Leaf { .. } => return Err(AssemblyError::LeafRoot { sentence: index }),
        ParseTree::Node { label, children } => {
            let mut cursor = 0usize;
            add_phrases(builder, index, label, children, &words, &mut cursor)?
        }
    };
    builder.attach_phrase(handle, root);

    for dependency in &sentence.basic_dependencies {
        // Governor 0 is the virtual root; the root relation is not an edge
        // between two words.
        if dependency.governor == 0 {
            continue;
        }
        let tag = match DependencyTag::from_tag(base_relation(&dependency.dep)) {
            Ok(tag) => tag,
            Err(err) => {
                tracing::debug!(%err, "skipping dependency with unknown relation");
                continue;
            }
        };
        let source = word_at(&words, dependency.governor, index)?;
        let target = word_at(&words, dependency.dependent, index)?;
        builder.add_dependency(source, target, tag);
    }
    Ok(())
}

/// Registers the phrase subtree bottom-up. Leaves consume token positions in
/// order; the tokens themselves stay authoritative for text and tags.
fn add_phrases(
    builder: &mut TextBuilder,
    sentence: usize,
    label: &str,
    children: &[ParseTree],
    words: &[WordIndex],
    cursor: &mut usize,
) -> Result<PhraseIndex, AssemblyError> {
    let tag = PhraseType::from_tag(label).map_err(|source| AssemblyError::Label {
        sentence,
        source,
    })?;
    let start = *cursor;
    let mut child_phrases = Vec::new();
    for child in children {
        match child {
            ParseTree::Leaf { .. } => *cursor += 1,
            ParseTree::Node { label, children } => {
                child_phrases.push(add_phrases(builder, sentence, label, children, words, cursor)?);
            }
        }
    }
    let contained = words[start..*cursor].to_vec();
    Ok(builder.add_phrase(tag, contained, child_phrases))
}

/// Subtyped relations like `nmod:poss` collapse to their base relation.
fn base_relation(dep: &str) -> &str {
    dep.split(':').next().unwrap_or(dep)
}

fn word_at(
    words: &[WordIndex],
    index_1based: usize,
    sentence: usize,
) -> Result<WordIndex, AssemblyError> {
    index_1based
        .checked_sub(1)
        .and_then(|index| words.get(index))
        .copied()
        .ok_or(AssemblyError::DependencyOutOfRange {
            sentence,
            index: index_1based,
        })
}

/// The raw sentence text, rebuilt from the tokens' surface forms and the
/// whitespace the tokenizer recorded between them.
fn sentence_text(tokens: &[AnnotatedToken]) -> String {
    let mut text = String::new();
    for (index, token) in tokens.iter().enumerate() {
        text.push_str(token.original_text.as_deref().unwrap_or(&token.word));
        if index + 1 < tokens.len() {
            text.push_str(token.after.as_deref().unwrap_or(" "));
        }
    }
    text
}
