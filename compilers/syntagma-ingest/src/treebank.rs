use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::map,
    multi::many0,
    sequence::preceded,
    IResult,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreebankError {
    #[error("malformed bracket tree near '{0}'")]
    Malformed(String),
    #[error("trailing input after the first tree: '{0}'")]
    TrailingInput(String),
    #[error("a node may contain either a single token or subtrees, not both")]
    MixedChildren,
    #[error("empty input")]
    Empty,
}

/// One node of a parsed bracket-notation constituency tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTree {
    /// `(<LABEL> <child> ...)` — a constituent with nested structure.
    Node {
        label: String,
        children: Vec<ParseTree>,
    },
    /// `(<POSTAG> <token>)` — a tagged word.
    Leaf { label: String, token: String },
}

impl ParseTree {
    pub fn label(&self) -> &str {
        match self {
            ParseTree::Node { label, .. } | ParseTree::Leaf { label, .. } => label,
        }
    }

    /// Leaves in left-to-right order, as `(label, token)` pairs.
    pub fn leaves(&self) -> Vec<(&str, &str)> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<(&'a str, &'a str)>) {
        match self {
            ParseTree::Leaf { label, token } => leaves.push((label, token)),
            ParseTree::Node { children, .. } => {
                for child in children {
                    child.collect_leaves(leaves);
                }
            }
        }
    }
}

#[derive(Debug)]
enum Item {
    Subtree(RawNode),
    Token(String),
}

#[derive(Debug)]
struct RawNode {
    label: String,
    items: Vec<Item>,
}

/// Anything except whitespace and brackets; brackets inside tokens arrive
/// pre-escaped by the engine (`-LRB-` / `-RRB-`).
fn symbol(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '(' && c != ')')(input)
}

fn node(input: &str) -> IResult<&str, RawNode> {
    let (input, _) = preceded(multispace0, char('('))(input)?;
    let (input, label) = preceded(multispace0, symbol)(input)?;
    let (input, items) = many0(preceded(
        multispace0,
        alt((
            map(node, Item::Subtree),
            map(symbol, |token| Item::Token(token.to_string())),
        )),
    ))(input)?;
    let (input, _) = preceded(multispace0, char(')'))(input)?;
    Ok((
        input,
        RawNode {
            label: label.to_string(),
            items,
        },
    ))
}

/// Parses exactly one bracket-notation tree.
pub fn parse(input: &str) -> Result<ParseTree, TreebankError> {
    if input.trim().is_empty() {
        return Err(TreebankError::Empty);
    }
    let (rest, raw) = node(input).map_err(|err| match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => TreebankError::Malformed(snippet(e.input)),
        nom::Err::Incomplete(_) => TreebankError::Malformed(snippet(input)),
    })?;
    let rest = rest.trim_start();
    if !rest.is_empty() {
        return Err(TreebankError::TrailingInput(snippet(rest)));
    }
    lower(raw)
}

fn lower(raw: RawNode) -> Result<ParseTree, TreebankError> {
    let RawNode { label, items } = raw;
    let mut children = Vec::with_capacity(items.len());
    let mut token = None;
    for item in items {
        match item {
            Item::Subtree(subtree) => children.push(lower(subtree)?),
            Item::Token(t) => {
                if token.is_some() {
                    return Err(TreebankError::MixedChildren);
                }
                token = Some(t);
            }
        }
    }
    match (token, children.is_empty()) {
        (Some(token), true) => Ok(ParseTree::Leaf { label, token }),
        (Some(_), false) => Err(TreebankError::MixedChildren),
        (None, _) => Ok(ParseTree::Node { label, children }),
    }
}

fn snippet(input: &str) -> String {
    input.chars().take(24).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_leaf() {
        assert_eq!(
            parse("(NN dog)"),
            Ok(ParseTree::Leaf {
                label: "NN".to_string(),
                token: "dog".to_string(),
            })
        );
    }

    #[test]
    fn test_parses_nested_tree() {
        let tree = parse("(ROOT (S (NP (DT The) (NN dog)) (VP (VBZ runs)) (. .)))")
            .expect("well-formed tree");

        assert_eq!(tree.label(), "ROOT");
        assert_eq!(
            tree.leaves(),
            vec![("DT", "The"), ("NN", "dog"), ("VBZ", "runs"), (".", ".")]
        );
    }

    #[test]
    fn test_tolerates_engine_whitespace() {
        // Pretty-printed output uses newlines and indentation.
        let tree = parse("(ROOT\n  (S\n    (NP (DT The) (NN dog))\n    (VP (VBZ runs))))")
            .expect("well-formed tree");
        assert_eq!(tree.leaves().len(), 4);
    }

    #[test]
    fn test_parses_degenerate_node() {
        assert_eq!(
            parse("(NP)"),
            Ok(ParseTree::Node {
                label: "NP".to_string(),
                children: vec![],
            })
        );
    }

    #[test]
    fn test_rejects_unbalanced_input() {
        assert!(matches!(
            parse("(S (NN dog)"),
            Err(TreebankError::Malformed(_))
        ));
        assert!(matches!(
            parse("(S (NN dog)))"),
            Err(TreebankError::TrailingInput(_))
        ));
    }

    #[test]
    fn test_rejects_mixed_children() {
        assert_eq!(
            parse("(S stray (NN dog))"),
            Err(TreebankError::MixedChildren)
        );
        assert_eq!(parse("(NN dog cat)"), Err(TreebankError::MixedChildren));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert_eq!(parse("   "), Err(TreebankError::Empty));
    }
}
