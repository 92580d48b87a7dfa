use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The annotation engine produced a part-of-speech tag with no transport
/// equivalent. The word carrying it cannot appear in a [`crate::WordRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("part-of-speech tag '{0}' has no transport equivalent")]
pub struct UnknownPosTag(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dependency relation '{0}'")]
pub struct UnknownDependencyTag(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown constituent label '{0}'")]
pub struct UnknownPhraseLabel(pub String);

macro_rules! surface_tag_enum {
    (
        $(#[$outer:meta])*
        $vis:vis enum $name:ident ($err:ident) {
            $($variant:ident => $tag:literal,)+
        }
    ) => {
        $(#[$outer])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        $vis enum $name {
            $(#[serde(rename = $tag)] $variant,)+
        }

        impl $name {
            /// Every member of the closed set, in declared order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub const fn as_tag(self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }

            pub fn from_tag(tag: &str) -> Result<Self, $err> {
                match tag {
                    $($tag => Ok($name::$variant),)+
                    other => Err($err(other.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_tag())
            }
        }
    };
}

surface_tag_enum! {
    /// Penn Treebank part-of-speech tags carried by word records.
    ///
    /// This is the closed transport vocabulary. The annotation engine may use
    /// a richer tagset; words tagged outside this set are dropped during
    /// conversion, not coerced.
    pub enum PosTag (UnknownPosTag) {
        CoordinatingConjunction => "CC",
        CardinalNumber => "CD",
        Determiner => "DT",
        ExistentialThere => "EX",
        ForeignWord => "FW",
        Preposition => "IN",
        Adjective => "JJ",
        AdjectiveComparative => "JJR",
        AdjectiveSuperlative => "JJS",
        ListItemMarker => "LS",
        Modal => "MD",
        NounSingular => "NN",
        NounPlural => "NNS",
        ProperNounSingular => "NNP",
        ProperNounPlural => "NNPS",
        Predeterminer => "PDT",
        PossessiveEnding => "POS",
        PersonalPronoun => "PRP",
        PossessivePronoun => "PRP$",
        Adverb => "RB",
        AdverbComparative => "RBR",
        AdverbSuperlative => "RBS",
        Particle => "RP",
        Symbol => "SYM",
        To => "TO",
        Interjection => "UH",
        VerbBase => "VB",
        VerbPast => "VBD",
        VerbGerund => "VBG",
        VerbPastParticiple => "VBN",
        VerbNonThirdSingular => "VBP",
        VerbThirdSingular => "VBZ",
        WhDeterminer => "WDT",
        WhPronoun => "WP",
        PossessiveWhPronoun => "WP$",
        WhAdverb => "WRB",
        LeftBracket => "-LRB-",
        RightBracket => "-RRB-",
        SentenceCloser => ".",
        Comma => ",",
        MidSentencePunctuation => ":",
        OpenQuote => "``",
        CloseQuote => "''",
        Dollar => "$",
        PoundSign => "#",
    }
}

surface_tag_enum! {
    /// Universal-Dependencies-style relation tags.
    ///
    /// [`DependencyTag::ALL`] is the fixed enumeration order the dependency
    /// collector iterates; changing the declared order changes the order of
    /// dependency records inside every word record.
    pub enum DependencyTag (UnknownDependencyTag) {
        NominalSubject => "nsubj",
        Object => "obj",
        IndirectObject => "iobj",
        ClausalSubject => "csubj",
        ClausalComplement => "ccomp",
        OpenClausalComplement => "xcomp",
        Oblique => "obl",
        Vocative => "vocative",
        Expletive => "expl",
        Dislocated => "dislocated",
        AdverbialClause => "advcl",
        AdverbialModifier => "advmod",
        Discourse => "discourse",
        Auxiliary => "aux",
        Copula => "cop",
        Marker => "mark",
        NominalModifier => "nmod",
        Apposition => "appos",
        NumericModifier => "nummod",
        AdnominalClause => "acl",
        AdjectivalModifier => "amod",
        Determiner => "det",
        Classifier => "clf",
        Case => "case",
        Conjunct => "conj",
        Coordination => "cc",
        Fixed => "fixed",
        Flat => "flat",
        Compound => "compound",
        List => "list",
        Parataxis => "parataxis",
        Orphan => "orphan",
        Goeswith => "goeswith",
        Reparandum => "reparandum",
        Punctuation => "punct",
        Unspecified => "dep",
    }
}

surface_tag_enum! {
    /// Penn Treebank constituent labels for phrase nodes.
    pub enum PhraseType (UnknownPhraseLabel) {
        Root => "ROOT",
        Sentence => "S",
        SubordinateClause => "SBAR",
        DirectQuestion => "SBARQ",
        InvertedSentence => "SINV",
        YesNoQuestion => "SQ",
        AdjectivePhrase => "ADJP",
        AdverbPhrase => "ADVP",
        ConjunctionPhrase => "CONJP",
        Fragment => "FRAG",
        Interjection => "INTJ",
        ListMarker => "LST",
        NotAConstituent => "NAC",
        NounPhrase => "NP",
        NounPhraseHead => "NX",
        PrepositionalPhrase => "PP",
        Parenthetical => "PRN",
        ParticlePhrase => "PRT",
        QuantifierPhrase => "QP",
        ReducedRelativeClause => "RRC",
        UnlikeCoordination => "UCP",
        VerbPhrase => "VP",
        WhAdjectivePhrase => "WHADJP",
        WhAdverbPhrase => "WHADVP",
        WhNounPhrase => "WHNP",
        WhPrepositionalPhrase => "WHPP",
        Unknown => "X",
    }
}
