macro_rules! define_index {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)] // Ensure it has the same layout as u32
        pub struct $name(u32);

        impl $name {
            pub const fn new(index: usize) -> Self {
                Self(index as u32)
            }

            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

define_index!(
    WordIndex,
    "Position of a word in the text's word table; equals its 0-based document position."
);
define_index!(SentenceIndex, "Position of a sentence in the text's sentence table.");
define_index!(PhraseIndex, "Position of a phrase in the text's phrase table.");
