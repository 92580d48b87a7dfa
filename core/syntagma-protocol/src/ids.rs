use core::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident, $ctor:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)] // Ensure it has the same layout as u64
        pub struct $name(pub u64);

        impl $name {
            /// Derives the 1-based external value from the 0-based model index.
            pub const fn $ctor(index: usize) -> Self {
                Self(index as u64 + 1)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    WordId,
    from_position,
    "1-based identifier of a word, derived from its 0-based position in document order."
);
define_id!(
    SentenceNo,
    from_index,
    "1-based number of a sentence, derived from its 0-based index in the text."
);
