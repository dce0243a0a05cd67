// crates/shared-kernel/src/value_objects/counts.rs
use serde::{Deserialize, Serialize};

/// Defines a non-negative count newtype over `usize`.
///
/// Every statistic produced by the analyzer is one of these; they serialize
/// as plain integers.
macro_rules! count_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            pub const ZERO: Self = Self(0);

            #[inline]
            pub const fn new(value: usize) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn zero() -> Self {
                Self::ZERO
            }

            #[inline]
            pub const fn value(self) -> usize {
                self.0
            }

            #[inline]
            pub const fn is_zero(self) -> bool {
                self.0 == 0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ZERO
            }
        }
    };
}

count_type! {
    /// Number of Unicode code points.
    CharCount
}

count_type! {
    /// Number of words produced by the dual-script tokenizer.
    WordCount
}

count_type! {
    /// Number of lines (newline count + 1 for non-empty text).
    LineCount
}

count_type! {
    /// Number of non-blank sentences.
    SentenceCount
}

count_type! {
    /// Number of blank-line separated paragraphs.
    ParagraphCount
}

mod display {
    use std::fmt;

    use super::{CharCount, LineCount, ParagraphCount, SentenceCount, WordCount};

    macro_rules! display_count {
        ($($name:ident),+) => {
            $(
                impl fmt::Display for $name {
                    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        write!(f, "{}", self.value())
                    }
                }
            )+
        };
    }

    display_count!(CharCount, WordCount, LineCount, SentenceCount, ParagraphCount);
}
