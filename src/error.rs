//! Error types for zero-width encoding.

use thiserror::Error;

/// Invalid input handed to the codec.
///
/// Every failure is tied to a single call; nothing partial is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZwError {
    /// The message holds a character outside printable ASCII (0x20..=0x7e).
    #[error("Message contains non-ASCII character: {character:?} (at position {position})")]
    NonAsciiCharacter {
        /// The rejected character.
        character: char,
        /// Its position in the message, counted in characters.
        position: usize,
    },

    /// The marker sequence cannot be split into whole codewords.
    #[error("The message isn't Zero-width encoded: {len} markers is not a multiple of 3")]
    InvalidLength {
        /// Number of marker symbols found.
        len: usize,
    },

    /// A 3-marker chunk is not in the codebook.
    #[error("The message isn't Zero-width encoded: unknown codeword at chunk {index}")]
    UnknownCodeword {
        /// Zero-based chunk index.
        index: usize,
    },
}
