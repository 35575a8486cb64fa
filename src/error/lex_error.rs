/// Represents all errors that can occur while tokenizing a line.
///
/// Positions are zero-based character offsets into the line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexicalError {
    /// A character that starts no token.
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where the character appears in the line.
        position:  usize,
    },
    /// An integer literal that does not fit in a signed 64-bit integer.
    #[error("Integer literal {literal} at position {position} is too large")]
    IntegerTooLarge {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts in the line.
        position: usize,
    },
}
