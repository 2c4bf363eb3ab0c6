/// Errors raised at the boundary of the parser.
///
/// Classification and the region scan are total over well-formed input;
/// these only report callers handing over something malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(
        "Invalid input sequence at position {position}: expected line {expected}, found line {found}"
    )]
    InvalidInputSequence {
        position: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unknown line category: {0}")]
    UnknownCategory(String),
}
