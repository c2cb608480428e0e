use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuiverError>;

/// Top-level error type for every container operation.
///
/// Parse and validation failures abort the whole operation before any
/// output is committed; I/O errors propagate unchanged from the OS.
#[derive(Debug, Error)]
pub enum QuiverError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl QuiverError {
    pub(crate) fn parse(line: usize, kind: ParseErrorKind) -> Self {
        QuiverError::Parse { line, kind }
    }
}

/// Framing violations detected during the single forward scan.
///
/// Every variant is reported together with the 1-based number of the
/// offending line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("Malformed QV_TAG header (expected exactly 'QV_TAG <tag>')")]
    MalformedHeader,
    #[error("Malformed QV_SCORE line: {reason}")]
    MalformedScore { reason: String },
    #[error("QV_SCORE tag '{found}' does not match entry tag '{expected}'")]
    TagMismatch { expected: String, found: String },
    #[error("Tag '{tag}' already appeared earlier in this stream")]
    DuplicateTag { tag: String },
    #[error("Entry '{tag}' has no body lines")]
    EmptyEntry { tag: String },
    #[error("Stream ended before entry '{tag}' received a body")]
    UnexpectedEndOfStream { tag: String },
}

/// Constraint violations on otherwise well-formed data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid tag '{value}': {reason}")]
    InvalidTag { value: String, reason: &'static str },
    #[error("Expected {expected} replacement tags, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Tag '{tag}' does not exist in this container")]
    UnknownTag { tag: String },
    #[error("Tag '{tag}' already exists in this container")]
    DuplicateTag { tag: String },
    #[error("Replacement tag '{tag}' given more than once")]
    DuplicateTargetTag { tag: String },
    #[error("Chunk size must be a positive integer")]
    InvalidChunkSize,
    #[error("No score lines found in container")]
    NoScores,
}
