use thiserror::Error;

/// Identifier validation failures raised when constructing triple terms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    #[error("empty identifier")]
    Empty,

    #[error("identifier contains forbidden character {0:?}")]
    ForbiddenChar(char),

    #[error("malformed prefixed name: {0}")]
    MalformedPrefixed(String),
}
