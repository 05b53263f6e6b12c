use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("index {index} is outside a sequence of {len} panels")]
    OutOfRange { index: usize, len: usize },
    #[error("a sequence needs at least one panel")]
    EmptySequence,
}
