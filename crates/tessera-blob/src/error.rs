/// Errors from blob kind encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlobError {
    /// The kind is not one of the persistable kinds, or the input is not a
    /// recognized kind token.
    #[error("unknown blob type: {0}")]
    UnknownBlobKind(String),
}

/// Result alias for blob operations.
pub type BlobResult<T> = Result<T, BlobError>;
