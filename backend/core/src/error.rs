use thiserror::Error;

/// Top-level error type for the Repricer engine.
///
/// Every variant is caught at the boundary nearest its origin and rendered
/// as a user-visible message; none of them is fatal to the process, and a
/// failed mutation never leaves the table partially written.
#[derive(Debug, Error)]
pub enum RepriceError {
    #[error("decode failed: {0}")]
    Decode(String),

    #[error("table has no '{0}' column")]
    MissingField(String),

    #[error("invalid mutation: {0}")]
    InvalidMutation(String),

    #[error("no table loaded")]
    NoTable,

    #[error("export failed: {0}")]
    Export(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
