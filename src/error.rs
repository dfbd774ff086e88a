use std::io;

/// Errors raised while printing the demonstrations.
///
/// The patterns themselves are total; only the output side can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write demo output: {0}")]
    Output(#[from] io::Error),
    #[error("failed to encode order as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
