//! CLI error types.

use thiserror::Error;

pub type SplitResult<T> = Result<T, SplitError>;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("Media error: {0}")]
    Media(#[from] tracksplit_media::MediaError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SplitError {
    /// Diagnostic output of a failed collaborator run, if this error
    /// carries one. Surfaced verbatim before the process terminates.
    pub fn collaborator_stderr(&self) -> Option<&str> {
        match self {
            Self::Media(tracksplit_media::MediaError::FfmpegFailed { stderr, .. }) => {
                stderr.as_deref()
            }
            Self::Media(tracksplit_media::MediaError::FfprobeFailed { stderr, .. }) => {
                stderr.as_deref()
            }
            _ => None,
        }
    }
}
