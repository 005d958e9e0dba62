use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The host could not report a usable size; the pass is skipped and
    /// retried on the next trigger.
    #[error("container size unavailable: {reason}")]
    SizeUnavailable { reason: String },
}

impl ChartError {
    /// Returns `true` for failures that a later render pass may recover from.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::SizeUnavailable { .. })
    }
}
