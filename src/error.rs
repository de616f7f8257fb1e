use thiserror::Error;

/// Errors raised while configuring a seek bar.
///
/// Geometry problems are never reported here: narrow or short bounds are
/// clamped and the bar still paints.
#[derive(Debug, Error)]
pub enum SeekBarError {
    /// `max` must be finite and greater than zero, otherwise progress has no
    /// pixel position.
    #[error("invalid max {0}: must be finite and greater than zero")]
    InvalidMax(f64),
    #[error("invalid progress {0}: must be finite")]
    InvalidProgress(f64),
    #[error("failed to parse seek bar attributes: {0}")]
    Attributes(#[from] serde_json::Error),
}
