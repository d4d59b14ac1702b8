use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WrapError {
    #[error("wrap tracker not initialized: screen bounds have not been set")]
    NotInitialized,
    #[error("invalid screen bounds: width={width}, height={height} (both must be finite and > 0)")]
    InvalidBounds { width: f32, height: f32 },
    #[error("screen bounds need an orthographic camera projection")]
    UnsupportedProjection,
    #[error("no primary ship entity to track")]
    MissingPrimary,
}
