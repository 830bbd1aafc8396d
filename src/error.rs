use std::fmt;

/// Reasons a canvas could not get a drawing surface.
#[derive(Debug, Clone)]
pub enum MountError {
    /// No GPU context could be created on this platform.
    ContextUnavailable(String),
    /// The context exists but cannot present to the given window.
    SurfaceUnavailable(String),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::ContextUnavailable(msg) => {
                write!(f, "rendering context unavailable: {}", msg)
            }
            MountError::SurfaceUnavailable(msg) => {
                write!(f, "surface unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for MountError {}
