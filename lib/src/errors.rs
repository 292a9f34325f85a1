use thiserror::Error;

/// Result type returned from functions that can have our `Error`s.
pub type Result<T, E = LightError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LightError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("curve domain endpoints must differ")]
    DegenerateDomain,

    #[error("minimum brightness floor must be at least 1")]
    ZeroFloor,

    #[error("invalid brightness range: {min} is not below {max}")]
    InvalidRange { min: u32, max: u32 },

    #[error("raw brightness 0 cannot be mapped to a percentage")]
    NonPositiveBrightness,

    #[error("{0}")]
    Other(String),
}

pub(crate) trait ResultExt<T, E> {
    fn error(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for std::result::Result<T, E> {
    fn error(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| LightError::Other(format!("{}: {}", message.into(), e)))
    }
}
