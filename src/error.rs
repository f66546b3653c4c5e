//! Error type shared by input loading, size resolution and rendering.

use thiserror::Error;

/// Everything that can go wrong between reading the input and writing the page.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The input document parsed but does not describe a valid envelope.
    #[error("input data malformed: {0}")]
    InvalidInput(String),

    #[error("input is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Size token is neither a known code nor a `WxH` dimension string.
    #[error("cannot parse envelope size {token:?}: {reason}")]
    SizeParse { token: String, reason: String },

    #[error("unknown font face {0:?}")]
    UnknownFont(String),

    #[error("font size must be a positive number of points, got {0}")]
    InvalidFontSize(f64),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = EnvelopeError> = std::result::Result<T, E>;
