//! Error types for the color and gradient engine.

use crate::gradient::GradientType;

/// Result type alias for color and gradient operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the typed boundaries of the engine.
///
/// Malformed input inside a parse never produces an error on its own: the
/// in-place operations (`Color::from_css`, `Gradient::from_string`) report a
/// mismatch through their return value and leave a default representation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No registered color format recognized the input.
    #[error("Unrecognized color '{input}'")]
    UnrecognizedColor { input: String },

    /// The input is not a gradient function.
    #[error("Unrecognized gradient '{input}'")]
    UnrecognizedGradient { input: String },

    /// Unknown color format name.
    #[error("Unknown color format '{0}'")]
    UnknownFormat(String),

    /// Unknown gradient type keyword.
    #[error("Unknown gradient type '{0}'")]
    UnknownType(String),

    /// The gradient type is recognized but has no serializer.
    #[error("Serialization of {0} gradients is not supported")]
    UnsupportedType(GradientType),

    /// Configuration could not be deserialized.
    #[error("Invalid options: {message}")]
    InvalidOptions { message: String },
}

impl Error {
    /// Create an unrecognized color error.
    pub fn unrecognized_color(input: impl Into<String>) -> Self {
        Self::UnrecognizedColor {
            input: input.into(),
        }
    }

    /// Create an unrecognized gradient error.
    pub fn unrecognized_gradient(input: impl Into<String>) -> Self {
        Self::UnrecognizedGradient {
            input: input.into(),
        }
    }

    /// Create an unknown format error.
    pub fn unknown_format(name: impl Into<String>) -> Self {
        Self::UnknownFormat(name.into())
    }

    /// Create an unknown gradient type error.
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType(name.into())
    }

    /// Create an options error.
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_options(err.to_string())
    }
}
