use std::io;

use thiserror::Error;

/// Library-wide error type for factboard operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration value failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// The text-generation credential is not set.
    #[error("OPENAI_API_KEY environment variable not set")]
    MissingApiKey,

    /// Placeholder label is invalid.
    #[error(
        "Invalid placeholder label '{0}': must be uppercase alphanumeric with underscores, starting with a letter"
    )]
    InvalidLabel(String),

    /// Request to the text-generation service failed before a response arrived.
    #[error("Text generation request failed: {0}")]
    Request(String),

    /// The text-generation service answered with a non-success status.
    #[error("Text generation API error ({status}): {details}")]
    Api { status: u16, details: String },

    /// The completion envelope could not be interpreted.
    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    /// Failed to render the detection instruction template.
    #[error("Failed to render detection instruction: {0}")]
    InstructionRender(String),

    /// Session operation attempted in the wrong state.
    #[error("Cannot {action} while the session is {state}")]
    InvalidTransition { state: &'static str, action: &'static str },

    /// Finalization requested before every placeholder has a selection.
    #[error("No value selected for placeholder '{0}'")]
    MissingSelection(String),

    /// A selection referenced a label outside the declared set.
    #[error("Unknown placeholder label '{0}' for this detection run")]
    UnknownLabel(String),

    /// Interactive prompt failed (terminal unavailable or closed).
    #[error("Interactive prompt failed: {0}")]
    Interactive(String),

    /// Blurb input is empty.
    #[error("Blurb is empty; provide text as an argument, via --file, or at the prompt")]
    EmptyBlurb,
}
