//! Text-generation service port definition.

use crate::domain::AppError;

/// Port for the external text-generation service.
pub trait TextGenerator {
    /// Send one instruction and return the raw textual response.
    fn generate(&self, instruction: &str) -> Result<String, AppError>;
}

/// Scripted generator for exercising flows without API calls.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTextGenerator {
    response: String,
}

impl ScriptedTextGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self { response: response.into() }
    }
}

impl TextGenerator for ScriptedTextGenerator {
    fn generate(&self, _instruction: &str) -> Result<String, AppError> {
        Ok(self.response.clone())
    }
}
