//! Detect command implementation.

use crate::app::AppContext;
use crate::domain::{AppError, detection_instruction};
use crate::ports::TextGenerator;

/// Outcome of a detection request.
#[derive(Debug, Clone)]
pub struct DetectOutcome {
    /// The instruction sent to the service.
    pub instruction: String,
    /// Raw service response, unparsed.
    pub response: String,
}

/// Render the detection instruction for a blurb without contacting the
/// service.
pub fn instruction(blurb: &str) -> Result<String, AppError> {
    let trimmed = blurb.trim();
    if trimmed.is_empty() {
        return Err(AppError::EmptyBlurb);
    }
    detection_instruction(trimmed)
}

/// Run placeholder detection: send the instruction, return the raw response.
///
/// The response is handed back verbatim; interpreting the placeholder list
/// inside it is left to the reader.
pub fn execute<G: TextGenerator>(
    ctx: &AppContext<G>,
    blurb: &str,
) -> Result<DetectOutcome, AppError> {
    let instruction = instruction(blurb)?;
    let response = ctx.generator().generate(&instruction)?;
    Ok(DetectOutcome { instruction, response })
}
