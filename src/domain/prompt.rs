//! Detection instruction assembly.

use minijinja::{Environment, UndefinedBehavior, context};

use super::AppError;

/// Instruction sent to the text-generation service for placeholder
/// detection. The response format is free text; it is surfaced to the user
/// verbatim rather than parsed.
const DETECTION_INSTRUCTION: &str = "\
You are a smart assistant. A user gives you a blurb with missing qualitative or quantitative data.
Your job is to rewrite the blurb with clear placeholder tags of the form <LABEL> and produce a JSON list describing each missing piece.

Blurb:
{{ blurb }}

Return output in this format:
---
[JSON]
---
Rewritten blurb:
";

/// Render the detection instruction for a blurb.
pub fn detection_instruction(blurb: &str) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.template_from_str(DETECTION_INSTRUCTION)
        .and_then(|template| template.render(context! { blurb }))
        .map_err(|e| AppError::InstructionRender(e.to_string()))
}
