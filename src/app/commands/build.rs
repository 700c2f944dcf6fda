//! Correction pipeline implementation.

use crate::domain::{
    AppError, Label, Placeholder, PlaceholderSpec, Selection, Session, Storyboard, Template,
    VerificationRecord, demo_detection,
};

/// Inputs for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Pre-tagged template; `None` uses the built-in demonstration template.
    pub template: Option<String>,
    /// Declared labels for a user-supplied template.
    pub labels: Vec<Label>,
}

/// Pipeline state at the point where human choices are needed.
#[derive(Debug, Clone)]
pub struct DraftOutcome {
    /// Template text the run started from.
    pub template: String,
    /// Blurb with every marker replaced by its simulated value.
    pub filled: String,
    /// Draft storyboard composed from the filled blurb.
    pub draft: Storyboard,
    /// Verifier findings, one per declared label.
    pub records: Vec<VerificationRecord>,
}

/// Result of finalization.
#[derive(Debug, Clone)]
pub struct FinalOutcome {
    /// Blurb with every marker replaced by its chosen value.
    pub resolved: String,
    /// Storyboard composed from the resolved blurb.
    pub storyboard: Storyboard,
    /// Placeholders with their chosen values and provenance.
    pub placeholders: Vec<Placeholder>,
}

/// Start a run: detect, fill, compose the draft, and simulate verification.
pub fn draft(session: &mut Session, options: &BuildOptions) -> Result<DraftOutcome, AppError> {
    let (template, specs) = match &options.template {
        Some(text) => {
            let specs = options
                .labels
                .iter()
                .cloned()
                .map(|label| PlaceholderSpec::new(label, "user-declared placeholder"))
                .collect();
            (Template::new(text.clone()), specs)
        }
        None => demo_detection(),
    };

    let template_text = template.as_str().to_string();
    session.detect(template, specs);
    let (filled, draft) = session.compose_draft()?;
    let records = session.verify()?;

    Ok(DraftOutcome { template: template_text, filled, draft, records })
}

/// Apply the selections and compose the final storyboard.
pub fn finalize(
    session: &mut Session,
    selections: &[(Label, Selection)],
) -> Result<FinalOutcome, AppError> {
    for (label, selection) in selections {
        session.select(label, *selection)?;
    }
    let (resolved, storyboard) = session.finalize()?;
    Ok(FinalOutcome { resolved, storyboard, placeholders: session.placeholders().to_vec() })
}
