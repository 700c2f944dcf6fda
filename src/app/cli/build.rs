//! Interactive build flow.

use dialoguer::Select;

use crate::app::commands::build::{self, BuildOptions};
use crate::domain::{AppError, Label, Selection, Session, VerificationRecord};

use super::ChoiceMode;

pub(super) fn run_build(
    template: Option<String>,
    labels: Option<String>,
    choose: ChoiceMode,
) -> Result<(), AppError> {
    let labels = labels.as_deref().map(Label::parse_list).transpose()?.unwrap_or_default();
    let options = BuildOptions { template, labels };

    let mut session = Session::new();
    let outcome = build::draft(&mut session, &options)?;

    println!("=== Template ===");
    println!("{}", outcome.template);
    println!();

    println!("=== Declared placeholders ===");
    for spec in session.specs() {
        println!("  {}: {}", spec.label, spec.semantics);
    }
    println!();

    println!("=== Draft storyboard (simulated values) ===");
    println!("{}", outcome.draft);

    println!("=== Verifier findings ===");
    for record in outcome.records.iter().filter(|record| !record.agrees) {
        println!(
            "  {}: {} disputed, verifier suggests {}",
            record.label, record.original, record.suggested
        );
    }
    println!();

    let selections = collect_selections(&outcome.records, choose)?;
    let final_outcome = build::finalize(&mut session, &selections)?;

    println!("=== Final storyboard ===");
    println!("{}", final_outcome.storyboard);

    println!("Resolved blurb: {}", final_outcome.resolved);
    println!("Chosen values:");
    for placeholder in &final_outcome.placeholders {
        println!("  {} = {} ({})", placeholder.label, placeholder.value, placeholder.provenance);
    }
    Ok(())
}

/// Gather one selection per record, prompting unless a fixed answer was
/// requested on the command line.
fn collect_selections(
    records: &[VerificationRecord],
    choose: ChoiceMode,
) -> Result<Vec<(Label, Selection)>, AppError> {
    records
        .iter()
        .map(|record| {
            let selection = match choose {
                ChoiceMode::Original => Selection::Original,
                ChoiceMode::Suggested => Selection::Suggested,
                ChoiceMode::Ask => prompt_selection(record)?,
            };
            Ok((record.label.clone(), selection))
        })
        .collect()
}

fn prompt_selection(record: &VerificationRecord) -> Result<Selection, AppError> {
    let items = [record.original.as_str(), record.suggested.as_str()];
    let picked = Select::new()
        .with_prompt(format!("Choose value for {}", record.label))
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| AppError::Interactive(e.to_string()))?;

    Ok(if picked == 0 { Selection::Original } else { Selection::Suggested })
}
