//! Session state machine for one interactive correction run.

use std::collections::BTreeMap;
use std::mem;

use super::error::AppError;
use super::label::Label;
use super::placeholder::{Placeholder, PlaceholderSpec, Provenance};
use super::storyboard::Storyboard;
use super::template::Template;
use super::verification::{Selection, VerificationRecord, simulate_verification};

/// Phase of a correction run.
///
/// Transitions only move forward; a new detection restarts from `Idle` and
/// discards the prior run's placeholder set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Detected,
    DraftComposed,
    Verified,
    AwaitingChoices,
    Finalized,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Detected => "detected",
            Phase::DraftComposed => "draft-composed",
            Phase::Verified => "verified",
            Phase::AwaitingChoices => "awaiting-choices",
            Phase::Finalized => "finalized",
        }
    }
}

#[derive(Debug)]
enum State {
    Idle,
    Detected {
        template: Template,
        specs: Vec<PlaceholderSpec>,
        placeholders: Vec<Placeholder>,
    },
    DraftComposed {
        template: Template,
        specs: Vec<PlaceholderSpec>,
        placeholders: Vec<Placeholder>,
    },
    Verified {
        template: Template,
        specs: Vec<PlaceholderSpec>,
        placeholders: Vec<Placeholder>,
        records: Vec<VerificationRecord>,
    },
    AwaitingChoices {
        template: Template,
        specs: Vec<PlaceholderSpec>,
        placeholders: Vec<Placeholder>,
        records: Vec<VerificationRecord>,
        selections: BTreeMap<Label, Selection>,
    },
    Finalized {
        placeholders: Vec<Placeholder>,
        resolved: String,
        storyboard: Storyboard,
    },
}

fn phase_of(state: &State) -> Phase {
    match state {
        State::Idle => Phase::Idle,
        State::Detected { .. } => Phase::Detected,
        State::DraftComposed { .. } => Phase::DraftComposed,
        State::Verified { .. } => Phase::Verified,
        State::AwaitingChoices { .. } => Phase::AwaitingChoices,
        State::Finalized { .. } => Phase::Finalized,
    }
}

/// One interactive correction run, from detection to the final storyboard.
///
/// Owned by the interactive surface; nothing here outlives the process.
#[derive(Debug)]
pub struct Session {
    state: State,
}

impl Session {
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    pub fn phase(&self) -> Phase {
        phase_of(&self.state)
    }

    /// Declared specs for the current run, in declaration order.
    pub fn specs(&self) -> &[PlaceholderSpec] {
        match &self.state {
            State::Idle | State::Finalized { .. } => &[],
            State::Detected { specs, .. }
            | State::DraftComposed { specs, .. }
            | State::Verified { specs, .. }
            | State::AwaitingChoices { specs, .. } => specs,
        }
    }

    /// Declared labels for the current run, in declaration order.
    pub fn labels(&self) -> Vec<Label> {
        self.specs().iter().map(|spec| spec.label.clone()).collect()
    }

    /// Placeholders for the current run with their current values.
    pub fn placeholders(&self) -> &[Placeholder] {
        match &self.state {
            State::Idle => &[],
            State::Detected { placeholders, .. }
            | State::DraftComposed { placeholders, .. }
            | State::Verified { placeholders, .. }
            | State::AwaitingChoices { placeholders, .. }
            | State::Finalized { placeholders, .. } => placeholders,
        }
    }

    /// Accept a detection result, discarding any prior run entirely.
    pub fn detect(&mut self, template: Template, specs: Vec<PlaceholderSpec>) {
        let placeholders =
            specs.iter().map(|spec| Placeholder::declared(spec.label.clone())).collect();
        self.state = State::Detected { template, specs, placeholders };
    }

    /// Fill every marker with its simulated value and compose the draft
    /// storyboard. Returns the filled blurb and the draft.
    pub fn compose_draft(&mut self) -> Result<(String, Storyboard), AppError> {
        match mem::replace(&mut self.state, State::Idle) {
            State::Detected { template, specs, placeholders } => {
                let labels: Vec<Label> = specs.iter().map(|spec| spec.label.clone()).collect();
                let filled = template.fill(&labels);
                let draft = Storyboard::compose(&filled);
                let placeholders = placeholders
                    .into_iter()
                    .map(|placeholder| Placeholder::simulated(placeholder.label))
                    .collect();
                self.state = State::DraftComposed { template, specs, placeholders };
                Ok((filled, draft))
            }
            other => Err(self.reject(other, "compose the draft storyboard")),
        }
    }

    /// Run the simulated verifier over the declared labels.
    pub fn verify(&mut self) -> Result<Vec<VerificationRecord>, AppError> {
        match mem::replace(&mut self.state, State::Idle) {
            State::DraftComposed { template, specs, placeholders } => {
                let labels: Vec<Label> = specs.iter().map(|spec| spec.label.clone()).collect();
                let records = simulate_verification(&labels);
                self.state =
                    State::Verified { template, specs, placeholders, records: records.clone() };
                Ok(records)
            }
            other => Err(self.reject(other, "run verification")),
        }
    }

    /// Record a human choice for one placeholder.
    pub fn select(&mut self, label: &Label, selection: Selection) -> Result<(), AppError> {
        match mem::replace(&mut self.state, State::Idle) {
            State::Verified { template, specs, placeholders, records } => {
                self.state = State::AwaitingChoices {
                    template,
                    specs,
                    placeholders,
                    records,
                    selections: BTreeMap::new(),
                };
                self.select(label, selection)
            }
            State::AwaitingChoices { template, specs, placeholders, records, mut selections } => {
                if !specs.iter().any(|spec| &spec.label == label) {
                    let err = AppError::UnknownLabel(label.to_string());
                    self.state =
                        State::AwaitingChoices { template, specs, placeholders, records, selections };
                    return Err(err);
                }
                selections.insert(label.clone(), selection);
                self.state =
                    State::AwaitingChoices { template, specs, placeholders, records, selections };
                Ok(())
            }
            other => Err(self.reject(other, "record a selection")),
        }
    }

    /// Apply the recorded selections and compose the final storyboard.
    /// Returns the resolved blurb and the final storyboard.
    ///
    /// Every declared label must have a selection; the only shortcut is a run
    /// with no placeholders at all, which finalizes straight from the
    /// verified phase.
    pub fn finalize(&mut self) -> Result<(String, Storyboard), AppError> {
        match mem::replace(&mut self.state, State::Idle) {
            State::Verified { template, specs, placeholders, records } => {
                if let Some(spec) = specs.first() {
                    let err = AppError::MissingSelection(spec.label.to_string());
                    self.state = State::Verified { template, specs, placeholders, records };
                    return Err(err);
                }
                let resolved = template.as_str().to_string();
                self.conclude(Vec::new(), resolved)
            }
            State::AwaitingChoices { template, specs, placeholders, records, selections } => {
                if let Some(spec) =
                    specs.iter().find(|spec| !selections.contains_key(&spec.label))
                {
                    let err = AppError::MissingSelection(spec.label.to_string());
                    self.state =
                        State::AwaitingChoices { template, specs, placeholders, records, selections };
                    return Err(err);
                }

                let mut values = BTreeMap::new();
                let mut chosen = Vec::with_capacity(records.len());
                for record in &records {
                    let Some(selection) = selections.get(&record.label).copied() else {
                        continue;
                    };
                    let value = record.selected_value(selection).to_string();
                    let provenance = match selection {
                        Selection::Original => Provenance::Simulated,
                        Selection::Suggested => Provenance::Verified,
                    };
                    chosen.push(Placeholder {
                        label: record.label.clone(),
                        value: value.clone(),
                        provenance,
                    });
                    values.insert(record.label.clone(), value);
                }

                let resolved = template.resolve(&values);
                self.conclude(chosen, resolved)
            }
            other => Err(self.reject(other, "finalize the storyboard")),
        }
    }

    fn conclude(
        &mut self,
        placeholders: Vec<Placeholder>,
        resolved: String,
    ) -> Result<(String, Storyboard), AppError> {
        let storyboard = Storyboard::compose(&resolved);
        self.state = State::Finalized {
            placeholders,
            resolved: resolved.clone(),
            storyboard: storyboard.clone(),
        };
        Ok((resolved, storyboard))
    }

    fn reject(&mut self, state: State, action: &'static str) -> AppError {
        let phase = phase_of(&state);
        self.state = state;
        AppError::InvalidTransition { state: phase.name(), action }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
