//! Placeholder identity and lifecycle state.

use std::fmt;

use super::label::Label;

/// Where a placeholder's current value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// The marker is still unresolved, as written in the template.
    Original,
    /// Deterministic stand-in assigned before verification.
    Simulated,
    /// Adopted from the verifier's suggestion.
    Verified,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provenance::Original => "original",
            Provenance::Simulated => "simulated",
            Provenance::Verified => "verified",
        };
        f.write_str(name)
    }
}

/// A named slot in a blurb representing a missing fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub label: Label,
    pub value: String,
    pub provenance: Provenance,
}

impl Placeholder {
    /// Declare a placeholder whose marker is still unresolved in the text.
    pub fn declared(label: Label) -> Self {
        let value = label.marker();
        Self { label, value, provenance: Provenance::Original }
    }

    /// A placeholder carrying its simulated stand-in value.
    pub fn simulated(label: Label) -> Self {
        let value = simulated_value(&label);
        Self { label, value, provenance: Provenance::Simulated }
    }
}

/// Structured description of one detected placeholder, as declared by the
/// detection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSpec {
    pub label: Label,
    /// Expected type or semantics of the missing fact, free text.
    pub semantics: String,
}

impl PlaceholderSpec {
    pub fn new(label: Label, semantics: impl Into<String>) -> Self {
        Self { label, semantics: semantics.into() }
    }
}

/// Deterministic stand-in assigned to a placeholder before verification.
pub fn simulated_value(label: &Label) -> String {
    format!("SIM_{}", label)
}
