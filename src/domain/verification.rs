//! Simulated verifier pass over a placeholder set.

use super::label::Label;
use super::placeholder::simulated_value;

/// Outcome of checking one placeholder against the (simulated) fact source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRecord {
    pub label: Label,
    /// Value the filler assigned.
    pub original: String,
    /// Whether the verifier accepts the original value. The simulator always
    /// disagrees so every placeholder reaches a human decision.
    pub agrees: bool,
    /// Alternative the verifier proposes.
    pub suggested: String,
}

impl VerificationRecord {
    pub fn selected_value(&self, selection: Selection) -> &str {
        match selection {
            Selection::Original => &self.original,
            Selection::Suggested => &self.suggested,
        }
    }
}

/// Binary human choice for one placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Keep the filler's simulated value.
    Original,
    /// Adopt the verifier's suggestion.
    Suggested,
}

/// Deterministic alternative the simulated verifier proposes for a label.
pub fn suggested_value(label: &Label) -> String {
    format!("VERIFIED_{}", label)
}

/// Produce one disagreement record per declared label.
pub fn simulate_verification(labels: &[Label]) -> Vec<VerificationRecord> {
    labels
        .iter()
        .map(|label| VerificationRecord {
            label: label.clone(),
            original: simulated_value(label),
            agrees: false,
            suggested: suggested_value(label),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &[&str]) -> Vec<Label> {
        raw.iter().map(|name| Label::new(name).unwrap()).collect()
    }

    #[test]
    fn one_record_per_label() {
        let records = simulate_verification(&labels(&["AMOUNT", "YEAR", "PERCENT"]));
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn verifier_always_disagrees() {
        let records = simulate_verification(&labels(&["AMOUNT", "YEAR"]));
        assert!(records.iter().all(|record| !record.agrees));
    }

    #[test]
    fn records_pair_simulated_and_suggested_values() {
        let records = simulate_verification(&labels(&["PERCENT"]));
        assert_eq!(records[0].original, "SIM_PERCENT");
        assert_eq!(records[0].suggested, "VERIFIED_PERCENT");
    }

    #[test]
    fn selected_value_follows_the_choice() {
        let records = simulate_verification(&labels(&["YEAR"]));
        assert_eq!(records[0].selected_value(Selection::Original), "SIM_YEAR");
        assert_eq!(records[0].selected_value(Selection::Suggested), "VERIFIED_YEAR");
    }

    #[test]
    fn empty_label_set_produces_no_records() {
        assert!(simulate_verification(&[]).is_empty());
    }
}
