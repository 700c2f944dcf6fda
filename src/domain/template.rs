//! Annotated template text with `<LABEL>` placeholder markers.

use std::collections::BTreeMap;
use std::fmt;

use super::label::Label;
use super::placeholder::simulated_value;

/// Text with embedded placeholder markers of the form `<LABEL>`.
///
/// Invariant: every marker corresponds to a declared label. The detection
/// pass is responsible for establishing this; it is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template(String);

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Template(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the marker for `label` appears in the text.
    pub fn contains_marker(&self, label: &Label) -> bool {
        self.0.contains(&label.marker())
    }

    /// Replace every declared marker with its simulated stand-in value.
    ///
    /// Pure and total: a label with no corresponding marker is a no-op, and
    /// the explicit `<`/`>` delimiters keep one label from matching inside
    /// another (`<YEAR>` never touches `<PREV_YEAR>`).
    pub fn fill(&self, labels: &[Label]) -> String {
        let mut filled = self.0.clone();
        for label in labels {
            filled = filled.replace(&label.marker(), &simulated_value(label));
        }
        filled
    }

    /// Replace every marker with its selected value, producing the resolved
    /// blurb.
    pub fn resolve(&self, values: &BTreeMap<Label, String>) -> String {
        let mut resolved = self.0.clone();
        for (label, value) in values {
            resolved = resolved.replace(&label.marker(), value);
        }
        resolved
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &[&str]) -> Vec<Label> {
        raw.iter().map(|name| Label::new(name).unwrap()).collect()
    }

    #[test]
    fn fill_replaces_every_marker() {
        let template = Template::new("Invested <AMOUNT> in <YEAR>.");
        let filled = template.fill(&labels(&["AMOUNT", "YEAR"]));
        assert_eq!(filled, "Invested SIM_AMOUNT in SIM_YEAR.");
    }

    #[test]
    fn fill_is_exact_on_overlapping_labels() {
        let template = Template::new("<YEAR> vs <PREV_YEAR>");
        let filled = template.fill(&labels(&["YEAR"]));
        assert_eq!(filled, "SIM_YEAR vs <PREV_YEAR>");
    }

    #[test]
    fn fill_ignores_labels_without_markers() {
        let template = Template::new("No markers here.");
        assert_eq!(template.fill(&labels(&["AMOUNT"])), "No markers here.");
    }

    #[test]
    fn fill_is_deterministic() {
        let template = Template::new("<A> then <B>.");
        let set = labels(&["A", "B"]);
        assert_eq!(template.fill(&set), template.fill(&set));
    }

    #[test]
    fn fill_order_does_not_matter() {
        let template = Template::new("<A> then <B>.");
        assert_eq!(template.fill(&labels(&["A", "B"])), template.fill(&labels(&["B", "A"])));
    }

    #[test]
    fn resolve_substitutes_selected_values() {
        let template = Template::new("Invested <AMOUNT> in <YEAR>.");
        let mut values = BTreeMap::new();
        values.insert(Label::new("AMOUNT").unwrap(), "SIM_AMOUNT".to_string());
        values.insert(Label::new("YEAR").unwrap(), "VERIFIED_YEAR".to_string());
        assert_eq!(template.resolve(&values), "Invested SIM_AMOUNT in VERIFIED_YEAR.");
    }

    #[test]
    fn contains_marker_requires_delimiters() {
        let template = Template::new("the YEAR is <PREV_YEAR>");
        assert!(!template.contains_marker(&Label::new("YEAR").unwrap()));
        assert!(template.contains_marker(&Label::new("PREV_YEAR").unwrap()));
    }

    use proptest::prelude::*;

    use crate::domain::placeholder::simulated_value;

    // Strategy to generate a set of distinct valid labels
    fn label_set_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::hash_set("[A-Z][A-Z0-9_]{0,8}", 1..6)
            .prop_map(|set| set.into_iter().collect())
    }

    proptest! {
        #[test]
        fn fill_leaves_no_declared_markers(names in label_set_strategy()) {
            let set: Vec<Label> = names.iter().map(|name| Label::new(name).unwrap()).collect();
            let body: Vec<String> = set.iter().map(|label| format!("fact {}", label.marker())).collect();
            let template = Template::new(body.join(" "));

            let filled = template.fill(&set);

            for label in &set {
                prop_assert!(!filled.contains(&label.marker()));
                prop_assert!(filled.contains(&simulated_value(label)));
            }
        }

        #[test]
        fn fill_is_pure(names in label_set_strategy()) {
            let set: Vec<Label> = names.iter().map(|name| Label::new(name).unwrap()).collect();
            let body: Vec<String> = set.iter().map(|label| label.marker()).collect();
            let template = Template::new(body.join(" and "));

            prop_assert_eq!(template.fill(&set), template.fill(&set));
        }
    }
}
