//! Built-in demonstration template.
//!
//! Kept deliberately separate from the live detection path: `build` runs the
//! correction pipeline on this pre-tagged template, so the flow can be
//! exercised end to end regardless of what the service returns.

use super::label::Label;
use super::placeholder::PlaceholderSpec;
use super::template::Template;

const DEMO_TEMPLATE: &str = "Saudi Arabia invested <AMOUNT> in fintech in <YEAR>. \
That marked a <PERCENT> rise from <PREV_YEAR>.";

/// The demonstration template and its declared placeholder set.
pub fn demo_detection() -> (Template, Vec<PlaceholderSpec>) {
    let specs = [
        ("AMOUNT", "monetary amount invested"),
        ("YEAR", "calendar year of the investment"),
        ("PERCENT", "growth percentage"),
        ("PREV_YEAR", "baseline comparison year"),
    ]
    .into_iter()
    .map(|(label, semantics)| {
        let label = Label::new(label).expect("demo labels are statically valid");
        PlaceholderSpec::new(label, semantics)
    })
    .collect();

    (Template::new(DEMO_TEMPLATE), specs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_declares_four_placeholders() {
        let (_, specs) = demo_detection();
        let names: Vec<&str> = specs.iter().map(|spec| spec.label.as_str()).collect();
        assert_eq!(names, ["AMOUNT", "YEAR", "PERCENT", "PREV_YEAR"]);
    }

    #[test]
    fn demo_template_carries_a_marker_per_declared_label() {
        let (template, specs) = demo_detection();
        for spec in &specs {
            assert!(template.contains_marker(&spec.label));
        }
    }
}
