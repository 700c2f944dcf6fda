use std::fmt;

use super::AppError;

/// A validated placeholder label.
///
/// Guarantees:
/// - Non-empty
/// - ASCII uppercase letters, digits, or `_` only
/// - Starts with a letter
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let mut chars = raw.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_uppercase())
            && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');

        if valid { Ok(Label(raw.to_string())) } else { Err(AppError::InvalidLabel(raw.to_string())) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The marker form embedded in templates.
    pub fn marker(&self) -> String {
        format!("<{}>", self.0)
    }

    /// Parse a comma-separated label list, trimming whitespace around entries.
    pub fn parse_list(raw: &str) -> Result<Vec<Label>, AppError> {
        raw.split(',').map(str::trim).filter(|entry| !entry.is_empty()).map(Label::new).collect()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Label> for String {
    fn from(val: Label) -> Self {
        val.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_uppercase_label() {
        assert!(Label::new("AMOUNT").is_ok());
    }

    #[test]
    fn valid_label_with_underscore_and_digit() {
        assert!(Label::new("PREV_YEAR").is_ok());
        assert!(Label::new("Q2").is_ok());
    }

    #[test]
    fn empty_label_is_invalid() {
        assert!(Label::new("").is_err());
    }

    #[test]
    fn lowercase_label_is_invalid() {
        assert!(Label::new("amount").is_err());
    }

    #[test]
    fn label_with_space_is_invalid() {
        assert!(Label::new("PREV YEAR").is_err());
    }

    #[test]
    fn label_starting_with_digit_is_invalid() {
        assert!(Label::new("2YEAR").is_err());
    }

    #[test]
    fn label_starting_with_underscore_is_invalid() {
        assert!(Label::new("_YEAR").is_err());
    }

    #[test]
    fn label_with_hyphen_is_invalid() {
        assert!(Label::new("YEAR-2").is_err());
    }

    #[test]
    fn marker_wraps_label_in_delimiters() {
        let label = Label::new("YEAR").unwrap();
        assert_eq!(label.marker(), "<YEAR>");
    }

    #[test]
    fn display_impl() {
        let label = Label::new("PERCENT").unwrap();
        assert_eq!(format!("{}", label), "PERCENT");
    }

    #[test]
    fn parse_list_trims_entries() {
        let labels = Label::parse_list("AMOUNT, YEAR ,PREV_YEAR").unwrap();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[1].as_str(), "YEAR");
    }

    #[test]
    fn parse_list_rejects_invalid_entry() {
        assert!(Label::parse_list("AMOUNT,bad-label").is_err());
    }

    #[test]
    fn parse_list_skips_empty_entries() {
        let labels = Label::parse_list("AMOUNT,,YEAR,").unwrap();
        assert_eq!(labels.len(), 2);
    }
}
