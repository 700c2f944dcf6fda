//! Compose command implementation.

use crate::domain::{AppError, Storyboard};

/// Compose a three-scene storyboard from an already-resolved blurb.
pub fn execute(blurb: &str) -> Result<Storyboard, AppError> {
    let trimmed = blurb.trim();
    if trimmed.is_empty() {
        return Err(AppError::EmptyBlurb);
    }
    Ok(Storyboard::compose(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_from_resolved_text() {
        let board = execute("One thing. Another. The rest.").unwrap();
        assert_eq!(board.hook().text(), "One thing.");
    }

    #[test]
    fn blank_input_is_rejected() {
        assert!(matches!(execute(" \n "), Err(AppError::EmptyBlurb)));
    }
}
