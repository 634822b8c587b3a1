//! Error types
//!
//! Runtime misuse of the widget (committing an unknown id, navigating an
//! empty list) is deliberately a no-op, not an error. The errors here cover
//! programmer-usage failures that must surface immediately.

use thiserror::Error;

/// Programmer-usage errors for the widget context
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    /// A leaf was used after its owning combobox context was dropped
    #[error("combobox leaf used outside an active controller context")]
    ContextGone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_misuse() {
        let msg = ContextError::ContextGone.to_string();
        assert!(msg.contains("controller context"));
    }
}
