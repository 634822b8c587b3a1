//! Visual separator
//!
//! A divider between rows or groups. Never registered, never navigable.

/// A purely visual separator row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Separator;

impl Separator {
    /// Create a separator
    pub fn new() -> Self {
        Self
    }
}
