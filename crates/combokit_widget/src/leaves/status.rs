//! Empty and loading status selection
//!
//! The list body renders one of three things: the items, a "loading" row
//! while the host's data collaborator is in flight, or an "empty" row when
//! nothing matched. The selection is a pure function of the loading flag
//! and the rendered item count; it holds no state of its own.

use crate::controller::Controller;

/// What the list body should render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStatus {
    /// Render the mounted items
    Items,
    /// Render the loading row; suppresses the empty row while in flight
    Loading,
    /// Render the empty row
    Empty,
}

impl ListStatus {
    /// Select the status from the loading flag and rendered item count
    pub fn compute(is_loading: bool, item_count: usize) -> Self {
        if item_count > 0 {
            ListStatus::Items
        } else if is_loading {
            ListStatus::Loading
        } else {
            ListStatus::Empty
        }
    }

    /// Select the status for a live controller
    pub fn of(controller: &Controller) -> Self {
        Self::compute(controller.snapshot().is_loading, controller.item_count())
    }
}
