//! Visual item group
//!
//! Groups share a heading in the rendered list but have no effect on
//! widget state: grouped items stay part of one flat navigable sequence,
//! in mount order, exactly as if the group were not there.

/// A purely visual grouping of items under an optional heading
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Group {
    heading: Option<String>,
}

impl Group {
    /// Create a group without a heading
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a group with a heading
    pub fn labeled(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
        }
    }

    /// The heading text, if any
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combobox::combobox;
    use crate::leaves::Item;
    use crate::state::Direction;
    use crate::testing::{test_graph, TestHandle};

    #[test]
    fn test_heading() {
        assert_eq!(Group::new().heading(), None);
        assert_eq!(Group::labeled("Frameworks").heading(), Some("Frameworks"));
    }

    #[test]
    fn test_grouping_does_not_alter_navigation_order() {
        let ctx = combobox().default_open(true).mount(&test_graph());
        let handles: Vec<_> = (0..3).map(|_| TestHandle::unplaced()).collect();

        // Two groups; items still mount in display order.
        let _frameworks = Group::labeled("Frameworks");
        let _a = Item::mount(&ctx, "react", handles[0].downgrade(), false);
        let _b = Item::mount(&ctx, "vue", handles[1].downgrade(), false);
        let _tools = Group::labeled("Tools");
        let _c = Item::mount(&ctx, "vite", handles[2].downgrade(), false);

        let controller = ctx.controller();
        controller.move_active(Direction::Next);
        assert_eq!(controller.snapshot().active_item.as_deref(), Some("react"));
        controller.move_active(Direction::Next);
        assert_eq!(controller.snapshot().active_item.as_deref(), Some("vue"));
        controller.move_active(Direction::Next);
        // Navigation crosses the group boundary as if it were not there.
        assert_eq!(controller.snapshot().active_item.as_deref(), Some("vite"));
    }
}
