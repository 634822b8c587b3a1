//! Selectable item leaf
//!
//! An [`Item`] is one selectable row. Mounting registers it with the
//! controller's registry; dropping it unregisters. Hosts mount items in
//! display order — that order is the keyboard navigation order.

use std::sync::Weak;

use combokit_core::ElementHandle;

use crate::context::ComboboxContext;
use crate::context::WeakContext;
use crate::state::ItemId;

/// A mounted selectable item
///
/// The registry entry lives exactly as long as this value: filtering an
/// item out of the rendered list drops it, which removes it from keyboard
/// navigation and clears the highlight if it was active.
pub struct Item {
    ctx: WeakContext,
    id: ItemId,
    disabled: bool,
}

impl Item {
    /// Mount an item into the widget
    ///
    /// `id` must be unique among currently mounted items. Re-mounting an
    /// id during a rebuild replaces the old registration in place.
    pub fn mount(
        ctx: &ComboboxContext,
        id: impl Into<ItemId>,
        handle: Weak<dyn ElementHandle>,
        disabled: bool,
    ) -> Self {
        let id = id.into();
        ctx.controller().register_item(id.clone(), handle, disabled);
        Self {
            ctx: ctx.downgrade(),
            id,
            disabled,
        }
    }

    /// This item's id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether keyboard navigation skips this item
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether this item currently holds the keyboard highlight
    pub fn is_active(&self) -> bool {
        self.ctx.controller().snapshot().active_item.as_deref() == Some(self.id.as_str())
    }

    /// Whether this item is the committed selection
    pub fn is_selected(&self) -> bool {
        self.ctx.controller().snapshot().value.as_deref() == Some(self.id.as_str())
    }

    /// Pointer click: commit this item, bypassing the keyboard path
    ///
    /// Disabled items swallow the click.
    pub fn click(&self) {
        if self.disabled {
            return;
        }
        self.ctx.controller().commit(&self.id);
    }
}

impl Drop for Item {
    fn drop(&mut self) {
        // Unmount may race the context teardown; a gone context is fine here.
        if let Ok(controller) = self.ctx.try_controller() {
            controller.unregister(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combobox::combobox;
    use crate::testing::{test_graph, TestHandle};

    #[test]
    fn test_mount_registers_and_drop_unregisters() {
        let ctx = combobox().mount(&test_graph());
        let handle = TestHandle::unplaced();
        let item = Item::mount(&ctx, "react", handle.downgrade(), false);

        assert_eq!(ctx.controller().mounted_item_ids(), vec!["react"]);
        drop(item);
        assert!(ctx.controller().mounted_item_ids().is_empty());
    }

    #[test]
    fn test_click_commits() {
        let ctx = combobox().default_open(true).mount(&test_graph());
        let handle = TestHandle::unplaced();
        let item = Item::mount(&ctx, "react", handle.downgrade(), false);

        item.click();
        let snap = ctx.controller().snapshot();
        assert_eq!(snap.value.as_deref(), Some("react"));
        assert!(!snap.is_open);
        assert!(item.is_selected());
    }

    #[test]
    fn test_disabled_click_is_swallowed() {
        let ctx = combobox().default_open(true).mount(&test_graph());
        let handle = TestHandle::unplaced();
        let item = Item::mount(&ctx, "react", handle.downgrade(), true);

        item.click();
        let snap = ctx.controller().snapshot();
        assert_eq!(snap.value, None);
        assert!(snap.is_open);
    }

    #[test]
    fn test_active_state_tracks_navigation() {
        let ctx = combobox().default_open(true).mount(&test_graph());
        let h1 = TestHandle::unplaced();
        let h2 = TestHandle::unplaced();
        let first = Item::mount(&ctx, "react", h1.downgrade(), false);
        let second = Item::mount(&ctx, "vue", h2.downgrade(), false);

        assert!(!first.is_active());
        ctx.controller().move_active(crate::state::Direction::Next);
        assert!(first.is_active());
        assert!(!second.is_active());
    }

    #[test]
    fn test_drop_after_context_gone_is_silent() {
        let ctx = combobox().mount(&test_graph());
        let handle = TestHandle::unplaced();
        let item = Item::mount(&ctx, "react", handle.downgrade(), false);
        drop(ctx);
        // Teardown order is not guaranteed; dropping the leaf last must not panic.
        drop(item);
    }

    #[test]
    #[should_panic(expected = "outside an active controller context")]
    fn test_operation_after_context_gone_fails_loudly() {
        let ctx = combobox().mount(&test_graph());
        let handle = TestHandle::unplaced();
        let item = Item::mount(&ctx, "react", handle.downgrade(), false);
        drop(ctx);
        let _ = item.is_active();
    }
}
