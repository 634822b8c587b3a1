//! Search input binding
//!
//! Bridges raw keyboard, focus and text-change events from the host's text
//! field into controller calls. The binding owns no widget state beyond
//! transient focus; text editing itself stays in the host's field, which
//! reports the resulting string through [`SearchInput::set_text`].

use std::sync::Weak;

use combokit_core::{ElementHandle, KeyboardEvent};

use crate::context::{ComboboxContext, WeakContext};
use crate::registry::EntryKind;

/// Result of dispatching an input event
///
/// `Handled` means the embedder must prevent default platform behavior for
/// the event (page scroll on arrows, form submit on Enter).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// The widget consumed the event; prevent default handling
    Handled,
    /// The widget has no use for the event
    Ignored,
}

/// Event binding for the search text field
pub struct SearchInput {
    ctx: WeakContext,
    id: String,
    focused: bool,
}

impl SearchInput {
    /// Mount the binding, registering the field for outside-click detection
    ///
    /// If the widget was configured with `auto_focus`, the handle receives
    /// focus now.
    pub fn mount(ctx: &ComboboxContext, id: impl Into<String>, handle: Weak<dyn ElementHandle>) -> Self {
        let id = id.into();
        let controller = ctx.controller();
        controller.register_chrome(id.clone(), EntryKind::Input, handle.clone());
        if controller.take_auto_focus() {
            if let Some(handle) = handle.upgrade() {
                handle.focus();
            }
        }
        Self {
            ctx: ctx.downgrade(),
            id,
            focused: false,
        }
    }

    /// Dispatch a keyboard event
    pub fn handle_key(&self, event: &KeyboardEvent) -> EventOutcome {
        self.ctx.controller().handle_key(event)
    }

    /// Report a focus change; gaining focus opens the widget
    pub fn handle_focus(&mut self, focused: bool) {
        self.focused = focused;
        if focused {
            self.ctx.controller().open();
        }
    }

    /// Report the field's new text content
    pub fn set_text(&self, text: &str) {
        self.ctx.controller().set_search_text(text);
    }

    /// Whether the field currently holds focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Drop for SearchInput {
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
    use combokit_core::{Key, KeyState, KeyboardEvent, Modifiers};

    #[test]
    fn test_focus_in_opens() {
        let ctx = combobox().mount(&test_graph());
        let handle = TestHandle::unplaced();
        let mut input = SearchInput::mount(&ctx, "search", handle.downgrade());

        assert!(!ctx.controller().snapshot().is_open);
        input.handle_focus(true);
        assert!(input.is_focused());
        assert!(ctx.controller().snapshot().is_open);

        // Losing focus alone does not close; outside-click and Escape do.
        input.handle_focus(false);
        assert!(ctx.controller().snapshot().is_open);
    }

    #[test]
    fn test_nav_keys_handled_even_without_effect() {
        let ctx = combobox().mount(&test_graph());
        let handle = TestHandle::unplaced();
        let input = SearchInput::mount(&ctx, "search", handle.downgrade());

        for key in [Key::Down, Key::Up, Key::Enter, Key::Escape] {
            let outcome = input.handle_key(&KeyboardEvent::pressed(key));
            assert_eq!(outcome, EventOutcome::Handled);
        }
        let outcome = input.handle_key(&KeyboardEvent::pressed(Key::Char('a')));
        assert_eq!(outcome, EventOutcome::Ignored);
    }

    #[test]
    fn test_key_release_ignored() {
        let ctx = combobox().mount(&test_graph());
        let handle = TestHandle::unplaced();
        let input = SearchInput::mount(&ctx, "search", handle.downgrade());

        let release = KeyboardEvent {
            key: Key::Down,
            state: KeyState::Released,
            modifiers: Modifiers::default(),
        };
        assert_eq!(input.handle_key(&release), EventOutcome::Ignored);
        assert!(!ctx.controller().snapshot().is_open);
    }

    #[test]
    fn test_set_text_flows_to_controller() {
        let ctx = combobox().mount(&test_graph());
        let handle = TestHandle::unplaced();
        let input = SearchInput::mount(&ctx, "search", handle.downgrade());

        input.set_text("vu");
        let snap = ctx.controller().snapshot();
        assert_eq!(snap.search_text, "vu");
        assert!(snap.is_open);
    }

    #[test]
    fn test_auto_focus_consumed_on_mount() {
        let ctx = combobox().auto_focus(true).mount(&test_graph());
        let first = TestHandle::unplaced();
        let second = TestHandle::unplaced();

        let _a = SearchInput::mount(&ctx, "search", first.downgrade());
        assert_eq!(first.focus_count(), 1);

        // The request is one-shot; a rebuild does not steal focus again.
        let _b = SearchInput::mount(&ctx, "search", second.downgrade());
        assert_eq!(second.focus_count(), 0);
    }
}
