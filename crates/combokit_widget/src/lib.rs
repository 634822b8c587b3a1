//! # Combokit Widget
//!
//! A headless, searchable combobox: a text input that filters a
//! dynamically-rendered list of selectable items, with single-value
//! selection, optional asynchronous population and full keyboard operation.
//!
//! The kit is built from two cooperating pieces:
//!
//! - the **controller** ([`controller::Controller`]) — single source of
//!   truth for value, search text, open flag and the keyboard highlight,
//!   shared with every leaf through a per-mount [`context::ComboboxContext`]
//! - the **item registry** ([`registry::ItemRegistry`]) — the live,
//!   insertion-ordered set of mounted items that defines keyboard
//!   navigation order without the controller ever seeing the full list
//!   up front
//!
//! # Example
//!
//! ```rust
//! use combokit_widget::prelude::*;
//! use combokit_core::{Key, KeyboardEvent, ReactiveGraph};
//! use std::sync::{Arc, Mutex};
//!
//! # struct Row;
//! # impl combokit_core::ElementHandle for Row {
//! #     fn bounds(&self) -> Option<combokit_core::Bounds> { None }
//! #     fn scroll_into_view(&self, _: combokit_core::ScrollOptions) {}
//! # }
//! let graph: SharedReactiveGraph = Arc::new(Mutex::new(ReactiveGraph::new()));
//! let ctx = combobox()
//!     .on_change(|value| println!("selected {value}"))
//!     .mount(&graph);
//!
//! // The host mounts items in display order (here with its own handles).
//! let row = Arc::new(Row);
//! let weak = Arc::downgrade(&row) as std::sync::Weak<dyn combokit_core::ElementHandle>;
//! let _react = Item::mount(&ctx, "react", weak, false);
//!
//! // Keyboard drives the controller.
//! ctx.controller().handle_key(&KeyboardEvent::pressed(Key::Down)); // opens
//! ctx.controller().handle_key(&KeyboardEvent::pressed(Key::Down)); // highlights "react"
//! ctx.controller().handle_key(&KeyboardEvent::pressed(Key::Enter)); // commits
//! assert_eq!(ctx.controller().snapshot().value.as_deref(), Some("react"));
//! ```

pub mod combobox;
pub mod context;
pub mod controller;
pub mod input;
pub mod leaves;
pub mod registry;
pub mod state;

pub use combobox::{combobox, ComboboxBuilder};
pub use context::{ComboboxContext, WeakContext};
pub use controller::{Callbacks, Controller};
pub use input::{EventOutcome, SearchInput};
pub use leaves::{Group, Item, ListStatus, Separator};
pub use registry::{EntryKind, ItemRegistry, RegistryEntry};
pub use state::{Direction, ItemId, StateSnapshot, ValueSource, WidgetState};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::combobox::{combobox, ComboboxBuilder};
    pub use crate::context::ComboboxContext;
    pub use crate::input::{EventOutcome, SearchInput};
    pub use crate::leaves::{Group, Item, ListStatus, Separator};
    pub use crate::state::{Direction, StateSnapshot};
    pub use combokit_core::reactive::SharedReactiveGraph;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared test fixtures: a reactive graph and an element handle that
    //! records scroll and focus calls.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex, Weak};

    use combokit_core::{Bounds, ElementHandle, ReactiveGraph, ScrollOptions, SharedReactiveGraph};

    pub(crate) fn test_graph() -> SharedReactiveGraph {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        Arc::new(Mutex::new(ReactiveGraph::new()))
    }

    pub(crate) struct TestHandle {
        bounds: Mutex<Option<Bounds>>,
        scrolled: Mutex<Vec<ScrollOptions>>,
        focused: AtomicUsize,
    }

    impl TestHandle {
        /// A handle with no layout yet
        pub(crate) fn unplaced() -> Arc<Self> {
            Self::build(None)
        }

        /// A handle laid out at the given bounds
        pub(crate) fn at(bounds: Bounds) -> Arc<Self> {
            Self::build(Some(bounds))
        }

        fn build(bounds: Option<Bounds>) -> Arc<Self> {
            Arc::new(Self {
                bounds: Mutex::new(bounds),
                scrolled: Mutex::new(Vec::new()),
                focused: AtomicUsize::new(0),
            })
        }

        pub(crate) fn downgrade(self: &Arc<Self>) -> Weak<dyn ElementHandle> {
            Arc::downgrade(self) as Weak<dyn ElementHandle>
        }

        pub(crate) fn scroll_calls(&self) -> Vec<ScrollOptions> {
            self.scrolled.lock().unwrap().clone()
        }

        pub(crate) fn focus_count(&self) -> usize {
            self.focused.load(Ordering::SeqCst)
        }
    }

    impl ElementHandle for TestHandle {
        fn bounds(&self) -> Option<Bounds> {
            *self.bounds.lock().unwrap()
        }

        fn scroll_into_view(&self, options: ScrollOptions) {
            self.scrolled.lock().unwrap().push(options);
        }

        fn focus(&self) {
            self.focused.fetch_add(1, Ordering::SeqCst);
        }
    }
}
