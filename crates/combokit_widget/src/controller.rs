//! Widget controller
//!
//! Single authoritative state holder for a combobox instance. Every leaf
//! and the host talk to the same controller through [`ComboboxContext`];
//! consumers render from the immutable [`StateSnapshot`] it publishes after
//! each mutation.
//!
//! All malformed calls (committing an unknown or disabled id, navigating an
//! empty list, unregistering an absent id) are deliberate no-ops. Host
//! callbacks are fire-and-forget and run only after the state transition is
//! fully applied, so a misbehaving callback can never leave the widget
//! inconsistent.
//!
//! [`ComboboxContext`]: crate::context::ComboboxContext

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use combokit_core::{
    ElementHandle, Key, KeyState, KeyboardEvent, ScrollOptions, SharedReactiveGraph, State,
};
use tracing::{debug, trace};

use crate::input::EventOutcome;
use crate::registry::{EntryKind, ItemRegistry};
use crate::state::{Direction, ItemId, StateSnapshot, WidgetState};

/// Selection-changed callback
pub type ValueCallback = Arc<dyn Fn(&str) + Send + Sync>;
/// Search-text-changed callback; debouncing and fetching are the host's job
pub type SearchCallback = Arc<dyn Fn(&str) + Send + Sync>;
/// Open-state-changed callback
pub type OpenCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Host-supplied notification callbacks, all optional
#[derive(Clone, Default)]
pub struct Callbacks {
    /// Invoked with the committed id after a successful commit
    pub on_change: Option<ValueCallback>,
    /// Invoked on every search-text mutation
    pub on_search_change: Option<SearchCallback>,
    /// Invoked when the open flag actually changes
    pub on_open_change: Option<OpenCallback>,
}

/// The widget controller
///
/// Owns [`WidgetState`] and the [`ItemRegistry`]; both are mutated only
/// through the methods here. Construction goes through
/// [`combobox()`](crate::combobox::combobox).
pub struct Controller {
    state: Mutex<WidgetState>,
    registry: Mutex<ItemRegistry>,
    callbacks: Callbacks,
    /// Published snapshot; consumers watch this for re-render
    snapshot: State<StateSnapshot>,
    /// One-shot focus request consumed by the search input on mount
    auto_focus: AtomicBool,
}

impl Controller {
    /// Create a controller with the given initial state
    pub(crate) fn new(
        initial: WidgetState,
        callbacks: Callbacks,
        graph: &SharedReactiveGraph,
        auto_focus: bool,
    ) -> Arc<Self> {
        let snapshot = State::create(graph, initial.snapshot());
        Arc::new(Self {
            state: Mutex::new(initial),
            registry: Mutex::new(ItemRegistry::new()),
            callbacks,
            snapshot,
            auto_focus: AtomicBool::new(auto_focus),
        })
    }

    // =========================================================================
    // Consumer surface
    // =========================================================================

    /// Current immutable state view
    pub fn snapshot(&self) -> StateSnapshot {
        lock(&self.state).snapshot()
    }

    /// Reactive handle to the published snapshot
    ///
    /// Hosts watch this to schedule re-renders; the value is replaced after
    /// every state mutation.
    pub fn snapshot_state(&self) -> State<StateSnapshot> {
        self.snapshot.clone()
    }

    /// Ids of currently mounted items, in visual order (disabled included)
    pub fn mounted_item_ids(&self) -> Vec<ItemId> {
        lock(&self.registry).item_ids()
    }

    /// Number of currently mounted items
    pub fn item_count(&self) -> usize {
        lock(&self.registry).item_count()
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Update the search text
    ///
    /// Forces the dropdown open and clears the active highlight; the host's
    /// search callback fires after the state is applied.
    pub fn set_search_text(&self, text: impl Into<String>) {
        let text = text.into();
        let (opened, snap) = {
            let mut st = lock(&self.state);
            let opened = !st.is_open;
            st.search_text = text.clone();
            st.is_open = true;
            st.active_item = None;
            (opened, st.snapshot())
        };
        trace!(%text, "search text changed");
        self.snapshot.set(snap);
        if let Some(cb) = &self.callbacks.on_search_change {
            cb(&text);
        }
        if opened {
            if let Some(cb) = &self.callbacks.on_open_change {
                cb(true);
            }
        }
    }

    /// Open the dropdown
    pub fn open(&self) {
        self.set_open(true);
    }

    /// Close the dropdown, leaving search text and value untouched
    pub fn close(&self) {
        self.set_open(false);
    }

    fn set_open(&self, open: bool) {
        let snap = {
            let mut st = lock(&self.state);
            if st.is_open == open {
                return;
            }
            st.is_open = open;
            st.snapshot()
        };
        debug!(open, "open state changed");
        self.snapshot.set(snap);
        if let Some(cb) = &self.callbacks.on_open_change {
            cb(open);
        }
    }

    /// Commit a selection
    ///
    /// No-op unless `id` resolves to a non-disabled mounted item. On
    /// success: value is set, search text cleared, dropdown closed, and the
    /// host's change callback fires (before the open-changed notification
    /// produced by closing).
    pub fn commit(&self, id: &str) {
        if !lock(&self.registry).is_navigable(id) {
            trace!(%id, "commit ignored: not a navigable item");
            return;
        }
        let (was_open, snap) = {
            let mut st = lock(&self.state);
            st.value.commit(id.to_string());
            st.search_text.clear();
            let was_open = st.is_open;
            st.is_open = false;
            (was_open, st.snapshot())
        };
        debug!(%id, "value committed");
        self.snapshot.set(snap);
        if let Some(cb) = &self.callbacks.on_change {
            cb(id);
        }
        if was_open {
            if let Some(cb) = &self.callbacks.on_open_change {
                cb(false);
            }
        }
    }

    /// Move the keyboard highlight
    ///
    /// Circular over the navigable set; no-op when it is empty. The newly
    /// active item is scrolled into view with `Nearest` alignment so
    /// keyboard users always see the highlighted row.
    pub fn move_active(&self, direction: Direction) {
        let current = lock(&self.state).active_item.clone();
        let Some(next) = lock(&self.registry).next_active(current.as_deref(), direction) else {
            trace!(?direction, "navigation on empty set ignored");
            return;
        };
        let snap = {
            let mut st = lock(&self.state);
            st.active_item = Some(next.clone());
            st.snapshot()
        };
        trace!(?direction, %next, "active item moved");
        self.snapshot.set(snap);

        let handle = {
            let reg = lock(&self.registry);
            reg.entry(&next).and_then(|e| e.handle())
        };
        if let Some(handle) = handle {
            handle.scroll_into_view(ScrollOptions::nearest());
        }
    }

    // =========================================================================
    // Registry surface (called by leaves on mount/unmount)
    // =========================================================================

    /// Register a selectable item; idempotent
    pub fn register_item(&self, id: impl Into<ItemId>, handle: Weak<dyn ElementHandle>, disabled: bool) {
        lock(&self.registry).register(id, EntryKind::Item, handle, disabled);
    }

    /// Register a non-navigable chrome element (container or input) for
    /// outside-click hit-testing; idempotent
    pub fn register_chrome(&self, id: impl Into<ItemId>, kind: EntryKind, handle: Weak<dyn ElementHandle>) {
        lock(&self.registry).register(id, kind, handle, false);
    }

    /// Unregister a leaf; no-op for absent ids
    ///
    /// Unregistering the active item clears the highlight without advancing
    /// to a neighbor.
    pub fn unregister(&self, id: &str) {
        if !lock(&self.registry).unregister(id) {
            return;
        }
        let snap = {
            let mut st = lock(&self.state);
            if st.active_item.as_deref() != Some(id) {
                return;
            }
            st.active_item = None;
            st.snapshot()
        };
        trace!(%id, "active item unmounted, highlight cleared");
        self.snapshot.set(snap);
    }

    // =========================================================================
    // Host surface
    // =========================================================================

    /// Set the loading flag supplied by the host's data collaborator
    pub fn set_loading(&self, loading: bool) {
        let snap = {
            let mut st = lock(&self.state);
            if st.is_loading == loading {
                return;
            }
            st.is_loading = loading;
            st.snapshot()
        };
        self.snapshot.set(snap);
    }

    /// Apply an externally controlled value; external control wins
    pub fn apply_value(&self, value: Option<ItemId>) {
        let snap = {
            let mut st = lock(&self.state);
            st.value.apply(value);
            st.snapshot()
        };
        self.snapshot.set(snap);
    }

    // =========================================================================
    // Event dispatch
    // =========================================================================

    /// Keyboard dispatch policy; applies regardless of which leaf holds focus
    ///
    /// The four navigation keys always report [`EventOutcome::Handled`] so
    /// the embedder prevents default platform behavior (page scroll, form
    /// submit) even when the press has no widget effect.
    pub fn handle_key(&self, event: &KeyboardEvent) -> EventOutcome {
        if event.state != KeyState::Pressed {
            return EventOutcome::Ignored;
        }
        let is_open = lock(&self.state).is_open;
        match (&event.key, is_open) {
            (Key::Down | Key::Up | Key::Enter, false) => {
                self.open();
                EventOutcome::Handled
            }
            (Key::Escape, false) => EventOutcome::Handled,
            (Key::Down, true) => {
                self.move_active(Direction::Next);
                EventOutcome::Handled
            }
            (Key::Up, true) => {
                self.move_active(Direction::Previous);
                EventOutcome::Handled
            }
            (Key::Enter, true) => {
                let active = lock(&self.state).active_item.clone();
                if let Some(active) = active {
                    self.commit(&active);
                }
                EventOutcome::Handled
            }
            (Key::Escape, true) => {
                self.close();
                EventOutcome::Handled
            }
            _ => EventOutcome::Ignored,
        }
    }

    /// Outside-click detection
    ///
    /// Closes the widget when a pointer-down lands outside every registered
    /// entry (container, input and items alike).
    pub fn handle_pointer_down(&self, x: f32, y: f32) {
        if !lock(&self.state).is_open {
            return;
        }
        if !lock(&self.registry).hit_test(x, y) {
            debug!(x, y, "pointer down outside widget, closing");
            self.close();
        }
    }

    /// One-shot auto-focus request, consumed by the search input on mount
    pub(crate) fn take_auto_focus(&self) -> bool {
        self.auto_focus.swap(false, Ordering::SeqCst)
    }
}

/// Lock a controller-owned mutex, recovering from poisoning
///
/// A panicking host callback must not wedge every later interaction.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
