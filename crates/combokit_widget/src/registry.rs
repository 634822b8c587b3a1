//! Item registry and navigation ordering
//!
//! The registry is the live set of mounted leaves. Items register on mount
//! and unregister on unmount (filtering included), so the controller never
//! sees the full item list up front — navigation order is computed from
//! whatever is mounted right now.
//!
//! Entries carry an explicit [`EntryKind`]: only `Item` entries participate
//! in keyboard navigation, while `Container` and `Input` entries exist for
//! outside-click hit-testing. Item order therefore never depends on where
//! non-item entries happen to sit in the collection.

use std::sync::{Arc, Weak};

use combokit_core::{Bounds, ElementHandle};
use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::state::{Direction, ItemId};

/// What a registry entry represents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// A selectable item; participates in keyboard navigation
    Item,
    /// The dropdown container; hit-testing only
    Container,
    /// The search input; hit-testing only
    Input,
}

/// One mounted leaf
///
/// The handle is non-owning: the leaf's own mount/unmount manages its
/// lifetime, the registry only borrows it for measurement and scrolling.
pub struct RegistryEntry {
    /// Entry kind; fixed at registration
    pub kind: EntryKind,
    /// Whether keyboard navigation skips this entry
    pub disabled: bool,
    handle: Weak<dyn ElementHandle>,
}

impl RegistryEntry {
    /// Upgrade the element handle, if the leaf is still alive
    pub fn handle(&self) -> Option<Arc<dyn ElementHandle>> {
        self.handle.upgrade()
    }

    /// Current bounds of the underlying element, if available
    pub fn bounds(&self) -> Option<Bounds> {
        self.handle().and_then(|h| h.bounds())
    }
}

/// Insertion-ordered map of currently mounted leaves
///
/// Mount order is the visual order; hosts mount items in display order.
/// All mutation is idempotent because unmount ordering relative to
/// re-registration during a rebuild is not guaranteed.
#[derive(Default)]
pub struct ItemRegistry {
    entries: IndexMap<ItemId, RegistryEntry>,
}

impl ItemRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Register a leaf
    ///
    /// Re-registering an existing id updates its handle and disabled flag in
    /// place without disturbing its position; this keeps registration
    /// idempotent across rebuilds.
    pub fn register(
        &mut self,
        id: impl Into<ItemId>,
        kind: EntryKind,
        handle: Weak<dyn ElementHandle>,
        disabled: bool,
    ) {
        let id = id.into();
        if let Some(existing) = self.entries.get_mut(&id) {
            if existing.kind != kind {
                tracing::warn!(%id, ?kind, prior = ?existing.kind, "entry re-registered with a different kind");
                existing.kind = kind;
            } else {
                tracing::trace!(%id, "entry re-registered");
            }
            existing.handle = handle;
            existing.disabled = disabled;
            return;
        }
        tracing::trace!(%id, ?kind, disabled, "entry registered");
        self.entries.insert(
            id,
            RegistryEntry {
                kind,
                disabled,
                handle,
            },
        );
    }

    /// Remove a leaf; unregistering an absent id is a no-op
    ///
    /// Returns whether the id was present. Removal preserves the relative
    /// order of the remaining entries.
    pub fn unregister(&mut self, id: &str) -> bool {
        let removed = self.entries.shift_remove(id).is_some();
        if removed {
            tracing::trace!(%id, "entry unregistered");
        }
        removed
    }

    /// Look up an entry by id
    pub fn entry(&self, id: &str) -> Option<&RegistryEntry> {
        self.entries.get(id)
    }

    /// Check if an id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Whether an id resolves to a non-disabled item entry
    pub fn is_navigable(&self, id: &str) -> bool {
        self.entries
            .get(id)
            .is_some_and(|e| e.kind == EntryKind::Item && !e.disabled)
    }

    /// Number of registered entries (all kinds)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids of mounted item entries, in visual order (disabled included)
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.entries
            .iter()
            .filter(|(_, e)| e.kind == EntryKind::Item)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Number of mounted item entries (disabled included)
    pub fn item_count(&self) -> usize {
        self.entries
            .values()
            .filter(|e| e.kind == EntryKind::Item)
            .count()
    }

    /// The navigable set: non-disabled items in visual order
    fn navigable_order(&self) -> SmallVec<[&ItemId; 8]> {
        self.entries
            .iter()
            .filter(|(_, e)| e.kind == EntryKind::Item && !e.disabled)
            .map(|(id, _)| id)
            .collect()
    }

    /// Resolve the id that becomes active after a move
    ///
    /// Circular: wraps from last to first and vice versa. With no current
    /// active id (or an id that is no longer navigable), `Next` selects the
    /// first navigable entry and `Previous` the last. Returns `None` only
    /// when the navigable set is empty.
    pub fn next_active(&self, current: Option<&str>, direction: Direction) -> Option<ItemId> {
        let order = self.navigable_order();
        if order.is_empty() {
            return None;
        }
        let len = order.len() as isize;
        let pos = current
            .and_then(|id| order.iter().position(|o| o.as_str() == id))
            .map(|p| p as isize);

        let new_pos = match (pos, direction) {
            (Some(p), Direction::Next) => (p + 1).rem_euclid(len),
            (Some(p), Direction::Previous) => (p - 1).rem_euclid(len),
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => len - 1,
        };
        Some(order[new_pos as usize].clone())
    }

    /// Whether a point falls inside any registered entry's current bounds
    ///
    /// Used for outside-click detection; entries whose leaf is gone or not
    /// yet laid out never match.
    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        self.entries
            .values()
            .filter_map(|e| e.bounds())
            .any(|b| b.contains(x, y))
    }
}
