//! Widget state model
//!
//! All canonical combobox state lives in [`WidgetState`], owned exclusively
//! by the controller and mutated only through its mutators. Consumers read
//! an immutable [`StateSnapshot`].

/// Identifier of a selectable item
///
/// Caller-supplied, unique among currently mounted items. Not globally
/// unique across time: a filtered-out item may remount later under the
/// same id.
pub type ItemId = String;

/// Navigation direction for keyboard movement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Advance toward the end of the list (wraps to the first entry)
    Next,
    /// Advance toward the start of the list (wraps to the last entry)
    Previous,
}

/// Where the committed value comes from
///
/// Resolved once per state application, never inferred per-render. A
/// controlled widget mirrors the host's value on every [`apply`] and its
/// own commits are advisory until the host echoes them back; an
/// uncontrolled widget owns its value outright.
///
/// [`apply`]: ValueSource::apply
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueSource {
    /// The host owns the value and pushes it in on every change
    Controlled(Option<ItemId>),
    /// The widget owns the value internally
    Uncontrolled(Option<ItemId>),
}

impl ValueSource {
    /// The currently committed value, regardless of source
    pub fn current(&self) -> Option<&ItemId> {
        match self {
            ValueSource::Controlled(v) | ValueSource::Uncontrolled(v) => v.as_ref(),
        }
    }

    /// Record a commit without changing the source tag
    pub fn commit(&mut self, value: ItemId) {
        match self {
            ValueSource::Controlled(v) | ValueSource::Uncontrolled(v) => *v = Some(value),
        }
    }

    /// Apply an externally controlled value. External control wins: the
    /// source becomes (or stays) controlled and the value is overwritten.
    pub fn apply(&mut self, value: Option<ItemId>) {
        *self = ValueSource::Controlled(value);
    }

    /// Whether the host controls the value
    pub fn is_controlled(&self) -> bool {
        matches!(self, ValueSource::Controlled(_))
    }
}

impl Default for ValueSource {
    fn default() -> Self {
        ValueSource::Uncontrolled(None)
    }
}

/// Canonical widget state, owned by the controller
#[derive(Clone, Debug, Default)]
pub struct WidgetState {
    /// Committed selection and where it comes from
    pub value: ValueSource,
    /// Current search text; cleared on successful commit
    pub search_text: String,
    /// Whether the dropdown is open
    pub is_open: bool,
    /// Currently highlighted item; always absent or present in the registry
    pub active_item: Option<ItemId>,
    /// Host-supplied loading flag; never mutated internally
    pub is_loading: bool,
}

impl WidgetState {
    /// Produce the immutable view consumers render from
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            value: self.value.current().cloned(),
            search_text: self.search_text.clone(),
            is_open: self.is_open,
            active_item: self.active_item.clone(),
            is_loading: self.is_loading,
        }
    }
}

/// Immutable state view handed to every consumer
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateSnapshot {
    /// Committed selection
    pub value: Option<ItemId>,
    /// Current search text
    pub search_text: String,
    /// Whether the dropdown is open
    pub is_open: bool,
    /// Currently highlighted item
    pub active_item: Option<ItemId>,
    /// Host-supplied loading flag
    pub is_loading: bool,
}
