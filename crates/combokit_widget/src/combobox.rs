//! Host-facing combobox builder
//!
//! Fluent configuration for mounting a combobox instance:
//!
//! ```rust
//! use combokit_widget::prelude::*;
//! use std::sync::{Arc, Mutex};
//! use combokit_core::ReactiveGraph;
//!
//! let graph: SharedReactiveGraph = Arc::new(Mutex::new(ReactiveGraph::new()));
//!
//! let ctx = combobox()
//!     .default_open(false)
//!     .on_change(|value| println!("selected: {value}"))
//!     .on_search_change(|text| println!("searching: {text}"))
//!     .mount(&graph);
//!
//! ctx.controller().open();
//! assert!(ctx.controller().snapshot().is_open);
//! ```
//!
//! Asynchronous population stays on the host side: react to
//! `on_search_change` (debounce, fetch, discard stale results), flip the
//! loading flag with [`Controller::set_loading`], and mount the resulting
//! items. The controller only ever reflects what is currently mounted.
//!
//! [`Controller::set_loading`]: crate::controller::Controller::set_loading

use std::sync::Arc;

use combokit_core::{InstanceKey, SharedReactiveGraph};

use crate::context::ComboboxContext;
use crate::controller::{Callbacks, Controller};
use crate::state::{ItemId, ValueSource, WidgetState};

/// Mount-time configuration
#[derive(Clone, Default)]
struct ComboboxConfig {
    /// `Some` marks the value as externally controlled
    value: Option<Option<ItemId>>,
    callbacks: Callbacks,
    loading: bool,
    default_open: bool,
    auto_focus: bool,
}

/// Builder for mounting a combobox instance with a fluent API
pub struct ComboboxBuilder {
    key: InstanceKey,
    config: ComboboxConfig,
}

impl ComboboxBuilder {
    /// Create a builder keyed by the call site
    #[track_caller]
    pub fn new() -> Self {
        Self {
            key: InstanceKey::new("combobox"),
            config: ComboboxConfig::default(),
        }
    }

    /// Create a builder with an explicit instance key
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: InstanceKey::explicit(key),
            config: ComboboxConfig::default(),
        }
    }

    /// Supply a controlled value; the host owns the selection
    pub fn value(mut self, value: impl Into<ItemId>) -> Self {
        self.config.value = Some(Some(value.into()));
        self
    }

    /// Supply a controlled value that may be empty
    pub fn controlled(mut self, value: Option<ItemId>) -> Self {
        self.config.value = Some(value);
        self
    }

    /// Selection-changed callback
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.config.callbacks.on_change = Some(Arc::new(callback));
        self
    }

    /// Search-text callback; debouncing and fetching are the host's job
    pub fn on_search_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.config.callbacks.on_search_change = Some(Arc::new(callback));
        self
    }

    /// Open-state callback
    pub fn on_open_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.config.callbacks.on_open_change = Some(Arc::new(callback));
        self
    }

    /// Initial loading flag; suppresses "empty" rendering in favor of
    /// "loading" rendering
    pub fn loading(mut self, loading: bool) -> Self {
        self.config.loading = loading;
        self
    }

    /// Start with the dropdown open
    pub fn default_open(mut self, open: bool) -> Self {
        self.config.default_open = open;
        self
    }

    /// Focus the text field on mount
    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.config.auto_focus = auto_focus;
        self
    }

    /// Mount the widget instance
    ///
    /// Builds the controller with its state and empty registry; the
    /// returned context is the injection channel every leaf binds to. The
    /// instance lives until the last context clone is dropped.
    pub fn mount(self, graph: &SharedReactiveGraph) -> ComboboxContext {
        let value = match self.config.value {
            Some(v) => ValueSource::Controlled(v),
            None => ValueSource::Uncontrolled(None),
        };
        let initial = WidgetState {
            value,
            search_text: String::new(),
            is_open: self.config.default_open,
            active_item: None,
            is_loading: self.config.loading,
        };
        let controller = Controller::new(
            initial,
            self.config.callbacks,
            graph,
            self.config.auto_focus,
        );
        ComboboxContext::new(controller, Arc::from(self.key.get()))
    }
}

impl Default for ComboboxBuilder {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

/// Create a combobox builder
#[track_caller]
pub fn combobox() -> ComboboxBuilder {
    ComboboxBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_graph;

    #[test]
    fn test_defaults() {
        let ctx = combobox().mount(&test_graph());
        let snap = ctx.controller().snapshot();
        assert!(!snap.is_open);
        assert!(!snap.is_loading);
        assert_eq!(snap.value, None);
        assert_eq!(snap.search_text, "");
        assert_eq!(snap.active_item, None);
    }

    #[test]
    fn test_default_open_and_loading() {
        let ctx = combobox().default_open(true).loading(true).mount(&test_graph());
        let snap = ctx.controller().snapshot();
        assert!(snap.is_open);
        assert!(snap.is_loading);
    }

    #[test]
    fn test_controlled_value_visible_in_snapshot() {
        let ctx = combobox().value("us").mount(&test_graph());
        assert_eq!(ctx.controller().snapshot().value.as_deref(), Some("us"));

        let ctx = combobox().controlled(None).mount(&test_graph());
        assert_eq!(ctx.controller().snapshot().value, None);
    }

    #[test]
    fn test_instance_keys_unique_per_mount() {
        let a = combobox().mount(&test_graph());
        let b = combobox().mount(&test_graph());
        assert_ne!(a.instance_key(), b.instance_key());
    }

    #[test]
    fn test_explicit_key() {
        let ctx = ComboboxBuilder::with_key("country-picker").mount(&test_graph());
        assert_eq!(ctx.instance_key(), "country-picker");
    }
}
