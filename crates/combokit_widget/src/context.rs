//! Per-mount context channel
//!
//! The context is the dependency-injection channel that shares one
//! [`Controller`] with every leaf of a widget instance. There is no ambient
//! singleton: a context is constructed when the widget mounts, cloned into
//! children, and dropped with the mount — state never leaks across widget
//! instances.
//!
//! Leaves hold a [`WeakContext`] so they never keep a dead widget alive.
//! Using a leaf after its context is gone is a programmer error and fails
//! loudly at call time; silently operating on absent state would corrupt
//! invariants undetectably.

use std::sync::{Arc, Weak};

use combokit_core::ContextError;

use crate::controller::Controller;

/// Owning handle to a mounted combobox instance
///
/// Cloning is cheap; all clones address the same controller. When the last
/// clone is dropped the instance is gone and every leaf bound to it becomes
/// invalid.
#[derive(Clone)]
pub struct ComboboxContext {
    controller: Arc<Controller>,
    key: Arc<str>,
}

impl ComboboxContext {
    pub(crate) fn new(controller: Arc<Controller>, key: Arc<str>) -> Self {
        Self { controller, key }
    }

    /// The shared controller
    pub fn controller(&self) -> &Arc<Controller> {
        &self.controller
    }

    /// Stable key of this widget instance
    ///
    /// Useful for deriving element ids for the instance's chrome.
    pub fn instance_key(&self) -> &str {
        &self.key
    }

    /// Create a non-owning handle for a leaf
    pub fn downgrade(&self) -> WeakContext {
        WeakContext {
            controller: Arc::downgrade(&self.controller),
        }
    }
}

/// Non-owning handle held by leaves
#[derive(Clone)]
pub struct WeakContext {
    controller: Weak<Controller>,
}

impl WeakContext {
    /// Resolve the controller, panicking if the context is gone
    ///
    /// Leaf operations after the owning mount was dropped are programmer
    /// errors; this is the loud, immediate failure the contract requires.
    pub fn controller(&self) -> Arc<Controller> {
        match self.try_controller() {
            Ok(controller) => controller,
            Err(err) => panic!("{err}"),
        }
    }

    /// Resolve the controller, returning an error if the context is gone
    pub fn try_controller(&self) -> Result<Arc<Controller>, ContextError> {
        self.controller.upgrade().ok_or(ContextError::ContextGone)
    }
}
