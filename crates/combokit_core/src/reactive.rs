//! Reactive signal graph
//!
//! A small push-based signal system: signals hold type-erased values with a
//! version counter, watchers are notified synchronously when a signal they
//! observe changes. The [`State<T>`] wrapper pairs a signal with shared,
//! thread-safe access to the graph and is the primary API the widget layer
//! hands to consumers.
//!
//! ```rust
//! use combokit_core::reactive::ReactiveGraph;
//!
//! let mut graph = ReactiveGraph::new();
//! let open = graph.create_signal(false);
//! graph.set(open, true);
//! assert_eq!(graph.get(open), Some(true));
//! ```

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::any::Any;
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Unique identifier for a signal
    pub struct SignalId;
    /// Unique identifier for a watcher
    pub struct WatcherId;
}

/// A reactive signal handle (cheap to copy)
#[derive(Debug)]
pub struct Signal<T> {
    id: SignalId,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Signal<T> {}

impl<T> Signal<T> {
    /// Get the signal's internal ID
    pub fn id(&self) -> SignalId {
        self.id
    }
}

/// Callback invoked after a watched signal changes
pub type WatchFn = Arc<dyn Fn() + Send + Sync>;

struct SignalNode {
    /// The signal value (type-erased)
    value: Box<dyn Any + Send>,
    /// Version counter for change detection
    version: u64,
    /// Watchers to notify on change
    watchers: SmallVec<[WatcherId; 2]>,
}

struct WatcherNode {
    signal: SignalId,
    notify: WatchFn,
}

/// The graph that owns all signals and watchers
pub struct ReactiveGraph {
    signals: SlotMap<SignalId, SignalNode>,
    watchers: SlotMap<WatcherId, WatcherNode>,
}

impl ReactiveGraph {
    /// Create a new reactive graph
    pub fn new() -> Self {
        Self {
            signals: SlotMap::with_key(),
            watchers: SlotMap::with_key(),
        }
    }

    /// Create a new signal with an initial value
    pub fn create_signal<T: Send + 'static>(&mut self, initial: T) -> Signal<T> {
        let id = self.signals.insert(SignalNode {
            value: Box::new(initial),
            version: 0,
            watchers: SmallVec::new(),
        });
        Signal {
            id,
            _marker: std::marker::PhantomData,
        }
    }

    /// Get the current value of a signal
    pub fn get<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        self.signals
            .get(signal.id)
            .and_then(|node| node.value.downcast_ref::<T>().cloned())
    }

    /// Set the value of a signal and collect the watchers to notify
    ///
    /// Watcher callbacks are returned rather than invoked so the caller can
    /// drop its graph lock first; [`State::set`] does exactly that.
    #[must_use = "returned watcher callbacks must be invoked after releasing the graph lock"]
    pub fn set_deferred<T: Send + 'static>(
        &mut self,
        signal: Signal<T>,
        value: T,
    ) -> Vec<WatchFn> {
        let Some(node) = self.signals.get_mut(signal.id) else {
            return Vec::new();
        };
        node.value = Box::new(value);
        node.version += 1;
        node.watchers
            .iter()
            .filter_map(|wid| self.watchers.get(*wid))
            .map(|w| w.notify.clone())
            .collect()
    }

    /// Set the value of a signal, notifying watchers immediately
    pub fn set<T: Send + 'static>(&mut self, signal: Signal<T>, value: T) {
        for notify in self.set_deferred(signal, value) {
            notify();
        }
    }

    /// Register a watcher on a signal
    pub fn watch<T>(&mut self, signal: Signal<T>, notify: WatchFn) -> WatcherId {
        let id = self.watchers.insert(WatcherNode {
            signal: signal.id,
            notify,
        });
        if let Some(node) = self.signals.get_mut(signal.id) {
            node.watchers.push(id);
        }
        id
    }

    /// Remove a watcher
    pub fn unwatch(&mut self, watcher: WatcherId) {
        if let Some(node) = self.watchers.remove(watcher) {
            if let Some(sig) = self.signals.get_mut(node.signal) {
                sig.watchers.retain(|w| *w != watcher);
            }
        }
    }

    /// Get the version of a signal (for change detection)
    pub fn version(&self, id: SignalId) -> Option<u64> {
        self.signals.get(id).map(|n| n.version)
    }
}

impl Default for ReactiveGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared reactive graph for thread-safe access
pub type SharedReactiveGraph = Arc<Mutex<ReactiveGraph>>;

/// A bound state value with direct get/set methods
///
/// Wraps a signal with shared access to its graph. Cloning is cheap and all
/// clones address the same underlying value.
#[derive(Clone)]
pub struct State<T> {
    signal: Signal<T>,
    graph: SharedReactiveGraph,
}

impl<T: Clone + Send + 'static> State<T> {
    /// Create a state value in the given graph
    pub fn create(graph: &SharedReactiveGraph, initial: T) -> Self {
        let signal = lock_graph(graph).create_signal(initial);
        Self {
            signal,
            graph: graph.clone(),
        }
    }

    /// Get the current value
    pub fn get(&self) -> T
    where
        T: Default,
    {
        self.try_get().unwrap_or_default()
    }

    /// Get the current value, returning `None` if the signal is gone
    pub fn try_get(&self) -> Option<T> {
        lock_graph(&self.graph).get(self.signal)
    }

    /// Set a new value, notifying watchers
    ///
    /// Watchers run after the graph lock is released, so a watcher may read
    /// state values freely.
    pub fn set(&self, value: T) {
        let watchers = lock_graph(&self.graph).set_deferred(self.signal, value);
        for notify in watchers {
            notify();
        }
    }

    /// Update the value using a function
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        if let Some(current) = self.try_get() {
            self.set(f(current));
        }
    }

    /// Register a change watcher for this value
    pub fn watch(&self, notify: impl Fn() + Send + Sync + 'static) -> WatcherId {
        lock_graph(&self.graph).watch(self.signal, Arc::new(notify))
    }

    /// Remove a previously registered watcher
    pub fn unwatch(&self, watcher: WatcherId) {
        lock_graph(&self.graph).unwatch(watcher);
    }

    /// Get the signal ID (for change detection)
    pub fn signal_id(&self) -> SignalId {
        self.signal.id()
    }
}

/// Lock the shared graph, recovering from poisoning
///
/// A panicking host callback must not wedge every later widget interaction.
fn lock_graph(graph: &SharedReactiveGraph) -> std::sync::MutexGuard<'_, ReactiveGraph> {
    graph.lock().unwrap_or_else(|poisoned| {
        tracing::warn!("reactive graph lock poisoned, recovering");
        poisoned.into_inner()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_signal_create_get_set() {
        let mut graph = ReactiveGraph::new();
        let count = graph.create_signal(0i32);
        assert_eq!(graph.get(count), Some(0));

        graph.set(count, 42);
        assert_eq!(graph.get(count), Some(42));
    }

    #[test]
    fn test_version_bumps_on_set() {
        let mut graph = ReactiveGraph::new();
        let s = graph.create_signal("a".to_string());
        let v0 = graph.version(s.id()).unwrap();
        graph.set(s, "b".to_string());
        assert_eq!(graph.version(s.id()), Some(v0 + 1));
    }

    #[test]
    fn test_watcher_notified_on_change() {
        let mut graph = ReactiveGraph::new();
        let s = graph.create_signal(0i32);
        let runs = Arc::new(AtomicUsize::new(0));
        let runs_clone = runs.clone();
        graph.watch(s, Arc::new(move || {
            runs_clone.fetch_add(1, Ordering::SeqCst);
        }));

        graph.set(s, 1);
        graph.set(s, 2);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unwatch_stops_notifications() {
        let mut graph = ReactiveGraph::new();
        let s = graph.create_signal(0i32);
        let runs = Arc::new(AtomicUsize::new(0));
        let runs_clone = runs.clone();
        let watcher = graph.watch(s, Arc::new(move || {
            runs_clone.fetch_add(1, Ordering::SeqCst);
        }));

        graph.set(s, 1);
        graph.unwatch(watcher);
        graph.set(s, 2);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_state_shared_across_clones() {
        let graph: SharedReactiveGraph = Arc::new(Mutex::new(ReactiveGraph::new()));
        let state = State::create(&graph, 10i32);
        let alias = state.clone();

        alias.set(11);
        assert_eq!(state.get(), 11);

        state.update(|v| v + 1);
        assert_eq!(alias.get(), 12);
    }

    #[test]
    fn test_state_watcher_can_read_value() {
        let graph: SharedReactiveGraph = Arc::new(Mutex::new(ReactiveGraph::new()));
        let state = State::create(&graph, 0i32);
        let seen = Arc::new(AtomicUsize::new(0));

        let state_for_watch = state.clone();
        let seen_clone = seen.clone();
        state.watch(move || {
            // Reads re-lock the graph; set() must have released it by now.
            seen_clone.store(state_for_watch.get() as usize, Ordering::SeqCst);
        });

        state.set(7);
        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }
}
