//! Combokit Core
//!
//! Foundation primitives for the Combokit widget kit:
//!
//! - **Input events**: keyboard and pointer event types supplied by the embedder
//! - **Bounds**: computed element rectangles for hit-testing and scroll math
//! - **Scroll options**: scroll-into-view configuration and the [`ElementHandle`]
//!   trait that connects widget logic to the host's layout
//! - **Reactive state**: a small signal graph with a [`State<T>`] wrapper for
//!   change notification across rebuilds
//! - **Instance keys**: stable unique keys for component instances
//!
//! # Example
//!
//! ```rust
//! use combokit_core::reactive::ReactiveGraph;
//!
//! let mut graph = ReactiveGraph::new();
//! let count = graph.create_signal(0i32);
//! graph.set(count, 5);
//! assert_eq!(graph.get(count), Some(5));
//! ```

pub mod bounds;
pub mod error;
pub mod input;
pub mod key;
pub mod reactive;
pub mod scroll;

pub use bounds::Bounds;
pub use error::ContextError;
pub use input::{Key, KeyState, KeyboardEvent, Modifiers, PointerButton, PointerEvent};
pub use key::InstanceKey;
pub use reactive::{ReactiveGraph, SharedReactiveGraph, Signal, SignalId, State};
pub use scroll::{ElementHandle, ScrollAlign, ScrollBehavior, ScrollOptions};
