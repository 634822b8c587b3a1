//! Presentational leaves
//!
//! The leaf components a host composes inside a combobox: selectable
//! [`Item`]s, visual [`Group`]s and [`Separator`]s, and the [`ListStatus`]
//! selector for empty/loading rendering. Items are the only leaves that
//! touch widget state; everything else is presentation.

pub mod group;
pub mod item;
pub mod separator;
pub mod status;

pub use group::Group;
pub use item::Item;
pub use separator::Separator;
pub use status::ListStatus;
