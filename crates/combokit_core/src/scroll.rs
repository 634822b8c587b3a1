//! Scroll-into-view options and the element handle trait
//!
//! The widget layer never owns layout. When it needs to bring a row into
//! view (keyboard navigation) or hit-test a click, it goes through an
//! [`ElementHandle`] the host implements for its own layout nodes.

use crate::bounds::Bounds;

/// Options for scroll-into-view behavior
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOptions {
    /// How to animate the scroll
    pub behavior: ScrollBehavior,
    /// Alignment within the viewport along the scroll axis
    pub align: ScrollAlign,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            behavior: ScrollBehavior::Auto,
            align: ScrollAlign::Nearest,
        }
    }
}

impl ScrollOptions {
    /// Options for keyboard navigation: instant, minimum-distance scroll
    pub fn nearest() -> Self {
        Self::default()
    }
}

/// Scroll animation behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Instant scroll (no animation)
    #[default]
    Auto,
    /// Smooth animated scroll
    Smooth,
}

/// Scroll alignment within the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    /// Align to start of viewport
    Start,
    /// Align to center of viewport
    Center,
    /// Align to end of viewport
    End,
    /// Scroll minimum distance to make visible
    #[default]
    Nearest,
}

/// Handle to a mounted element, implemented by the host
///
/// The registry holds these as non-owning [`Weak`](std::sync::Weak)
/// references: lifetime stays with the leaf's own mount/unmount, the widget
/// layer only borrows the handle for measurement and scrolling.
pub trait ElementHandle: Send + Sync {
    /// Get the computed bounds of this element
    ///
    /// Returns `None` if layout hasn't been computed yet.
    fn bounds(&self) -> Option<Bounds>;

    /// Scroll this element into view
    fn scroll_into_view(&self, options: ScrollOptions);

    /// Focus this element
    ///
    /// For focusable elements like the search input this sets keyboard
    /// focus; the default implementation does nothing.
    fn focus(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nearest() {
        let opts = ScrollOptions::default();
        assert_eq!(opts.align, ScrollAlign::Nearest);
        assert_eq!(opts.behavior, ScrollBehavior::Auto);
        assert_eq!(ScrollOptions::nearest(), opts);
    }
}
