//! Computed element bounds
//!
//! `Bounds` is the rectangle a host reports for a mounted element after
//! layout. The widget layer uses it for outside-click hit-testing and for
//! scroll-into-view distance math; it never computes layout itself.

/// Absolute element bounds after layout
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    /// X position (absolute, after layout)
    pub x: f32,
    /// Y position (absolute, after layout)
    pub y: f32,
    /// Computed width
    pub width: f32,
    /// Computed height
    pub height: f32,
}

impl Bounds {
    /// Create new bounds
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside the bounds
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Check if bounds intersect with another bounds
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point() {
        let b = Bounds::new(10.0, 10.0, 100.0, 40.0);
        assert!(b.contains(10.0, 10.0));
        assert!(b.contains(50.0, 30.0));
        assert!(!b.contains(110.0, 30.0));
        assert!(!b.contains(9.9, 30.0));
    }

    #[test]
    fn test_intersects() {
        let a = Bounds::new(0.0, 0.0, 50.0, 50.0);
        let b = Bounds::new(25.0, 25.0, 50.0, 50.0);
        let c = Bounds::new(100.0, 100.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
