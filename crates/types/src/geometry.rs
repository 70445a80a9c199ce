//! Viewport geometry read fresh from the host widget on every redraw.

use serde::{Deserialize, Serialize};

/// Current size of the hosting drawing surface, in pixels.
///
/// Re-read from the widget each frame; never cached across frames so resizes
/// take effect on the very next redraw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build from a GTK allocation, clamping negative dimensions to zero.
    pub fn from_allocation(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0) as u32,
            height: height.max(0) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_allocation_clamped() {
        let size = ViewportSize::from_allocation(-3, 240);
        assert_eq!(size, ViewportSize::new(0, 240));
    }
}
