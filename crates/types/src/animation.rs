//! Animation state for the traveling rainbow effect.

use serde::{Deserialize, Serialize};

/// Position accumulator added to perimeter distances before color lookup.
///
/// The accumulator grows without bound for the lifetime of the widget and is
/// never reset; only its value modulo the current perimeter is observable
/// through the color map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct AnimationState {
    pub position: f64,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick's worth of perimeter distance.
    #[must_use]
    pub fn advance(self, step: f64) -> Self {
        Self {
            position: self.position + step,
        }
    }
}
