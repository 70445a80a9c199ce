//! Shared constants for the widget.

/// Perimeter distance the rainbow travels per animation tick. Higher values
/// make the colors move faster around the border.
pub const ANIMATION_STEP: f64 = 3.0;
