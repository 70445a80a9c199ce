//! rainbow-border-types: shared data types for the rainbow border widget.
//!
//! This crate contains pure data types (color, border configuration,
//! viewport and animation state) shared by the widget and render crates.
//! GTK/Cairo conversions are gated behind the `gtk` feature so the geometry
//! and color math stay usable headlessly.

pub mod animation;
pub mod border;
pub mod color;
pub mod geometry;

// Re-export commonly used types at the crate root for convenience
pub use animation::AnimationState;
pub use border::BorderConfig;
pub use color::Color;
pub use geometry::ViewportSize;
