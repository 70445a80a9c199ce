//! rainbow-border: an animated rainbow border widget for GTK4.
//!
//! The widget frames a window with a band of color that sweeps the visible
//! spectrum and travels clockwise around the perimeter. Hosted content — a
//! background image, overlay text, arbitrary persistent primitives and
//! interactive controls — survives the per-frame border redraw.
//!
//! Geometry and color math live in `rainbow-border-render`; shared data
//! types in `rainbow-border-types`. This crate owns the GTK widget, the
//! retained scene and the animation driver.

pub mod core;
pub mod widget;

// Re-export commonly used types
pub use crate::core::AnimationDriver;
pub use widget::{ItemId, OverlayItem, RainbowBorder, Scene, TextAnchor, TextStyle};
