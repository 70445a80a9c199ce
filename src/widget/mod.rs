//! The rainbow border widget and its retained scene.

mod border;
mod scene;

pub use border::RainbowBorder;
pub use scene::{ItemId, OverlayItem, Scene, TextAnchor, TextStyle};
