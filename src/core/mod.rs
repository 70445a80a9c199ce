//! Core animation plumbing for the widget.

mod animation;
mod constants;

pub use animation::AnimationDriver;
pub use constants::ANIMATION_STEP;
