//! rainbow-border-render: perimeter geometry, rainbow color math and Cairo
//! painting for the rainbow border widget.
//!
//! The planning side (`perimeter`, `rainbow`, `plan`) is pure: a frame is a
//! value computed from viewport size, border configuration and animation
//! state, with no widget or Cairo context in sight. `paint` strokes a
//! planned frame onto a Cairo context.

pub mod paint;
pub mod perimeter;
pub mod plan;
pub mod rainbow;

pub use paint::paint_border;
pub use perimeter::{layout, PerimeterModel, Segment, SegmentKind};
pub use plan::{plan_border, BorderLine};
pub use rainbow::rainbow_color;
