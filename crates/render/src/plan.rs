//! Pure frame planning: (viewport, config, animation state) → ordered draw
//! list.
//!
//! Straight edges are covered one pixel at a time with a short stroke
//! running from the outer boundary inward across the border thickness;
//! corner arcs are covered with radial strokes sampled every 2°. Each
//! stroke is colored by its cumulative distance along the clockwise path,
//! so the planned frame is fully determined by its inputs.

use rainbow_border_types::{AnimationState, BorderConfig, Color, ViewportSize};

use crate::perimeter::{self, ArcGeometry, EdgeGeometry, Segment, SegmentKind};
use crate::rainbow::rainbow_color;

/// Angular step for corner arc sampling, in degrees.
const ARC_DEGREE_STEP: usize = 2;

/// Stroke width for the radial corner samples. Slightly wider than the 1 px
/// edge strokes so the 2° sampling leaves no gaps between spokes.
const ARC_STROKE_WIDTH: f64 = 2.0;

/// Stroke width for straight-edge pixel lines.
const EDGE_STROKE_WIDTH: f64 = 1.0;

/// One colored stroke of a planned border frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: Color,
    pub width: f64,
}

/// Plan one frame of the border.
///
/// Returns the strokes covering the whole perimeter in clockwise order,
/// starting at the top-left. The plan is empty when the viewport cannot
/// hold the border (either dimension not larger than the border width, or
/// a non-positive total perimeter); callers keep the previously drawn
/// frame in that case.
pub fn plan_border(
    size: ViewportSize,
    config: &BorderConfig,
    state: &AnimationState,
) -> Vec<BorderLine> {
    if size.width <= config.border_width || size.height <= config.border_width {
        return Vec::new();
    }

    let model = perimeter::layout(size, config);
    let total = model.total();
    if total <= 0.0 {
        log::debug!(
            "viewport {}x{} leaves no perimeter to draw",
            size.width,
            size.height
        );
        return Vec::new();
    }

    let mut lines = Vec::new();
    for segment in model.segments() {
        match segment.kind {
            SegmentKind::Edge(geometry) => {
                plan_edge(&mut lines, segment, &geometry, total, state.position);
            }
            SegmentKind::Arc(geometry) => {
                plan_arc(&mut lines, segment, &geometry, config, total, state.position);
            }
        }
    }
    lines
}

fn plan_edge(
    out: &mut Vec<BorderLine>,
    segment: &Segment,
    geometry: &EdgeGeometry,
    total: f64,
    offset: f64,
) {
    if segment.length <= 0.0 {
        // Degenerate side: drawn as empty, accounting already happened in
        // the perimeter model.
        return;
    }

    let steps = segment.length as u32;
    for i in 0..steps {
        let along = f64::from(i);
        let color = rainbow_color(segment.start + along, total, offset);
        let x = geometry.origin.0 + along * geometry.step.0;
        let y = geometry.origin.1 + along * geometry.step.1;
        out.push(BorderLine {
            x1: x,
            y1: y,
            x2: x + geometry.inward.0,
            y2: y + geometry.inward.1,
            color,
            width: EDGE_STROKE_WIDTH,
        });
    }
}

fn plan_arc(
    out: &mut Vec<BorderLine>,
    segment: &Segment,
    geometry: &ArcGeometry,
    config: &BorderConfig,
    total: f64,
    offset: f64,
) {
    let radius = f64::from(config.corner_radius);
    let inner = radius - f64::from(config.border_width);

    for angle in (0..=90).step_by(ARC_DEGREE_STEP) {
        let progress = f64::from(angle) / 90.0;
        let color = rainbow_color(segment.start + progress * segment.length, total, offset);

        let rad = f64::from(angle).to_radians();
        let ux = geometry.from.0 * rad.cos() + geometry.toward.0 * rad.sin();
        let uy = geometry.from.1 * rad.cos() + geometry.toward.1 * rad.sin();

        out.push(BorderLine {
            x1: geometry.center.0 + inner * ux,
            y1: geometry.center.1 + inner * uy,
            x2: geometry.center.0 + radius * ux,
            y2: geometry.center.1 + radius * uy,
            color,
            width: ARC_STROKE_WIDTH,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(border_width: u32, corner_radius: u32) -> BorderConfig {
        BorderConfig {
            border_width,
            corner_radius,
            ..BorderConfig::default()
        }
    }

    fn rgb(line: &BorderLine) -> (u8, u8, u8) {
        let (r, g, b, _) = line.color.to_rgba8();
        (r, g, b)
    }

    #[test]
    fn test_square_scenario_starts_red() {
        let lines = plan_border(
            ViewportSize::new(300, 500),
            &config(5, 0),
            &AnimationState::new(),
        );

        // top (295) + right (500) + bottom (295) + left (495)
        assert_eq!(lines.len(), 1585);

        let first = &lines[0];
        assert_eq!(rgb(first), (255, 0, 0), "position 0 is pure red");
        assert_eq!((first.x1, first.y1, first.x2, first.y2), (0.0, 0.0, 0.0, 5.0));

        // First right-edge stroke sits at the top of the right side and is
        // colored by distance 295 of 1580.
        let right = &lines[295];
        assert_eq!((right.x1, right.y1, right.x2, right.y2), (300.0, 0.0, 295.0, 0.0));
        let expected = rainbow_color(295.0, 1580.0, 0.0);
        assert_eq!(right.color, expected);
    }

    #[test]
    fn test_square_trailing_edges_run_in_reverse() {
        let lines = plan_border(
            ViewportSize::new(300, 500),
            &config(5, 0),
            &AnimationState::new(),
        );

        // Bottom runs right to left...
        let bottom_first = &lines[295 + 500];
        assert_eq!(
            (bottom_first.x1, bottom_first.y1, bottom_first.x2, bottom_first.y2),
            (295.0, 500.0, 295.0, 495.0)
        );
        // ...and left runs bottom to top.
        let left_first = &lines[295 + 500 + 295];
        assert_eq!(
            (left_first.x1, left_first.y1, left_first.x2, left_first.y2),
            (0.0, 495.0, 5.0, 495.0)
        );
    }

    #[test]
    fn test_rounded_scenario_stroke_count() {
        let lines = plan_border(
            ViewportSize::new(200, 200),
            &config(5, 10),
            &AnimationState::new(),
        );
        // Four 175 px edges plus four 46-sample arcs.
        assert_eq!(lines.len(), 4 * 175 + 4 * 46);
    }

    #[test]
    fn test_planning_is_idempotent() {
        let size = ViewportSize::new(200, 200);
        let cfg = config(5, 10);
        let state = AnimationState { position: 42.0 };
        assert_eq!(plan_border(size, &cfg, &state), plan_border(size, &cfg, &state));
    }

    #[test]
    fn test_small_viewport_plans_nothing() {
        let cfg = config(5, 0);
        let state = AnimationState::new();
        assert!(plan_border(ViewportSize::new(5, 400), &cfg, &state).is_empty());
        assert!(plan_border(ViewportSize::new(400, 3), &cfg, &state).is_empty());
        assert!(plan_border(ViewportSize::new(0, 0), &cfg, &state).is_empty());
    }

    #[test]
    fn test_degenerate_edge_is_skipped_but_arcs_remain() {
        // Radius swallows the horizontal edges entirely.
        let lines = plan_border(
            ViewportSize::new(45, 200),
            &config(5, 20),
            &AnimationState::new(),
        );
        assert!(!lines.is_empty());
        // First stroke comes from the top-right arc, not the top edge.
        assert_eq!(lines[0].width, 2.0);
    }

    #[test]
    fn test_offset_travels_clockwise() {
        let size = ViewportSize::new(300, 500);
        let cfg = config(5, 0);

        let before = plan_border(size, &cfg, &AnimationState::new());
        let after = plan_border(size, &cfg, &AnimationState { position: 3.0 });

        // Geometry is unchanged; only colors move.
        assert_eq!(before.len(), after.len());
        assert_eq!((before[0].x1, before[0].y1), (after[0].x1, after[0].y1));
        // The color three pixels in matches yesterday's color at the start.
        assert_eq!(after[0].color, before[3].color);
    }

    #[test]
    fn test_seam_colors_are_continuous() {
        let size = ViewportSize::new(200, 200);
        let cfg = config(5, 10);
        let lines = plan_border(size, &cfg, &AnimationState::new());

        // Across the top-edge → top-right-arc seam the hue advances by a
        // single unit step, so no channel may jump more than a few values.
        let last_top = rgb(&lines[174]);
        let first_arc = rgb(&lines[175]);
        let max_delta = [
            (last_top.0, first_arc.0),
            (last_top.1, first_arc.1),
            (last_top.2, first_arc.2),
        ]
        .iter()
        .map(|&(a, b)| (i16::from(a) - i16::from(b)).unsigned_abs())
        .max()
        .unwrap();
        assert!(max_delta <= 3, "seam jump of {} channel values", max_delta);
    }
}
