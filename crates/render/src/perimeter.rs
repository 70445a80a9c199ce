//! Perimeter parameterization: mapping distance traveled clockwise around
//! the border to a place on one of the segments that make it up.
//!
//! Traversal starts at the top-left and runs clockwise. The rounded variant
//! has eight segments (four straight edges, four quarter-circle corner
//! arcs); the square variant has four. Cumulative segment starts are
//! additive over raw lengths, so a degenerate (non-positive) straight
//! length shifts later segments exactly as if it had been drawn.

use rainbow_border_types::{BorderConfig, ViewportSize};

/// One of the four straight sides, in clockwise draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSide {
    Top,
    Right,
    Bottom,
    Left,
}

/// One of the four rounded corners, in clockwise draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcCorner {
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

/// Draw geometry for a straight edge.
///
/// Unit step `i` of the edge is a stroke from `origin + i·step` to
/// `origin + i·step + inward`, where `inward` spans the border thickness
/// from the outer boundary into the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeGeometry {
    pub side: EdgeSide,
    pub origin: (f64, f64),
    pub step: (f64, f64),
    pub inward: (f64, f64),
}

/// Draw geometry for a quarter-circle corner arc.
///
/// `from` and `toward` are unit vectors from the center to the junctions
/// with the preceding and following edge; the arc point at angle `a` (0° at
/// the preceding edge, 90° at the following one) is
/// `center + radius·(from·cos a + toward·sin a)`. Distance therefore grows
/// clockwise through every corner, keeping the color sweep continuous into
/// the adjacent edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub corner: ArcCorner,
    pub center: (f64, f64),
    pub from: (f64, f64),
    pub toward: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentKind {
    Edge(EdgeGeometry),
    Arc(ArcGeometry),
}

/// A stretch of the clockwise border path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Cumulative distance at which this segment starts.
    pub start: f64,
    /// Raw length. Straight edges may come out non-positive on degenerate
    /// viewports; such segments are skipped at draw time but still counted
    /// here.
    pub length: f64,
    pub kind: SegmentKind,
}

/// Clockwise parameterization of the border path, starting at the top-left.
pub trait PerimeterModel {
    /// Total path length used for the color-map modulo.
    fn total(&self) -> f64;

    /// Segments in clockwise draw order with additive cumulative starts.
    fn segments(&self) -> &[Segment];
}

/// Build the perimeter model selected by the configured corner radius.
pub fn layout(size: ViewportSize, config: &BorderConfig) -> Box<dyn PerimeterModel> {
    if config.is_rounded() {
        Box::new(RoundedPerimeter::new(size, config))
    } else {
        Box::new(SquarePerimeter::new(size, config))
    }
}

fn chain(parts: Vec<(f64, SegmentKind)>) -> (Vec<Segment>, f64) {
    let mut segments = Vec::with_capacity(parts.len());
    let mut start = 0.0;
    for (length, kind) in parts {
        segments.push(Segment {
            start,
            length,
            kind,
        });
        start += length;
    }
    (segments, start)
}

/// Rounded-corner traversal: top edge → top-right arc → right edge →
/// bottom-right arc → bottom edge → bottom-left arc → left edge → top-left
/// arc.
pub struct RoundedPerimeter {
    segments: Vec<Segment>,
    total: f64,
}

impl RoundedPerimeter {
    pub fn new(size: ViewportSize, config: &BorderConfig) -> Self {
        let w = f64::from(size.width);
        let h = f64::from(size.height);
        let bw = f64::from(config.border_width);
        let r = f64::from(config.corner_radius);

        // Quarter circle per corner
        let arc = std::f64::consts::PI * r / 2.0;
        // Straight runs lose both corner radii plus the border-width
        // boundary pixel, so the eight raw lengths sum to the modulo total.
        let horizontal = w - 2.0 * r - bw;
        let vertical = h - 2.0 * r - bw;

        let edge = |side, origin, step, inward| {
            SegmentKind::Edge(EdgeGeometry {
                side,
                origin,
                step,
                inward,
            })
        };
        let corner = |corner, center, from, toward| {
            SegmentKind::Arc(ArcGeometry {
                corner,
                center,
                from,
                toward,
            })
        };

        let (segments, total) = chain(vec![
            (
                horizontal,
                edge(EdgeSide::Top, (r, 0.0), (1.0, 0.0), (0.0, bw)),
            ),
            (
                arc,
                corner(ArcCorner::TopRight, (w - r, r), (0.0, -1.0), (1.0, 0.0)),
            ),
            (
                vertical,
                edge(EdgeSide::Right, (w, r), (0.0, 1.0), (-bw, 0.0)),
            ),
            (
                arc,
                corner(ArcCorner::BottomRight, (w - r, h - r), (1.0, 0.0), (0.0, 1.0)),
            ),
            (
                horizontal,
                edge(EdgeSide::Bottom, (w - r, h), (-1.0, 0.0), (0.0, -bw)),
            ),
            (
                arc,
                corner(ArcCorner::BottomLeft, (r, h - r), (0.0, 1.0), (-1.0, 0.0)),
            ),
            (
                vertical,
                edge(EdgeSide::Left, (0.0, h - r), (0.0, -1.0), (bw, 0.0)),
            ),
            (
                arc,
                corner(ArcCorner::TopLeft, (r, r), (-1.0, 0.0), (0.0, -1.0)),
            ),
        ]);

        Self { segments, total }
    }
}

impl PerimeterModel for RoundedPerimeter {
    fn total(&self) -> f64 {
        self.total
    }

    fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Square traversal: top → right → bottom → left, no arcs.
pub struct SquarePerimeter {
    segments: Vec<Segment>,
    total: f64,
}

impl SquarePerimeter {
    pub fn new(size: ViewportSize, config: &BorderConfig) -> Self {
        let w = f64::from(size.width);
        let h = f64::from(size.height);
        let bw = f64::from(config.border_width);

        let edge = |side, origin, step, inward| {
            SegmentKind::Edge(EdgeGeometry {
                side,
                origin,
                step,
                inward,
            })
        };

        let (segments, _) = chain(vec![
            (
                w - bw,
                edge(EdgeSide::Top, (0.0, 0.0), (1.0, 0.0), (0.0, bw)),
            ),
            (h, edge(EdgeSide::Right, (w, 0.0), (0.0, 1.0), (-bw, 0.0))),
            (
                w - bw,
                edge(EdgeSide::Bottom, (w - bw, h), (-1.0, 0.0), (0.0, -bw)),
            ),
            (
                h - bw,
                edge(EdgeSide::Left, (0.0, h - bw), (0.0, -1.0), (bw, 0.0)),
            ),
        ]);

        // The color modulo runs over 2·(w + h − 2·bw); the tail of the left
        // edge wraps past it, landing back at the start of the spectrum.
        let total = 2.0 * (w + h - 2.0 * bw);

        Self { segments, total }
    }
}

impl PerimeterModel for SquarePerimeter {
    fn total(&self) -> f64 {
        self.total
    }

    fn segments(&self) -> &[Segment] {
        &self.segments
    }
}
