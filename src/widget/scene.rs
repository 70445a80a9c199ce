//! Retained draw list for the border widget.
//!
//! Three layers, bottom to top: an optional background image, the current
//! border generation, and persistent overlay items. The redraw path swaps
//! exactly the border generation; the persistent layers are mutated only by
//! the explicit registration calls, so the border always stays above the
//! background image and beneath the overlay items without any per-frame
//! bookkeeping.

use cairo::Context;
use gtk4::gdk_pixbuf::Pixbuf;
use gtk4::prelude::GdkCairoContextExt;
use pango::FontDescription;
use pangocairo::functions::{create_layout, show_layout};
use rainbow_border_render::{paint_border, BorderLine};
use rainbow_border_types::Color;

/// Opaque identifier for a persistent overlay item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(u64);

/// Reference point an overlay item's coordinates address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Coordinates name the item's center.
    #[default]
    Center,
    /// Coordinates name the item's top-left corner.
    NorthWest,
}

/// Styling for persistent text items.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_family: String,
    pub size_pt: f64,
    pub bold: bool,
    pub color: Color,
    pub anchor: TextAnchor,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Sans".to_string(),
            size_pt: 12.0,
            bold: false,
            color: Color::from_rgba8(255, 255, 255, 255),
            anchor: TextAnchor::Center,
        }
    }
}

/// A drawable that survives the per-frame border redraw.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayItem {
    Text {
        x: f64,
        y: f64,
        text: String,
        style: TextStyle,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        width: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        fill: Color,
    },
}

/// Ordered draw list owned by the widget.
pub struct Scene {
    background: Option<Pixbuf>,
    border: Vec<BorderLine>,
    overlays: Vec<(ItemId, OverlayItem)>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            background: None,
            border: Vec::new(),
            overlays: Vec::new(),
            next_id: 1,
        }
    }

    /// Swap in a new border generation. Exactly one generation is live at a
    /// time; the persistent layers are untouched.
    pub fn replace_border(&mut self, lines: Vec<BorderLine>) {
        self.border = lines;
    }

    /// The currently live border generation.
    pub fn border(&self) -> &[BorderLine] {
        &self.border
    }

    /// Set or replace the persistent background image.
    pub fn set_background(&mut self, image: Pixbuf) {
        self.background = Some(image);
    }

    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    /// Add a persistent overlay item above the border layer. Insertion
    /// order is z-order.
    pub fn add_overlay(&mut self, item: OverlayItem) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.overlays.push((id, item));
        id
    }

    /// Remove a persistent overlay item. Returns false for unknown ids.
    pub fn remove_overlay(&mut self, id: ItemId) -> bool {
        let before = self.overlays.len();
        self.overlays.retain(|(item_id, _)| *item_id != id);
        self.overlays.len() != before
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Paint the scene bottom to top: base fill, background image, border
    /// generation, persistent overlays.
    pub fn paint(
        &self,
        cr: &Context,
        width: f64,
        height: f64,
        base_color: &Color,
    ) -> Result<(), cairo::Error> {
        base_color.apply_to_cairo(cr);
        cr.paint()?;

        if let Some(image) = &self.background {
            paint_background(cr, image, width, height)?;
        }

        paint_border(cr, &self.border)?;

        for (_, item) in &self.overlays {
            paint_overlay(cr, item)?;
        }
        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Stretch the background image across the full viewport.
fn paint_background(
    cr: &Context,
    image: &Pixbuf,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let img_width = image.width() as f64;
    let img_height = image.height() as f64;
    if img_width <= 0.0 || img_height <= 0.0 {
        return Ok(());
    }

    cr.save()?;
    cr.scale(width / img_width, height / img_height);
    cr.set_source_pixbuf(image, 0.0, 0.0);
    cr.paint()?;
    cr.restore()?;
    Ok(())
}

fn paint_overlay(cr: &Context, item: &OverlayItem) -> Result<(), cairo::Error> {
    match item {
        OverlayItem::Text { x, y, text, style } => paint_text(cr, *x, *y, text, style),
        OverlayItem::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        } => {
            cr.save()?;
            color.apply_to_cairo(cr);
            cr.set_line_width(*width);
            cr.move_to(*x1, *y1);
            cr.line_to(*x2, *y2);
            cr.stroke()?;
            cr.restore()?;
            Ok(())
        }
        OverlayItem::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => {
            cr.save()?;
            fill.apply_to_cairo(cr);
            cr.rectangle(*x, *y, *width, *height);
            cr.fill()?;
            cr.restore()?;
            Ok(())
        }
        OverlayItem::Ellipse {
            cx,
            cy,
            rx,
            ry,
            fill,
        } => {
            if *rx <= 0.0 || *ry <= 0.0 {
                return Ok(());
            }
            cr.save()?;
            fill.apply_to_cairo(cr);
            cr.translate(*cx, *cy);
            cr.scale(*rx, *ry);
            cr.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
            cr.fill()?;
            cr.restore()?;
            Ok(())
        }
    }
}

/// Lay text out with Pango rather than Cairo's toy font API, matching the
/// rest of the GTK text stack.
fn paint_text(
    cr: &Context,
    x: f64,
    y: f64,
    text: &str,
    style: &TextStyle,
) -> Result<(), cairo::Error> {
    cr.save()?;
    style.color.apply_to_cairo(cr);

    let mut font = FontDescription::new();
    font.set_family(&style.font_family);
    font.set_size((style.size_pt * f64::from(pango::SCALE)) as i32);
    font.set_weight(if style.bold {
        pango::Weight::Bold
    } else {
        pango::Weight::Normal
    });

    let layout = create_layout(cr);
    layout.set_font_description(Some(&font));
    layout.set_text(text);

    let (text_width, text_height) = layout.pixel_size();
    let (origin_x, origin_y) = match style.anchor {
        TextAnchor::Center => (
            x - f64::from(text_width) / 2.0,
            y - f64::from(text_height) / 2.0,
        ),
        TextAnchor::NorthWest => (x, y),
    };

    cr.move_to(origin_x, origin_y);
    show_layout(cr, &layout);
    cr.restore()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rainbow_border_render::plan_border;
    use rainbow_border_types::{AnimationState, BorderConfig, ViewportSize};

    fn sample_plan(position: f64) -> Vec<BorderLine> {
        plan_border(
            ViewportSize::new(300, 500),
            &BorderConfig {
                corner_radius: 0,
                ..BorderConfig::default()
            },
            &AnimationState { position },
        )
    }

    #[test]
    fn test_persistent_items_survive_generation_swaps() {
        let mut scene = Scene::new();
        let id = scene.add_overlay(OverlayItem::Text {
            x: 450.0,
            y: 450.0,
            text: "Welcome back".to_string(),
            style: TextStyle::default(),
        });

        scene.replace_border(sample_plan(0.0));
        scene.replace_border(sample_plan(3.0));

        assert_eq!(scene.overlay_count(), 1);
        assert!(scene.remove_overlay(id));
    }

    #[test]
    fn test_one_generation_live_at_a_time() {
        let mut scene = Scene::new();
        let first = sample_plan(0.0);
        let second = sample_plan(3.0);

        scene.replace_border(first.clone());
        assert_eq!(scene.border(), first.as_slice());

        scene.replace_border(second.clone());
        assert_eq!(scene.border(), second.as_slice());
        assert_ne!(scene.border(), first.as_slice());
    }

    #[test]
    fn test_item_ids_are_unique_and_stable() {
        let mut scene = Scene::new();
        let line = OverlayItem::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 10.0,
            y2: 10.0,
            color: Color::default(),
            width: 1.0,
        };

        let a = scene.add_overlay(line.clone());
        let b = scene.add_overlay(line.clone());
        assert_ne!(a, b);

        assert!(scene.remove_overlay(a));
        assert!(!scene.remove_overlay(a), "second removal is a no-op");

        let c = scene.add_overlay(line);
        assert_ne!(c, b, "ids are never reused");
    }
}
