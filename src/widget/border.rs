//! The animated rainbow border widget.
//!
//! A `DrawingArea` paints the retained scene; interactive controls sit above
//! it as overlay children. The animation driver ticks a full redraw at the
//! configured frame rate, and resizes trigger an out-of-band redraw with the
//! animation position unchanged.

use gtk4::gdk_pixbuf::Pixbuf;
use gtk4::prelude::*;
use gtk4::{DrawingArea, Overlay, Widget};
use rainbow_border_render::plan_border;
use rainbow_border_types::{AnimationState, BorderConfig, ViewportSize};
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::AnimationDriver;
use crate::widget::scene::{ItemId, OverlayItem, Scene, TextStyle};

/// Animated rainbow border around a window's content.
///
/// Construction starts the animation immediately; `stop`/`start` give the
/// hosting application deterministic control over the tick loop.
pub struct RainbowBorder {
    overlay: Overlay,
    area: DrawingArea,
    scene: Rc<RefCell<Scene>>,
    config: BorderConfig,
    driver: Rc<AnimationDriver>,
}

impl RainbowBorder {
    pub fn new(config: BorderConfig) -> Self {
        let area = DrawingArea::new();
        area.set_hexpand(true);
        area.set_vexpand(true);

        let overlay = Overlay::new();
        overlay.set_child(Some(&area));

        let scene = Rc::new(RefCell::new(Scene::new()));
        let driver = Rc::new(AnimationDriver::new(config.frame_rate));

        // Paint the retained scene; the draw func never mutates it.
        let scene_for_draw = scene.clone();
        let base_color = config.base_color;
        area.set_draw_func(move |_, cr, width, height| {
            let scene = scene_for_draw.borrow();
            if let Err(e) = scene.paint(cr, f64::from(width), f64::from(height), &base_color) {
                log::warn!("Scene paint failed: {}", e);
            }
        });

        // Resizes redraw with the animation position unchanged.
        let scene_for_resize = scene.clone();
        let config_for_resize = config.clone();
        let driver_for_resize = driver.clone();
        area.connect_resize(move |area, _, _| {
            refresh_border(
                area,
                &scene_for_resize,
                &config_for_resize,
                driver_for_resize.state(),
            );
        });

        let widget = Self {
            overlay,
            area,
            scene,
            config,
            driver,
        };
        widget.start();
        widget
    }

    /// The GTK widget to pack into the hosting window.
    pub fn widget(&self) -> &Overlay {
        &self.overlay
    }

    pub fn config(&self) -> &BorderConfig {
        &self.config
    }

    /// Start the animation tick loop. No-op while already running.
    pub fn start(&self) {
        let area = self.area.clone();
        let scene = self.scene.clone();
        let config = self.config.clone();
        self.driver.start(move |state| {
            refresh_border(&area, &scene, &config, state);
        });
    }

    /// Stop the animation tick loop. The frame on screen stays put.
    pub fn stop(&self) {
        self.driver.stop();
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Set a background image, replacing any previous one. The image is
    /// persistent: it survives every border redraw, stretched across the
    /// viewport beneath the border.
    pub fn set_background_image(&self, image: Pixbuf) {
        self.scene.borrow_mut().set_background(image);
        self.area.queue_draw();
    }

    /// Create persistent text above the border layer. Returns an id usable
    /// with [`remove_persistent_item`](Self::remove_persistent_item).
    pub fn add_persistent_text(&self, x: f64, y: f64, text: &str, style: TextStyle) -> ItemId {
        self.add_persistent_item(OverlayItem::Text {
            x,
            y,
            text: text.to_string(),
            style,
        })
    }

    /// Create any persistent overlay primitive above the border layer.
    pub fn add_persistent_item(&self, item: OverlayItem) -> ItemId {
        let id = self.scene.borrow_mut().add_overlay(item);
        self.area.queue_draw();
        id
    }

    pub fn remove_persistent_item(&self, id: ItemId) -> bool {
        let removed = self.scene.borrow_mut().remove_overlay(id);
        if removed {
            self.area.queue_draw();
        }
        removed
    }

    /// Attach an interactive control above the painted canvas.
    pub fn attach_control(&self, control: &impl IsA<Widget>) {
        self.overlay.add_overlay(control);
    }
}

/// One full redraw: read the viewport fresh, plan the frame, swap the
/// border generation. An empty plan (viewport too small for the border)
/// leaves the previous generation untouched.
fn refresh_border(
    area: &DrawingArea,
    scene: &Rc<RefCell<Scene>>,
    config: &BorderConfig,
    state: AnimationState,
) {
    let size = ViewportSize::from_allocation(area.width(), area.height());
    let lines = plan_border(size, config, &state);
    if lines.is_empty() {
        return;
    }
    scene.borrow_mut().replace_border(lines);
    area.queue_draw();
}
