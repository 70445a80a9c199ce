//! Repeating animation driver for the border widget.
//!
//! A cooperative timer on the GTK main loop: each firing runs the frame
//! callback, advances the shared animation state, and lets glib reschedule.
//! The driver is explicitly cancellable. A stop flag plus a generation
//! counter ensure a stale callback removes itself even when `start` races a
//! previous `stop` — if a new tick loop is registered before the old
//! callback observes the stop flag, the old one detects the generation
//! mismatch and returns `Break`.

use gtk4::glib;
use rainbow_border_types::AnimationState;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::core::ANIMATION_STEP;

/// Fixed-rate repeating timer that owns the animation state.
///
/// The tick loop never overlaps itself: glib fires the callback on the main
/// loop, and the next firing waits for the previous one to return. A slow
/// frame therefore delays, never skips, the following tick.
pub struct AnimationDriver {
    interval: Duration,
    state: Rc<Cell<AnimationState>>,
    running: Cell<bool>,
    stop_flag: Rc<Cell<bool>>,
    generation: Rc<Cell<u64>>,
}

impl AnimationDriver {
    /// Create a driver ticking every `1000 / frame_rate` milliseconds
    /// (integer division). A zero frame rate is clamped to one.
    pub fn new(frame_rate: u32) -> Self {
        let frame_rate = frame_rate.max(1);
        Self {
            interval: Duration::from_millis(u64::from(1000 / frame_rate)),
            state: Rc::new(Cell::new(AnimationState::new())),
            running: Cell::new(false),
            stop_flag: Rc::new(Cell::new(false)),
            generation: Rc::new(Cell::new(0)),
        }
    }

    /// Snapshot of the animation state for the current frame.
    pub fn state(&self) -> AnimationState {
        self.state.get()
    }

    /// Whether a tick loop is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Start the tick loop. Each firing hands the frame callback the state
    /// snapshot it was scheduled under, then advances the position. Does
    /// nothing if the loop is already running.
    pub fn start<F: Fn(AnimationState) + 'static>(&self, on_frame: F) {
        if self.running.get() {
            return;
        }
        self.running.set(true);
        self.stop_flag.set(false);

        let my_generation = self.generation.get() + 1;
        self.generation.set(my_generation);

        let stop_flag = self.stop_flag.clone();
        let generation = self.generation.clone();
        let state = self.state.clone();

        log::debug!("animation driver started at {:?} per frame", self.interval);

        // DEFAULT_IDLE keeps input events ahead of animation ticks.
        glib::source::timeout_add_local_full(
            self.interval,
            glib::Priority::DEFAULT_IDLE,
            move || {
                if stop_flag.get() || generation.get() != my_generation {
                    return glib::ControlFlow::Break;
                }

                on_frame(state.get());
                state.set(state.get().advance(ANIMATION_STEP));
                glib::ControlFlow::Continue
            },
        );
    }

    /// Stop the tick loop. The pending callback unregisters itself on its
    /// next firing; no further frames are drawn after that.
    pub fn stop(&self) {
        if self.running.get() {
            log::debug!("animation driver stopped");
        }
        self.stop_flag.set(true);
        self.running.set(false);
    }
}
