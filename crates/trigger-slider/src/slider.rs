//! Trigger slider widget.
//!
//! [`TriggerSlider`] assembles the pieces of this crate into one control: it
//! turns pointer events into drag gestures, feeds them to a
//! [`SlideController`], eases the handle back to rest after a cancelled slide,
//! and paints the caller's handle, label and track content in place.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use trigger_slider::gesture::PointerEvent;
//! use trigger_slider::{OffsetBinding, Point, Rect, SlotPlacement, TriggerSlider, TriggerSliderSettings};
//!
//! type Canvas = Vec<(&'static str, Rect, f32)>;
//!
//! let offset = OffsetBinding::new(0.0);
//! let mut slider = TriggerSlider::new(
//!     |c: &mut Canvas, p: SlotPlacement| c.push(("handle", p.rect, p.opacity)),
//!     |c: &mut Canvas, p: SlotPlacement| c.push(("label", p.rect, p.opacity)),
//!     |c: &mut Canvas, p: SlotPlacement| c.push(("track", p.rect, p.opacity)),
//!     offset.clone(),
//!     || println!("unlocked"),
//!     TriggerSliderSettings::new(),
//! );
//! slider.set_geometry(Rect::new(0.0, 0.0, 300.0, 40.0));
//!
//! slider.handle_pointer(&PointerEvent::pressed(0, Point::new(20.0, 20.0)));
//! slider.handle_pointer(&PointerEvent::moved(0, Point::new(290.0, 20.0)));
//! slider.handle_pointer(&PointerEvent::released(0, Point::new(290.0, 20.0)));
//! assert_eq!(offset.get(), 270.0);
//!
//! let mut canvas = Canvas::new();
//! slider.tick(Instant::now());
//! slider.paint(&mut canvas);
//! assert_eq!(canvas[2].1.left(), 270.0);
//! ```

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use trigger_slider_core::logging::targets;
use trigger_slider_core::{ConnectionGuard, PerfSpan};

use crate::animation::{Easing, OffsetTransition};
use crate::binding::{OffsetBinding, OffsetChange};
use crate::controller::SlideController;
use crate::error::SliderResult;
use crate::geometry::Rect;
use crate::gesture::{DragConfig, DragState, DragTracker, PointerEvent, PointerPhase};
use crate::layout::SliderLayout;
use crate::settings::TriggerSliderSettings;
use crate::slot::Renderable;

/// A "slide to confirm" control.
///
/// `C` is the host's paint context; `H`, `L` and `T` are the handle, label and
/// track content, each drawn into `C`.
///
/// The host is expected to:
///
/// 1. call [`set_geometry`](Self::set_geometry) on every layout pass,
/// 2. forward pointer events to [`handle_pointer`](Self::handle_pointer),
/// 3. call [`tick`](Self::tick) every frame while it returns `true`, then
///    [`paint`](Self::paint).
pub struct TriggerSlider<C, H, L, T> {
    controller: SlideController,
    handle: H,
    label: L,
    track: T,

    /// Bounds from the host's most recent layout pass.
    geometry: Rect,

    tracker: DragTracker,
    transition: OffsetTransition,

    /// Offset shown while a transition runs.
    displayed: f32,

    /// Latest offset change not yet reflected in `transition`.
    pending: Arc<Mutex<Option<OffsetChange>>>,
    _offset_watch: ConnectionGuard<OffsetChange>,

    _context: PhantomData<fn(&mut C)>,
}

impl<C, H, L, T> TriggerSlider<C, H, L, T>
where
    H: Renderable<C>,
    L: Renderable<C>,
    T: Renderable<C>,
{
    /// Create a slider.
    ///
    /// `offset` is the shared handle position (conventionally starting at 0);
    /// `on_confirm` runs every time the handle is released at the far edge.
    /// Negative or non-finite geometry in `settings` is replaced with zero.
    pub fn new<F>(
        handle: H,
        label: L,
        track: T,
        offset: OffsetBinding,
        on_confirm: F,
        settings: TriggerSliderSettings,
    ) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let controller = SlideController::new(settings, offset, on_confirm);

        let pending = Arc::new(Mutex::new(None));
        let pending_clone = pending.clone();
        let offset_watch = controller
            .offset()
            .changed()
            .connect_scoped(move |change: &OffsetChange| {
                *pending_clone.lock() = Some(*change);
            });

        let displayed = controller.current_offset();
        Self {
            controller,
            handle,
            label,
            track,
            geometry: Rect::ZERO,
            tracker: DragTracker::new(),
            transition: OffsetTransition::new(),
            displayed,
            pending,
            _offset_watch: offset_watch,
            _context: PhantomData,
        }
    }

    /// Like [`new`](Self::new), but rejects invalid settings.
    pub fn try_new<F>(
        handle: H,
        label: L,
        track: T,
        offset: OffsetBinding,
        on_confirm: F,
        settings: TriggerSliderSettings,
    ) -> SliderResult<Self>
    where
        F: Fn() + Send + Sync + 'static,
    {
        settings.validate()?;
        Ok(Self::new(handle, label, track, offset, on_confirm, settings))
    }

    /// Set drag recognition options using builder pattern.
    pub fn with_drag_config(mut self, config: DragConfig) -> Self {
        self.tracker = DragTracker::with_config(config);
        self
    }

    /// Set how long the handle takes to return to rest.
    pub fn with_reset_duration(mut self, duration: Duration) -> Self {
        self.transition.set_duration(duration);
        self
    }

    /// Set the easing of the return to rest.
    pub fn with_reset_easing(mut self, easing: Easing) -> Self {
        self.transition.set_easing(easing);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The drag controller.
    pub fn controller(&self) -> &SlideController {
        &self.controller
    }

    /// Mutable access to the controller, for hosts that recognize drags
    /// themselves and call its operations directly.
    pub fn controller_mut(&mut self) -> &mut SlideController {
        &mut self.controller
    }

    /// Sanitized settings in use.
    pub fn settings(&self) -> &TriggerSliderSettings {
        self.controller.settings()
    }

    /// The shared offset binding.
    pub fn offset(&self) -> &OffsetBinding {
        self.controller.offset()
    }

    /// Offset as currently drawn, which lags the binding during the return
    /// to rest.
    pub fn displayed_offset(&self) -> f32 {
        if self.transition.is_running() {
            self.displayed
        } else {
            self.controller.current_offset()
        }
    }

    /// Whether the return-to-rest animation is running.
    pub fn is_animating(&self) -> bool {
        self.transition.is_running()
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Record the bounds measured by the host's layout pass.
    pub fn set_geometry(&mut self, bounds: Rect) {
        if self.geometry != bounds {
            tracing::trace!(target: targets::WIDGET, ?bounds, "geometry changed");
            self.geometry = bounds;
        }
    }

    /// Bounds from the last layout pass.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Current layout of all parts.
    pub fn layout(&self) -> SliderLayout {
        let settings = self.settings();
        let available = SliderLayout::label_available(settings, self.geometry);
        SliderLayout::compute(
            settings,
            self.geometry,
            self.displayed_offset(),
            self.label.size_hint(available),
        )
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a pointer event. Returns `true` if the slider consumed it.
    ///
    /// Presses are only accepted on the handle.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        if event.phase == PointerPhase::Pressed {
            if !self.layout().handle.contains(event.position) {
                return false;
            }
            return self.tracker.press(event.id, event.position);
        }

        let was_tracking = self.tracker.is_tracking();
        let Some(drag) = self.tracker.process(event) else {
            return was_tracking;
        };

        // The width is re-read on every event: the track may have been
        // resized since the gesture started.
        let total_width = self.geometry.width();
        match drag.state {
            DragState::Started => {
                self.controller.begin_drag();
                self.controller.on_drag_change(drag.translation.x, total_width);
            }
            DragState::Changed => {
                self.controller.on_drag_change(drag.translation.x, total_width);
            }
            DragState::Ended => {
                self.controller.on_drag_end(drag.translation.x, total_width);
            }
            DragState::Cancelled => {
                self.controller.cancel_drag();
            }
        }

        self.sync_animation(Instant::now());
        true
    }

    /// Advance the return-to-rest animation to `now`.
    ///
    /// Returns `true` while further frames are needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.sync_animation(now);
        if self.transition.is_running() {
            self.displayed = self.transition.sample(now);
        }
        self.transition.is_running()
    }

    fn sync_animation(&mut self, now: Instant) {
        let Some(change) = self.pending.lock().take() else {
            return;
        };

        if change.animated {
            let from = if self.transition.is_running() {
                self.transition.value_at(now)
            } else {
                change.old
            };
            if self.transition.start_at(from, change.new, now) {
                self.displayed = from;
            }
        } else {
            self.transition.stop();
        }
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Paint track, label and handle, in that order.
    pub fn paint(&self, ctx: &mut C) {
        let _span = PerfSpan::new("trigger_slider::paint");
        let layout = self.layout();

        self.track.paint(ctx, layout.track_placement());

        let label = layout.label_placement();
        if label.is_visible() {
            self.label.paint(ctx, label);
        }

        self.handle.paint(ctx, layout.handle_placement());
    }
}

impl<C, H, L, T> std::fmt::Debug for TriggerSlider<C, H, L, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerSlider")
            .field("controller", &self.controller)
            .field("geometry", &self.geometry)
            .field("animating", &self.transition.is_running())
            .finish()
    }
}
