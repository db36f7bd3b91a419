//! Drag controller: moves the handle during a gesture and decides between
//! confirming and springing back when it ends.
//!
//! The controller is a two-state machine:
//!
//! ```text
//!            begin_drag / first on_drag_change
//!    Idle ───────────────────────────────────────▶ Dragging
//!     ▲                                               │
//!     └──────────── on_drag_end / cancel_drag ◀───────┘
//! ```
//!
//! All geometry is evaluated against the track width passed with each call,
//! never against a remembered one, so a track resized between gestures is
//! picked up immediately.
//!
//! # Movement rule
//!
//! With `travel = total_width - handle_width - 2 * handle_h_padding`, a drag
//! update to the right sets `offset = translation` while `translation > 0` and
//! the *current* offset is at most `travel` (mirrored for the left). Because the
//! check looks at the offset before the update, the update that crosses
//! `travel` is applied in full and the handle may overshoot by one step. Once
//! past `travel`, updates stop; the offset is never pulled back to the
//! boundary.
//!
//! # Example
//!
//! ```
//! use trigger_slider::{DragOutcome, OffsetBinding, SlideController, TriggerSliderSettings};
//!
//! let offset = OffsetBinding::new(0.0);
//! let mut controller = SlideController::new(TriggerSliderSettings::new(), offset.clone(), || {
//!     println!("confirmed!");
//! });
//!
//! controller.on_drag_change(270.0, 300.0);
//! assert_eq!(offset.get(), 270.0);
//! assert_eq!(controller.on_drag_end(270.0, 300.0), DragOutcome::Committed);
//! ```

use trigger_slider_core::Signal;
use trigger_slider_core::logging::targets;

use crate::binding::OffsetBinding;
use crate::error::SliderResult;
use crate::settings::TriggerSliderSettings;

/// Whether a gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No active gesture.
    #[default]
    Idle,
    /// Between gesture start and gesture end.
    Dragging,
}

/// Branch a release would take for the current offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseDecision {
    /// The handle has not reached the far edge: animate back to rest.
    Reset,
    /// The handle reached or passed the far edge: fire the confirmation.
    Commit,
}

/// What ending (or cancelling) a gesture did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The offset was animated back to zero.
    Reset,
    /// The confirmation was fired; the offset was left where it was.
    Committed,
    /// The host cancelled the gesture; the offset was animated back to zero.
    Cancelled,
    /// No gesture was active, nothing happened.
    Ignored,
}

/// Drives a slider handle's offset from drag events.
///
/// # Signals
///
/// - `confirmed()`: Emitted once per release past the far edge
/// - `drag_started()`: Emitted when a gesture begins
/// - `drag_finished(DragOutcome)`: Emitted when a gesture ends or is cancelled
pub struct SlideController {
    settings: TriggerSliderSettings,
    offset: OffsetBinding,
    phase: DragPhase,

    /// Signal emitted when the slide is confirmed.
    pub confirmed: Signal<()>,

    /// Signal emitted when a gesture begins.
    pub drag_started: Signal<()>,

    /// Signal emitted when a gesture ends, with what it did.
    pub drag_finished: Signal<DragOutcome>,
}

impl SlideController {
    /// Create a controller writing to `offset` and calling `on_confirm` each
    /// time a slide is confirmed.
    ///
    /// Negative or non-finite geometry in `settings` is replaced with zero.
    pub fn new<F>(settings: TriggerSliderSettings, offset: OffsetBinding, on_confirm: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let controller = Self {
            settings: settings.sanitized(),
            offset,
            phase: DragPhase::Idle,
            confirmed: Signal::new(),
            drag_started: Signal::new(),
            drag_finished: Signal::new(),
        };
        controller.confirmed.connect(move |_| on_confirm());
        controller
    }

    /// Like [`new`](Self::new), but rejects invalid settings instead of
    /// sanitizing them.
    pub fn try_new<F>(
        settings: TriggerSliderSettings,
        offset: OffsetBinding,
        on_confirm: F,
    ) -> SliderResult<Self>
    where
        F: Fn() + Send + Sync + 'static,
    {
        settings.validate()?;
        Ok(Self::new(settings, offset, on_confirm))
    }

    /// The settings this controller was built with.
    pub fn settings(&self) -> &TriggerSliderSettings {
        &self.settings
    }

    /// The offset binding this controller writes.
    pub fn offset(&self) -> &OffsetBinding {
        &self.offset
    }

    /// Current offset of the handle from rest.
    #[inline]
    pub fn current_offset(&self) -> f32 {
        self.offset.get()
    }

    /// Current gesture phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Mark the start of a gesture.
    ///
    /// Calling this while already dragging does nothing.
    pub fn begin_drag(&mut self) {
        if self.is_dragging() {
            tracing::debug!(target: targets::CONTROLLER, "begin_drag while already dragging");
            return;
        }
        self.phase = DragPhase::Dragging;
        tracing::debug!(
            target: targets::CONTROLLER,
            offset = self.current_offset(),
            "drag started"
        );
        self.drag_started.emit(());
    }

    /// Apply a drag update carrying the cumulative horizontal `translation_x`
    /// since the gesture began.
    ///
    /// A call while idle begins the gesture first. Returns `true` if the
    /// update was applied, `false` if the offset was left unchanged.
    pub fn on_drag_change(&mut self, translation_x: f32, total_width: f32) -> bool {
        if !self.is_dragging() {
            self.begin_drag();
        }

        let travel = self.settings.travel(total_width);
        let offset = self.current_offset();
        // Progress along the slide direction; overshoot past `travel` is kept
        // but freezes further updates.
        let sign = self.settings.slide_direction.progress_sign();
        let advance = translation_x * sign > 0.0 && offset * sign <= travel;

        tracing::trace!(
            target: targets::CONTROLLER,
            translation_x,
            total_width,
            travel,
            offset,
            advance,
            "drag changed"
        );

        if advance {
            self.offset.set(translation_x);
        }
        advance
    }

    /// Which branch [`on_drag_end`](Self::on_drag_end) would take for the
    /// current offset on a track `total_width` wide.
    pub fn release_outcome(&self, total_width: f32) -> ReleaseDecision {
        let travel = self.settings.travel(total_width);
        let offset = self.current_offset();
        if offset * self.settings.slide_direction.progress_sign() < travel {
            ReleaseDecision::Reset
        } else {
            ReleaseDecision::Commit
        }
    }

    /// End the gesture.
    ///
    /// Either animates the offset back to zero or emits
    /// [`confirmed`](Self::confirmed), never both. The final translation is
    /// accepted for symmetry with the host's gesture events; the decision only
    /// depends on the current offset and `total_width`.
    pub fn on_drag_end(&mut self, translation_x: f32, total_width: f32) -> DragOutcome {
        if !self.is_dragging() {
            tracing::debug!(target: targets::CONTROLLER, "drag end without active drag ignored");
            return DragOutcome::Ignored;
        }
        self.phase = DragPhase::Idle;

        let outcome = match self.release_outcome(total_width) {
            ReleaseDecision::Reset => {
                self.offset.animate_to(0.0);
                DragOutcome::Reset
            }
            ReleaseDecision::Commit => {
                self.confirmed.emit(());
                DragOutcome::Committed
            }
        };

        tracing::debug!(
            target: targets::CONTROLLER,
            translation_x,
            total_width,
            offset = self.current_offset(),
            ?outcome,
            "drag ended"
        );
        self.drag_finished.emit(outcome);
        outcome
    }

    /// Abort the gesture without confirming, animating the handle back to
    /// rest.
    ///
    /// Used when the host loses the pointer mid-gesture.
    pub fn cancel_drag(&mut self) -> DragOutcome {
        if !self.is_dragging() {
            return DragOutcome::Ignored;
        }
        self.phase = DragPhase::Idle;
        self.offset.animate_to(0.0);

        tracing::debug!(target: targets::CONTROLLER, "drag cancelled");
        self.drag_finished.emit(DragOutcome::Cancelled);
        DragOutcome::Cancelled
    }
}

impl std::fmt::Debug for SlideController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideController")
            .field("settings", &self.settings)
            .field("offset", &self.current_offset())
            .field("phase", &self.phase)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SlideDirection;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const WIDTH: f32 = 300.0;

    fn controller(direction: SlideDirection) -> (SlideController, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        let settings = TriggerSliderSettings::new().with_slide_direction(direction);
        let controller = SlideController::new(settings, OffsetBinding::new(0.0), move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        (controller, count)
    }

    #[test]
    fn test_right_update_applies_positive_translation() {
        let (mut c, _) = controller(SlideDirection::Right);
        assert!(c.on_drag_change(100.0, WIDTH));
        assert_eq!(c.current_offset(), 100.0);
    }

    #[test]
    fn test_right_ignores_non_positive_translation() {
        let (mut c, _) = controller(SlideDirection::Right);
        c.on_drag_change(50.0, WIDTH);

        assert!(!c.on_drag_change(0.0, WIDTH));
        assert!(!c.on_drag_change(-20.0, WIDTH));
        assert_eq!(c.current_offset(), 50.0);
    }

    #[test]
    fn test_right_moves_back_while_translation_positive() {
        let (mut c, _) = controller(SlideDirection::Right);
        c.on_drag_change(200.0, WIDTH);
        assert!(c.on_drag_change(120.0, WIDTH));
        assert_eq!(c.current_offset(), 120.0);
    }

    #[test]
    fn test_right_overshoot_then_freeze() {
        let (mut c, _) = controller(SlideDirection::Right);

        // Previous offset 250 <= 260, so the overshooting update applies.
        c.on_drag_change(250.0, WIDTH);
        assert!(c.on_drag_change(280.0, WIDTH));
        assert_eq!(c.current_offset(), 280.0);

        // Now past travel: every further update is suppressed, even backwards.
        assert!(!c.on_drag_change(290.0, WIDTH));
        assert!(!c.on_drag_change(100.0, WIDTH));
        assert_eq!(c.current_offset(), 280.0);
    }

    #[test]
    fn test_right_update_allowed_exactly_at_travel() {
        let (mut c, _) = controller(SlideDirection::Right);
        c.on_drag_change(260.0, WIDTH);
        assert!(c.on_drag_change(265.0, WIDTH));
        assert_eq!(c.current_offset(), 265.0);
    }

    #[test]
    fn test_left_mirrors_right() {
        let (mut c, _) = controller(SlideDirection::Left);

        assert!(!c.on_drag_change(30.0, WIDTH));
        assert_eq!(c.current_offset(), 0.0);

        assert!(c.on_drag_change(-250.0, WIDTH));
        assert!(c.on_drag_change(-275.0, WIDTH));
        assert!(!c.on_drag_change(-280.0, WIDTH));
        assert_eq!(c.current_offset(), -275.0);
    }

    #[test]
    fn test_padding_shrinks_travel() {
        let settings = TriggerSliderSettings::new().with_handle_h_padding(10.0);
        let mut c = SlideController::new(settings, OffsetBinding::new(0.0), || {});

        // travel = 300 - 40 - 20 = 240
        c.on_drag_change(241.0, WIDTH);
        assert!(!c.on_drag_change(250.0, WIDTH));
        assert_eq!(c.release_outcome(WIDTH), ReleaseDecision::Commit);
    }

    #[test]
    fn test_first_change_begins_drag() {
        let (mut c, _) = controller(SlideDirection::Right);
        assert_eq!(c.phase(), DragPhase::Idle);
        c.on_drag_change(1.0, WIDTH);
        assert_eq!(c.phase(), DragPhase::Dragging);
    }

    #[test]
    fn test_end_below_threshold_resets() {
        let (mut c, count) = controller(SlideDirection::Right);
        c.on_drag_change(100.0, WIDTH);

        assert_eq!(c.on_drag_end(100.0, WIDTH), DragOutcome::Reset);
        assert_eq!(c.current_offset(), 0.0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(c.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_end_past_threshold_commits_once() {
        let (mut c, count) = controller(SlideDirection::Right);
        c.on_drag_change(270.0, WIDTH);

        assert_eq!(c.on_drag_end(270.0, WIDTH), DragOutcome::Committed);
        assert_eq!(c.current_offset(), 270.0);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_end_exactly_at_threshold_commits() {
        let (mut c, count) = controller(SlideDirection::Right);
        c.on_drag_change(260.0, WIDTH);
        assert_eq!(c.on_drag_end(260.0, WIDTH), DragOutcome::Committed);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_end_uses_width_at_release() {
        let (mut c, count) = controller(SlideDirection::Right);
        c.on_drag_change(200.0, WIDTH);

        // Track shrank to 220 before release: travel 180, so 200 commits.
        assert_eq!(c.on_drag_end(200.0, 220.0), DragOutcome::Committed);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_end_without_drag_is_ignored() {
        let (mut c, count) = controller(SlideDirection::Right);
        c.offset().set(280.0);

        assert_eq!(c.on_drag_end(280.0, WIDTH), DragOutcome::Ignored);
        assert_eq!(c.current_offset(), 280.0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_second_end_is_ignored() {
        let (mut c, count) = controller(SlideDirection::Right);
        c.on_drag_change(270.0, WIDTH);
        c.on_drag_end(270.0, WIDTH);

        assert_eq!(c.on_drag_end(270.0, WIDTH), DragOutcome::Ignored);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_release_outcome_is_stable() {
        let (mut c, _) = controller(SlideDirection::Left);
        c.on_drag_change(-100.0, WIDTH);

        let first = c.release_outcome(WIDTH);
        assert_eq!(first, c.release_outcome(WIDTH));
        assert_eq!(first, ReleaseDecision::Reset);
    }

    #[test]
    fn test_confirm_callback_runs_before_later_observers() {
        let order = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let callback_order = order.clone();
        let settings = TriggerSliderSettings::new();
        let mut c = SlideController::new(settings, OffsetBinding::default(), move || {
            callback_order.lock().push("callback");
        });

        let early = c.confirmed.connect(|_| {});
        c.confirmed.disconnect(early);
        let observer_order = order.clone();
        c.confirmed.connect(move |_| observer_order.lock().push("observer"));

        c.on_drag_change(270.0, WIDTH);
        c.on_drag_end(270.0, WIDTH);
        assert_eq!(*order.lock(), vec!["callback", "observer"]);
    }

    #[test]
    fn test_cancel_resets_without_confirming() {
        let (mut c, count) = controller(SlideDirection::Right);
        c.on_drag_change(270.0, WIDTH);

        assert_eq!(c.cancel_drag(), DragOutcome::Cancelled);
        assert_eq!(c.current_offset(), 0.0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(c.cancel_drag(), DragOutcome::Ignored);
    }

    #[test]
    fn test_lifecycle_signals() {
        let (mut c, _) = controller(SlideDirection::Right);
        let started = Arc::new(AtomicUsize::new(0));
        let outcomes = Arc::new(parking_lot::Mutex::new(Vec::new()));

        let started_clone = started.clone();
        c.drag_started.connect(move |_| {
            started_clone.fetch_add(1, Ordering::SeqCst);
        });
        let outcomes_clone = outcomes.clone();
        c.drag_finished.connect(move |o| outcomes_clone.lock().push(*o));

        c.begin_drag();
        c.begin_drag();
        c.on_drag_change(10.0, WIDTH);
        c.on_drag_end(10.0, WIDTH);

        assert_eq!(started.load(Ordering::SeqCst), 1);
        assert_eq!(*outcomes.lock(), vec![DragOutcome::Reset]);
    }

    #[test]
    fn test_degenerate_width_does_not_panic() {
        let (mut c, count) = controller(SlideDirection::Right);

        // travel = -40: offset 0 is already past it, so updates are blocked
        assert!(!c.on_drag_change(10.0, 0.0));
        assert_eq!(c.on_drag_end(10.0, 0.0), DragOutcome::Committed);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        assert!(!c.on_drag_change(f32::NAN, WIDTH));
    }

    #[test]
    fn test_try_new_rejects_negative_geometry() {
        let settings = TriggerSliderSettings::new().with_handle_width(-1.0);
        assert!(SlideController::try_new(settings, OffsetBinding::default(), || {}).is_err());
    }

    #[test]
    fn test_new_sanitizes_geometry() {
        let settings = TriggerSliderSettings::new().with_handle_width(-1.0);
        let c = SlideController::new(settings, OffsetBinding::default(), || {});
        assert_eq!(c.settings().handle_width, 0.0);
    }
}
