//! Drag recognition from raw pointer events.
//!
//! [`DragTracker`] follows one pointer from press to release and reports a
//! drag once the pointer has moved further than a small slop distance. Every
//! drag event carries the cumulative translation since the press, which is
//! what the controller consumes.
//!
//! # Usage
//!
//! ```
//! use trigger_slider::gesture::{DragState, DragTracker, PointerEvent};
//! use trigger_slider::Point;
//!
//! let mut tracker = DragTracker::new();
//!
//! tracker.process(&PointerEvent::pressed(1, Point::new(20.0, 20.0)));
//! let drag = tracker.process(&PointerEvent::moved(1, Point::new(80.0, 22.0))).unwrap();
//!
//! assert_eq!(drag.state, DragState::Started);
//! assert_eq!(drag.translation.x, 60.0);
//! ```
//!
//! Only a single pointer is tracked; events from other pointers while one is
//! down are ignored.

use trigger_slider_core::logging::targets;

use crate::geometry::Point;

/// Default distance a pointer must travel before a drag is recognized.
pub const DEFAULT_MIN_DRAG_DISTANCE: f32 = 10.0;

/// Phase of a raw pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Pressed,
    Moved,
    Released,
    /// The platform took the pointer away (e.g. touch cancelled).
    Cancelled,
}

/// A raw pointer event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Identifies the pointer (mouse, or one touch point).
    pub id: u64,
    pub phase: PointerPhase,
    /// Position in the slider's coordinate space.
    pub position: Point,
}

impl PointerEvent {
    pub fn new(id: u64, phase: PointerPhase, position: Point) -> Self {
        Self {
            id,
            phase,
            position,
        }
    }

    pub fn pressed(id: u64, position: Point) -> Self {
        Self::new(id, PointerPhase::Pressed, position)
    }

    pub fn moved(id: u64, position: Point) -> Self {
        Self::new(id, PointerPhase::Moved, position)
    }

    pub fn released(id: u64, position: Point) -> Self {
        Self::new(id, PointerPhase::Released, position)
    }

    pub fn cancelled(id: u64, position: Point) -> Self {
        Self::new(id, PointerPhase::Cancelled, position)
    }
}

/// State of a recognized drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// First movement past the slop distance.
    Started,
    /// Further movement.
    Changed,
    /// Pointer released after dragging.
    Ended,
    /// Pointer lost after dragging.
    Cancelled,
}

/// A recognized drag update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    pub state: DragState,
    /// Pointer position.
    pub position: Point,
    /// Cumulative movement since the press.
    pub translation: Point,
}

/// Configuration for drag recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    /// Movement below this distance is not a drag.
    pub min_distance: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DRAG_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ActivePointer {
    id: u64,
    start_pos: Point,
    dragging: bool,
}

impl ActivePointer {
    fn translation_to(&self, pos: Point) -> Point {
        Point::new(pos.x - self.start_pos.x, pos.y - self.start_pos.y)
    }
}

/// Turns pointer press/move/release into drag events.
#[derive(Debug, Default)]
pub struct DragTracker {
    config: DragConfig,
    active: Option<ActivePointer>,
}

impl DragTracker {
    /// Create a tracker with default configuration.
    pub fn new() -> Self {
        Self::with_config(DragConfig::default())
    }

    /// Create a tracker with the given configuration.
    pub fn with_config(config: DragConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Whether a pointer is currently held down.
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Whether the held pointer has moved far enough to count as a drag.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some_and(|p| p.dragging)
    }

    /// Feed a pointer event, returning a drag event if one was recognized.
    pub fn process(&mut self, event: &PointerEvent) -> Option<DragEvent> {
        match event.phase {
            PointerPhase::Pressed => {
                self.press(event.id, event.position);
                None
            }
            PointerPhase::Moved => self.handle_move(event.id, event.position),
            PointerPhase::Released => self.handle_end(event.id, event.position, DragState::Ended),
            PointerPhase::Cancelled => {
                self.handle_end(event.id, event.position, DragState::Cancelled)
            }
        }
    }

    /// Begin tracking pointer `id` at `pos`.
    ///
    /// Returns `false` if another pointer is already being tracked.
    pub fn press(&mut self, id: u64, pos: Point) -> bool {
        if let Some(active) = self.active {
            tracing::trace!(
                target: targets::GESTURE,
                active = active.id,
                ignored = id,
                "second pointer ignored"
            );
            return false;
        }
        self.active = Some(ActivePointer {
            id,
            start_pos: pos,
            dragging: false,
        });
        true
    }

    /// Stop tracking without emitting anything.
    pub fn reset(&mut self) {
        self.active = None;
    }

    fn handle_move(&mut self, id: u64, pos: Point) -> Option<DragEvent> {
        let active = self.active.as_mut().filter(|p| p.id == id)?;
        let translation = active.translation_to(pos);

        let state = if active.dragging {
            DragState::Changed
        } else {
            let distance = (translation.x * translation.x + translation.y * translation.y).sqrt();
            if distance < self.config.min_distance {
                return None;
            }
            active.dragging = true;
            tracing::debug!(target: targets::GESTURE, pointer = id, "drag recognized");
            DragState::Started
        };

        Some(DragEvent {
            state,
            position: pos,
            translation,
        })
    }

    fn handle_end(&mut self, id: u64, pos: Point, state: DragState) -> Option<DragEvent> {
        let active = self.active.filter(|p| p.id == id)?;
        self.active = None;

        if !active.dragging {
            return None;
        }
        tracing::debug!(target: targets::GESTURE, pointer = id, ?state, "drag finished");
        Some(DragEvent {
            state,
            position: pos,
            translation: active.translation_to(pos),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_small_movement_is_not_a_drag() {
        let mut t = DragTracker::new();
        t.process(&PointerEvent::pressed(1, p(10.0, 10.0)));
        assert!(t.process(&PointerEvent::moved(1, p(15.0, 12.0))).is_none());
        assert!(!t.is_dragging());
        assert!(t.process(&PointerEvent::released(1, p(15.0, 12.0))).is_none());
        assert!(!t.is_tracking());
    }

    #[test]
    fn test_drag_sequence() {
        let mut t = DragTracker::new();
        t.process(&PointerEvent::pressed(1, p(10.0, 10.0)));

        let started = t.process(&PointerEvent::moved(1, p(30.0, 10.0))).unwrap();
        assert_eq!(started.state, DragState::Started);
        assert_eq!(started.translation, p(20.0, 0.0));

        // Once dragging, even tiny moves are reported.
        let changed = t.process(&PointerEvent::moved(1, p(31.0, 11.0))).unwrap();
        assert_eq!(changed.state, DragState::Changed);
        assert_eq!(changed.translation, p(21.0, 1.0));

        let ended = t.process(&PointerEvent::released(1, p(5.0, 10.0))).unwrap();
        assert_eq!(ended.state, DragState::Ended);
        assert_eq!(ended.translation, p(-5.0, 0.0));
        assert!(!t.is_tracking());
    }

    #[test]
    fn test_cancel_after_drag() {
        let mut t = DragTracker::new();
        t.press(3, p(0.0, 0.0));
        t.process(&PointerEvent::moved(3, p(50.0, 0.0)));

        let cancelled = t.process(&PointerEvent::cancelled(3, p(60.0, 0.0))).unwrap();
        assert_eq!(cancelled.state, DragState::Cancelled);
        assert_eq!(cancelled.translation.x, 60.0);
    }

    #[test]
    fn test_second_pointer_ignored() {
        let mut t = DragTracker::new();
        assert!(t.press(1, p(0.0, 0.0)));
        assert!(!t.press(2, p(100.0, 0.0)));

        assert!(t.process(&PointerEvent::moved(2, p(200.0, 0.0))).is_none());
        assert!(t.process(&PointerEvent::released(2, p(200.0, 0.0))).is_none());
        assert!(t.is_tracking());
    }

    #[test]
    fn test_custom_min_distance() {
        let mut t = DragTracker::with_config(DragConfig { min_distance: 0.0 });
        t.press(1, p(0.0, 0.0));
        let e = t.process(&PointerEvent::moved(1, p(1.0, 0.0))).unwrap();
        assert_eq!(e.state, DragState::Started);
    }

    #[test]
    fn test_move_without_press_ignored() {
        let mut t = DragTracker::new();
        assert!(t.process(&PointerEvent::moved(1, p(100.0, 0.0))).is_none());
    }

    #[test]
    fn test_reset_drops_pointer() {
        let mut t = DragTracker::new();
        t.press(1, p(0.0, 0.0));
        t.reset();
        assert!(!t.is_tracking());
        assert!(t.press(2, p(0.0, 0.0)));
    }
}
