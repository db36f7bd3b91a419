//! Placement of the track, label and handle.
//!
//! The three pieces are stacked inside a content box anchored to the top of
//! the bounds the host gives the slider:
//!
//! ```text
//!  ┌──────────────────────────── bounds.width ─────────────────────────────┐
//!  │ v_pad                                                                 │
//!  │ ┌────────┐╔══════════════════════ track ═══════════════════════════╗  │
//!  │ │ handle │║                   [ label ]                            ║  │
//!  │ └────────┘╚════════════════════════════════════════════════════════╝  │
//!  │ v_pad                                                                 │
//!  └───────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - content box: full width, `handle_height + 2 * handle_v_padding` tall
//! - track: full width, `handle_height + handle_v_padding` tall, centered
//! - handle: `handle_width x handle_height`, centered vertically, resting
//!   `handle_h_padding` from the starting edge and shifted by the offset
//! - label: its preferred size, centered in the content box

use crate::geometry::{Point, Rect, Size};
use crate::opacity::label_opacity;
use crate::settings::{SlideDirection, TriggerSliderSettings};
use crate::slot::SlotPlacement;

/// Computed placement of every part of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    /// Box all parts are positioned in.
    pub content: Rect,
    /// Track (background) rectangle.
    pub track: Rect,
    /// Label rectangle.
    pub label: Rect,
    /// Handle rectangle, including the offset.
    pub handle: Rect,
    /// Unclamped label opacity; see [`label_opacity`].
    pub label_opacity: f32,
}

impl SliderLayout {
    /// Lay out a slider in `bounds` with the handle displaced by `offset_x`.
    ///
    /// `label_size` is the label's preferred size; it is limited to the
    /// content box.
    pub fn compute(
        settings: &TriggerSliderSettings,
        bounds: Rect,
        offset_x: f32,
        label_size: Size,
    ) -> Self {
        let content = Self::content_rect(settings, bounds);
        let center = content.center();

        let track_height = settings.handle_height + settings.handle_v_padding;
        let track = Rect::new(
            content.left(),
            center.y - track_height / 2.0,
            content.width(),
            track_height,
        );

        let label = Rect::from_center(
            center,
            Size::new(
                label_size.width.min(content.width()).max(0.0),
                label_size.height.min(content.height()).max(0.0),
            ),
        );

        let handle = Self::handle_rest_rect(settings, bounds).offset(offset_x, 0.0);

        Self {
            content,
            track,
            label,
            handle,
            label_opacity: label_opacity(offset_x, bounds.width()),
        }
    }

    /// The content box for `bounds`.
    pub fn content_rect(settings: &TriggerSliderSettings, bounds: Rect) -> Rect {
        Rect::new(
            bounds.left(),
            bounds.top(),
            bounds.width(),
            settings.handle_height + settings.handle_v_padding * 2.0,
        )
    }

    /// Where the handle sits with zero offset.
    pub fn handle_rest_rect(settings: &TriggerSliderSettings, bounds: Rect) -> Rect {
        let content = Self::content_rect(settings, bounds);
        let x = match settings.slide_direction {
            SlideDirection::Right => content.left() + settings.handle_h_padding,
            SlideDirection::Left => {
                content.right() - settings.handle_h_padding - settings.handle_width
            }
        };
        Rect::from_center(
            Point::new(x + settings.handle_width / 2.0, content.center().y),
            Size::new(settings.handle_width, settings.handle_height),
        )
    }

    /// The size labels may use.
    pub fn label_available(settings: &TriggerSliderSettings, bounds: Rect) -> Size {
        Self::content_rect(settings, bounds).size
    }

    pub fn track_placement(&self) -> SlotPlacement {
        SlotPlacement::new(self.track)
    }

    /// Label placement with opacity clamped to `[0, 1]`.
    pub fn label_placement(&self) -> SlotPlacement {
        SlotPlacement::new(self.label).with_opacity(self.label_opacity)
    }

    pub fn handle_placement(&self) -> SlotPlacement {
        SlotPlacement::new(self.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 300.0, 100.0);

    #[test]
    fn test_default_geometry_at_rest() {
        let s = TriggerSliderSettings::new();
        let l = SliderLayout::compute(&s, BOUNDS, 0.0, Size::new(100.0, 20.0));

        assert_eq!(l.content, Rect::new(0.0, 0.0, 300.0, 40.0));
        assert_eq!(l.track, Rect::new(0.0, 0.0, 300.0, 40.0));
        assert_eq!(l.handle, Rect::new(0.0, 0.0, 40.0, 40.0));
        assert_eq!(l.label, Rect::new(100.0, 10.0, 100.0, 20.0));
        assert_eq!(l.label_opacity, 1.0);
    }

    #[test]
    fn test_padding_insets_handle_and_grows_track() {
        let s = TriggerSliderSettings::new()
            .with_handle_h_padding(4.0)
            .with_handle_v_padding(5.0);
        let l = SliderLayout::compute(&s, BOUNDS, 0.0, Size::ZERO);

        // content: 40 + 2*5 = 50 tall; track: 40 + 5 = 45 tall, centered at 25
        assert_eq!(l.content.height(), 50.0);
        assert_eq!(l.track, Rect::new(0.0, 2.5, 300.0, 45.0));
        assert_eq!(l.handle, Rect::new(4.0, 5.0, 40.0, 40.0));
    }

    #[test]
    fn test_offset_moves_handle_and_fades_label() {
        let s = TriggerSliderSettings::new();
        let l = SliderLayout::compute(&s, BOUNDS, 75.0, Size::ZERO);

        assert_eq!(l.handle.left(), 75.0);
        assert_eq!(l.label_opacity, 0.5);
        assert_eq!(l.label_placement().opacity, 0.5);
    }

    #[test]
    fn test_label_opacity_clamped_only_in_placement() {
        let s = TriggerSliderSettings::new();
        let l = SliderLayout::compute(&s, BOUNDS, 270.0, Size::ZERO);

        assert!(l.label_opacity < 0.0);
        assert_eq!(l.label_placement().opacity, 0.0);
    }

    #[test]
    fn test_left_direction_rests_at_right_edge() {
        let s = TriggerSliderSettings::new()
            .with_slide_direction(SlideDirection::Left)
            .with_handle_h_padding(10.0);
        let rest = SliderLayout::handle_rest_rect(&s, BOUNDS);
        assert_eq!(rest, Rect::new(250.0, 0.0, 40.0, 40.0));

        let l = SliderLayout::compute(&s, BOUNDS, -100.0, Size::ZERO);
        assert_eq!(l.handle.left(), 150.0);
    }

    #[test]
    fn test_layout_follows_bounds_origin() {
        let s = TriggerSliderSettings::new();
        let bounds = Rect::new(20.0, 30.0, 200.0, 60.0);
        let l = SliderLayout::compute(&s, bounds, 0.0, Size::ZERO);

        assert_eq!(l.handle.origin, Point::new(20.0, 30.0));
        assert_eq!(l.track.left(), 20.0);
    }

    #[test]
    fn test_label_limited_to_content() {
        let s = TriggerSliderSettings::new();
        let l = SliderLayout::compute(&s, BOUNDS, 0.0, Size::new(500.0, 90.0));
        assert_eq!(l.label, l.content);
    }
}
