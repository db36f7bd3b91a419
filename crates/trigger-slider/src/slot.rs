//! Pluggable content for the handle, label and track.
//!
//! The slider never looks inside the content it is given. It only decides
//! where each piece goes and how opaque it is, then asks the piece to paint
//! itself into the host's paint context `C`.
//!
//! Any closure `Fn(&mut C, SlotPlacement)` is a [`Renderable`]:
//!
//! ```
//! use trigger_slider::{Rect, Renderable, SlotPlacement};
//!
//! let mut drawn = Vec::new();
//! let handle = |ctx: &mut Vec<Rect>, placement: SlotPlacement| ctx.push(placement.rect);
//!
//! handle.paint(&mut drawn, SlotPlacement::new(Rect::new(0.0, 0.0, 40.0, 40.0)));
//! assert_eq!(drawn.len(), 1);
//! ```

use crate::geometry::{Rect, Size};

/// Where and how a slot should be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPlacement {
    /// Target rectangle in the slider's coordinate space.
    pub rect: Rect,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

impl SlotPlacement {
    /// A fully opaque placement.
    pub fn new(rect: Rect) -> Self {
        Self { rect, opacity: 1.0 }
    }

    /// Set opacity using builder pattern; clamped to `[0, 1]`.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        self
    }

    /// Whether drawing this placement would show anything.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && !self.rect.size.is_empty()
    }
}

/// Content the host knows how to draw into a paint context `C`.
pub trait Renderable<C> {
    /// Preferred size within `available`. Defaults to filling it.
    fn size_hint(&self, available: Size) -> Size {
        available
    }

    /// Draw the content at `placement`.
    fn paint(&self, ctx: &mut C, placement: SlotPlacement);
}

impl<C, F> Renderable<C> for F
where
    F: Fn(&mut C, SlotPlacement),
{
    fn paint(&self, ctx: &mut C, placement: SlotPlacement) {
        self(ctx, placement)
    }
}

/// Wraps a renderable with a fixed preferred size.
///
/// Useful for labels, which are centered at their natural size rather than
/// stretched across the track.
#[derive(Debug, Clone)]
pub struct SizedSlot<R> {
    inner: R,
    size: Size,
}

impl<R> SizedSlot<R> {
    pub fn new(inner: R, size: Size) -> Self {
        Self { inner, size }
    }
}

impl<C, R: Renderable<C>> Renderable<C> for SizedSlot<R> {
    fn size_hint(&self, available: Size) -> Size {
        Size::new(
            self.size.width.min(available.width),
            self.size.height.min(available.height),
        )
    }

    fn paint(&self, ctx: &mut C, placement: SlotPlacement) {
        self.inner.paint(ctx, placement);
    }
}
