//! Slider geometry and direction settings.
//!
//! [`TriggerSliderSettings`] is an immutable description of the handle's size,
//! its inset from the track edges, and which way the handle travels. A control
//! reads it but never changes it after construction.
//!
//! # Example
//!
//! ```
//! use trigger_slider::{SlideDirection, TriggerSliderSettings};
//!
//! let settings = TriggerSliderSettings::new()
//!     .with_handle_v_padding(5.0)
//!     .with_slide_direction(SlideDirection::Left);
//!
//! // 300 wide track, 40 wide handle, no horizontal padding
//! assert_eq!(settings.travel(300.0), 260.0);
//! ```

use trigger_slider_core::logging::targets;

use crate::error::{GeometryField, SettingsError};

/// Default handle height.
pub const DEFAULT_HANDLE_HEIGHT: f32 = 40.0;

/// Default handle width.
pub const DEFAULT_HANDLE_WIDTH: f32 = 40.0;

/// The edge the handle rests at and the direction that counts as progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SlideDirection {
    /// Handle rests at the right edge and progresses leftward (negative offsets).
    Left,
    /// Handle rests at the left edge and progresses rightward (positive offsets).
    #[default]
    Right,
}

impl SlideDirection {
    /// Sign of offsets that move the handle toward the far edge.
    #[inline]
    pub fn progress_sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Geometry and direction of a trigger slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerSliderSettings {
    /// Height of the handle.
    pub handle_height: f32,
    /// Width of the handle.
    pub handle_width: f32,
    /// Horizontal inset of the handle from the track edges.
    pub handle_h_padding: f32,
    /// Vertical inset of the handle from the track edges.
    pub handle_v_padding: f32,
    /// Which edge the handle starts at.
    pub slide_direction: SlideDirection,
}

impl Default for TriggerSliderSettings {
    fn default() -> Self {
        Self {
            handle_height: DEFAULT_HANDLE_HEIGHT,
            handle_width: DEFAULT_HANDLE_WIDTH,
            handle_h_padding: 0.0,
            handle_v_padding: 0.0,
            slide_direction: SlideDirection::Right,
        }
    }
}

impl TriggerSliderSettings {
    /// Create settings with the defaults: a 40x40 handle, no padding, sliding right.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set handle height using builder pattern.
    pub fn with_handle_height(mut self, height: f32) -> Self {
        self.handle_height = height;
        self
    }

    /// Set handle width using builder pattern.
    pub fn with_handle_width(mut self, width: f32) -> Self {
        self.handle_width = width;
        self
    }

    /// Set horizontal padding using builder pattern.
    pub fn with_handle_h_padding(mut self, padding: f32) -> Self {
        self.handle_h_padding = padding;
        self
    }

    /// Set vertical padding using builder pattern.
    pub fn with_handle_v_padding(mut self, padding: f32) -> Self {
        self.handle_v_padding = padding;
        self
    }

    /// Set slide direction using builder pattern.
    pub fn with_slide_direction(mut self, direction: SlideDirection) -> Self {
        self.slide_direction = direction;
        self
    }

    /// Maximum distance the handle may move from rest to the far edge of a
    /// track `total_width` wide.
    ///
    /// Not clamped: a track narrower than the padded handle yields a negative
    /// travel.
    #[inline]
    pub fn travel(&self, total_width: f32) -> f32 {
        total_width - self.handle_width - self.handle_h_padding * 2.0
    }

    fn geometry(&self) -> [(GeometryField, f32); 4] {
        [
            (GeometryField::HandleHeight, self.handle_height),
            (GeometryField::HandleWidth, self.handle_width),
            (GeometryField::HandleHPadding, self.handle_h_padding),
            (GeometryField::HandleVPadding, self.handle_v_padding),
        ]
    }

    /// Check that every geometry value is finite and non-negative.
    ///
    /// Reports the first offending field in declaration order.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in self.geometry() {
            if !value.is_finite() {
                return Err(SettingsError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(SettingsError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Return a copy with every negative or non-finite geometry value replaced
    /// by zero.
    ///
    /// Each replaced field is logged at warn level.
    pub fn sanitized(self) -> Self {
        let fix = |field: GeometryField, value: f32| {
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                tracing::warn!(
                    target: targets::SETTINGS,
                    field = field.name(),
                    value,
                    "invalid slider geometry replaced with 0"
                );
                0.0
            }
        };

        Self {
            handle_height: fix(GeometryField::HandleHeight, self.handle_height),
            handle_width: fix(GeometryField::HandleWidth, self.handle_width),
            handle_h_padding: fix(GeometryField::HandleHPadding, self.handle_h_padding),
            handle_v_padding: fix(GeometryField::HandleVPadding, self.handle_v_padding),
            slide_direction: self.slide_direction,
        }
    }
}
