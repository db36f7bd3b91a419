//! Error types for the slider crate.
//!
//! The drag logic itself never fails. Errors only arise when a caller asks for
//! strict validation of the settings a control is built from.

use thiserror::Error;

/// A settings field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryField {
    HandleHeight,
    HandleWidth,
    HandleHPadding,
    HandleVPadding,
}

impl GeometryField {
    /// Name of the field as it appears on [`TriggerSliderSettings`](crate::TriggerSliderSettings).
    pub fn name(self) -> &'static str {
        match self {
            Self::HandleHeight => "handle_height",
            Self::HandleWidth => "handle_width",
            Self::HandleHPadding => "handle_h_padding",
            Self::HandleVPadding => "handle_v_padding",
        }
    }
}

impl std::fmt::Display for GeometryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors produced by [`TriggerSliderSettings::validate`](crate::TriggerSliderSettings::validate).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// A geometry value is below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: GeometryField, value: f32 },

    /// A geometry value is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: GeometryField, value: f32 },
}

impl SettingsError {
    /// The field that failed validation.
    pub fn field(&self) -> GeometryField {
        match self {
            Self::Negative { field, .. } | Self::NonFinite { field, .. } => *field,
        }
    }
}

/// Errors that can occur while constructing a slider.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliderError {
    /// The settings were rejected.
    #[error("invalid slider settings: {0}")]
    Settings(#[from] SettingsError),
}

/// Result type for slider construction.
pub type SliderResult<T> = Result<T, SliderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_messages() {
        let err = SettingsError::Negative {
            field: GeometryField::HandleWidth,
            value: -4.0,
        };
        assert_eq!(err.to_string(), "handle_width must not be negative, got -4");
        assert_eq!(err.field(), GeometryField::HandleWidth);

        let err = SettingsError::NonFinite {
            field: GeometryField::HandleVPadding,
            value: f32::INFINITY,
        };
        assert_eq!(err.to_string(), "handle_v_padding must be finite, got inf");
    }

    #[test]
    fn test_slider_error_wraps_settings_error() {
        let inner = SettingsError::Negative {
            field: GeometryField::HandleHeight,
            value: -1.0,
        };
        let err: SliderError = inner.clone().into();
        assert_eq!(err, SliderError::Settings(inner));
        assert_eq!(
            err.to_string(),
            "invalid slider settings: handle_height must not be negative, got -1"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
