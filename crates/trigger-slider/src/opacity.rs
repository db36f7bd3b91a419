//! Label fade derived from the handle offset.

/// Opacity of the label for a handle displaced by `offset_x` on a track
/// `total_width` wide.
///
/// Fully opaque (1.0) at rest, falling linearly to 0.0 when the handle has
/// moved half the track width in either direction, and negative beyond that.
/// The result is not clamped; renderers clamp it to `[0, 1]`.
///
/// A track with no usable width (zero, negative, NaN or infinite) has no
/// meaningful fade, so the label stays fully opaque.
///
/// # Example
///
/// ```
/// use trigger_slider::label_opacity;
///
/// assert_eq!(label_opacity(0.0, 300.0), 1.0);
/// assert_eq!(label_opacity(75.0, 300.0), 0.5);
/// assert_eq!(label_opacity(-150.0, 300.0), 0.0);
/// assert_eq!(label_opacity(20.0, 0.0), 1.0);
/// ```
#[inline]
pub fn label_opacity(offset_x: f32, total_width: f32) -> f32 {
    if !total_width.is_finite() || total_width <= 0.0 {
        return 1.0;
    }
    let half_width = total_width / 2.0;
    (half_width - offset_x.abs()) / half_width
}
