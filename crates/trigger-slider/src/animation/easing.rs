//! Easing curves.
//!
//! An easing curve maps linear progress `t` in `[0, 1]` to eased progress.
//! All curves start at 0 and end at 1; [`Easing::EaseOutBack`] briefly
//! overshoots past 1 before settling, which gives the handle a soft landing.

/// Available easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic, starts slow.
    EaseIn,
    /// Quadratic, ends slow.
    #[default]
    EaseOut,
    /// Quadratic, slow at both ends.
    EaseInOut,
    /// Cubic, ends slow (more pronounced than `EaseOut`).
    EaseOutCubic,
    /// Overshoots the target slightly, then settles.
    EaseOutBack,
}

impl Easing {
    /// Apply this curve to `t`, clamped to `[0, 1]` first.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseOutBack => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
        }
    }
}

/// Apply `easing` to progress `t`.
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    easing.apply(t)
}

/// Interpolate from `start` to `end` at eased progress `t`.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * ease(easing, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseOutCubic,
        Easing::EaseOutBack,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(ease(easing, 0.0).abs() < 1e-5, "{easing:?} at 0");
            assert!((ease(easing, 1.0) - 1.0).abs() < 1e-5, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_shape() {
        assert_eq!(ease(Easing::Linear, 0.25), 0.25);
        assert!(ease(Easing::EaseIn, 0.5) < 0.5);
        assert!(ease(Easing::EaseOut, 0.5) > 0.5);
        assert_eq!(ease(Easing::EaseInOut, 0.5), 0.5);
        assert!(ease(Easing::EaseOutCubic, 0.5) > ease(Easing::EaseOut, 0.5));
    }

    #[test]
    fn test_back_overshoots() {
        let peak = (1..100)
            .map(|i| ease(Easing::EaseOutBack, i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_input_clamped() {
        assert_eq!(ease(Easing::Linear, -1.0), 0.0);
        assert_eq!(ease(Easing::Linear, 2.0), 1.0);
    }

    #[test]
    fn test_lerp_eased() {
        assert_eq!(lerp_eased(Easing::Linear, 270.0, 0.0, 0.0), 270.0);
        assert_eq!(lerp_eased(Easing::Linear, 270.0, 0.0, 0.5), 135.0);
        assert_eq!(lerp_eased(Easing::Linear, 270.0, 0.0, 1.0), 0.0);
    }
}
