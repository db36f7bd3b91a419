//! Timed transition of a single offset value.

use std::time::{Duration, Instant};

use trigger_slider_core::logging::targets;

use super::easing::{lerp_eased, Easing};

/// Default duration of the spring-back to rest.
pub const DEFAULT_RESET_DURATION: Duration = Duration::from_millis(250);

/// Eases a displayed offset from one value to another over a fixed duration.
///
/// The transition is driven by the caller's clock: [`sample`](Self::sample)
/// takes the current instant, so frames and tests control time explicitly.
#[derive(Debug, Clone)]
pub struct OffsetTransition {
    easing: Easing,
    duration: Duration,
    from: f32,
    to: f32,
    start_time: Option<Instant>,
}

impl OffsetTransition {
    /// Create an idle transition with default duration and easing.
    pub fn new() -> Self {
        Self {
            easing: Easing::default(),
            duration: DEFAULT_RESET_DURATION,
            from: 0.0,
            to: 0.0,
            start_time: None,
        }
    }

    /// Get the easing curve.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Set the easing curve.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Set easing using builder pattern.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Get the duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Set the duration.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Set duration using builder pattern.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Whether a transition is in progress.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.start_time.is_some()
    }

    /// The value the transition is heading to.
    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Start easing from `from` to `to`, beginning at `now`.
    ///
    /// Returns `false` without starting if the values are equal or the
    /// duration is zero.
    pub fn start_at(&mut self, from: f32, to: f32, now: Instant) -> bool {
        self.from = from;
        self.to = to;
        if from == to || self.duration.is_zero() {
            self.start_time = None;
            return false;
        }

        tracing::trace!(
            target: targets::ANIMATION,
            from,
            to,
            duration_ms = self.duration.as_millis() as u64,
            "offset transition started"
        );
        self.start_time = Some(now);
        true
    }

    /// Stop immediately; subsequent samples return the target.
    pub fn stop(&mut self) {
        self.start_time = None;
    }

    fn progress_at(&self, now: Instant) -> Option<f32> {
        let start_time = self.start_time?;
        let elapsed = now.saturating_duration_since(start_time);
        Some((elapsed.as_secs_f64() / self.duration.as_secs_f64()) as f32)
    }

    /// The displayed value at `now`, without advancing the transition's state.
    pub fn value_at(&self, now: Instant) -> f32 {
        match self.progress_at(now) {
            Some(progress) if progress < 1.0 => lerp_eased(self.easing, self.from, self.to, progress),
            _ => self.to,
        }
    }

    /// The displayed value at `now`.
    ///
    /// Once the duration has elapsed this returns the target and the
    /// transition becomes idle.
    pub fn sample(&mut self, now: Instant) -> f32 {
        if self.progress_at(now).is_some_and(|progress| progress >= 1.0) {
            tracing::trace!(target: targets::ANIMATION, to = self.to, "offset transition finished");
            self.start_time = None;
        }
        self.value_at(now)
    }
}

impl Default for OffsetTransition {
    fn default() -> Self {
        Self::new()
    }
}
