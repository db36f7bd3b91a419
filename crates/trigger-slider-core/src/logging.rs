//! Logging facilities for Trigger Slider.
//!
//! Trigger Slider is instrumented with the `tracing` crate and never installs a
//! subscriber itself. To see its output, install one in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("trigger_slider=debug")
//!     .init();
//! ```
//!
//! Per-event updates (every drag move) log at `trace`, gesture state
//! transitions and ignored calls at `debug`, sanitized configuration at `warn`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "trigger_slider_core::signal";
    /// Performance spans.
    pub const PERF: &str = "trigger_slider::perf";
    /// Drag controller (offset updates, commit/reset decisions).
    pub const CONTROLLER: &str = "trigger_slider::controller";
    /// Pointer-to-drag recognition.
    pub const GESTURE: &str = "trigger_slider::gesture";
    /// Reset transition.
    pub const ANIMATION: &str = "trigger_slider::animation";
    /// Settings validation and sanitizing.
    pub const SETTINGS: &str = "trigger_slider::settings";
    /// Widget composition and painting.
    pub const WIDGET: &str = "trigger_slider::widget";
}

/// A guard that times an operation while it is alive.
///
/// # Example
///
/// ```
/// use trigger_slider_core::PerfSpan;
///
/// fn paint() {
///     let _span = PerfSpan::new("paint");
///     // ... work ...
/// }
/// # paint();
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a performance span for `name`.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "trigger_slider::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
