//! Trigger Slider - a "slide to confirm" control.
//!
//! The user drags a handle along a track; releasing it at the far edge fires
//! a confirmation callback, releasing it anywhere else springs it back. A
//! label centered on the track fades out as the handle approaches it.
//!
//! The crate is split into layers that can be used on their own:
//!
//! - [`SlideController`]: the drag state machine and release decision,
//!   driven by cumulative drag translations.
//! - [`SliderLayout`] and [`label_opacity`]: pure placement math.
//! - [`gesture`]: pointer events to drag gestures.
//! - [`animation`]: the return-to-rest transition.
//! - [`TriggerSlider`]: all of the above behind one widget, painting
//!   caller-supplied handle, label and track content through [`Renderable`].
//!
//! # Example
//!
//! ```
//! use trigger_slider::prelude::*;
//!
//! let offset = OffsetBinding::new(0.0);
//! let mut controller = SlideController::new(
//!     TriggerSliderSettings::new().with_handle_width(40.0),
//!     offset.clone(),
//!     || println!("confirmed"),
//! );
//!
//! controller.on_drag_change(100.0, 300.0);
//! assert_eq!(controller.on_drag_end(100.0, 300.0), DragOutcome::Reset);
//! assert_eq!(offset.get(), 0.0);
//! ```

pub mod animation;
mod binding;
mod controller;
mod error;
mod geometry;
pub mod gesture;
mod layout;
mod opacity;
pub mod prelude;
mod settings;
mod slider;
mod slot;

pub use binding::{OffsetBinding, OffsetChange};
pub use controller::{DragOutcome, DragPhase, ReleaseDecision, SlideController};
pub use error::{GeometryField, SettingsError, SliderError, SliderResult};
pub use geometry::{Point, Rect, Size};
pub use layout::SliderLayout;
pub use opacity::label_opacity;
pub use settings::{
    DEFAULT_HANDLE_HEIGHT, DEFAULT_HANDLE_WIDTH, SlideDirection, TriggerSliderSettings,
};
pub use slider::TriggerSlider;
pub use slot::{Renderable, SizedSlot, SlotPlacement};

/// Reactive primitives the slider is built on.
pub mod reactive {
    pub use trigger_slider_core::*;
}
