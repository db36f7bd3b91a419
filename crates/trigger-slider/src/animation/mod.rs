//! Animation support for the handle's return to rest.
//!
//! The controller only ever sets a target offset. Making the handle glide
//! there is a rendering concern handled by [`OffsetTransition`], which the
//! host samples once per frame.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use trigger_slider::animation::{Easing, OffsetTransition};
//!
//! let mut transition = OffsetTransition::new()
//!     .with_duration(Duration::from_millis(200))
//!     .with_easing(Easing::Linear);
//!
//! let start = Instant::now();
//! transition.start_at(120.0, 0.0, start);
//! assert_eq!(transition.sample(start + Duration::from_millis(100)), 60.0);
//! assert_eq!(transition.sample(start + Duration::from_millis(250)), 0.0);
//! assert!(!transition.is_running());
//! ```

mod easing;
mod transition;

pub use easing::{ease, lerp_eased, Easing};
pub use transition::{OffsetTransition, DEFAULT_RESET_DURATION};
