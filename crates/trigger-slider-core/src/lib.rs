//! Core reactive primitives for Trigger Slider.
//!
//! This crate provides the small observer layer the slider control is built on:
//!
//! - **Property System**: [`Property<T>`], a change-detecting value cell
//! - **Signal/Slot System**: [`Signal<Args>`], a list of connected callbacks
//!   invoked synchronously on emit
//! - **Logging**: tracing targets and [`PerfSpan`] for timing hot paths
//!
//! # Example
//!
//! ```
//! use trigger_slider_core::{Property, Signal};
//!
//! struct Offset {
//!     value: Property<f32>,
//!     changed: Signal<f32>,
//! }
//!
//! let offset = Offset {
//!     value: Property::new(0.0),
//!     changed: Signal::new(),
//! };
//!
//! offset.changed.connect(|v| println!("offset is now {v}"));
//!
//! if offset.value.set(12.5) {
//!     offset.changed.emit(12.5);
//! }
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::PerfSpan;
pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
