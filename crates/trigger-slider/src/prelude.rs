//! Commonly used types.
//!
//! ```ignore
//! use trigger_slider::prelude::*;
//! ```

// ============================================================================
// Widget
// ============================================================================

pub use crate::TriggerSlider;
pub use crate::slot::{Renderable, SizedSlot, SlotPlacement};

// ============================================================================
// Controller and Configuration
// ============================================================================

pub use crate::binding::{OffsetBinding, OffsetChange};
pub use crate::controller::{DragOutcome, DragPhase, SlideController};
pub use crate::settings::{SlideDirection, TriggerSliderSettings};

// ============================================================================
// Geometry
// ============================================================================

pub use crate::geometry::{Point, Rect, Size};

// ============================================================================
// Events
// ============================================================================

pub use crate::gesture::{PointerEvent, PointerPhase};
