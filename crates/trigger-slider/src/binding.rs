//! Observable handle offset shared between a slider and its host.
//!
//! [`OffsetBinding`] is a cheaply cloneable handle to one offset value. The
//! slider's controller is its only writer during a gesture; the host may read
//! it, subscribe to it, and set it (for example back to zero after handling a
//! confirmation).
//!
//! # Example
//!
//! ```
//! use trigger_slider::OffsetBinding;
//!
//! let offset = OffsetBinding::new(0.0);
//! let host_copy = offset.clone();
//!
//! host_copy.changed().connect(|change| {
//!     println!("{} -> {} (animated: {})", change.old, change.new, change.animated);
//! });
//!
//! offset.set(120.0);
//! assert_eq!(host_copy.get(), 120.0);
//! ```

use std::fmt;
use std::sync::Arc;

use trigger_slider_core::{Property, ReadOnlyProperty, Signal};

/// A change of the offset value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetChange {
    /// Value before the change.
    pub old: f32,
    /// Value after the change.
    pub new: f32,
    /// Whether renderers should ease from `old` to `new` instead of jumping.
    pub animated: bool,
}

struct OffsetInner {
    value: Property<f32>,
    changed: Signal<OffsetChange>,
}

/// Shared, observable horizontal offset of a slider handle.
///
/// Clones refer to the same value.
#[derive(Clone)]
pub struct OffsetBinding {
    inner: Arc<OffsetInner>,
}

impl OffsetBinding {
    /// Create a binding holding `initial`.
    pub fn new(initial: f32) -> Self {
        Self {
            inner: Arc::new(OffsetInner {
                value: Property::new(initial),
                changed: Signal::new(),
            }),
        }
    }

    /// Current offset.
    #[inline]
    pub fn get(&self) -> f32 {
        self.inner.value.get()
    }

    /// Read-only view of the underlying property.
    pub fn as_read_only(&self) -> ReadOnlyProperty<'_, f32> {
        ReadOnlyProperty::new(&self.inner.value)
    }

    /// Set the offset immediately.
    ///
    /// Returns `true` and emits [`changed`](Self::changed) if the value differs.
    pub fn set(&self, value: f32) -> bool {
        self.write(value, false)
    }

    /// Set the offset and ask renderers to ease toward it.
    ///
    /// The stored value is the target as soon as this returns; only the
    /// displayed position is animated.
    pub fn animate_to(&self, target: f32) -> bool {
        self.write(target, true)
    }

    /// Signal emitted after every change of the value.
    pub fn changed(&self) -> &Signal<OffsetChange> {
        &self.inner.changed
    }

    /// Whether two handles refer to the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn write(&self, value: f32, animated: bool) -> bool {
        match self.inner.value.replace(value) {
            Some(old) => {
                self.inner.changed.emit(OffsetChange {
                    old,
                    new: value,
                    animated,
                });
                true
            }
            None => false,
        }
    }
}

impl Default for OffsetBinding {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Debug for OffsetBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OffsetBinding")
            .field("value", &self.get())
            .field("observers", &self.inner.changed.connection_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(OffsetBinding: Send, Sync);
