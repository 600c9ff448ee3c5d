//! The type-erased `Vehicle` wrapper.
//!
//! Instead of a `Box<dyn Accelerate>` (heap allocation plus a vtable), a
//! `Vehicle` keeps the payload in an inline buffer and remembers two plain
//! function pointers monomorphized for the payload's concrete type: one that
//! forwards `accelerate`, one that drops the payload in place.
//!
//! The shims receive the buffer address when they are called. Nothing captures
//! an address at construction time, so a `Vehicle` can be moved freely (into a
//! `Vec`, across a reallocation, out of a function) and still dispatch to the
//! value it owns.

use std::fmt;
use std::marker::PhantomData;
use std::mem;

use log::{debug, trace};

use crate::storage::{InlineStorage, DEFAULT_CAPACITY};

/// Result of one `accelerate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedChange {
    pub vehicle: &'static str,
    pub delta: i32,
}

impl fmt::Display for SpeedChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} increasing speed by {}", self.vehicle, self.delta)
    }
}

/// The capability a payload must provide to be wrapped in a [`Vehicle`].
pub trait Accelerate {
    fn accelerate(&self, x: i32) -> SpeedChange;
}

/// Forwards to `T::accelerate` on the value stored at `ptr`.
///
/// # Safety
/// `ptr` must point to a live, properly aligned `T`.
unsafe fn accelerate_shim<T: Accelerate>(ptr: *const u8, x: i32) -> SpeedChange {
    (*ptr.cast::<T>()).accelerate(x)
}

/// Drops the `T` stored at `ptr`.
///
/// # Safety
/// `ptr` must point to a live, properly aligned `T` that is not used again.
unsafe fn drop_shim<T>(ptr: *mut u8) {
    std::ptr::drop_in_place(ptr.cast::<T>());
}

/// Owns one payload of any `Accelerate` type, stored inline.
pub struct Vehicle {
    storage: InlineStorage<DEFAULT_CAPACITY>,
    accelerate_fn: unsafe fn(*const u8, i32) -> SpeedChange,
    drop_fn: unsafe fn(*mut u8),
    // The payload type is erased, so thread-safety cannot be claimed.
    _not_send_sync: PhantomData<*const ()>,
}

impl Vehicle {
    /// Inline capacity in bytes.
    pub const CAPACITY: usize = DEFAULT_CAPACITY;

    /// Moves `payload` into a new wrapper.
    ///
    /// Payloads larger than [`Vehicle::CAPACITY`] are rejected at compile time:
    ///
    /// ```compile_fail
    /// use inline_erasure::{Accelerate, SpeedChange, Vehicle};
    ///
    /// struct Freighter([u8; 65]);
    ///
    /// impl Accelerate for Freighter {
    ///     fn accelerate(&self, x: i32) -> SpeedChange {
    ///         SpeedChange { vehicle: "freighter", delta: x }
    ///     }
    /// }
    ///
    /// let _ = Vehicle::new(Freighter([0; 65]));
    /// ```
    ///
    /// So are payloads aligned beyond 16 bytes:
    ///
    /// ```compile_fail
    /// use inline_erasure::{Accelerate, SpeedChange, Vehicle};
    ///
    /// #[repr(align(32))]
    /// struct Rocket;
    ///
    /// impl Accelerate for Rocket {
    ///     fn accelerate(&self, x: i32) -> SpeedChange {
    ///         SpeedChange { vehicle: "rocket", delta: x }
    ///     }
    /// }
    ///
    /// let _ = Vehicle::new(Rocket);
    /// ```
    pub fn new<T>(payload: T) -> Self
    where
        T: Accelerate + 'static,
    {
        debug!(
            "wrapping {} ({} of {} bytes)",
            std::any::type_name::<T>(),
            mem::size_of::<T>(),
            Self::CAPACITY
        );

        Vehicle {
            storage: InlineStorage::new(payload),
            accelerate_fn: accelerate_shim::<T>,
            drop_fn: drop_shim::<T>,
            _not_send_sync: PhantomData,
        }
    }

    /// Calls the wrapped payload's `accelerate`.
    pub fn accelerate(&self, x: i32) -> SpeedChange {
        // SAFETY: accelerate_fn was instantiated for the type written into
        // storage, and that value stays alive until drop.
        let change = unsafe { (self.accelerate_fn)(self.storage.as_ptr(), x) };
        trace!("dispatched accelerate({x}) -> {change}");
        change
    }
}

impl Drop for Vehicle {
    fn drop(&mut self) {
        // SAFETY: drop_fn matches the stored type; Drop runs at most once.
        unsafe { (self.drop_fn)(self.storage.as_mut_ptr()) };
    }
}

impl fmt::Debug for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vehicle")
            .field("capacity", &Self::CAPACITY)
            .finish_non_exhaustive()
    }
}
