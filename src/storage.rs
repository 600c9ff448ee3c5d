//! Fixed-capacity inline byte storage.
//!
//! `InlineStorage<N>` is the Rust counterpart of an aligned byte buffer that a
//! value gets placement-constructed into. It knows nothing about the type it
//! holds: it never reads, clones or drops the value. Whoever writes a value in
//! is responsible for dropping it through the matching typed pointer.

use std::cell::UnsafeCell;
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};

/// Default inline capacity in bytes.
pub const DEFAULT_CAPACITY: usize = 64;

/// Alignment of every `InlineStorage`. Payloads with a stricter alignment are
/// rejected at compile time.
pub const STORAGE_ALIGN: usize = 16;

/// Evaluated once per `(T, N)` pair. Referencing `OK` from a generic function
/// turns an oversized payload into a compile error instead of a runtime one.
struct AssertFits<T, const N: usize>(PhantomData<T>);

impl<T, const N: usize> AssertFits<T, N> {
    const OK: () = {
        assert!(
            mem::size_of::<T>() <= N,
            "payload does not fit in the inline storage"
        );
        assert!(
            mem::align_of::<T>() <= STORAGE_ALIGN,
            "payload is over-aligned for the inline storage"
        );
    };
}

/// `N` bytes of uninitialized, 16-byte aligned memory.
///
/// The bytes live in an `UnsafeCell`: a payload may mutate itself through
/// `&self` (`Cell`, `RefCell`), and the pointer handed out by `as_ptr` must
/// carry write permission for that.
#[repr(C, align(16))]
pub struct InlineStorage<const N: usize> {
    bytes: UnsafeCell<[MaybeUninit<u8>; N]>,
}

impl<const N: usize> InlineStorage<N> {
    /// Capacity in bytes.
    pub const CAPACITY: usize = N;

    /// Moves `value` into a fresh buffer.
    ///
    /// The value is not dropped when the storage is; read it back or drop it
    /// in place through a `*mut T` obtained from [`as_mut_ptr`](Self::as_mut_ptr).
    ///
    /// ```compile_fail
    /// use inline_erasure::storage::InlineStorage;
    ///
    /// let _ = InlineStorage::<8>::new([0u8; 9]);
    /// ```
    pub fn new<T>(value: T) -> Self {
        let () = AssertFits::<T, N>::OK;

        let mut storage = Self {
            bytes: UnsafeCell::new([MaybeUninit::uninit(); N]),
        };
        // SAFETY: the buffer is at least size_of::<T>() bytes and aligned to
        // STORAGE_ALIGN >= align_of::<T>(), both checked above.
        unsafe { storage.as_mut_ptr().cast::<T>().write(value) };
        storage
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.get().cast::<u8>().cast_const()
    }

    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.bytes.get_mut().as_mut_ptr().cast()
    }
}
