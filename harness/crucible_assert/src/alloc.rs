//! Zero-initialized allocation with a failure policy.
//!
//! [`alloc_into`] backs `assert_alloc!` and `assert_alloc_weak!`. The
//! destination is an `Option<Vec<T>>` that must be `None` on entry, so a
//! buffer already held by the case is never silently replaced. A zero count
//! leaves the destination `None` without touching the allocator, matching
//! the convention that empty inputs need no backing storage.
//!
//! # Allocators
//!
//! - [`SystemAllocator`]: the global heap, with fallible reservation.
//! - [`BudgetAllocator`]: a fixed byte budget shared by every allocation made
//!   through it, for exercising constrained-memory paths.
//! - [`FailingAllocator`]: never succeeds.

use std::mem::size_of;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::error::{CaseResult, Location};
use crate::report;

/// Element types that have an all-zero value.
pub trait Zeroed: Clone {
    fn zeroed() -> Self;
}

macro_rules! zeroed_int {
    ($($ty:ty),*) => {$(
        impl Zeroed for $ty {
            #[inline]
            fn zeroed() -> Self {
                0
            }
        }
    )*};
}

zeroed_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Zeroed for bool {
    #[inline]
    fn zeroed() -> Self {
        false
    }
}

impl<T: Zeroed, const N: usize> Zeroed for [T; N] {
    fn zeroed() -> Self {
        std::array::from_fn(|_| T::zeroed())
    }
}

/// Source of zero-initialized buffers.
///
/// Returns `None` when the request cannot be satisfied, including when
/// `count * size_of::<T>()` overflows or is zero for a non-zero `count`.
pub trait Allocator {
    fn calloc<T: Zeroed>(&self, count: usize) -> Option<Vec<T>>;
}

impl<A: Allocator> Allocator for &A {
    fn calloc<T: Zeroed>(&self, count: usize) -> Option<Vec<T>> {
        (**self).calloc(count)
    }
}

/// Allocates from the global heap.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAllocator;

impl Allocator for SystemAllocator {
    fn calloc<T: Zeroed>(&self, count: usize) -> Option<Vec<T>> {
        if count == 0 {
            return Some(Vec::new());
        }
        let bytes = count.checked_mul(size_of::<T>())?;
        // A non-empty request for zero bytes has no storage to hand out.
        if bytes == 0 {
            return None;
        }
        // Fails cleanly on exhaustion; the zeroed buffer below would abort.
        Vec::<T>::new().try_reserve_exact(count).ok()?;
        // `vec!` with an all-zero element maps zeroed pages instead of
        // writing every element.
        let buf = vec![T::zeroed(); count];
        tracing::trace!(count, bytes, "allocated zeroed buffer");
        Some(buf)
    }
}

#[derive(Debug, Default)]
struct BudgetState {
    used: usize,
    calls: usize,
}

/// Allocator with a fixed byte budget.
///
/// Every successful allocation is charged against the budget for the
/// lifetime of the allocator; dropping a buffer does not refund it. A
/// request that would exceed the remaining budget fails.
#[derive(Debug)]
pub struct BudgetAllocator {
    limit: usize,
    state: Mutex<BudgetState>,
}

impl BudgetAllocator {
    pub fn new(limit: usize) -> Self {
        BudgetAllocator {
            limit,
            state: Mutex::new(BudgetState::default()),
        }
    }

    /// Bytes handed out so far.
    pub fn used(&self) -> usize {
        self.state.lock().used
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.limit - self.used()
    }

    /// Number of `calloc` calls, successful or not.
    pub fn calls(&self) -> usize {
        self.state.lock().calls
    }
}

impl Allocator for BudgetAllocator {
    fn calloc<T: Zeroed>(&self, count: usize) -> Option<Vec<T>> {
        let mut state = self.state.lock();
        state.calls += 1;
        let bytes = count.checked_mul(size_of::<T>())?;
        let used = state.used.checked_add(bytes).filter(|&u| u <= self.limit);
        let Some(used) = used else {
            tracing::trace!(bytes, limit = self.limit, "budget exhausted");
            return None;
        };
        let buf = SystemAllocator.calloc(count)?;
        state.used = used;
        Some(buf)
    }
}

/// Allocator that always fails.
#[derive(Debug, Default)]
pub struct FailingAllocator {
    calls: AtomicUsize,
}

impl FailingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `calloc` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Allocator for FailingAllocator {
    fn calloc<T: Zeroed>(&self, _count: usize) -> Option<Vec<T>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        None
    }
}

/// What an allocation failure means for the case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnFailure {
    /// The case fails (`assert_alloc!`).
    Fail,
    /// The case is skipped (`assert_alloc_weak!`).
    Skip,
}

/// Allocate `count` zeroed elements into `dest`.
///
/// `dest_text` is the source text of the destination, used to build the
/// condition shown when the case stops.
pub fn alloc_into<T: Zeroed, A: Allocator>(
    allocator: &A,
    dest: &mut Option<Vec<T>>,
    count: usize,
    on_failure: OnFailure,
    dest_text: &'static str,
    location: Location,
) -> CaseResult {
    if dest.is_some() {
        return Err(report::fail_at(format!("{dest_text}.is_none()"), location));
    }
    if count == 0 {
        return Ok(());
    }
    match allocator.calloc(count) {
        Some(buf) => {
            *dest = Some(buf);
            Ok(())
        }
        None => {
            tracing::trace!(dest = dest_text, count, ?on_failure, "allocation failed");
            let condition = format!("{dest_text}.is_some()");
            Err(match on_failure {
                OnFailure::Fail => report::fail_at(condition, location),
                OnFailure::Skip => report::skip_at(condition, location),
            })
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
