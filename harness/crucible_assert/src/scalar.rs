//! Scalar selection helpers.
//!
//! Plain functions, so each argument is evaluated exactly once.

/// The smaller of `x` and `y`; `y` when they compare equal or are unordered.
#[inline]
pub fn min<T: PartialOrd>(x: T, y: T) -> T {
    if x < y {
        x
    } else {
        y
    }
}

/// The larger of `x` and `y`; `y` when they compare equal or are unordered.
#[inline]
pub fn max<T: PartialOrd>(x: T, y: T) -> T {
    if x > y {
        x
    } else {
        y
    }
}
