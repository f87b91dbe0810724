//! Integer operand widening for the comparison macros.
//!
//! The traits are sealed and implemented for a fixed set of integer widths,
//! so floats, 128-bit integers and pointers are rejected at compile time.
//!
//! - [`EqualOperand`]: every supported integer and `bool`. Signed values are
//!   sign-extended, then reinterpreted as `u64`, so `-1i32` and `u64::MAX`
//!   compare equal.
//! - [`UnsignedOperand`]: unsigned types only, widened losslessly to `u64`.
//! - [`SignedOperand`]: signed types only, widened losslessly to `i64`.
//!
//! Keeping the ordering traits disjoint means a signed value can never be
//! silently reinterpreted by `test_le_u!`, nor an unsigned one by `test_le_s!`.

mod sealed {
    pub trait Sealed {}
}

/// Operand accepted by `test_equal!`.
pub trait EqualOperand: sealed::Sealed + Copy {
    /// The operand as a 64-bit pattern.
    fn to_u64_bits(self) -> u64;
}

/// Operand accepted by `test_le_u!`.
pub trait UnsignedOperand: sealed::Sealed + Copy {
    fn widen(self) -> u64;
}

/// Operand accepted by `test_le_s!`.
pub trait SignedOperand: sealed::Sealed + Copy {
    fn widen(self) -> i64;
}

macro_rules! unsigned_operand {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl UnsignedOperand for $ty {
            #[inline]
            #[allow(clippy::cast_lossless, reason = "usize has no From impl for u64")]
            fn widen(self) -> u64 {
                self as u64
            }
        }

        impl EqualOperand for $ty {
            #[inline]
            fn to_u64_bits(self) -> u64 {
                UnsignedOperand::widen(self)
            }
        }
    )*};
}

macro_rules! signed_operand {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl SignedOperand for $ty {
            #[inline]
            #[allow(clippy::cast_lossless, reason = "isize has no From impl for i64")]
            fn widen(self) -> i64 {
                self as i64
            }
        }

        impl EqualOperand for $ty {
            #[inline]
            #[allow(clippy::cast_sign_loss, reason = "two's-complement reinterpretation")]
            fn to_u64_bits(self) -> u64 {
                SignedOperand::widen(self) as u64
            }
        }
    )*};
}

unsigned_operand!(u8, u16, u32, u64, usize);
signed_operand!(i8, i16, i32, i64, isize);

impl sealed::Sealed for bool {}

impl EqualOperand for bool {
    #[inline]
    fn to_u64_bits(self) -> u64 {
        u64::from(self)
    }
}
