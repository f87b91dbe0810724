//! Assertion macros.
//!
//! Each macro is a statement. On a problem it returns early from the
//! enclosing function with the [`crate::CaseError`] converted through
//! `From`, so the enclosing function may return any error type that can be
//! built from a `CaseError`.

/// Return early with a case error.
#[doc(hidden)]
#[macro_export]
macro_rules! __bail {
    ($err:expr) => {
        return ::core::result::Result::Err(::core::convert::From::from($err))
    };
}

/// Propagate the `Err` of a reporter call.
#[doc(hidden)]
#[macro_export]
macro_rules! __check {
    ($result:expr) => {
        if let ::core::result::Result::Err(err) = $result {
            $crate::__bail!(err);
        }
    };
}

/// Fail the case unless `cond` holds.
///
/// ```text
/// test_assert!(ctx.key_len() == 32);
/// ```
#[macro_export]
macro_rules! test_assert {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::__bail!($crate::report::fail(
                ::core::stringify!($cond),
                ::core::line!(),
                ::core::file!(),
            ));
        }
    };
}

/// Skip the case unless `cond` holds.
#[macro_export]
macro_rules! test_assume {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::__bail!($crate::report::skip(
                ::core::stringify!($cond),
                ::core::line!(),
                ::core::file!(),
            ));
        }
    };
}

/// Fail the case unless both integer operands are equal after widening to
/// `u64`.
///
/// Signed operands are sign-extended before the reinterpretation, so
/// `test_equal!(-1i32, u64::MAX)` passes. Use operands of the same
/// signedness for a meaningful comparison.
#[macro_export]
macro_rules! test_equal {
    ($left:expr, $right:expr $(,)?) => {
        match ($left, $right) {
            (left, right) => $crate::__check!($crate::report::equal(
                ::core::concat!(::core::stringify!($left), " == ", ::core::stringify!($right)),
                ::core::line!(),
                ::core::file!(),
                $crate::operand::EqualOperand::to_u64_bits(left),
                $crate::operand::EqualOperand::to_u64_bits(right),
            )),
        }
    };
}

/// Fail the case unless `left <= right`; both operands must be unsigned.
#[macro_export]
macro_rules! test_le_u {
    ($left:expr, $right:expr $(,)?) => {
        match ($left, $right) {
            (left, right) => $crate::__check!($crate::report::le_u(
                ::core::concat!(::core::stringify!($left), " <= ", ::core::stringify!($right)),
                ::core::line!(),
                ::core::file!(),
                $crate::operand::UnsignedOperand::widen(left),
                $crate::operand::UnsignedOperand::widen(right),
            )),
        }
    };
}

/// Fail the case unless `left <= right`; both operands must be signed.
#[macro_export]
macro_rules! test_le_s {
    ($left:expr, $right:expr $(,)?) => {
        match ($left, $right) {
            (left, right) => $crate::__check!($crate::report::le_s(
                ::core::concat!(::core::stringify!($left), " <= ", ::core::stringify!($right)),
                ::core::line!(),
                ::core::file!(),
                $crate::operand::SignedOperand::widen(left),
                $crate::operand::SignedOperand::widen(right),
            )),
        }
    };
}

/// Allocate `count` zeroed elements into `dest: Option<Vec<T>>`, failing
/// the case if the allocation fails.
///
/// `dest` must be `None` beforehand. A zero `count` leaves it `None`. The
/// optional third argument selects the [`crate::Allocator`]; the default is
/// [`crate::SystemAllocator`].
#[macro_export]
macro_rules! assert_alloc {
    ($dest:expr, $count:expr $(,)?) => {
        $crate::assert_alloc!($dest, $count, $crate::SystemAllocator)
    };
    ($dest:expr, $count:expr, $allocator:expr $(,)?) => {
        $crate::__check!($crate::alloc::alloc_into(
            &$allocator,
            &mut $dest,
            $count,
            $crate::alloc::OnFailure::Fail,
            ::core::stringify!($dest),
            $crate::Location::new(::core::file!(), ::core::line!()),
        ))
    };
}

/// Like [`assert_alloc!`], but an allocation failure skips the case.
#[macro_export]
macro_rules! assert_alloc_weak {
    ($dest:expr, $count:expr $(,)?) => {
        $crate::assert_alloc_weak!($dest, $count, $crate::SystemAllocator)
    };
    ($dest:expr, $count:expr, $allocator:expr $(,)?) => {
        $crate::__check!($crate::alloc::alloc_into(
            &$allocator,
            &mut $dest,
            $count,
            $crate::alloc::OnFailure::Skip,
            ::core::stringify!($dest),
            $crate::Location::new(::core::file!(), ::core::line!()),
        ))
    };
}

/// Fail the case unless two byte buffers are identical.
///
/// Two forms:
///
/// ```text
/// assert_compare!(output, expected);                  // whole buffers
/// assert_compare!(output, out_len, expected, exp_len); // explicit lengths
/// ```
///
/// The lengths are compared first; bytes are only compared when the common
/// length is non-zero.
#[macro_export]
macro_rules! assert_compare {
    ($lhs:expr, $rhs:expr $(,)?) => {
        match (&$lhs, &$rhs) {
            (lhs, rhs) => {
                let lhs = $crate::compare::bytes_of(lhs);
                let rhs = $crate::compare::bytes_of(rhs);
                $crate::__check!($crate::compare::compare_buffers(
                    ::core::concat!(
                        ::core::stringify!($lhs),
                        ".len() == ",
                        ::core::stringify!($rhs),
                        ".len()"
                    ),
                    ::core::concat!(::core::stringify!($lhs), " == ", ::core::stringify!($rhs)),
                    $crate::Location::new(::core::file!(), ::core::line!()),
                    lhs,
                    lhs.len(),
                    rhs,
                    rhs.len(),
                ))
            }
        }
    };
    ($lhs:expr, $lhs_len:expr, $rhs:expr, $rhs_len:expr $(,)?) => {
        match (&$lhs, $lhs_len, &$rhs, $rhs_len) {
            (lhs, lhs_len, rhs, rhs_len) => $crate::__check!($crate::compare::compare_buffers(
                ::core::concat!(::core::stringify!($lhs_len), " == ", ::core::stringify!($rhs_len)),
                ::core::concat!(
                    ::core::stringify!($lhs),
                    "[..",
                    ::core::stringify!($lhs_len),
                    "] == ",
                    ::core::stringify!($rhs),
                    "[..",
                    ::core::stringify!($rhs_len),
                    "]"
                ),
                $crate::Location::new(::core::file!(), ::core::line!()),
                $crate::compare::bytes_of(lhs),
                lhs_len,
                $crate::compare::bytes_of(rhs),
                rhs_len,
            )),
        }
    };
}

/// Terminate the process unless `cond` holds.
///
/// For code that runs outside a test case, such as suite setup, where there
/// is no case to stop.
#[macro_export]
macro_rules! helper_assert {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::helper::helper_failed(::core::stringify!($cond), ::core::file!(), ::core::line!());
        }
    };
}
