//! Byte buffer comparison backing `assert_compare!`.

use crate::error::{CaseError, CaseResult, Location};
use crate::report;

/// View anything byte-like as a slice.
#[inline]
pub fn bytes_of<B: AsRef<[u8]> + ?Sized>(buf: &B) -> &[u8] {
    buf.as_ref()
}

/// Compare the first `lhs_len` bytes of `lhs` with the first `rhs_len`
/// bytes of `rhs`.
///
/// The lengths are checked first, through the equality reporter, before any
/// byte is read. Equal zero lengths pass whatever the slices hold. A length
/// past the end of its slice fails the case instead of panicking.
pub fn compare_buffers(
    len_description: &'static str,
    description: &'static str,
    location: Location,
    lhs: &[u8],
    lhs_len: usize,
    rhs: &[u8],
    rhs_len: usize,
) -> CaseResult {
    report::equal(
        len_description,
        location.line,
        location.file,
        lhs_len as u64,
        rhs_len as u64,
    )?;
    if lhs_len == 0 {
        return Ok(());
    }

    let (Some(lhs), Some(rhs)) = (lhs.get(..lhs_len), rhs.get(..rhs_len)) else {
        let short = lhs.len().min(rhs.len());
        return Err(report::fail(description, location.line, location.file).with_lines(
            format!("length = {lhs_len}"),
            format!("shortest buffer holds {short} bytes"),
        ));
    };

    match first_difference(lhs, rhs) {
        None => Ok(()),
        Some(offset) => Err(mismatch(description, location, offset, lhs[offset], rhs[offset])),
    }
}

fn first_difference(lhs: &[u8], rhs: &[u8]) -> Option<usize> {
    lhs.iter().zip(rhs).position(|(a, b)| a != b)
}

#[cold]
fn mismatch(description: &'static str, location: Location, offset: usize, a: u8, b: u8) -> CaseError {
    report::fail(description, location.line, location.file).with_lines(
        format!("first difference at offset {offset}"),
        format!("lhs = 0x{a:02x}, rhs = 0x{b:02x}"),
    )
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap_err to reach the failure record"
)]
