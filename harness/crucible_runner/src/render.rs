//! Plain-text report output.
//!
//! One status line per case, the case name padded with dots to a fixed
//! column:
//!
//! ```text
//! aes_128_ecb_encrypt_nist_kat_1 .................................... PASS
//! aes_128_gcm_decrypt_bad_tag ....................................... FAILED
//!   ret == 0
//!   at step 3, line 88, suites/test_suite_gcm.rs
//!   lhs = 0xffffffffffff9e00 = -25088
//!   rhs = 0x0000000000000000 = 0
//! aesni_available ................................................... ----
//! ```

use std::fmt::Write as _;
use std::io::{self, Write};

use crucible_assert::CaseError;

use crate::outcome::{CaseOutcome, CaseReport, Summary};
use crate::suite::TestCase;

/// Longest prefix of a case name that is printed.
const NAME_WIDTH: usize = 66;

/// Column the dot padding runs up to.
const PAD_COLUMN: usize = 67;

const RULE: &str =
    "----------------------------------------------------------------------------";

/// Status line for a case, without a trailing newline.
pub fn status_line(name: &str, status: &str) -> String {
    let shown: String = name.chars().take(NAME_WIDTH).collect();
    let dots = PAD_COLUMN.saturating_sub(shown.chars().count() + 1);
    format!("{shown} {} {status}", ".".repeat(dots))
}

fn status_of(outcome: &CaseOutcome) -> &'static str {
    match outcome {
        CaseOutcome::Passed => "PASS",
        CaseOutcome::Failed(_) | CaseOutcome::Panicked(_) => "FAILED",
        CaseOutcome::Skipped(_) => "----",
    }
}

/// Indented condition, location and operand lines of a stopped case.
pub fn failure_details(err: &CaseError) -> String {
    let mut text = format!("  {}\n  at ", err.condition);
    if let Some(step) = err.step {
        let _ = write!(text, "step {step}, ");
    }
    let _ = writeln!(text, "line {}, {}", err.location.line, err.location.file);
    for line in err.detail_lines() {
        let _ = writeln!(text, "  {line}");
    }
    text
}

/// Message used when a case run under libtest fails.
pub fn failure_text(name: &str, err: &CaseError) -> String {
    format!("{}\n{}", status_line(name, "FAILED"), failure_details(err))
}

/// Write the status line of one case and any detail lines under it.
pub fn render_case(out: &mut impl Write, report: &CaseReport, verbose: bool) -> io::Result<()> {
    let status = status_line(&report.name, status_of(&report.outcome));
    if verbose {
        writeln!(out, "{status} ({:.2?})", report.duration)?;
    } else {
        writeln!(out, "{status}")?;
    }

    match &report.outcome {
        CaseOutcome::Passed => {}
        CaseOutcome::Failed(err) => write!(out, "{}", failure_details(err))?,
        CaseOutcome::Panicked(message) => writeln!(out, "  panicked: {message}")?,
        CaseOutcome::Skipped(err) => {
            if verbose {
                write!(out, "{}", failure_details(err))?;
            }
        }
    }
    Ok(())
}

/// Write every case followed by the totals footer.
pub fn render_summary(out: &mut impl Write, summary: &Summary, verbose: bool) -> io::Result<()> {
    for report in &summary.reports {
        render_case(out, report, verbose)?;
    }

    writeln!(out, "\n{RULE}\n")?;
    let verdict = if summary.total() == 0 {
        "NO TESTS RAN"
    } else if summary.has_failures() {
        "FAILED"
    } else {
        "PASSED"
    };
    write!(
        out,
        "{verdict} ({} / {} tests ({} skipped)",
        summary.not_failed(),
        summary.total(),
        summary.skipped
    )?;
    if summary.filtered_out > 0 {
        write!(out, ", {} filtered out", summary.filtered_out)?;
    }
    writeln!(out, ")")?;
    if verbose {
        writeln!(out, "Completed in {:.2?}", summary.duration)?;
    }
    Ok(())
}

/// Write the names of `cases`, one per line.
pub fn render_list(out: &mut impl Write, cases: &[&TestCase]) -> io::Result<()> {
    for case in cases {
        writeln!(out, "{}", case.name())?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
