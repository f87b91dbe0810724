//! Runner for crucible test cases.
//!
//! Two ways to drive `fn() -> CaseResult` cases:
//!
//! - Under libtest: mark each case with [`case`]. A FAILED outcome panics
//!   with the rendered failure, a SKIPPED outcome passes with a log line.
//! - As a suite binary: register cases on a [`Suite`] and hand it to
//!   [`main_with`] from a `harness = false` test target. Output is one
//!   status line per case plus a totals footer, and the exit code is
//!   0 when nothing failed, 1 on failures, 2 when the suite has no cases.
//!   The binary accepts the arguments `cargo test` passes to libtest
//!   binaries, so a filtered `cargo test` run treats it like any other.
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=crucible_runner=debug`) to see per-case
//! tracing events on stderr.

use std::io::{self, Write};
use std::sync::Once;

mod config;
pub mod libtest;
mod outcome;
pub mod render;
mod runner;
mod suite;

pub use config::{parse_args, ConfigError, RunnerConfig};
pub use crucible_assert::{CaseError, CaseResult};
pub use crucible_macros::case;
pub use outcome::{CaseOutcome, CaseReport, Summary};
pub use runner::{run_case, SuiteRunner};
pub use suite::{CaseFn, Suite, TestCase};

static TRACING_INIT: Once = Once::new();

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call repeatedly.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A subscriber installed by the embedding binary takes precedence.
            let _ = tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .with(filter)
                .try_init();
        }
    });
}

/// Run `suite` as configured by `args` and write the report to `out`.
///
/// Returns the process exit code. `--list` prints the selected case names
/// and returns 0.
pub fn run_with_args<I, S>(suite: &Suite, args: I, out: &mut impl Write) -> Result<i32, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let config = parse_args(args)?;
    let verbose = config.verbose;
    let runner = SuiteRunner::with_config(config);

    if runner.config().list {
        if let Err(e) = render::render_list(out, &runner.select(suite)) {
            tracing::warn!("failed to write case list: {e}");
        }
        return Ok(0);
    }

    let summary = runner.run(suite);
    if let Err(e) = render::render_summary(out, &summary, verbose) {
        tracing::warn!("failed to write report: {e}");
    }
    Ok(summary.exit_code())
}

/// Entry point for a `harness = false` suite binary.
///
/// Reads the process arguments, runs `suite`, prints the report to stdout
/// and exits. A bad argument exits with status 1.
pub fn main_with(suite: &Suite) -> ! {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = match run_with_args(suite, std::env::args().skip(1), &mut out) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    };
    if let Err(e) = out.flush() {
        tracing::warn!("failed to flush stdout: {e}");
    }
    std::process::exit(code);
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
