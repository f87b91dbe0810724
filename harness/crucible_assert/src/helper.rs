//! Support for `helper_assert!`.

/// Report a failed helper assertion on stderr and terminate the process.
#[cold]
pub fn helper_failed(condition: &'static str, file: &'static str, line: u32) -> ! {
    tracing::error!(condition, file, line, "helper assertion failed");
    eprintln!("Assertion Failed at {file}:{line} - {condition}");
    std::process::exit(1);
}
