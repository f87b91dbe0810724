//! Runner configuration and command-line parsing.
//!
//! Suite binaries are started by `cargo test` alongside libtest binaries and
//! receive the same arguments, so the libtest options that matter here
//! (`--skip`, `--exact`, `--test-threads`) are understood and the others
//! are skipped together with their values.

use std::num::NonZeroUsize;

/// Configuration for the suite runner.
#[derive(Clone, Debug, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Config struct: each bool controls an independent flag"
)]
pub struct RunnerConfig {
    /// Only run cases whose name contains this substring.
    pub filter: Option<String>,
    /// Drop cases whose name contains any of these substrings.
    pub skip: Vec<String>,
    /// Match `filter` and `skip` against the whole name.
    pub exact: bool,
    /// Show skip reasons and per-case durations.
    pub verbose: bool,
    /// Run cases on a rayon pool.
    pub parallel: bool,
    /// Worker count for the pool; rayon's default when `None`.
    pub threads: Option<NonZeroUsize>,
    /// Print case names instead of running them.
    pub list: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            filter: None,
            skip: Vec::new(),
            exact: false,
            verbose: false,
            parallel: true,
            threads: None,
            list: false,
        }
    }
}

impl RunnerConfig {
    /// Whether a case with this name is selected by the filter and not
    /// dropped by a skip pattern.
    pub fn matches(&self, name: &str) -> bool {
        let hit = |pattern: &str| {
            if self.exact {
                name == pattern
            } else {
                name.contains(pattern)
            }
        };
        let selected = match &self.filter {
            Some(pattern) => hit(pattern),
            None => true,
        };
        selected && !self.skip.iter().any(|pattern| hit(pattern))
    }
}

/// A command-line argument the runner could not accept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value `{value}` for `{flag}`: expected a positive integer")]
    InvalidThreads { flag: &'static str, value: String },

    #[error("`--filter=` needs a pattern")]
    EmptyFilter,

    #[error("more than one filter given: `{first}` and `{second}`")]
    DuplicateFilter { first: String, second: String },

    #[error("`{flag}` needs a value")]
    MissingValue { flag: String },
}

/// libtest options whose value is a separate argument and which the runner
/// has no use for.
const IGNORED_VALUE_FLAGS: &[&str] = &["--format", "--color", "--logfile", "-Z"];

/// Build a configuration from command-line arguments, program name excluded.
///
/// Flags may appear in any order. A bare argument is a filter. Unknown
/// flags are ignored with a warning so the binary tolerates options meant
/// for other harnesses.
pub fn parse_args<I, S>(args: I) -> Result<RunnerConfig, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut config = RunnerConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let arg = arg.as_ref();
        if let Some(filter) = arg.strip_prefix("--filter=") {
            if filter.is_empty() {
                return Err(ConfigError::EmptyFilter);
            }
            set_filter(&mut config, filter)?;
        } else if arg == "--verbose" || arg == "-v" {
            config.verbose = true;
        } else if arg == "--no-parallel" {
            config.parallel = false;
        } else if arg == "--list" {
            config.list = true;
        } else if arg == "--exact" {
            config.exact = true;
        } else if let Some(value) = arg.strip_prefix("--threads=") {
            config.threads = Some(parse_threads("--threads", value)?);
        } else if let Some(value) = arg.strip_prefix("--test-threads=") {
            config.threads = Some(parse_threads("--test-threads", value)?);
        } else if arg == "--test-threads" {
            let value = next_value(&mut args, arg)?;
            config.threads = Some(parse_threads("--test-threads", &value)?);
        } else if let Some(pattern) = arg.strip_prefix("--skip=") {
            config.skip.push(pattern.to_string());
        } else if arg == "--skip" {
            config.skip.push(next_value(&mut args, arg)?);
        } else if IGNORED_VALUE_FLAGS.contains(&arg) {
            let value = next_value(&mut args, arg)?;
            tracing::debug!(flag = arg, value = value.as_str(), "ignoring libtest option");
        } else if arg.starts_with('-') {
            tracing::warn!(flag = arg, "ignoring unknown flag");
        } else {
            set_filter(&mut config, arg)?;
        }
    }

    Ok(config)
}

fn next_value<I, S>(args: &mut I, flag: &str) -> Result<String, ConfigError>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    args.next()
        .map(|value| value.as_ref().to_string())
        .ok_or_else(|| ConfigError::MissingValue {
            flag: flag.to_string(),
        })
}

fn set_filter(config: &mut RunnerConfig, pattern: &str) -> Result<(), ConfigError> {
    if let Some(first) = &config.filter {
        return Err(ConfigError::DuplicateFilter {
            first: first.clone(),
            second: pattern.to_string(),
        });
    }
    config.filter = Some(pattern.to_string());
    Ok(())
}

fn parse_threads(flag: &'static str, value: &str) -> Result<NonZeroUsize, ConfigError> {
    value
        .parse::<NonZeroUsize>()
        .map_err(|_| ConfigError::InvalidThreads {
            flag,
            value: value.to_string(),
        })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
