//! The record a test case carries out when it stops early.

use std::borrow::Cow;
use std::fmt;

/// Source position of the check that stopped a case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Location { file, line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// How a case that stopped early should be classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The code under test misbehaved.
    Failed,
    /// A precondition of the case did not hold in this environment.
    Skipped,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Failed => "failed",
            Verdict::Skipped => "skipped",
        }
    }
}

/// A failed or skipped check, with everything needed to explain it.
///
/// Built by the functions in [`crate::report`]; test code only ever sees it
/// as the `Err` side of a [`CaseResult`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseError {
    pub verdict: Verdict,
    /// Source text of the condition that did not hold.
    pub condition: Cow<'static, str>,
    pub location: Location,
    /// Step number set through [`crate::in_step`], if any.
    pub step: Option<u64>,
    /// First operand diagnostic line (e.g. `lhs = 0x... = 5`).
    pub line1: Option<String>,
    /// Second operand diagnostic line.
    pub line2: Option<String>,
}

impl CaseError {
    /// Create a failure record.
    #[cold]
    pub fn failed(condition: impl Into<Cow<'static, str>>, location: Location) -> Self {
        Self::new(Verdict::Failed, condition.into(), location)
    }

    /// Create a skip record.
    #[cold]
    pub fn skipped(condition: impl Into<Cow<'static, str>>, location: Location) -> Self {
        Self::new(Verdict::Skipped, condition.into(), location)
    }

    fn new(verdict: Verdict, condition: Cow<'static, str>, location: Location) -> Self {
        CaseError {
            verdict,
            condition,
            location,
            step: None,
            line1: None,
            line2: None,
        }
    }

    /// Attach the two operand diagnostic lines.
    #[must_use]
    pub fn with_lines(mut self, line1: String, line2: String) -> Self {
        self.line1 = Some(line1);
        self.line2 = Some(line2);
        self
    }

    /// Tag the record with a step number unless an inner step already did.
    #[must_use]
    pub fn at_step(mut self, step: u64) -> Self {
        if self.step.is_none() {
            self.step = Some(step);
        }
        self
    }

    pub fn is_failed(&self) -> bool {
        self.verdict == Verdict::Failed
    }

    pub fn is_skipped(&self) -> bool {
        self.verdict == Verdict::Skipped
    }

    /// Operand diagnostic lines that are present, in order.
    pub fn detail_lines(&self) -> impl Iterator<Item = &str> {
        self.line1.iter().chain(self.line2.iter()).map(String::as_str)
    }
}

impl fmt::Display for CaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: `{}` at ", self.verdict.as_str(), self.condition)?;
        if let Some(step) = self.step {
            write!(f, "step {step}, ")?;
        }
        write!(f, "{}", self.location)?;
        for line in self.detail_lines() {
            write!(f, "; {line}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CaseError {}

/// Result of a test case or of any helper called from one.
pub type CaseResult<T = ()> = Result<T, CaseError>;

#[cfg(test)]
mod tests;
