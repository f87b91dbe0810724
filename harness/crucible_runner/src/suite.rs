//! Case registration.

use crucible_assert::CaseResult;

/// Signature of a runnable case.
pub type CaseFn = fn() -> CaseResult;

/// A named case.
#[derive(Clone, Debug)]
pub struct TestCase {
    name: String,
    func: CaseFn,
}

impl TestCase {
    pub fn new(name: impl Into<String>, func: CaseFn) -> Self {
        TestCase {
            name: name.into(),
            func,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn func(&self) -> CaseFn {
        self.func
    }
}

/// An ordered collection of cases run together.
///
/// Registration order is the order results are reported in, whether the
/// cases run sequentially or in parallel.
#[derive(Clone, Debug, Default)]
pub struct Suite {
    name: String,
    cases: Vec<TestCase>,
}

impl Suite {
    pub fn new(name: impl Into<String>) -> Self {
        Suite {
            name: name.into(),
            cases: Vec::new(),
        }
    }

    /// Register a case, builder style.
    #[must_use]
    pub fn case(mut self, name: impl Into<String>, func: CaseFn) -> Self {
        self.push(TestCase::new(name, func));
        self
    }

    pub fn push(&mut self, case: TestCase) {
        self.cases.push(case);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
