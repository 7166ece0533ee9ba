use std::path::{Path, PathBuf};

use crate::report::error::SummaryError;

// ============================================================================
// Loaded report: the testsuite elements captured from one JUnit XML file
// ============================================================================

/// A parsed JUnit report.
///
/// Built by `loader::load()`; immutable afterwards. Holds every
/// `<testsuite>` element of the document in document order.
#[derive(Debug, Clone)]
pub struct TestReport {
    path: PathBuf,
    suites: Vec<SuiteRecord>,
}

impl TestReport {
    pub fn new(path: impl Into<PathBuf>, suites: Vec<SuiteRecord>) -> Self {
        Self {
            path: path.into(),
            suites,
        }
    }

    /// Path the report was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn suites(&self) -> &[SuiteRecord] {
        &self.suites
    }
}

// ============================================================================
// SuiteRecord: raw attributes of a single <testsuite> element
// ============================================================================

/// Attribute names read from a `<testsuite>` element.
pub const ATTR_TESTS: &str = "tests";
pub const ATTR_FAILURES: &str = "failures";
pub const ATTR_ERRORS: &str = "errors";
pub const ATTR_SKIPPED: &str = "skipped";

/// One `<testsuite>` element.
///
/// Counts are kept as the raw attribute strings and converted on demand,
/// so a grouping suite with `tests="0"` does not need the other attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteRecord {
    /// 1-based position among all testsuite elements
    pub position: usize,
    pub name: Option<String>,
    pub tests: Option<String>,
    pub failures: Option<String>,
    pub errors: Option<String>,
    pub skipped: Option<String>,
}

impl SuiteRecord {
    /// Display name, falling back to the element's position.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("#{}", self.position),
        }
    }

    /// The suite's `name` attribute, required for printing.
    pub fn name(&self) -> Result<&str, SummaryError> {
        self.name
            .as_deref()
            .ok_or_else(|| SummaryError::MissingAttribute {
                suite: self.label(),
                attribute: "name",
            })
    }

    /// Read a count attribute (`tests`, `failures`, `errors`, `skipped`) as an integer.
    ///
    /// Values must fit in an `i64`; they are widened to `i128` so sums and
    /// differences of report values cannot overflow.
    pub fn count(&self, attribute: &'static str) -> Result<i128, SummaryError> {
        let raw = match attribute {
            ATTR_TESTS => self.tests.as_deref(),
            ATTR_FAILURES => self.failures.as_deref(),
            ATTR_ERRORS => self.errors.as_deref(),
            ATTR_SKIPPED => self.skipped.as_deref(),
            _ => None,
        };
        let value = raw.ok_or_else(|| SummaryError::MissingAttribute {
            suite: self.label(),
            attribute,
        })?;
        value
            .trim()
            .parse::<i64>()
            .map(i128::from)
            .map_err(|_| SummaryError::InvalidCount {
                suite: self.label(),
                attribute,
                value: value.to_string(),
            })
    }
}

// ============================================================================
// ResultCounter: running totals across all suites
// ============================================================================

/// Running totals threaded through the summary fold.
///
/// Signed because `succeeded` is derived by subtraction and inconsistent
/// input can drive it below zero. Each input value is at most `i64` wide,
/// so `i128` totals hold any realistic number of suites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultCounter {
    pub tests: i128,
    pub succeeded: i128,
    pub skipped: i128,
    pub failed: i128,
    pub errors: i128,
}

/// Counts contributed by a single non-header suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteCounts {
    pub tests: i128,
    pub ok: i128,
    pub failed: i128,
    pub skipped: i128,
    pub errors: i128,
}

impl SuiteCounts {
    pub fn new(tests: i128, failed: i128, skipped: i128, errors: i128) -> Self {
        Self {
            tests,
            ok: tests - (failed + skipped + errors),
            failed,
            skipped,
            errors,
        }
    }
}

impl ResultCounter {
    /// Field-wise sum of `self` and one suite's contribution.
    pub fn add(self, counts: &SuiteCounts) -> Self {
        Self {
            tests: self.tests + counts.tests,
            succeeded: self.succeeded + counts.ok,
            skipped: self.skipped + counts.skipped,
            failed: self.failed + counts.failed,
            errors: self.errors + counts.errors,
        }
    }
}
