use std::io::Write;

use tracing::{debug, warn};

use crate::report::error::SummaryError;
use crate::report::report_model::{
    ATTR_ERRORS, ATTR_FAILURES, ATTR_SKIPPED, ATTR_TESTS, ResultCounter, SuiteCounts,
    SuiteRecord,
};

// ============================================================================
// Console summary: fixed-width table of per-suite counts
// ============================================================================

/// Column header, written once before the first suite line.
pub const COLUMN_HEADER: &str = " OK| Fd| Sk|Err";

/// What a single testsuite element contributes to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuiteLine {
    /// `tests` of zero or below: a grouping label, no counts
    Header { name: String, tests: i128 },
    /// A suite with tests: one row of counts
    Counts { name: String, counts: SuiteCounts },
}

impl SuiteLine {
    /// Classify a suite by its `tests` attribute and read the counts it needs.
    pub fn from_suite(suite: &SuiteRecord) -> Result<Self, SummaryError> {
        let name = suite.name()?.to_string();
        let tests = suite.count(ATTR_TESTS)?;
        if tests <= 0 {
            return Ok(SuiteLine::Header { name, tests });
        }

        let failed = suite.count(ATTR_FAILURES)?;
        let errors = suite.count(ATTR_ERRORS)?;
        let skipped = suite.count(ATTR_SKIPPED)?;
        let counts = SuiteCounts::new(tests, failed, skipped, errors);
        if counts.ok < 0 {
            warn!(
                suite = %name,
                tests,
                failed,
                skipped,
                errors,
                "failures + skipped + errors exceed tests"
            );
        }
        Ok(SuiteLine::Counts { name, counts })
    }

    /// Render the line as printed, without the trailing newline.
    ///
    /// ```text
    ///   2|  1|  1|  0 Math
    /// ```
    pub fn render(&self) -> String {
        match self {
            SuiteLine::Header { name, .. } => name.clone(),
            SuiteLine::Counts { name, counts } => format!(
                "{:>3}|{:>3}|{:>3}|{:>3} {}",
                counts.ok, counts.failed, counts.skipped, counts.errors, name
            ),
        }
    }

    /// Apply this line to the running totals.
    ///
    /// A header line only adds its `tests` value, which is zero for a plain
    /// grouping suite and negative for a malformed one.
    pub fn accumulate(&self, counter: ResultCounter) -> ResultCounter {
        match self {
            SuiteLine::Header { tests, .. } => ResultCounter {
                tests: counter.tests + tests,
                ..counter
            },
            SuiteLine::Counts { counts, .. } => counter.add(counts),
        }
    }
}

/// Process one suite: print its line and return the updated totals.
///
/// `counter` is `None` only for the first suite; in that case the column
/// header is written and a zeroed counter started.
pub fn print_results<W: Write>(
    out: &mut W,
    suite: &SuiteRecord,
    counter: Option<ResultCounter>,
) -> Result<ResultCounter, SummaryError> {
    let counter = match counter {
        Some(c) => c,
        None => {
            writeln!(out, "{}", COLUMN_HEADER)?;
            ResultCounter::default()
        }
    };

    let line = SuiteLine::from_suite(suite)?;
    debug!(position = suite.position, line = ?line, "suite");
    writeln!(out, "{}", line.render())?;
    Ok(line.accumulate(counter))
}

/// Fold `print_results` over every suite in order.
///
/// With no suites the column header is still written and zeroed totals
/// returned.
pub fn summarize<W: Write>(
    out: &mut W,
    suites: &[SuiteRecord],
) -> Result<ResultCounter, SummaryError> {
    let counter = suites
        .iter()
        .try_fold(None, |counter, suite| {
            print_results(out, suite, counter).map(Some)
        })?;

    match counter {
        Some(c) => Ok(c),
        None => {
            writeln!(out, "{}", COLUMN_HEADER)?;
            Ok(ResultCounter::default())
        }
    }
}

/// Format the closing totals block.
///
/// ```text
///
///     Results:
///       Tests:        4
///       Succeeded:    2
///       Skipped:      1
///       Failed:       1
///       Errors:       0
/// ```
pub fn format_totals(counter: &ResultCounter) -> String {
    format!(
        "\n    Results:\n      Tests:     {:>4}\n      Succeeded: {:>4}\n      Skipped:   {:>4}\n      Failed:    {:>4}\n      Errors:    {:>4}\n",
        counter.tests, counter.succeeded, counter.skipped, counter.failed, counter.errors
    )
}
