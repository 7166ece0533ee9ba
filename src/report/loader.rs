use std::path::Path;

use tracing::{debug, info};

use crate::report::error::SummaryError;
use crate::report::extractor::collect_suites;
use crate::report::report_model::TestReport;

/// Load a JUnit XML file.
///
/// Fails with `InvalidInput` when `path` is not an existing regular file
/// (checked before anything is read) and with `Parse` when the file is not
/// well-formed XML.
pub fn load(path: &Path) -> Result<TestReport, SummaryError> {
    if !path.is_file() {
        return Err(SummaryError::InvalidInput {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|source| SummaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read report");

    let report = parse_report(path, &text)?;
    info!(
        path = %path.display(),
        suites = report.suites().len(),
        "loaded junit report"
    );
    Ok(report)
}

/// Parse report text that has already been read. `path` is only used for
/// error messages and `TestReport::path()`.
pub fn parse_report(path: &Path, text: &str) -> Result<TestReport, SummaryError> {
    let doc = roxmltree::Document::parse(text).map_err(|source| SummaryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(TestReport::new(path, collect_suites(&doc)))
}
