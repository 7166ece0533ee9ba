use std::io::Write;
use std::path::Path;

use crate::report::console::{format_totals, summarize};
use crate::report::error::SummaryError;
use crate::report::extractor::extract_suites;
use crate::report::loader::load;
use crate::report::report_model::ResultCounter;

/// Summarize a JUnit XML file to `out`: announcement, per-suite table, totals.
pub fn cmd_summarize<W: Write>(input: &str, out: &mut W) -> Result<ResultCounter, SummaryError> {
    writeln!(out, "Parsing junit file {}", input)?;

    let report = load(Path::new(input))?;
    let suites = extract_suites(&report);
    let totals = summarize(out, suites)?;

    write!(out, "{}", format_totals(&totals))?;
    Ok(totals)
}
