//! Summarize JUnit XML test reports as a fixed-width console table.
//!
//! `report::loader::load` reads and parses a file, `report::extractor`
//! flattens its `<testsuite>` elements, and `report::console` folds them
//! into per-suite rows plus running totals.

pub mod cli;
pub mod report;
