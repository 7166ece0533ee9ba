use roxmltree::{Document, Node};

use crate::report::report_model::{
    ATTR_ERRORS, ATTR_FAILURES, ATTR_SKIPPED, ATTR_TESTS, SuiteRecord, TestReport,
};

/// Tag name of the elements the summary walks over.
pub const SUITE_TAG: &str = "testsuite";

/// All testsuite elements of a loaded report, in document order.
///
/// Nested suites are flattened: a parent and each of its children appear
/// as separate entries. An empty slice is a valid result.
///
/// The document query itself runs once at load time (`collect_suites`,
/// called from `loader::parse_report`): a `roxmltree::Document` borrows the
/// file text, so `TestReport` keeps owned records instead of the tree.
pub fn extract_suites(report: &TestReport) -> &[SuiteRecord] {
    report.suites()
}

/// Collect every `<testsuite>` element at any depth (pre-order).
pub fn collect_suites(doc: &Document<'_>) -> Vec<SuiteRecord> {
    doc.root()
        .descendants()
        // Local name only, so `x:testsuite` and default-namespaced suites match too
        .filter(|n| n.is_element() && n.tag_name().name() == SUITE_TAG)
        .enumerate()
        .map(|(i, node)| suite_record(i + 1, node))
        .collect()
}

fn suite_record(position: usize, node: Node<'_, '_>) -> SuiteRecord {
    let attr = |name: &str| node.attribute(name).map(str::to_string);
    SuiteRecord {
        position,
        name: attr("name"),
        tests: attr(ATTR_TESTS),
        failures: attr(ATTR_FAILURES),
        errors: attr(ATTR_ERRORS),
        skipped: attr(ATTR_SKIPPED),
    }
}
