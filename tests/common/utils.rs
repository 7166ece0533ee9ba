use std::path::{Path, PathBuf};

/// Write `xml` to a fresh file under the system temp dir and return its path.
pub fn write_fixture(test_name: &str, xml: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("junit_summary_tests").join(test_name);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("report.xml");
    std::fs::write(&path, xml).unwrap();
    path
}

pub fn cleanup(path: &Path) {
    std::fs::remove_file(path).ok();
    if let Some(dir) = path.parent() {
        std::fs::remove_dir(dir).ok();
    }
}

/// A testthat-style report: a grouping suite wrapping two real suites.
pub const NESTED_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites>
  <testsuite name="pkg.analysis" tests="0">
    <testsuite name="Math" tests="4" failures="1" errors="0" skipped="1">
      <testcase name="adds" />
      <testcase name="subtracts"><failure message="off by one" /></testcase>
      <testcase name="divides"><skipped /></testcase>
      <testcase name="multiplies" />
    </testsuite>
    <testsuite name="Strings" tests="3" failures="0" errors="1" skipped="0">
      <testcase name="trims" />
      <testcase name="pads" />
      <testcase name="splits"><error message="boom" /></testcase>
    </testsuite>
  </testsuite>
</testsuites>
"#;
