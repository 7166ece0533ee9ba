use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    /// Input path does not name an existing regular file
    #[error("input {} does not appear to exist", path.display())]
    InvalidInput { path: PathBuf },

    /// Input path exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not well-formed XML
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// A testsuite element lacks an attribute the summary needs
    #[error("testsuite '{suite}' has no '{attribute}' attribute")]
    MissingAttribute { suite: String, attribute: &'static str },

    /// A count attribute is not an integer
    #[error("testsuite '{suite}' has non-integer {attribute}=\"{value}\"")]
    InvalidCount {
        suite: String,
        attribute: &'static str,
        value: String,
    },

    /// Neither --input nor the config file named a report
    #[error("no input file given (use --input or set `input` in the config file)")]
    MissingInput,

    /// Writing the summary failed
    #[error("failed to write summary: {0}")]
    Output(#[from] std::io::Error),
}
