use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a plot run; none of these are recovered.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("could not read line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("line {line}: expected {expected} columns, found {found}")]
    Shape {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column {column}: {value:?} is not a finite number")]
    Parse {
        line: u64,
        column: usize,
        value: String,
    },
    #[error("no games to plot")]
    EmptyTable,
    #[error("could not render {}: {message}", path.display())]
    Render { path: PathBuf, message: String },
}
