//! Debug facilities.
use std::{fmt, io};

use crate::graph::GraphError;

// Error types and From<...> implementations

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Graph operation error")]
    GraphError(GraphError),
    #[error("The board already holds two graphs")]
    BoardFull,
    #[error("Error while reading commands")]
    IoError(io::Error),
    #[error("Usage: kboard <k> [-s <statistics file>]")]
    Usage,
}

impl From<GraphError> for Error {
    fn from(ge: GraphError) -> Self {
        Self::GraphError(ge)
    }
}

impl From<io::Error> for Error {
    fn from(ie: io::Error) -> Self {
        Self::IoError(ie)
    }
}

// Custom formatters for debug printing

pub fn opt_fmt<T: fmt::Debug>(option: &Option<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match option {
        Some(val) => val.fmt(f),
        None => write!(f, "None"),
    }
}

/// Print adjacency rows as 0/1 strings, one row per line,
/// the way the full matrix is dumped on request.
#[allow(clippy::ptr_arg)]
pub fn adjacency_fmt(matrix: &Vec<Vec<bool>>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{{")?;
    for row in matrix {
        write!(f, "    ")?;
        for entry in row {
            write!(f, "{}", if *entry { 1 } else { 0 })?;
        }
        writeln!(f)?;
    }
    write!(f, "}}")?;

    Ok(())
}

// Debug macros that allow to time single expressions

#[macro_export]
macro_rules! time {
    ($i:ident, $ret:ident, $exp:expr) => {
        let before = std::time::Instant::now();
        let $ret = $exp;
        let $i = before.elapsed();
    };
}

#[macro_export]
macro_rules! print_time {
    ($name:expr, $ret:ident, $exp:expr) => {
        let before = std::time::Instant::now();
        let $ret = $exp;
        println!("{} took {:?}", $name, before.elapsed());
    };
}
