/*!
# IO

Text output for the results of the analyses in [`crate::algo`].

- [`ForestWriter`] draws the depth-first forest stored in a [`TraversalState`] as indented trees.
- [`ReportWriter`] prints component lists, bipartitions, paths, link traces and bridges.

Both writers are configured with builder-style setters and write to any [`Write`] instance.
Their defaults reproduce the layouts documented on each writer exactly.
*/

pub mod forest;
pub mod report;

use std::{
    fs::File,
    io::{BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use crate::{algo::TraversalState, prelude::*};

pub use forest::*;
pub use report::*;

/// Shorthand for creating an `std::io::Error`
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

pub(crate) use io_error;
pub(crate) use raise_error_unless;

/// Collects everything `write` produces into a `String`
pub(crate) fn write_to_string<F>(write: F) -> Result<String>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    let mut buffer = Vec::new();
    write(&mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io_error!(ErrorKind::InvalidData, e))
}
