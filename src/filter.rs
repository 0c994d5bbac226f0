//! Record filtering for LCOV traces
//!
//! A single forward pass over the input lines with a two-state inclusion
//! toggle. A `SF:` marker naming a system-toolchain path switches the
//! machine to Excluded before the write decision for that line, so the
//! marker itself is dropped; the matching `end_of_record` line is also
//! dropped, and inclusion resumes with the next line. Lines outside an
//! excluded record pass through verbatim, terminator included.

use crate::lcov;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Inclusion state of the filter while scanning a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Lines are copied to the destination.
    Included,
    /// Lines belong to a system-path record and are suppressed.
    Excluded,
}

/// Copy `source` to `destination`, dropping every record whose source file
/// lives under the system-toolchain prefix.
///
/// Lines are processed in order with no lookahead; the final line may lack
/// a terminator. Input that ends inside an excluded record is not an error:
/// the remaining lines stay suppressed and the pass simply ends.
pub fn filter<R: BufRead, W: Write>(source: &mut R, destination: &mut W) -> Result<()> {
    let mut state = State::Included;
    let mut line = String::new();

    loop {
        line.clear();
        if source.read_line(&mut line)? == 0 {
            break;
        }

        if lcov::is_system_record_start(&line) {
            state = State::Excluded;
        }
        if state == State::Included {
            destination.write_all(line.as_bytes())?;
        }
        if lcov::is_end_of_record(&line) {
            state = State::Included;
        }
    }

    Ok(())
}
