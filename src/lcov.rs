//! LCOV trace-format tags relevant to record filtering
//!
//! An LCOV trace is line-oriented: a `SF:` line opens a per-source-file
//! record and an `end_of_record` line closes it. Everything in between is
//! payload this tool never interprets. Marker recognition is a prefix test
//! against the start of the line, matching the anchored semantics of the
//! standard trace tags.

/// Tag opening a per-source-file record, followed by an absolute path.
pub const RECORD_START_TAG: &str = "SF:";

/// Tag closing the current per-source-file record.
pub const END_OF_RECORD_TAG: &str = "end_of_record";

/// Path prefix of compiler-supplied library sources (gcc internal headers).
pub const SYSTEM_PATH_PREFIX: &str = "/usr/lib/gcc/";

/// Check if a line opens a record for a compiler-supplied source file.
pub fn is_system_record_start(line: &str) -> bool {
    line.strip_prefix(RECORD_START_TAG)
        .is_some_and(|path| path.starts_with(SYSTEM_PATH_PREFIX))
}

/// Check if a line closes the current record.
pub fn is_end_of_record(line: &str) -> bool {
    line.starts_with(END_OF_RECORD_TAG)
}
