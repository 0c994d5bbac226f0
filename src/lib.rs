//! Lcovtrim - LCOV trace filter for compiler-toolchain records
//!
//! This library provides the core functionality for pruning LCOV coverage
//! traces: a single-pass record filter that drops per-source-file records
//! whose path lives under a compiler-supplied library directory, so that
//! downstream coverage reports count only project-owned code.

pub mod cli;
pub mod filter;
pub mod lcov;
