//! CLI integration tests for mkimp.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (parse, render)
//! - Stdin/stdout handling
//! - Config discovery and includes relative to the input file
//! - Error handling

mod common;
mod parse;
mod render;
