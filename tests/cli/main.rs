//! CLI integration tests for wikilint.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (lint, parse)
//! - Stdin/stdout handling
//! - Exit codes
//! - Config and site snapshot discovery

mod common;
mod lint;
mod parse;
