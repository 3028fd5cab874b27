// tests/support/cases.rs
// ============================================================================
// Module: Case Constants
// Description: Shared canonical triples for sum-check tests.
// ============================================================================
//! ## Overview
//! The reusable case triples shared by the externally-driven parameterized
//! tests. Order matters: it matches the built-in provider.

#![allow(
    dead_code,
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only constants; each test binary uses a subset."
)]

/// Canonical `(augend, addend, expected)` triples, in provider order.
pub const CANONICAL_TRIPLES: [(i64, i64, i64); 3] = [(1, 3, 4), (-1, -3, -4), (-1, 3, 2)];

/// Name the built-in provider reports in diagnostics.
pub const BUILTIN_NAME: &str = "builtin";
