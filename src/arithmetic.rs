// src/arithmetic.rs
// ============================================================================
// Module: Arithmetic Unit
// Description: Signed integer addition over two operands.
// Purpose: Provide the pure, total addition operation the case layer checks.
// Dependencies: serde::{Deserialize, Serialize}
// ============================================================================

//! ## Overview
//! The arithmetic unit is a single stateless operation: addition of two
//! signed 64-bit integers. Overflow uses two's-complement wraparound, so the
//! operation is total over the full operand range and behaves identically in
//! debug and release builds.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Addition Operation
// ============================================================================

/// Adds two signed integers.
///
/// Overflow wraps in two's complement, e.g. `add(i64::MAX, 1) == i64::MIN`.
/// There are no error conditions and no side effects.
#[must_use]
pub const fn add(augend: i64, addend: i64) -> i64 {
    augend.wrapping_add(addend)
}

// ============================================================================
// SECTION: Operand Pair
// ============================================================================

/// Operand pair for the addition operation
///
/// # Invariants
/// - None. Every pair of `i64` values is a valid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operands {
    /// First operand
    pub augend: i64,
    /// Second operand
    pub addend: i64,
}

impl Operands {
    /// Creates an operand pair
    #[must_use]
    pub const fn new(augend: i64, addend: i64) -> Self {
        Self {
            augend,
            addend,
        }
    }

    /// Returns the wrapping sum of the pair
    #[must_use]
    pub const fn sum(self) -> i64 {
        add(self.augend, self.addend)
    }

    /// Returns the pair with the operands swapped
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            augend: self.addend,
            addend: self.augend,
        }
    }
}

impl From<(i64, i64)> for Operands {
    fn from(pair: (i64, i64)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

// Tests are in the central tests module (tests/arithmetic.rs)
