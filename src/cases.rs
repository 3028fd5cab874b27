// src/cases.rs
// ============================================================================
// Module: Addition Cases
// Description: Case triples and reusable case-set collections.
// Purpose: Model `(augend, addend, expected)` oracles and check them against
//          the arithmetic unit with per-entry diagnostics.
// Dependencies: crate::{arithmetic, error}, serde::{Deserialize, Serialize}
// ============================================================================

//! ## Overview
//! A case pairs two operands with an oracle value; a case set is a named,
//! ordered, immutable collection of cases that can be shared between test
//! declarations or loaded from serialized fixtures. Checking a set runs every
//! case against [`add`] and collects all mismatches rather than stopping at
//! the first, so a failed run reports each entry with its expected and actual
//! values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::arithmetic::Operands;
use crate::arithmetic::add;
use crate::error::CaseSetError;
use crate::error::CaseSetResult;

// ============================================================================
// SECTION: Addition Case
// ============================================================================

/// A single addition case: two operands and the oracle value
///
/// # Invariants
/// - Immutable after construction.
/// - `expected` is an oracle, not a derived value; a case whose oracle
///   disagrees with the computed sum is reportable, never unconstructible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdditionCase {
    /// First operand
    pub augend: i64,
    /// Second operand
    pub addend: i64,
    /// Oracle value the computed sum is checked against
    pub expected: i64,
}

impl AdditionCase {
    /// Creates a case with an explicit oracle value
    #[must_use]
    pub const fn new(augend: i64, addend: i64, expected: i64) -> Self {
        Self {
            augend,
            addend,
            expected,
        }
    }

    /// Creates a self-consistent case whose oracle is the computed sum
    #[must_use]
    pub const fn of(augend: i64, addend: i64) -> Self {
        Self::new(augend, addend, add(augend, addend))
    }

    /// Returns the operand pair of the case
    #[must_use]
    pub const fn operands(self) -> Operands {
        Operands::new(self.augend, self.addend)
    }

    /// Returns the sum actually produced by the arithmetic unit
    #[must_use]
    pub const fn actual(self) -> i64 {
        add(self.augend, self.addend)
    }

    /// Returns true when the computed sum matches the oracle
    #[must_use]
    pub const fn is_satisfied(self) -> bool {
        self.actual() == self.expected
    }

    /// Checks the case, reporting a mismatch at the given set position
    ///
    /// # Errors
    /// Returns the [`CaseMismatch`] when the computed sum disagrees with the
    /// oracle.
    pub fn check(self, index: usize) -> Result<(), CaseMismatch> {
        let actual = self.actual();
        if actual == self.expected {
            Ok(())
        } else {
            Err(CaseMismatch {
                index,
                case: self,
                actual,
            })
        }
    }
}

impl From<(i64, i64, i64)> for AdditionCase {
    fn from(triple: (i64, i64, i64)) -> Self {
        Self::new(triple.0, triple.1, triple.2)
    }
}

// ============================================================================
// SECTION: Mismatch Report
// ============================================================================

/// Report for a case whose oracle disagrees with the computed sum
///
/// # Invariants
/// - `actual` is the sum the arithmetic unit produced for `case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseMismatch {
    /// Zero-based position of the case within its set
    pub index: usize,
    /// The failing case
    pub case: AdditionCase,
    /// Sum actually produced by the arithmetic unit
    pub actual: i64,
}

impl fmt::Display for CaseMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "case {}: add({}, {}) expected {}, got {}",
            self.index, self.case.augend, self.case.addend, self.case.expected, self.actual
        )
    }
}

// ============================================================================
// SECTION: Case Set
// ============================================================================

/// The canonical demonstration triples, in declaration order.
const CANONICAL_CASES: [AdditionCase; 3] = [
    AdditionCase::new(1, 3, 4),
    AdditionCase::new(-1, -3, -4),
    AdditionCase::new(-1, 3, 2),
];

/// Named, ordered, immutable collection of addition cases
///
/// # Invariants
/// - Contains at least one case.
/// - Iteration order is construction order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSet {
    /// Name used in diagnostics
    name: String,
    /// Cases in construction order
    cases: Vec<AdditionCase>,
}

impl CaseSet {
    /// Creates a named case set from the given cases
    ///
    /// # Errors
    /// Returns [`CaseSetError::EmptyCaseSet`] when `cases` is empty; a
    /// parameterized run over zero cases would vacuously pass, which is a
    /// fixture bug.
    pub fn new(name: impl Into<String>, cases: Vec<AdditionCase>) -> CaseSetResult<Self> {
        let set = Self {
            name: name.into(),
            cases,
        };
        set.validate()?;
        Ok(set)
    }

    /// Returns the built-in canonical set: `(1, 3, 4)`, `(-1, -3, -4)`,
    /// `(-1, 3, 2)`
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            name: "builtin".to_string(),
            cases: CANONICAL_CASES.to_vec(),
        }
    }

    /// Returns the diagnostic name of the set
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cases in construction order
    #[must_use]
    pub fn cases(&self) -> &[AdditionCase] {
        &self.cases
    }

    /// Returns the number of cases in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns true when the set contains no cases
    ///
    /// Validated sets are never empty; this exists for sets obtained through
    /// deserialization before revalidation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterates the cases in construction order
    pub fn iter(&self) -> std::slice::Iter<'_, AdditionCase> {
        self.cases.iter()
    }

    /// Revalidates the set invariants
    ///
    /// Deserialized sets bypass [`CaseSet::new`]; loaders call this before
    /// handing a set to callers.
    ///
    /// # Errors
    /// Returns [`CaseSetError::EmptyCaseSet`] when the set contains no cases.
    pub fn validate(&self) -> CaseSetResult {
        if self.cases.is_empty() {
            return Err(CaseSetError::EmptyCaseSet {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Checks every case in order against the arithmetic unit
    ///
    /// All mismatches are collected; a failed run reports each entry with its
    /// expected and actual values rather than stopping at the first failure.
    ///
    /// # Errors
    /// Returns [`CaseSetError::CasesFailed`] carrying every mismatch when at
    /// least one case's oracle disagrees with the computed sum.
    pub fn check_all(&self) -> CaseSetResult {
        let mismatches: Vec<CaseMismatch> = self
            .cases
            .iter()
            .enumerate()
            .filter_map(|(index, case)| case.check(index).err())
            .collect();

        if mismatches.is_empty() {
            Ok(())
        } else {
            Err(CaseSetError::CasesFailed {
                name: self.name.clone(),
                total: self.cases.len(),
                mismatches,
            })
        }
    }
}

impl<'a> IntoIterator for &'a CaseSet {
    type Item = &'a AdditionCase;
    type IntoIter = std::slice::Iter<'a, AdditionCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Tests are in the central tests module (tests/cases.rs)
