// src/error.rs
// ============================================================================
// Module: Case Set Error Definitions
// Description: Structured diagnostics for case-set construction and loading.
// Purpose: Give fixture and loader failures actionable, testable messages.
// Dependencies: crate::cases, serde::{Deserialize, Serialize}, thiserror
// ============================================================================

//! ## Overview
//! Centralizes the case-set errors so fixture construction, checking, and the
//! serde loaders report failures uniformly. The arithmetic unit itself has no
//! error conditions; everything here belongs to the case layer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::cases::CaseMismatch;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Errors produced by case-set construction, checking, and loading
///
/// # Invariants
/// - None. Variants capture structured case-layer failures.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CaseSetError {
    /// A case set was constructed or loaded with no cases
    #[error("case set '{name}' contains no cases")]
    EmptyCaseSet {
        /// Name of the offending set
        name: String,
    },

    /// One or more case oracles disagreed with the computed sum
    #[error("case set '{name}': {failed} of {total} cases failed", failed = .mismatches.len())]
    CasesFailed {
        /// Name of the checked set
        name: String,
        /// Total number of cases checked
        total: usize,
        /// Every failing case with its expected and actual values
        mismatches: Vec<CaseMismatch>,
    },

    /// A case set could not be parsed from its serialized form
    #[error("failed to parse {format} case set: {message}")]
    Parse {
        /// Serialization format involved (`json` or `ron`)
        format: String,
        /// Parser diagnostic
        message: String,
    },

    /// A case-set file could not be read or written
    #[error("case set file '{path}': {message}")]
    Io {
        /// Path involved in the failed operation
        path: String,
        /// Underlying I/O diagnostic
        message: String,
    },
}

// ============================================================================
// SECTION: Convenience Helpers
// ============================================================================

impl CaseSetError {
    /// Creates a parse error for the given format
    pub fn parse(format: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Parse {
            format: format.into(),
            message: message.to_string(),
        }
    }

    /// Creates an I/O error for the given path
    pub fn io(path: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Io {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Returns the mismatches carried by a failed check, if any
    #[must_use]
    pub fn mismatches(&self) -> &[CaseMismatch] {
        match self {
            Self::CasesFailed {
                mismatches, ..
            } => mismatches,
            Self::EmptyCaseSet {
                ..
            }
            | Self::Parse {
                ..
            }
            | Self::Io {
                ..
            } => &[],
        }
    }
}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Convenient Result type for case-set operations
pub type CaseSetResult<T = ()> = Result<T, CaseSetError>;

// Tests are in the central tests module (tests/cases.rs)
