// src/serde_support.rs
// ============================================================================
// Module: Case Set Serde Support
// Description: Serde helpers for case-set serialization and loading.
// Purpose: Move case fixtures in and out of JSON/RON strings and files.
// Dependencies: crate::{cases, error}, ron, serde_json, std::{fs, path}
// ============================================================================

//! ## Overview
//! Case sets can live outside the test crate entirely: these helpers give
//! deterministic JSON and RON forms plus extension-dispatched file loaders.
//! Deserialized sets are untrusted and are revalidated before being handed to
//! callers, so a loaded set upholds the same invariants as a constructed one.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use crate::cases::CaseSet;
use crate::error::CaseSetError;
use crate::error::CaseSetResult;

// ============================================================================
// SECTION: String Conversions
// ============================================================================

/// Serializes a case set to pretty-printed JSON
///
/// # Errors
/// Returns [`CaseSetError::Parse`] when serialization fails.
pub fn to_json(set: &CaseSet) -> CaseSetResult<String> {
    serde_json::to_string_pretty(set).map_err(|err| CaseSetError::parse("json", err))
}

/// Deserializes a case set from JSON and revalidates it
///
/// # Errors
/// Returns [`CaseSetError::Parse`] on malformed input and
/// [`CaseSetError::EmptyCaseSet`] when the parsed set has no cases.
pub fn from_json(json: &str) -> CaseSetResult<CaseSet> {
    let set: CaseSet = serde_json::from_str(json).map_err(|err| CaseSetError::parse("json", err))?;
    set.validate()?;
    Ok(set)
}

/// Serializes a case set to pretty-printed RON
///
/// # Errors
/// Returns [`CaseSetError::Parse`] when serialization fails.
pub fn to_ron(set: &CaseSet) -> CaseSetResult<String> {
    ron::ser::to_string_pretty(set, ron::ser::PrettyConfig::default())
        .map_err(|err| CaseSetError::parse("ron", err))
}

/// Deserializes a case set from RON and revalidates it
///
/// # Errors
/// Returns [`CaseSetError::Parse`] on malformed input and
/// [`CaseSetError::EmptyCaseSet`] when the parsed set has no cases.
pub fn from_ron(ron_str: &str) -> CaseSetResult<CaseSet> {
    let set: CaseSet = ron::from_str(ron_str).map_err(|err| CaseSetError::parse("ron", err))?;
    set.validate()?;
    Ok(set)
}

// ============================================================================
// SECTION: File Format Dispatch
// ============================================================================

/// On-disk case-set formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    /// JSON fixture (`.json`)
    Json,
    /// RON fixture (`.ron`)
    Ron,
}

/// Resolves the fixture format from a path's extension.
fn detect_format(path: &Path) -> CaseSetResult<FileFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(FileFormat::Json),
        Some("ron") => Ok(FileFormat::Ron),
        _ => Err(CaseSetError::io(
            path.display().to_string(),
            "unsupported extension, expected .json or .ron",
        )),
    }
}

// ============================================================================
// SECTION: File Loaders
// ============================================================================

/// Loads a case set from a `.json` or `.ron` file
///
/// # Errors
/// Returns [`CaseSetError::Io`] when the file cannot be read or has an
/// unsupported extension, and the [`from_json`]/[`from_ron`] errors otherwise.
pub fn load_from_file(path: impl AsRef<Path>) -> CaseSetResult<CaseSet> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let contents = fs::read_to_string(path)
        .map_err(|err| CaseSetError::io(path.display().to_string(), err))?;
    match format {
        FileFormat::Json => from_json(&contents),
        FileFormat::Ron => from_ron(&contents),
    }
}

/// Saves a case set to a `.json` or `.ron` file
///
/// # Errors
/// Returns [`CaseSetError::Io`] when the file cannot be written or has an
/// unsupported extension, and [`CaseSetError::Parse`] when serialization
/// fails.
pub fn save_to_file(set: &CaseSet, path: impl AsRef<Path>) -> CaseSetResult {
    let path = path.as_ref();
    let contents = match detect_format(path)? {
        FileFormat::Json => to_json(set)?,
        FileFormat::Ron => to_ron(set)?,
    };
    fs::write(path, contents).map_err(|err| CaseSetError::io(path.display().to_string(), err))
}

// Tests are in the central tests module (tests/serde_support.rs)
