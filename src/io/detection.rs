// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Mode detection from file paths.
//!
//! The encoding mode is resolved once per operation: an explicit mode
//! always wins; otherwise the file extension decides. The same resolution
//! rule applies to both `dump` and `load`, so a file written through one
//! reads back symmetrically through the other.
//!
//! # Example
//!
//! ```rust
//! use jsoncodec::io::detection::detect_mode;
//! use jsoncodec::Mode;
//!
//! assert_eq!(detect_mode("records.jsonl"), Mode::Jsonl);
//! assert_eq!(detect_mode("config.json"), Mode::Json);
//! ```

use std::path::Path;

use crate::Mode;

/// Resolve the encoding mode for a path.
///
/// An explicit mode is used verbatim. Otherwise the path extension is
/// inspected; anything that is not a JSONL extension falls back to JSON.
pub fn resolve_mode<P: AsRef<Path>>(path: P, explicit: Option<Mode>) -> Mode {
    match explicit {
        Some(mode) => mode,
        None => detect_mode(path),
    }
}

/// Detect the encoding mode from a path extension.
///
/// `.jsonl` and `.jsonline` (ASCII case-insensitive) select JSONL; every
/// other extension, or none at all, selects JSON.
pub fn detect_mode<P: AsRef<Path>>(path: P) -> Mode {
    match path.as_ref().extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("jsonline") => {
            Mode::Jsonl
        }
        _ => Mode::Json,
    }
}
