// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout jsoncodec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error handling for parse, I/O, and encode failures
//! - [`Payload`] - Unified payload representation (document or records)
//! - [`Mode`] - Encoding mode identifier

pub mod error;
pub mod value;

pub use error::{CodecError, Result};
pub use value::{Document, Payload};

/// Encoding mode identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// One JSON document per file
    Json,
    /// One JSON document per line (JSON Lines)
    Jsonl,
}

/// Error returned when parsing a `Mode` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseModeError {
    _private: (),
}

impl std::fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid mode name, expected 'json' or 'jsonl'")
    }
}

impl std::error::Error for ParseModeError {}

impl std::str::FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Mode::Json),
            "jsonl" => Ok(Mode::Jsonl),
            _ => Err(ParseModeError { _private: () }),
        }
    }
}

impl Mode {
    /// Check if this mode is JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Mode::Json)
    }

    /// Check if this mode is JSON Lines.
    pub fn is_jsonl(&self) -> bool {
        matches!(self, Mode::Jsonl)
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Json => "json",
            Mode::Jsonl => "jsonl",
        }
    }
}
