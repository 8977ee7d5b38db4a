// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for jsoncodec.
//!
//! Provides error types for codec operations:
//! - Parsing JSON text (whole documents and individual JSONL lines)
//! - Opening, reading, and writing files
//! - Encoding in-memory payloads

use std::fmt;

/// Errors that can occur during codec operations.
#[derive(Debug, Clone)]
pub enum CodecError {
    /// Malformed JSON text encountered during decode
    ParseError {
        /// What was being parsed (e.g., "json", "jsonl line 3", "utf-8")
        context: String,
        /// Error message
        message: String,
    },

    /// Underlying file could not be opened, read, or written
    IoError {
        /// Path of the file, or "<stream>" for borrowed reader/writer handles
        path: String,
        /// Error message
        message: String,
    },

    /// A payload that cannot be represented in the resolved mode
    EncodeError {
        /// Mode being encoded ("json" or "jsonl")
        mode: String,
        /// Error message
        message: String,
    },
}

impl CodecError {
    /// Create a parse error.
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::ParseError {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::IoError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an encode error.
    pub fn encode(mode: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::EncodeError {
            mode: mode.into(),
            message: message.into(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::ParseError { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            CodecError::IoError { path, message } => {
                vec![("path", path.clone()), ("message", message.clone())]
            }
            CodecError::EncodeError { mode, message } => {
                vec![("mode", mode.clone()), ("message", message.clone())]
            }
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::ParseError { context, message } => {
                write!(f, "Parse error in {context}: {message}")
            }
            CodecError::IoError { path, message } => {
                write!(f, "I/O error on '{path}': {message}")
            }
            CodecError::EncodeError { mode, message } => {
                write!(f, "{mode} encode error: {message}")
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type for jsoncodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
