// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Jsoncodec
//!
//! File codec library for JSON and JSON Lines data.
//!
//! This library provides two-way conversion between files and in-memory
//! payloads, organized by concern:
//! - **Mode detection** in [`io::detection`] - explicit override or file
//!   extension (`.jsonl` / `.jsonline` select JSONL, everything else JSON)
//! - **File and stream entry points** in [`io::reader`] and [`io::writer`]
//! - **String-level codecs** in [`encoding::json`] and [`encoding::jsonl`]
//!
//! ## Architecture
//!
//! The io layer is a thin shell over the codecs: it resolves the mode,
//! moves bytes in or out, and owns file handles for exactly one call.
//! Paths are opened and closed by the operation; borrowed readers and
//! writers are never closed. JSONL decoding tolerates malformed lines by
//! default, dropping them with a warning while preserving the order of
//! the lines that parse.
//!
//! ## Example: Round-tripping records
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use jsoncodec::{dump, load, Payload};
//! use serde_json::json;
//!
//! let records = Payload::Records(vec![json!({"a": 1}), json!({"b": 2})]);
//! dump(&records, "events.jsonl")?;
//!
//! let back = load("events.jsonl")?;
//! assert_eq!(back, records);
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Strict line decoding
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use jsoncodec::{load_with, LoadOptions};
//!
//! // Fail on the first malformed line instead of skipping it
//! let options = LoadOptions::new().with_skip_error_lines(false);
//! let payload = load_with("events.jsonl", &options)?;
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{CodecError, Document, Mode, ParseModeError, Payload, Result};

// Encoding/decoding
pub mod encoding;

// Re-export codec types
pub use encoding::{JsonCodec, JsonlCodec};

// I/O (mode detection, file and stream entry points)
pub mod io;

// Re-export the operation surface
pub use io::{
    detect_mode, dump, dump_to_writer, dump_with, load, load_from_reader, load_with, resolve_mode,
    DumpOptions, LoadOptions, TextEncoding,
};
