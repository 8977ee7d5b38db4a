// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # JSON Lines Codec
//!
//! Record-sequence encoding and decoding: one JSON document per line,
//! newline-separated, with optional tolerance for malformed lines.
//!
//! Encoded output carries no trailing newline. Decoding trims surrounding
//! whitespace before splitting, so a trailing newline on input does not
//! produce a phantom empty record.
//!
//! ## Example
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use jsoncodec::encoding::jsonl::JsonlCodec;
//!
//! let codec = JsonlCodec::new();
//! let records = codec.decode("{\"a\":1}\n{\"b\":2}")?;
//! assert_eq!(records.len(), 2);
//! # Ok(())
//! # }
//! ```

use tracing::warn;

use crate::{CodecError, Document, Result};

/// Codec for newline-separated JSON records.
pub struct JsonlCodec {
    /// Drop malformed lines instead of failing the whole decode
    skip_error_lines: bool,
}

impl JsonlCodec {
    /// Create a new JSONL codec that skips malformed lines.
    pub fn new() -> Self {
        Self {
            skip_error_lines: true,
        }
    }

    /// Set whether malformed lines are skipped or abort the decode.
    pub fn with_skip_error_lines(mut self, skip: bool) -> Self {
        self.skip_error_lines = skip;
        self
    }

    /// Decode JSONL text into an ordered record sequence.
    ///
    /// Content is trimmed of surrounding whitespace and split on `\n`;
    /// each line is trimmed and parsed independently. With skipping
    /// enabled (the default), a malformed line is dropped with a warning
    /// and decoding continues; otherwise the whole decode fails with a
    /// parse error naming the 1-based line number.
    ///
    /// Empty or whitespace-only input yields an empty sequence.
    pub fn decode(&self, text: &str) -> Result<Vec<Document>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for (idx, line) in trimmed.split('\n').enumerate() {
            match serde_json::from_str(line.trim()) {
                Ok(doc) => records.push(doc),
                Err(e) => {
                    if self.skip_error_lines {
                        warn!(
                            context = "jsonl_decode",
                            line = idx + 1,
                            error = %e,
                            "Skipping malformed line"
                        );
                    } else {
                        return Err(CodecError::parse(
                            format!("jsonl line {}", idx + 1),
                            format!("{e}"),
                        ));
                    }
                }
            }
        }

        Ok(records)
    }

    /// Encode a record sequence as JSONL text.
    ///
    /// Each record encodes compactly on its own line; lines are joined
    /// with a single `\n` and no trailing newline is appended.
    pub fn encode(&self, records: &[Document]) -> Result<String> {
        let mut lines = Vec::with_capacity(records.len());
        for record in records {
            let line = serde_json::to_string(record)
                .map_err(|e| CodecError::encode("jsonl", format!("{e}")))?;
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }
}

impl Default for JsonlCodec {
    fn default() -> Self {
        Self::new()
    }
}
