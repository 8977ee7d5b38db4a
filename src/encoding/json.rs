// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # JSON Codec
//!
//! Whole-document JSON encoding and decoding.
//!
//! ## Example
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use jsoncodec::encoding::json::JsonCodec;
//!
//! let codec = JsonCodec::new();
//! let doc = codec.decode(r#"{"x": 1, "y": 2}"#)?;
//! # Ok(())
//! # }
//! ```

use crate::{CodecError, Document, Payload, Result};

/// Codec for whole-document JSON text.
pub struct JsonCodec {
    /// Pretty-print encoded output
    pretty: bool,
}

impl JsonCodec {
    /// Create a new JSON codec with compact output.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Set whether encoded output is pretty-printed.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Decode a JSON string into a single document.
    ///
    /// Malformed content fails with a parse error; there is no tolerance
    /// at the document level.
    pub fn decode(&self, text: &str) -> Result<Document> {
        serde_json::from_str(text).map_err(|e| CodecError::parse("json", format!("{e}")))
    }

    /// Encode a payload as one JSON text blob.
    ///
    /// A record sequence encodes as a JSON array.
    pub fn encode(&self, payload: &Payload) -> Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(payload)
                .map_err(|e| CodecError::encode("json", format!("{e}")))
        } else {
            serde_json::to_string(payload).map_err(|e| CodecError::encode("json", format!("{e}")))
        }
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new()
    }
}
