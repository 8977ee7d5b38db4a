// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Serialization to files and writers.
//!
//! Path targets are created (or truncated), written, and closed by the
//! operation; the close is guaranteed by scope exit on every path,
//! including errors. Writer targets are borrowed and never closed.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::encoding::{JsonCodec, JsonlCodec};
use crate::io::detection;
use crate::{CodecError, Mode, Payload, Result};

/// Configuration for `dump` operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DumpOptions {
    /// Explicit mode override (None = infer from path extension)
    pub mode: Option<Mode>,
    /// Pretty-print JSON-mode output
    pub pretty: bool,
}

impl DumpOptions {
    /// Create options with defaults: mode inferred, compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit mode, overriding path inference.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set whether JSON-mode output is pretty-printed.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Serialize a payload to a file with default options.
///
/// The mode is inferred from the path extension: `.jsonl` / `.jsonline`
/// select JSONL, everything else selects JSON.
///
/// # Example
///
/// ```rust,no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use jsoncodec::{dump, Payload};
/// use serde_json::json;
///
/// dump(&Payload::Document(json!({"x": 1})), "out.json")?;
/// # Ok(())
/// # }
/// ```
pub fn dump<P: AsRef<Path>>(payload: &Payload, path: P) -> Result<()> {
    dump_with(payload, path, &DumpOptions::default())
}

/// Serialize a payload to a file.
///
/// In JSON mode the whole payload becomes one JSON text blob (a record
/// sequence encodes as a JSON array). In JSONL mode the payload must have
/// a sequence view ([`Payload::as_sequence`]); each document encodes
/// compactly on its own line, joined with `\n` and no trailing newline.
pub fn dump_with<P: AsRef<Path>>(payload: &Payload, path: P, options: &DumpOptions) -> Result<()> {
    let path = path.as_ref();
    let mode = detection::resolve_mode(path, options.mode);
    let text = encode_payload(payload, mode, options.pretty)?;

    let mut file = File::create(path)
        .map_err(|e| CodecError::io(path.display().to_string(), format!("{e}")))?;
    file.write_all(text.as_bytes())
        .map_err(|e| CodecError::io(path.display().to_string(), format!("{e}")))?;

    Ok(())
}

/// Serialize a payload to a borrowed writer.
///
/// The writer has no path to sniff, so the mode is taken explicitly;
/// `options.mode` is not consulted. The writer is flushed by the caller
/// and never closed here.
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use jsoncodec::{dump_to_writer, DumpOptions, Mode, Payload};
/// use serde_json::json;
///
/// let mut buf = Vec::new();
/// let payload = Payload::Records(vec![json!(1), json!(2)]);
/// dump_to_writer(&payload, &mut buf, Mode::Jsonl, &DumpOptions::new())?;
/// assert_eq!(buf, b"1\n2");
/// # Ok(())
/// # }
/// ```
pub fn dump_to_writer<W: Write>(
    payload: &Payload,
    writer: &mut W,
    mode: Mode,
    options: &DumpOptions,
) -> Result<()> {
    let text = encode_payload(payload, mode, options.pretty)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| CodecError::io("<stream>", format!("{e}")))?;
    Ok(())
}

/// Encode a payload in the given mode.
fn encode_payload(payload: &Payload, mode: Mode, pretty: bool) -> Result<String> {
    match mode {
        Mode::Json => JsonCodec::new().with_pretty(pretty).encode(payload),
        Mode::Jsonl => {
            let records = payload.as_sequence().ok_or_else(|| {
                CodecError::encode("jsonl", "payload is not a sequence of documents")
            })?;
            JsonlCodec::new().encode(records)
        }
    }
}
