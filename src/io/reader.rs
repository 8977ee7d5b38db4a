// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Deserialization from files and readers.
//!
//! Path sources are opened, read fully into memory, and closed by the
//! operation; the close is guaranteed by scope exit on every path,
//! including errors. Reader sources are borrowed and never closed.

use std::io::Read;
use std::path::Path;

use crate::encoding::{JsonCodec, JsonlCodec};
use crate::io::detection;
use crate::{CodecError, Mode, Payload, Result};

/// Byte-to-text decoding applied to source content.
///
/// JSON and JSONL files are UTF-8; the only knob is whether invalid byte
/// sequences fail the load or are replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    /// Strict UTF-8; invalid byte sequences are a parse error
    #[default]
    Utf8,
    /// UTF-8 with invalid sequences replaced by U+FFFD
    Utf8Lossy,
}

/// Configuration for `load` operations.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Explicit mode override (None = infer from path extension)
    pub mode: Option<Mode>,
    /// In JSONL mode, drop malformed lines instead of failing
    pub skip_error_lines: bool,
    /// Byte-to-text decoding of source content
    pub encoding: TextEncoding,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            mode: None,
            skip_error_lines: true,
            encoding: TextEncoding::Utf8,
        }
    }
}

impl LoadOptions {
    /// Create options with defaults: mode inferred, malformed JSONL lines
    /// skipped, strict UTF-8.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit mode, overriding path inference.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set whether malformed JSONL lines are skipped or abort the load.
    pub fn with_skip_error_lines(mut self, skip: bool) -> Self {
        self.skip_error_lines = skip;
        self
    }

    /// Set the byte-to-text decoding of source content.
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Deserialize a file with default options.
///
/// The mode is inferred from the path extension: `.jsonl` / `.jsonline`
/// select JSONL (the result is [`Payload::Records`]), everything else
/// selects JSON (the result is [`Payload::Document`]).
///
/// # Example
///
/// ```rust,no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use jsoncodec::load;
///
/// let payload = load("events.jsonl")?;
/// for record in payload.as_records().unwrap() {
///     println!("{record}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<Payload> {
    load_with(path, &LoadOptions::default())
}

/// Deserialize a file.
///
/// JSON mode parses the entire content as one document; malformed content
/// is a parse error, never suppressible. JSONL mode parses line by line,
/// preserving line order; per-line failures are dropped or fatal depending
/// on `options.skip_error_lines`. Empty JSONL content yields an empty
/// record sequence.
pub fn load_with<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Payload> {
    let path = path.as_ref();
    let mode = detection::resolve_mode(path, options.mode);

    let bytes = std::fs::read(path)
        .map_err(|e| CodecError::io(path.display().to_string(), format!("{e}")))?;
    let text = decode_text(bytes, options.encoding)?;

    decode_payload(&text, mode, options)
}

/// Deserialize from a borrowed reader.
///
/// The reader has no path to sniff, so the mode is taken explicitly;
/// `options.mode` is not consulted. The reader is drained to its end and
/// never closed here.
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use jsoncodec::{load_from_reader, LoadOptions, Mode};
///
/// let mut source = std::io::Cursor::new("{\"a\":1}\n{\"b\":2}");
/// let payload = load_from_reader(&mut source, Mode::Jsonl, &LoadOptions::new())?;
/// assert_eq!(payload.as_records().unwrap().len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn load_from_reader<R: Read>(
    reader: &mut R,
    mode: Mode,
    options: &LoadOptions,
) -> Result<Payload> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| CodecError::io("<stream>", format!("{e}")))?;
    let text = decode_text(bytes, options.encoding)?;

    decode_payload(&text, mode, options)
}

/// Decode raw bytes into text.
fn decode_text(bytes: Vec<u8>, encoding: TextEncoding) -> Result<String> {
    match encoding {
        TextEncoding::Utf8 => {
            String::from_utf8(bytes).map_err(|e| CodecError::parse("utf-8", format!("{e}")))
        }
        TextEncoding::Utf8Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
    }
}

/// Decode text in the given mode.
fn decode_payload(text: &str, mode: Mode, options: &LoadOptions) -> Result<Payload> {
    match mode {
        Mode::Json => JsonCodec::new().decode(text).map(Payload::Document),
        Mode::Jsonl => JsonlCodec::new()
            .with_skip_error_lines(options.skip_error_lines)
            .decode(text)
            .map(Payload::Records),
    }
}
