// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! I/O layer for JSON and JSON Lines files.
//!
//! This module provides mode detection and the file/stream entry points
//! built on the string-level codecs in [`crate::encoding`].

pub mod detection;
pub mod reader;
pub mod writer;

// Re-exports
pub use detection::{detect_mode, resolve_mode};
pub use reader::{load, load_from_reader, load_with, LoadOptions, TextEncoding};
pub use writer::{dump, dump_to_writer, dump_with, DumpOptions};
