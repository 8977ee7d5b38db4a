// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Encoding/decoding implementations.
//!
//! This module provides the string-level codec implementations:
//! - [`json`] - whole-document JSON encoding/decoding
//! - [`jsonl`] - newline-separated record encoding/decoding

pub mod json;
pub mod jsonl;

pub use json::JsonCodec;
pub use jsonl::JsonlCodec;
