// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Payload type system.
//!
//! A payload is either a single JSON document or an ordered sequence of
//! documents (records). JSON mode operates on the whole payload; JSONL mode
//! operates on the record sequence, one document per line.

use serde::Serialize;

/// One JSON value (scalar, map, or sequence).
pub type Document = serde_json::Value;

/// Unified payload representation at the codec boundary.
///
/// `load` produces a `Document` in JSON mode and `Records` in JSONL mode;
/// `dump` accepts either and encodes it in the resolved mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// A single JSON document
    Document(Document),
    /// An ordered sequence of documents, one per JSONL line
    Records(Vec<Document>),
}

impl Payload {
    /// Check if this payload is a single document.
    pub fn is_document(&self) -> bool {
        matches!(self, Payload::Document(_))
    }

    /// Check if this payload is a record sequence.
    pub fn is_records(&self) -> bool {
        matches!(self, Payload::Records(_))
    }

    /// Get the document, if this payload is one.
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Payload::Document(doc) => Some(doc),
            Payload::Records(_) => None,
        }
    }

    /// Get the record sequence, if this payload is one.
    pub fn as_records(&self) -> Option<&[Document]> {
        match self {
            Payload::Document(_) => None,
            Payload::Records(records) => Some(records),
        }
    }

    /// View this payload as an ordered sequence of documents.
    ///
    /// A `Records` payload yields its records; a `Document` payload yields
    /// the elements of a JSON array. Any other document shape has no
    /// sequence view and returns `None`.
    pub fn as_sequence(&self) -> Option<&[Document]> {
        match self {
            Payload::Records(records) => Some(records),
            Payload::Document(Document::Array(items)) => Some(items),
            Payload::Document(_) => None,
        }
    }

    /// Convert into a single document.
    ///
    /// A record sequence converts losslessly into a JSON array.
    pub fn into_document(self) -> Document {
        match self {
            Payload::Document(doc) => doc,
            Payload::Records(records) => Document::Array(records),
        }
    }

    /// Convert into a record sequence.
    ///
    /// A `Document` payload converts only if it is a JSON array; its
    /// elements become the records.
    pub fn into_records(self) -> Option<Vec<Document>> {
        match self {
            Payload::Records(records) => Some(records),
            Payload::Document(Document::Array(items)) => Some(items),
            Payload::Document(_) => None,
        }
    }
}

impl From<Document> for Payload {
    fn from(doc: Document) -> Self {
        Payload::Document(doc)
    }
}

impl From<Vec<Document>> for Payload {
    fn from(records: Vec<Document>) -> Self {
        Payload::Records(records)
    }
}
