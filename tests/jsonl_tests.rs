// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSONL error-tolerance integration tests.
//!
//! Tests cover:
//! - Skipping malformed lines while preserving order of the rest
//! - Strict decoding that fails on the first malformed line
//! - Empty and whitespace-only inputs
//! - The no-trailing-newline output contract

use std::fs;
use std::path::PathBuf;

use serde_json::json;

use jsoncodec::{dump, load, load_with, CodecError, LoadOptions, Mode, Payload};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Get a temporary directory for test files
fn temp_dir() -> PathBuf {
    let random = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    std::env::temp_dir().join(format!("jsoncodec_jsonl_{}_{}", std::process::id(), random))
}

/// Create a temporary file path with cleanup guard
fn temp_path(name: &str) -> (PathBuf, CleanupGuard) {
    let dir = temp_dir();
    fs::create_dir_all(&dir).ok();
    let path = dir.join(name);
    let guard = CleanupGuard(dir);
    (path, guard)
}

/// Cleanup guard for test temporary files
struct CleanupGuard(PathBuf);

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

// ============================================================================
// Error Tolerance
// ============================================================================

#[test]
fn test_skip_error_lines_drops_malformed() {
    let (path, _guard) = temp_path("tolerant.jsonl");
    fs::write(&path, "{\"a\":1}\nNOT_JSON\n{\"b\":2}").unwrap();

    let payload = load(&path).expect("Tolerant load should succeed");
    assert_eq!(
        payload,
        Payload::Records(vec![json!({"a": 1}), json!({"b": 2})])
    );
}

#[test]
fn test_strict_load_fails_on_malformed_line() {
    let (path, _guard) = temp_path("strict.jsonl");
    fs::write(&path, "{\"a\":1}\nNOT_JSON\n{\"b\":2}").unwrap();

    let options = LoadOptions::new().with_skip_error_lines(false);
    let err = load_with(&path, &options).unwrap_err();

    match err {
        CodecError::ParseError { context, .. } => assert_eq!(context, "jsonl line 2"),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_all_lines_malformed_yields_empty() {
    let (path, _guard) = temp_path("garbage.jsonl");
    fs::write(&path, "not\njson\nat all").unwrap();

    let payload = load(&path).unwrap();
    assert_eq!(payload, Payload::Records(Vec::new()));
}

#[test]
fn test_blank_interior_line_is_skipped() {
    let (path, _guard) = temp_path("blanks.jsonl");
    fs::write(&path, "{\"a\":1}\n\n{\"b\":2}").unwrap();

    // A blank line is not valid JSON, so it falls under the same skip rule
    let payload = load(&path).unwrap();
    assert_eq!(
        payload,
        Payload::Records(vec![json!({"a": 1}), json!({"b": 2})])
    );

    let options = LoadOptions::new().with_skip_error_lines(false);
    assert!(load_with(&path, &options).is_err());
}

#[test]
fn test_json_mode_error_not_suppressed_by_skip_flag() {
    let (path, _guard) = temp_path("broken.json");
    fs::write(&path, "{not json").unwrap();

    // skip_error_lines only applies to JSONL mode
    let options = LoadOptions::new().with_skip_error_lines(true);
    let err = load_with(&path, &options).unwrap_err();
    assert!(matches!(err, CodecError::ParseError { .. }));
}

// ============================================================================
// Empty and Whitespace Inputs
// ============================================================================

#[test]
fn test_empty_file_yields_empty_records() {
    let (path, _guard) = temp_path("empty.jsonl");
    fs::write(&path, "").unwrap();

    let payload = load(&path).unwrap();
    assert_eq!(payload, Payload::Records(Vec::new()));
}

#[test]
fn test_whitespace_only_file_yields_empty_records() {
    let (path, _guard) = temp_path("spaces.jsonl");
    fs::write(&path, "  \n\n\t  \n").unwrap();

    let payload = load(&path).unwrap();
    assert_eq!(payload, Payload::Records(Vec::new()));

    // Strict mode agrees: zero lines remain after trimming
    let options = LoadOptions::new().with_skip_error_lines(false);
    assert_eq!(
        load_with(&path, &options).unwrap(),
        Payload::Records(Vec::new())
    );
}

// ============================================================================
// Line Termination Contract
// ============================================================================

#[test]
fn test_dump_appends_no_trailing_newline() {
    let (path, _guard) = temp_path("records.jsonl");

    let records = vec![json!({"a": 1}), json!({"b": 2})];
    dump(&Payload::Records(records), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "{\"a\":1}\n{\"b\":2}");
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_load_accepts_posix_terminated_input() {
    let (path, _guard) = temp_path("terminated.jsonl");
    fs::write(&path, "{\"a\":1}\n{\"b\":2}\n").unwrap();

    // A trailing newline from other producers must not add a phantom record
    let options = LoadOptions::new().with_skip_error_lines(false);
    let payload = load_with(&path, &options).unwrap();
    assert_eq!(
        payload,
        Payload::Records(vec![json!({"a": 1}), json!({"b": 2})])
    );
}

#[test]
fn test_load_trims_surrounding_whitespace_per_line() {
    let (path, _guard) = temp_path("padded.jsonl");
    fs::write(&path, "  {\"a\":1}\r\n\t{\"b\":2}  ").unwrap();

    // Carriage returns land in the adjacent line's surrounding whitespace
    let options = LoadOptions::new().with_skip_error_lines(false);
    let payload = load_with(&path, &options).unwrap();
    assert_eq!(
        payload,
        Payload::Records(vec![json!({"a": 1}), json!({"b": 2})])
    );
}

// ============================================================================
// Mode Interaction
// ============================================================================

#[test]
fn test_tolerance_flag_ignored_for_explicit_json_mode() {
    let (path, _guard) = temp_path("records.jsonl");
    fs::write(&path, "{\"a\":1}\n{\"b\":2}").unwrap();

    // Forcing JSON mode on multi-line records is a parse error regardless
    // of the tolerance flag
    let options = LoadOptions::new()
        .with_mode(Mode::Json)
        .with_skip_error_lines(true);
    assert!(load_with(&path, &options).is_err());
}
