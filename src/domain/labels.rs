// SPDX-License-Identifier: MPL-2.0
//! Best-effort reader for cell label sources.
//!
//! A label source is a plain text file with one label per line, mapped
//! positionally to row-major cell indices. Reading is best-effort by
//! contract: a missing or unreadable file simply means an unlabeled palette,
//! so no error is surfaced to the caller.

use std::fs;
use std::path::Path;

/// Reads the labels from `source`, one per line, line terminators stripped.
///
/// Returns an empty list when the file cannot be read.
pub fn read_labels(source: &Path) -> Vec<String> {
    match fs::read_to_string(source) {
        Ok(content) => content.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}
