// SPDX-License-Identifier: MPL-2.0
//! Background image references sanitized for style syntax.
//!
//! Style backends that take textual `url(...)` references choke on a handful
//! of characters that are perfectly legal in file paths. A [`BackgroundRef`]
//! keeps two forms of the same path: the filesystem form handed to the image
//! decoder, and a sanitized form safe to splice into style syntax.

use std::path::{Path, PathBuf};

/// Characters with reserved meaning in style reference syntax.
const STYLE_RESERVED: [char; 6] = ['-', ']', '^', '$', '*', '.'];

/// A palette background image reference.
///
/// Windows-style `\` separators are normalized to `/` up front; the
/// sanitized form additionally backslash-escapes every reserved character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundRef {
    path: PathBuf,
    style_ref: String,
}

impl BackgroundRef {
    pub fn new(raw: impl AsRef<str>) -> Self {
        let normalized = raw.as_ref().replace('\\', "/");
        let style_ref = escape_style_chars(&normalized);
        Self {
            path: PathBuf::from(normalized),
            style_ref,
        }
    }

    /// Filesystem path, separator-normalized, for the image decoder.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sanitized textual form safe to embed in style reference syntax.
    pub fn style_ref(&self) -> &str {
        &self.style_ref
    }
}

/// Backslash-escapes every style-reserved character in `normalized`.
fn escape_style_chars(normalized: &str) -> String {
    let mut out = String::with_capacity(normalized.len());
    for c in normalized.chars() {
        if STYLE_RESERVED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// True when every reserved character in `text` is preceded by `\`.
    fn reserved_chars_are_escaped(text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        chars.iter().enumerate().all(|(i, c)| {
            !STYLE_RESERVED.contains(c) || (i > 0 && chars[i - 1] == '\\')
        })
    }

    #[test]
    fn windows_separators_are_normalized() {
        let reference = BackgroundRef::new(r"textures\set01\rock.png");
        assert_eq!(reference.path(), Path::new("textures/set01/rock.png"));
    }

    #[test]
    fn style_ref_escapes_reserved_characters() {
        let reference = BackgroundRef::new("tex-sets/$pack/[v2]^final*.png");
        assert!(reserved_chars_are_escaped(reference.style_ref()));
        assert_eq!(
            reference.style_ref(),
            "tex\\-sets/\\$pack/[v2\\]\\^final\\*\\.png"
        );
    }

    #[test]
    fn no_raw_backslash_survives_normalization() {
        let reference = BackgroundRef::new(r"C:\assets\palette.png");
        assert!(!reference.path().to_string_lossy().contains('\\'));
        assert!(reserved_chars_are_escaped(reference.style_ref()));
    }

    #[test]
    fn plain_path_passes_through_untouched() {
        let reference = BackgroundRef::new("textures/grass_01");
        assert_eq!(reference.style_ref(), "textures/grass_01");
    }
}
