//! Text-extraction collaborators.
//!
//! PDF readers and OCR engines are external services; the engine only ever
//! sees the raw text they return. Real engines plug in behind `TextSource`.

use anyhow::{bail, Result};

/// Returns the raw text of an uploaded document.
pub trait TextSource {
    fn extract_text(&self, bytes: &[u8]) -> Result<String>;
}

/// Built-in source for text-bearing uploads: the bytes themselves must be
/// valid UTF-8 text.
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_string()),
            Err(_) => bail!("upload is not valid UTF-8 text"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_utf8_through() {
        let text = PlainTextSource.extract_text("Total: $9.99".as_bytes()).unwrap();
        assert_eq!(text, "Total: $9.99");
    }

    #[test]
    fn rejects_non_utf8_bytes() {
        assert!(PlainTextSource.extract_text(&[0xff, 0xfe, 0x00]).is_err());
    }
}
