//! The upload boundary: bytes plus a declared content kind, in; a loaded
//! `PriceTable`, out.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use repricer_core::{PriceTable, RepriceError};

use crate::prices::extract_prices;
use crate::sheet::{CsvSheetDecoder, SheetDecoder};
use crate::source::{PlainTextSource, TextSource};

// ---------------------------------------------------------------------------
// Content kind
// ---------------------------------------------------------------------------

/// Declared kind of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Pdf,
    Spreadsheet,
    Image,
}

impl ContentKind {
    /// Detect the kind from a file extension. Covers the accepted upload
    /// set: pdf, xlsx/xls/csv, png/jpg/jpeg.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "xlsx" | "xls" | "csv" => Some(Self::Spreadsheet),
            "png" | "jpg" | "jpeg" => Some(Self::Image),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Ingestor
// ---------------------------------------------------------------------------

/// Routes uploaded bytes through the right collaborator. Pdf and image
/// uploads become single-column price tables via text extraction; a
/// spreadsheet upload passes through decode unchanged.
pub struct Ingestor {
    text_source: Box<dyn TextSource>,
    sheet_decoder: Box<dyn SheetDecoder>,
}

impl Ingestor {
    pub fn new(text_source: Box<dyn TextSource>, sheet_decoder: Box<dyn SheetDecoder>) -> Self {
        Self { text_source, sheet_decoder }
    }

    /// Ingestor wired with the built-in collaborators (UTF-8 text, CSV).
    pub fn builtin() -> Self {
        Self::new(Box::new(PlainTextSource), Box::new(CsvSheetDecoder))
    }

    /// Decode an upload. Any collaborator failure surfaces as a decode
    /// error; nothing downstream of this boundary sees raw bytes.
    pub fn ingest(&self, bytes: &[u8], kind: ContentKind) -> Result<PriceTable, RepriceError> {
        match kind {
            ContentKind::Pdf | ContentKind::Image => {
                let text = self
                    .text_source
                    .extract_text(bytes)
                    .map_err(|e| RepriceError::Decode(e.to_string()))?;
                let prices = extract_prices(&text);
                info!("[Ingest] {:?} upload: {} prices extracted", kind, prices.len());
                Ok(PriceTable::from_prices(prices))
            }
            ContentKind::Spreadsheet => {
                let table = self
                    .sheet_decoder
                    .decode(bytes)
                    .map_err(|e| RepriceError::Decode(e.to_string()))?;
                info!(
                    "[Ingest] spreadsheet upload: {} rows, {} columns",
                    table.row_count(),
                    table.columns().len()
                );
                Ok(table)
            }
        }
    }
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::builtin()
    }
}
