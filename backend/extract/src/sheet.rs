//! Spreadsheet decode collaborators.
//!
//! Binary spreadsheet parsing (xlsx/xls) is an external concern; whatever
//! decodes the upload hands back a `PriceTable` with its columns as-is.
//! The built-in decoder reads CSV, which also closes the export round trip.

use anyhow::{bail, Result};

use repricer_core::{Cell, PriceTable};

/// Decodes uploaded spreadsheet bytes into a pass-through table.
pub trait SheetDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<PriceTable>;
}

/// CSV decoder: first row is the header, numeric-looking fields become
/// numbers, everything else stays text.
pub struct CsvSheetDecoder;

impl SheetDecoder for CsvSheetDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<PriceTable> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            bail!("spreadsheet has no header row");
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(parse_cell).collect());
        }
        Ok(PriceTable::from_rows(headers, rows))
    }
}

fn parse_cell(field: &str) -> Cell {
    match field.parse::<f64>() {
        Ok(n) if n.is_finite() => Cell::Number(n),
        _ => Cell::Text(field.to_string()),
    }
}
