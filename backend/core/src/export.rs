//! CSV export of the current table.
//!
//! The output carries a header row (`price` plus any passthrough columns in
//! their original order) and is offered for download under a fixed filename.
//! Numbers are written in shortest round-trip form, so re-decoding the file
//! as a spreadsheet reproduces the table exactly.

use tracing::info;

use crate::error::RepriceError;
use crate::table::PriceTable;

/// Fixed download filename offered for every export.
pub const EXPORT_FILENAME: &str = "precios_modificados.csv";

/// A serialized table ready to hand to the host for download.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Serialize a table to CSV bytes with a header row.
pub fn to_csv(table: &PriceTable) -> Result<Vec<u8>, RepriceError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(table.columns())
        .map_err(|e| RepriceError::Export(e.to_string()))?;
    for row in table.rows() {
        let record: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        writer
            .write_record(&record)
            .map_err(|e| RepriceError::Export(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| RepriceError::Export(e.to_string()))
}

/// Serialize a table under a download filename.
pub fn export(
    table: &PriceTable,
    filename: impl Into<String>,
) -> Result<ExportFile, RepriceError> {
    let filename = filename.into();
    let bytes = to_csv(table)?;
    info!("[Export] {} rows -> {}", table.row_count(), filename);
    Ok(ExportFile { filename, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Cell;

    #[test]
    fn header_row_comes_first() {
        let table = PriceTable::from_prices(vec![110.0, 9.99]);
        let bytes = to_csv(&table).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("price"));
        assert_eq!(lines.next(), Some("110"));
        assert_eq!(lines.next(), Some("9.99"));
    }

    #[test]
    fn passthrough_columns_keep_their_order() {
        let table = PriceTable::from_rows(
            vec!["name".into(), "price".into(), "sku".into()],
            vec![vec![
                Cell::Text("widget".into()),
                Cell::Number(5.5),
                Cell::Text("A-1".into()),
            ]],
        );
        let text = String::from_utf8(to_csv(&table).unwrap()).unwrap();
        assert_eq!(text, "name,price,sku\nwidget,5.5,A-1\n");
    }

    #[test]
    fn export_uses_the_fixed_filename() {
        let table = PriceTable::from_prices(vec![1.0]);
        let file = export(&table, EXPORT_FILENAME).unwrap();
        assert_eq!(file.filename, "precios_modificados.csv");
        assert!(!file.bytes.is_empty());
    }
}
