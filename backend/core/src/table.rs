use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of the canonical price column.
pub const PRICE_COLUMN: &str = "price";

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A single table value. Extracted-price tables hold only numbers;
/// spreadsheet imports may carry text in passthrough columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// PriceTable
// ---------------------------------------------------------------------------

/// Ordered columns plus ordered rows of cells. Replaced wholesale on a new
/// upload, mutated in place by commands, dropped with the session.
///
/// Invariant: every value in the `price` column is a finite non-negative
/// float. Extraction filters garbage before construction; the executor
/// validates before every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl PriceTable {
    /// Single-column table, one row per extracted price.
    pub fn from_prices(prices: Vec<f64>) -> Self {
        Self {
            columns: vec![PRICE_COLUMN.to_string()],
            rows: prices.into_iter().map(|p| vec![Cell::Number(p)]).collect(),
        }
    }

    /// Pass-through constructor for decoded spreadsheets. Columns and cells
    /// are kept as-is; a `price` column is not guaranteed to exist.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the canonical `price` column, if present.
    pub fn price_column(&self) -> Option<usize> {
        self.columns.iter().position(|c| c == PRICE_COLUMN)
    }

    /// The price in a given row, if the column exists and the cell is numeric.
    pub fn price(&self, row: usize) -> Option<f64> {
        let col = self.price_column()?;
        self.rows.get(row)?.get(col)?.as_number()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)
    }

    /// Overwrite a cell. Out-of-range coordinates are ignored; the executor
    /// bounds-checks before writing.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(r) = self.rows.get_mut(row) {
            if let Some(c) = r.get_mut(col) {
                *c = cell;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_prices_builds_single_price_column() {
        let table = PriceTable::from_prices(vec![100.0, 9.99]);
        assert_eq!(table.columns(), &[PRICE_COLUMN.to_string()]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.price(0), Some(100.0));
        assert_eq!(table.price(1), Some(9.99));
    }

    #[test]
    fn price_column_resolved_by_exact_name() {
        let table = PriceTable::from_rows(
            vec!["name".into(), "price".into()],
            vec![vec!["widget".into(), 5.0.into()]],
        );
        assert_eq!(table.price_column(), Some(1));
        assert_eq!(table.price(0), Some(5.0));
    }

    #[test]
    fn missing_price_column_is_none() {
        let table = PriceTable::from_rows(
            vec!["name".into(), "amount".into()],
            vec![vec!["widget".into(), 5.0.into()]],
        );
        assert_eq!(table.price_column(), None);
        assert_eq!(table.price(0), None);
    }

    #[test]
    fn text_cell_is_not_a_price() {
        let table = PriceTable::from_rows(
            vec!["price".into()],
            vec![vec!["n/a".into()]],
        );
        assert_eq!(table.price(0), None);
    }
}
