//! Core data model for the Repricer engine: the in-memory price table,
//! the closed set of mutations that can be applied to it, the error
//! taxonomy, and CSV export.

pub mod error;
pub mod export;
pub mod mutation;
pub mod table;

pub use error::RepriceError;
pub use export::{export, to_csv, ExportFile, EXPORT_FILENAME};
pub use mutation::{Mutation, QuickAction};
pub use table::{Cell, PriceTable, PRICE_COLUMN};
