//! Upload decoding for Repricer.
//!
//! Turns uploaded bytes into a loaded `PriceTable`: PDF and image uploads go
//! through an external text-extraction collaborator and the price scanner;
//! spreadsheet uploads go through a tabular decode collaborator and pass
//! through unchanged.

pub mod ingest;
pub mod prices;
pub mod sheet;
pub mod source;

pub use ingest::{ContentKind, Ingestor};
pub use prices::extract_prices;
pub use sheet::{CsvSheetDecoder, SheetDecoder};
pub use source::{PlainTextSource, TextSource};
