//! Structured logging bootstrap for Repricer.

pub mod logger;

pub use logger::init_logger;
