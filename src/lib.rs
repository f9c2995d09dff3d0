//! Swatch - dominant-color palette extraction CLI.
//!
//! The palette engine lives in the `dominant-color` crate; this library
//! exposes the CLI's report types for integration testing.

pub mod report;
