//! Extractor implementations, one module per supported website.

pub mod chen;
