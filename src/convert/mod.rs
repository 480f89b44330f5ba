//! XMI to StarUML conversion module
//!
//! Provides the end-to-end pipeline wiring the XMI importer to the StarUML
//! exporter, both as a pure string transformation and as a file operation.

pub mod converter;

pub use converter::{ConversionError, convert_file, convert_str};
