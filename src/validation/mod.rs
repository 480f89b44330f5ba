//! Validation utilities

pub mod xml;

pub use xml::validate_xml_well_formed;
