//! XML validation utilities
//!
//! Well-formedness checking only. XSD schema validation of XMI input is
//! deliberately not performed; the importer takes whatever the exporting
//! tool produced.

use anyhow::{Context, Result};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Check that `xml_content` is well-formed XML.
///
/// # Arguments
///
/// * `xml_content` - The XML content to check
///
/// # Returns
///
/// A `Result` indicating whether the document is well-formed.
pub fn validate_xml_well_formed(xml_content: &str) -> Result<()> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => continue,
            Err(e) => {
                return Err(anyhow::anyhow!("XML parsing error: {}", e))
                    .context("XML validation failed");
            }
        }
    }

    Ok(())
}
