//! XMI to StarUML converter
//!
//! Converts XMI class models to StarUML `.mdj` projects.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::export::{ExportError, StarUMLExporter};
use crate::import::{ImportError, XMIImporter};

/// Error during format conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Import error: {0}")]
    ImportError(#[from] ImportError),
    #[error("Export error: {0}")]
    ExportError(#[from] ExportError),
    #[error("Failed to read {0}: {1}")]
    ReadError(PathBuf, String),
    #[error("Failed to write {0}: {1}")]
    WriteError(PathBuf, String),
}

/// Convert XMI content to StarUML `.mdj` content.
///
/// Pure transformation of input text to output text; no I/O occurs.
///
/// # Arguments
///
/// * `xml_content` - XMI document as a string
///
/// # Returns
///
/// The complete `.mdj` project document as a JSON string.
///
/// # Example
///
/// ```rust
/// use xmi_staruml_sdk::convert::convert_str;
///
/// let xmi = r#"<XMI xmlns:uml="href://org.omg/UML/1.3">
///   <uml:Class name="Animal"/>
/// </XMI>"#;
/// let mdj = convert_str(xmi).unwrap();
/// assert!(mdj.contains("\"Animal\""));
/// ```
pub fn convert_str(xml_content: &str) -> Result<String, ConversionError> {
    let result = XMIImporter::new().import(xml_content)?;
    let export = StarUMLExporter::new().export(&result.classes)?;
    Ok(export.content)
}

/// Convert an XMI file to a StarUML `.mdj` file.
///
/// The whole document is built in memory before anything is written, so a
/// failed conversion never leaves a truncated output file behind. An
/// existing file at `output` is overwritten.
///
/// # Arguments
///
/// * `input` - Path to the XMI source file
/// * `output` - Path the `.mdj` project is written to
pub fn convert_file(input: &Path, output: &Path) -> Result<(), ConversionError> {
    let xml_content = fs::read_to_string(input)
        .map_err(|e| ConversionError::ReadError(input.to_path_buf(), e.to_string()))?;

    let mdj_content = convert_str(&xml_content)?;

    fs::write(output, mdj_content)
        .map_err(|e| ConversionError::WriteError(output.to_path_buf(), e.to_string()))?;

    info!(
        input = %input.display(),
        output = %output.display(),
        "Converted XMI to StarUML project"
    );

    Ok(())
}
