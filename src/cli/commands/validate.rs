//! Validate command handler

use crate::cli::error::CliError;
use crate::validation::validate_xml_well_formed;
use std::path::PathBuf;

/// Check that an XMI file is well-formed XML.
///
/// This is a pre-flight check only; conversion performs the same parse and
/// fails on the same inputs.
pub fn handle_validate(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::FileNotFound(input.clone()));
    }

    let content = std::fs::read_to_string(input)
        .map_err(|e| CliError::FileReadError(input.clone(), e.to_string()))?;

    validate_xml_well_formed(&content).map_err(|e| CliError::ValidationError(e.to_string()))?;

    println!("✅ {} is well-formed XML", input.display());
    Ok(())
}
