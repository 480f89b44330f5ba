//! Convert command handler

use crate::cli::error::CliError;
use crate::convert::convert_file;
use std::path::PathBuf;

/// Arguments for the convert operation
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// XMI source file
    pub input: PathBuf,
    /// `.mdj` target file
    pub output: PathBuf,
}

/// Convert an XMI file into a StarUML project file.
///
/// Prints a confirmation naming the target path on success.
pub fn handle_convert(args: &ConvertArgs) -> Result<(), CliError> {
    if !args.input.exists() {
        return Err(CliError::FileNotFound(args.input.clone()));
    }

    convert_file(&args.input, &args.output)?;

    println!("✅ StarUML project written to {}", args.output.display());
    Ok(())
}
