//! CLI binary entry point for xmi-staruml-cli

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use xmi_staruml_sdk::cli::commands::convert::{ConvertArgs, handle_convert};
#[cfg(feature = "cli")]
use xmi_staruml_sdk::cli::commands::validate::handle_validate;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "xmi-staruml-cli")]
#[command(about = "Convert XMI class models into StarUML (.mdj) projects")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert an XMI file into a StarUML project file
    Convert {
        /// XMI source file
        #[arg(default_value = "uml.xmi")]
        input: PathBuf,
        /// StarUML project output file
        #[arg(default_value = "export_staruml.mdj")]
        output: PathBuf,
    },
    /// Check that an XMI file is well-formed XML
    Validate {
        /// XMI source file
        #[arg(default_value = "uml.xmi")]
        input: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert { input, output } => handle_convert(&ConvertArgs { input, output }),
        Commands::Validate { input } => handle_validate(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature is not enabled. Build with --features cli");
    std::process::exit(1);
}
