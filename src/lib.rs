//! XMI to StarUML SDK - convert XMI class models into StarUML projects
//!
//! Provides unified interfaces for:
//! - XMI import (classifiers and owned attributes)
//! - StarUML `.mdj` export
//! - End-to-end file conversion
//! - XML well-formedness validation

pub mod cli;
pub mod convert;
pub mod export;
pub mod import;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use convert::{ConversionError, convert_file, convert_str};
pub use export::{ExportError, ExportResult, StarUMLExporter};
pub use import::{AttributeData, ClassData, ImportError, ImportResult, XMIImporter};

// Re-export models
pub use models::{Model, Project, UMLAttribute, UMLClassElement};
