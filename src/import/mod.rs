//! Import functionality
//!
//! Provides the parser for importing class models from XMI (XML Metadata
//! Interchange) documents. Only classifiers and their owned attributes are
//! extracted; associations, operations and package structure are ignored.

pub mod xmi;

/// Result of an import operation.
///
/// Contains extracted classifiers and any non-fatal errors from the import
/// process. Fatal conditions (malformed XML) are returned as `Err` instead.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[must_use = "import results should be processed or errors checked"]
pub struct ImportResult {
    /// Classifiers extracted from the import, in document order
    pub classes: Vec<ClassData>,
    /// Parse errors/warnings
    pub errors: Vec<ImportError>,
}

/// Error during import
#[derive(Debug, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("IO error: {0}")]
    IoError(String),
}

/// Class data from import
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassData {
    /// Index of this classifier in the import result
    pub class_index: usize,
    /// Identifier from the `xmi:id` attribute, preserved verbatim. Never
    /// synthesized when the source omits it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Classifier name (XMI: name)
    pub name: Option<String>,
    /// Whether the source marks this classifier as an interface
    #[serde(default)]
    pub is_interface: bool,
    /// Owned attributes in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeData>,
}

/// Attribute data from import
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeData {
    /// Attribute name (XMI: name)
    pub name: Option<String>,
    /// UML visibility token, `"public"` when the source carries none
    pub visibility: String,
    /// Always the `"string"` placeholder; XMI 1.x type references are not
    /// resolved
    #[serde(rename = "type")]
    pub data_type: String,
}

// Re-export for convenience
pub use xmi::XMIImporter;
