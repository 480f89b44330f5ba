//! StarUML exporter
//!
//! Serializes imported classifiers into a minimal `.mdj` project document.

use tracing::info;

use crate::export::{ExportError, ExportResult};
use crate::import::ClassData;
use crate::models::staruml::{CLASS_TYPE, Project, UMLAttribute, UMLClassElement};

/// Exporter producing StarUML `.mdj` project files.
#[derive(Debug, Default)]
pub struct StarUMLExporter;

impl StarUMLExporter {
    /// Create a new StarUML exporter instance.
    pub fn new() -> Self {
        Self
    }

    /// Build the `.mdj` project document for a set of imported classifiers.
    ///
    /// Classifier and attribute order is preserved as imported.
    pub fn build_project(&self, classes: &[ClassData]) -> Project {
        let elements = classes
            .iter()
            .map(|class| UMLClassElement {
                id: class.id.clone(),
                element_type: CLASS_TYPE.to_string(),
                name: class.name.clone(),
                is_interface: class.is_interface,
                owned_elements: Vec::new(),
                attributes: class
                    .attributes
                    .iter()
                    .map(|attr| UMLAttribute {
                        name: attr.name.clone(),
                        visibility: attr.visibility.clone(),
                        attribute_type: attr.data_type.clone(),
                    })
                    .collect(),
            })
            .collect();

        Project::wrap(elements)
    }

    /// Export classifiers to `.mdj` content.
    ///
    /// # Arguments
    ///
    /// * `classes` - Imported classifiers, in the order they should appear
    ///
    /// # Returns
    ///
    /// An `ExportResult` whose content is the full project document as
    /// 2-space indented JSON. Non-ASCII characters are written literally.
    pub fn export(&self, classes: &[ClassData]) -> Result<ExportResult, ExportError> {
        let project = self.build_project(classes);
        let content = serde_json::to_string_pretty(&project)
            .map_err(|e| ExportError::SerializationError(e.to_string()))?;

        info!("Exported {} classifiers to StarUML project", classes.len());

        Ok(ExportResult {
            content,
            format: "mdj".to_string(),
        })
    }
}
