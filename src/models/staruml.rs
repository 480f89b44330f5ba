//! StarUML `.mdj` document model.
//!
//! Field order in these structs is the key order StarUML sees on disk, so
//! new fields must be inserted at the position they should serialize at.

use serde::{Deserialize, Serialize};

/// `_type` value for the project root element.
pub const PROJECT_TYPE: &str = "Project";
/// Project name written into every generated `.mdj` file.
pub const PROJECT_NAME: &str = "ImportPlantUML";
/// `_type` value for the model container element.
pub const MODEL_TYPE: &str = "Model";
/// Name of the single model all imported classifiers are placed under.
pub const MODEL_NAME: &str = "ImportedModel";
/// `_type` value for every imported classifier. Interfaces keep this type
/// as well; only the `isInterface` flag distinguishes them.
pub const CLASS_TYPE: &str = "UMLClass";
/// Placeholder attribute type. XMI 1.x attribute types are tool-specific
/// references we cannot resolve, so every attribute is typed as a string.
pub const ATTRIBUTE_TYPE_PLACEHOLDER: &str = "string";
/// Visibility assigned to attributes that carry none in the source.
pub const DEFAULT_VISIBILITY: &str = "public";

/// Root element of a `.mdj` project file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_type")]
    pub element_type: String,
    pub name: String,
    #[serde(rename = "ownedElements")]
    pub owned_elements: Vec<Model>,
}

/// Model container holding the imported classifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "_type")]
    pub element_type: String,
    pub name: String,
    #[serde(rename = "ownedElements")]
    pub owned_elements: Vec<UMLClassElement>,
}

/// A single imported class or interface.
///
/// `_id` and `name` serialize as `null` when absent in the source; StarUML
/// tolerates both, and omitting the keys would change the envelope shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UMLClassElement {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "_type")]
    pub element_type: String,
    pub name: Option<String>,
    #[serde(rename = "isInterface")]
    pub is_interface: bool,
    /// Always empty. Nested classifiers are emitted as siblings, not
    /// re-parented under their container.
    #[serde(rename = "ownedElements")]
    pub owned_elements: Vec<serde_json::Value>,
    pub attributes: Vec<UMLAttribute>,
}

/// An owned attribute of an imported classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UMLAttribute {
    pub name: Option<String>,
    pub visibility: String,
    #[serde(rename = "type")]
    pub attribute_type: String,
}

impl Project {
    /// Wrap a sequence of classifiers in the fixed
    /// Project → Model envelope.
    pub fn wrap(elements: Vec<UMLClassElement>) -> Self {
        Self {
            element_type: PROJECT_TYPE.to_string(),
            name: PROJECT_NAME.to_string(),
            owned_elements: vec![Model {
                element_type: MODEL_TYPE.to_string(),
                name: MODEL_NAME.to_string(),
                owned_elements: elements,
            }],
        }
    }
}
