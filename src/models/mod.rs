//! Typed document models.
//!
//! Currently only the StarUML output side is modelled as owned structs; the
//! XMI input side is consumed as a stream and never materialized as a tree.

pub mod staruml;

pub use staruml::{
    ATTRIBUTE_TYPE_PLACEHOLDER, CLASS_TYPE, DEFAULT_VISIBILITY, MODEL_NAME, MODEL_TYPE, Model,
    PROJECT_NAME, PROJECT_TYPE, Project, UMLAttribute, UMLClassElement,
};
