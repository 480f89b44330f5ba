//! XMI importer
//!
//! Streaming parser for XMI 1.x class models. Classifiers are matched by
//! qualified name anywhere in the tree, so the importer does not care how
//! the exporting tool nests packages around them.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use tracing::{info, warn};

use crate::import::{AttributeData, ClassData, ImportError, ImportResult};
use crate::models::staruml::{ATTRIBUTE_TYPE_PLACEHOLDER, DEFAULT_VISIBILITY};

/// XMI namespace, used for the `xmi:id` identifier attribute.
pub const XMI_NS: &str = "http://www.omg.org/XMI";
/// UML namespace qualifying `Class`, `Classifier.feature` and `Attribute`
/// elements in XMI 1.3 exports.
pub const UML_NS: &str = "href://org.omg/UML/1.3";

/// A classifier whose end tag has not been seen yet.
struct OpenClass {
    /// Position in the result vector
    index: usize,
    /// Depth of the classifier's start tag
    depth: usize,
    /// Whether a `Classifier.feature` child was already consumed
    feature_seen: bool,
}

/// Parser for XMI class model documents.
#[derive(Debug, Default)]
pub struct XMIImporter;

impl XMIImporter {
    /// Create a new XMI parser instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xmi_staruml_sdk::import::xmi::XMIImporter;
    ///
    /// let importer = XMIImporter::new();
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Import XMI content and extract classifier definitions.
    ///
    /// # Arguments
    ///
    /// * `xml_content` - XMI document as a string
    ///
    /// # Returns
    ///
    /// An `ImportResult` with classifiers in document (pre-order) order, or
    /// an `ImportError::ParseError` when the content is not well-formed XML.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xmi_staruml_sdk::import::xmi::XMIImporter;
    ///
    /// let xmi = r#"<XMI xmlns:uml="href://org.omg/UML/1.3">
    ///   <uml:Class name="Animal"/>
    /// </XMI>"#;
    /// let result = XMIImporter::new().import(xmi).unwrap();
    /// assert_eq!(result.classes.len(), 1);
    /// ```
    pub fn import(&self, xml_content: &str) -> Result<ImportResult, ImportError> {
        let mut reader = NsReader::from_str(xml_content);
        reader.config_mut().trim_text(true);

        let mut classes: Vec<ClassData> = Vec::new();
        let mut open_classes: Vec<OpenClass> = Vec::new();
        // Depths of the feature containers currently open, innermost last
        let mut feature_stack: Vec<usize> = Vec::new();
        let mut depth = 0usize;

        loop {
            match reader.read_resolved_event() {
                Err(e) => return Err(ImportError::ParseError(e.to_string())),
                Ok((_, Event::Start(e))) => {
                    self.open_element(
                        &reader,
                        &e,
                        depth,
                        false,
                        &mut classes,
                        &mut open_classes,
                        &mut feature_stack,
                    )?;
                    depth += 1;
                }
                Ok((_, Event::Empty(e))) => {
                    self.open_element(
                        &reader,
                        &e,
                        depth,
                        true,
                        &mut classes,
                        &mut open_classes,
                        &mut feature_stack,
                    )?;
                }
                Ok((_, Event::End(_))) => {
                    depth = depth.saturating_sub(1);
                    if feature_stack.last() == Some(&depth) {
                        feature_stack.pop();
                    }
                    if open_classes.last().is_some_and(|c| c.depth == depth) {
                        open_classes.pop();
                    }
                }
                Ok((_, Event::Eof)) => break,
                Ok(_) => {}
            }
        }

        info!("Parsed {} classifiers from XMI", classes.len());

        Ok(ImportResult {
            classes,
            errors: Vec::new(),
        })
    }

    /// Handle the start of an element at `depth`, routing the three element
    /// names the importer cares about. `is_empty` marks self-closing tags,
    /// which never go on the open stacks.
    #[allow(clippy::too_many_arguments)]
    fn open_element(
        &self,
        reader: &NsReader<&[u8]>,
        element: &BytesStart,
        depth: usize,
        is_empty: bool,
        classes: &mut Vec<ClassData>,
        open_classes: &mut Vec<OpenClass>,
        feature_stack: &mut Vec<usize>,
    ) -> Result<(), ImportError> {
        let (ns, _) = reader.resolve_element(element.name());
        if !matches!(ns, ResolveResult::Bound(Namespace(n)) if n == UML_NS.as_bytes()) {
            return Ok(());
        }

        match element.local_name().as_ref() {
            b"Class" => {
                let index = classes.len();
                classes.push(self.parse_class(reader, element, index)?);
                if !is_empty {
                    open_classes.push(OpenClass {
                        index,
                        depth,
                        feature_seen: false,
                    });
                }
            }
            b"Classifier.feature" => {
                // Only the first container that is an immediate child of the
                // innermost open classifier is consumed
                if let Some(open) = open_classes.last_mut() {
                    if depth == open.depth + 1 {
                        if open.feature_seen {
                            warn!(
                                class_index = open.index,
                                "Ignoring extra Classifier.feature container"
                            );
                        } else {
                            open.feature_seen = true;
                            if !is_empty {
                                feature_stack.push(depth);
                            }
                        }
                    }
                }
            }
            b"Attribute" => {
                // Immediate child of an active feature container; the owning
                // classifier is the innermost open one at that point
                if let (Some(feature_depth), Some(open)) =
                    (feature_stack.last(), open_classes.last())
                {
                    if depth == feature_depth + 1 {
                        let attribute = self.parse_attribute(reader, element)?;
                        classes[open.index].attributes.push(attribute);
                    }
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Extract `name`, `isInterface` and `xmi:id` from a `Class` start tag.
    fn parse_class(
        &self,
        reader: &NsReader<&[u8]>,
        element: &BytesStart,
        index: usize,
    ) -> Result<ClassData, ImportError> {
        let mut class = ClassData {
            class_index: index,
            ..Default::default()
        };

        for attr in element.attributes() {
            let attr = attr.map_err(|e| ImportError::ParseError(e.to_string()))?;
            let (ns, local) = reader.resolve_attribute(attr.key);
            let value = attr
                .unescape_value()
                .map_err(|e| ImportError::ParseError(e.to_string()))?;
            match (ns, local.as_ref()) {
                (ResolveResult::Unbound, b"name") => class.name = Some(value.into_owned()),
                (ResolveResult::Unbound, b"isInterface") => {
                    // Anything other than the literal "true" is false
                    class.is_interface = value.as_ref() == "true";
                }
                (ResolveResult::Bound(Namespace(n)), b"id") if n == XMI_NS.as_bytes() => {
                    class.id = Some(value.into_owned());
                }
                _ => {}
            }
        }

        Ok(class)
    }

    /// Extract `name` and `visibility` from an `Attribute` tag. The type is
    /// always the placeholder.
    fn parse_attribute(
        &self,
        reader: &NsReader<&[u8]>,
        element: &BytesStart,
    ) -> Result<AttributeData, ImportError> {
        let mut name = None;
        let mut visibility = None;

        for attr in element.attributes() {
            let attr = attr.map_err(|e| ImportError::ParseError(e.to_string()))?;
            let (ns, local) = reader.resolve_attribute(attr.key);
            let value = attr
                .unescape_value()
                .map_err(|e| ImportError::ParseError(e.to_string()))?;
            match (ns, local.as_ref()) {
                (ResolveResult::Unbound, b"name") => name = Some(value.into_owned()),
                (ResolveResult::Unbound, b"visibility") => visibility = Some(value.into_owned()),
                _ => {}
            }
        }

        Ok(AttributeData {
            name,
            visibility: visibility.unwrap_or_else(|| DEFAULT_VISIBILITY.to_string()),
            data_type: ATTRIBUTE_TYPE_PLACEHOLDER.to_string(),
        })
    }
}
