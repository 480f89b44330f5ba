//! Export module tests

use xmi_staruml_sdk::export::StarUMLExporter;
use xmi_staruml_sdk::import::{AttributeData, ClassData};
use xmi_staruml_sdk::models::Project;

fn sample_class() -> ClassData {
    ClassData {
        class_index: 0,
        id: Some("EAID_1".to_string()),
        name: Some("Animal".to_string()),
        is_interface: false,
        attributes: vec![AttributeData {
            name: Some("legs".to_string()),
            visibility: "public".to_string(),
            data_type: "string".to_string(),
        }],
    }
}

mod envelope_tests {
    use super::*;

    #[test]
    fn test_project_model_envelope_shape() {
        let exporter = StarUMLExporter::new();
        let result = exporter.export(&[sample_class()]).unwrap();
        assert_eq!(result.format, "mdj");

        let doc: serde_json::Value = serde_json::from_str(&result.content).unwrap();
        assert_eq!(doc["_type"], "Project");
        assert_eq!(doc["name"], "ImportPlantUML");
        assert_eq!(doc["ownedElements"].as_array().unwrap().len(), 1);

        let model = &doc["ownedElements"][0];
        assert_eq!(model["_type"], "Model");
        assert_eq!(model["name"], "ImportedModel");

        let class = &model["ownedElements"][0];
        assert_eq!(class["_id"], "EAID_1");
        assert_eq!(class["_type"], "UMLClass");
        assert_eq!(class["name"], "Animal");
        assert_eq!(class["isInterface"], false);
        assert_eq!(class["ownedElements"].as_array().unwrap().len(), 0);

        let attr = &class["attributes"][0];
        assert_eq!(attr["name"], "legs");
        assert_eq!(attr["visibility"], "public");
        assert_eq!(attr["type"], "string");
    }

    #[test]
    fn test_empty_model_still_has_full_envelope() {
        let exporter = StarUMLExporter::new();
        let result = exporter.export(&[]).unwrap();

        let doc: serde_json::Value = serde_json::from_str(&result.content).unwrap();
        assert_eq!(doc["_type"], "Project");
        let model = &doc["ownedElements"][0];
        assert_eq!(model["name"], "ImportedModel");
        assert_eq!(model["ownedElements"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_owned_elements_stay_empty_even_for_interfaces() {
        let mut class = sample_class();
        class.is_interface = true;
        let result = StarUMLExporter::new().export(&[class]).unwrap();

        let doc: serde_json::Value = serde_json::from_str(&result.content).unwrap();
        let class = &doc["ownedElements"][0]["ownedElements"][0];
        // Interfaces keep the UMLClass type; only the flag differs
        assert_eq!(class["_type"], "UMLClass");
        assert_eq!(class["isInterface"], true);
        assert_eq!(class["ownedElements"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_absent_name_and_id_serialize_as_null() {
        let class = ClassData {
            class_index: 0,
            id: None,
            name: None,
            is_interface: false,
            attributes: Vec::new(),
        };
        let result = StarUMLExporter::new().export(&[class]).unwrap();

        assert!(result.content.contains("\"_id\": null"));
        assert!(result.content.contains("\"name\": null"));
    }
}

mod formatting_tests {
    use super::*;

    #[test]
    fn test_two_space_indentation_and_key_order() {
        let result = StarUMLExporter::new().export(&[sample_class()]).unwrap();

        let mut lines = result.content.lines();
        assert_eq!(lines.next(), Some("{"));
        assert_eq!(lines.next(), Some("  \"_type\": \"Project\","));
        assert_eq!(lines.next(), Some("  \"name\": \"ImportPlantUML\","));
        assert_eq!(lines.next(), Some("  \"ownedElements\": ["));
    }

    #[test]
    fn test_non_ascii_characters_are_not_escaped() {
        let mut class = sample_class();
        class.name = Some("Café".to_string());
        let result = StarUMLExporter::new().export(&[class]).unwrap();

        assert!(result.content.contains("Café"));
        assert!(!result.content.contains("\\u"));
    }

    #[test]
    fn test_reserialization_is_byte_identical() {
        let classes = vec![
            sample_class(),
            ClassData {
                class_index: 1,
                id: None,
                name: Some("Söme Überclass".to_string()),
                is_interface: true,
                attributes: Vec::new(),
            },
        ];
        let result = StarUMLExporter::new().export(&classes).unwrap();

        let reparsed: Project = serde_json::from_str(&result.content).unwrap();
        let reserialized = serde_json::to_string_pretty(&reparsed).unwrap();
        assert_eq!(result.content, reserialized);
    }
}

mod ordering_tests {
    use super::*;

    #[test]
    fn test_class_order_matches_input_order() {
        let classes: Vec<ClassData> = ["B", "A", "C"]
            .iter()
            .enumerate()
            .map(|(idx, name)| ClassData {
                class_index: idx,
                id: None,
                name: Some(name.to_string()),
                is_interface: false,
                attributes: Vec::new(),
            })
            .collect();
        let result = StarUMLExporter::new().export(&classes).unwrap();

        let doc: serde_json::Value = serde_json::from_str(&result.content).unwrap();
        let names: Vec<_> = doc["ownedElements"][0]["ownedElements"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }
}
