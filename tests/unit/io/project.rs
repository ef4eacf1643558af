//! Tests for project records and import validation

#[cfg(test)]
mod tests {
    use blueprint_planner::PlannerError;
    use blueprint_planner::io::project::{
        Project, export_file_name, image_file_name, parse_import,
    };
    use chrono::{TimeZone, Utc};

    fn sample_project() -> Project {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Project {
            id: "proj_1714564800000_abc".to_string(),
            name: "Sample".to_string(),
            grid: vec![
                vec![Some("stone".to_string()), None],
                vec![None, Some("dirt".to_string())],
            ],
            rows: 2,
            cols: 2,
            created_at: created,
            updated_at: created,
        }
    }

    // Tests generated ids carry the timestamp and a hex suffix
    // Verified by dropping the random suffix
    #[test]
    fn test_generate_id_format() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let id = Project::generate_id(now);

        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts.first(), Some(&"proj"));
        assert_eq!(parts.get(1), Some(&"1714564800000"));
        assert!(
            parts
                .get(2)
                .is_some_and(|hex| u32::from_str_radix(hex, 16).is_ok())
        );
    }

    // Tests records serialize with camelCase timestamps
    // Verified by removing the serde rename attribute
    #[test]
    fn test_json_field_names() {
        let json = sample_project().to_json_pretty().unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(json.contains("null"));

        let parsed = Project::from_json(&json).unwrap();
        assert_eq!(parsed, sample_project());
    }

    // Tests decoding stored cells checks declared dimensions
    // Verified by skipping check_dimensions in block_grid
    #[test]
    fn test_block_grid_checks_dimensions() {
        let project = sample_project();
        let grid = project.block_grid().unwrap();
        assert_eq!(grid.get(1, 1), Some("dirt"));

        let mismatched = Project {
            cols: 3,
            ..sample_project()
        };
        assert!(matches!(
            mismatched.block_grid(),
            Err(PlannerError::InvalidGrid { .. })
        ));
    }

    // Tests a full exported document imports cleanly
    // Verified by requiring an id on import
    #[test]
    fn test_import_exported_document() {
        let json = sample_project().to_json_pretty().unwrap();
        let imported = parse_import(&json).unwrap();

        assert_eq!(imported.name, "Sample");
        assert_eq!(imported.grid.dimensions(), (2, 2));
        assert_eq!(imported.grid.get(0, 0), Some("stone"));
    }

    // Tests missing or mistyped required fields are rejected
    // Verified by defaulting missing rows to the grid length
    #[test]
    fn test_import_rejects_missing_fields() {
        let documents = [
            r#"{"grid":[[null]],"rows":1,"cols":1}"#,
            r#"{"name":"","grid":[[null]],"rows":1,"cols":1}"#,
            r#"{"name":"A","rows":1,"cols":1}"#,
            r#"{"name":"A","grid":null,"rows":1,"cols":1}"#,
            r#"{"name":"A","grid":[[null]],"cols":1}"#,
            r#"{"name":"A","grid":[[null]],"rows":1}"#,
            r#"{"name":"A","grid":[[null]],"rows":"1","cols":1}"#,
            r#"[1, 2, 3]"#,
        ];

        for document in documents {
            let result = parse_import(document);
            assert!(
                matches!(&result, Err(e) if e.to_string() == "Invalid project file format."),
                "{document} gave {result:?}"
            );
        }
    }

    // Tests grids with non-string cells or non-array rows are rejected
    // Verified by treating numbers as air
    #[test]
    fn test_import_rejects_bad_cells() {
        let documents = [
            r#"{"name":"A","grid":[[1]],"rows":1,"cols":1}"#,
            r#"{"name":"A","grid":["stone"],"rows":1,"cols":1}"#,
            r#"{"name":"A","grid":{"0":[null]},"rows":1,"cols":1}"#,
        ];

        for document in documents {
            let result = parse_import(document);
            assert!(
                matches!(&result, Err(e) if e.to_string() == "Invalid grid data in project file."),
                "{document} gave {result:?}"
            );
        }
    }

    // Tests shape mismatches and ragged rows are rejected
    // Verified by accepting any rectangular grid
    #[test]
    fn test_import_rejects_shape_mismatch() {
        let mismatched = r#"{"name":"A","grid":[[null,null]],"rows":1,"cols":3}"#;
        assert!(matches!(
            parse_import(mismatched),
            Err(PlannerError::InvalidGrid { .. })
        ));

        let ragged = r#"{"name":"A","grid":[[null,null],[null]],"rows":2,"cols":2}"#;
        assert!(matches!(
            parse_import(ragged),
            Err(PlannerError::InvalidGrid { .. })
        ));
    }

    // Tests dimensions written as integral floats are accepted
    // Verified by reading rows and cols with as_u64
    #[test]
    fn test_import_accepts_float_dimensions() {
        let document = r#"{"name":"a","grid":[[null]],"rows":1.0,"cols":1.0}"#;
        let imported = parse_import(document).unwrap();
        assert_eq!(imported.name, "a");
        assert_eq!(imported.grid.dimensions(), (1, 1));
    }

    // Tests fractional or negative dimensions are a shape mismatch
    // Verified by truncating 1.5 to 1 before comparing
    #[test]
    fn test_import_rejects_non_integral_dimensions() {
        let documents = [
            r#"{"name":"A","grid":[[null]],"rows":1.5,"cols":1}"#,
            r#"{"name":"A","grid":[[null]],"rows":1,"cols":-1}"#,
        ];

        for document in documents {
            assert!(
                matches!(
                    parse_import(document),
                    Err(ref e) if e.to_string() == "Grid dimensions do not match rows/cols."
                ),
                "{document}"
            );
        }
    }

    // Tests malformed JSON surfaces a serialization error
    // Verified by mapping parse failures to InvalidProject
    #[test]
    fn test_import_malformed_json() {
        assert!(matches!(
            parse_import("{ nope"),
            Err(PlannerError::Serialization { .. })
        ));
    }

    // Tests export file names derived from project names
    // Verified by keeping spaces in the JSON stem
    #[test]
    fn test_file_names() {
        assert_eq!(export_file_name("My  Castle"), "My_Castle.json");
        assert_eq!(export_file_name("   "), "minecraft_project.json");
        assert_eq!(image_file_name(" Castle "), "Castle.png");
        assert_eq!(image_file_name(""), "minecraft_blueprint.png");
    }
}
