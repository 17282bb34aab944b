use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use css_property_apis::{Generator, GeneratorError, GeneratorOptions};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("CSSProperties.json5")
}

fn file_names(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn generates_table_and_stubs() -> Result<()> {
    let temp_dir = tempdir()?;
    let output_dir = temp_dir.path().join("gen");

    let result = Generator::with_defaults(&output_dir).run(fixture())?;

    let classes: Vec<(usize, &str)> = result
        .descriptors
        .iter()
        .map(|d| (d.index, d.classname.as_str()))
        .collect();
    assert_eq!(
        classes,
        vec![
            (1, "CSSPropertyAPIAlignItems"),
            (2, "CSSPropertyAPIBaselineShift"),
            (3, "CSSPropertyAPIBorderWidth"),
            (4, "CSSPropertyAPIFlex"),
        ]
    );
    assert_eq!(
        result.descriptors[2].property_ids,
        vec!["CSSPropertyBorderTopWidth", "CSSPropertyBorderLeftWidth"]
    );

    assert_eq!(
        file_names(&output_dir),
        vec![
            "CSSPropertyAPIAlignItems.h",
            "CSSPropertyAPIBaselineShift.h",
            "CSSPropertyAPIBorderWidth.h",
            "CSSPropertyAPIFlex.h",
            "CSSPropertyDescriptor.cpp",
        ]
    );

    let table = fs::read_to_string(output_dir.join("CSSPropertyDescriptor.cpp"))?;
    assert!(table.contains("// 3: CSSPropertyAPIBorderWidth (CSSPropertyBorderTopWidth, CSSPropertyBorderLeftWidth)"));
    assert!(table.contains("CSSPropertyAPIFlex::parseShorthand,"));
    assert!(table.contains("case CSSPropertyBorderLeftWidth:\n      return cssPropertyDescriptors[3];"));
    assert!(!table.contains("CSSPropertyColor"));
    assert!(!table.contains("CSSPropertyDisplay"));

    let flex = fs::read_to_string(output_dir.join("CSSPropertyAPIFlex.h"))?;
    assert!(flex.contains("class CSSPropertyAPIFlex : public CSSPropertyAPI {"));
    assert!(flex.contains("static bool parseShorthand(bool important,"));
    assert!(!flex.contains("parseSingleValue"));

    Ok(())
}

#[test]
fn second_run_is_byte_identical() -> Result<()> {
    let temp_dir = tempdir()?;
    let first_dir = temp_dir.path().join("first");
    let second_dir = temp_dir.path().join("second");

    Generator::with_defaults(&first_dir).run(fixture())?;
    Generator::with_defaults(&second_dir).run(fixture())?;

    for name in file_names(&first_dir) {
        assert_eq!(
            fs::read(first_dir.join(&name))?,
            fs::read(second_dir.join(&name))?,
            "{} differs between runs",
            name
        );
    }

    let rerun = Generator::with_defaults(&first_dir).run(fixture())?;
    assert_eq!(rerun.stats.written, 0);
    assert_eq!(rerun.stats.unchanged, 5);

    Ok(())
}

#[test]
fn invalid_api_class_writes_nothing() -> Result<()> {
    let temp_dir = tempdir()?;
    let schema = temp_dir.path().join("CSSProperties.json");
    fs::write(
        &schema,
        r#"{ "data": [
            { "name": "width", "api_class": true },
            { "name": "z-index", "api_class": 42 }
        ] }"#,
    )?;
    let output_dir = temp_dir.path().join("gen");

    let err = Generator::with_defaults(&output_dir).run(&schema).unwrap_err();

    let generator_error = err.downcast_ref::<GeneratorError>().expect("typed error");
    match generator_error {
        GeneratorError::Configuration { property, value, .. } => {
            assert_eq!(property, "CSSPropertyZIndex");
            assert_eq!(value, "42");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(file_names(&output_dir).is_empty());

    Ok(())
}

#[test]
fn class_name_cannot_leave_output_dir() -> Result<()> {
    let temp_dir = tempdir()?;
    let schema = temp_dir.path().join("CSSProperties.json");
    fs::write(
        &schema,
        r#"{ "data": [ { "name": "width", "api_class": "../escaped/Evil" } ] }"#,
    )?;
    let output_dir = temp_dir.path().join("gen");

    let err = Generator::with_defaults(&output_dir).run(&schema).unwrap_err();

    match err.downcast_ref::<GeneratorError>() {
        Some(GeneratorError::Configuration { property, .. }) => assert_eq!(property, "CSSPropertyWidth"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(file_names(&output_dir).is_empty());
    assert!(!temp_dir.path().join("escaped").exists());

    Ok(())
}

#[test]
fn only_renders_selected_artifacts() -> Result<()> {
    let temp_dir = tempdir()?;
    let output_dir = temp_dir.path().join("gen");
    let options = GeneratorOptions {
        only: vec!["CSSPropertyAPIFlex.h".to_string()],
        ..GeneratorOptions::default()
    };

    let result = Generator::new(options, &output_dir).run(fixture())?;

    assert_eq!(result.artifacts, vec!["CSSPropertyAPIFlex.h"]);
    assert_eq!(file_names(&output_dir), vec!["CSSPropertyAPIFlex.h"]);

    Ok(())
}

#[test]
fn unknown_selection_writes_nothing() -> Result<()> {
    let temp_dir = tempdir()?;
    let output_dir = temp_dir.path().join("gen");
    let options = GeneratorOptions {
        only: vec!["CSSPropertyAPIColor.h".to_string()],
        ..GeneratorOptions::default()
    };

    let err = Generator::new(options, &output_dir).run(fixture()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GeneratorError>(),
        Some(GeneratorError::UnknownArtifact(_))
    ));
    assert!(file_names(&output_dir).is_empty());

    Ok(())
}

#[test]
fn broken_template_writes_nothing() -> Result<()> {
    let temp_dir = tempdir()?;
    let template_dir = temp_dir.path().join("templates");
    fs::create_dir_all(&template_dir)?;
    fs::write(template_dir.join("CSSPropertyAPIFiles.h.tmpl"), "class {{no_such_field}};")?;
    let output_dir = temp_dir.path().join("gen");
    let options = GeneratorOptions {
        template_dir: Some(template_dir),
        ..GeneratorOptions::default()
    };

    let err = Generator::new(options, &output_dir).run(fixture()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GeneratorError>(),
        Some(GeneratorError::Render { .. })
    ));
    assert!(file_names(&output_dir).is_empty());

    Ok(())
}

#[test]
fn plan_lists_artifacts_without_writing() -> Result<()> {
    let temp_dir = tempdir()?;
    let output_dir = temp_dir.path().join("gen");

    let plan = Generator::with_defaults(&output_dir).plan(fixture())?;

    assert_eq!(plan.artifact_names().count(), 5);
    assert_eq!(plan.artifact_names().next(), Some("CSSPropertyDescriptor.cpp"));
    assert!(!output_dir.exists());

    Ok(())
}

#[test]
fn custom_prefix_renames_auto_derived_classes() -> Result<()> {
    let temp_dir = tempdir()?;
    let options = GeneratorOptions {
        class_prefix: "StyleAPI".to_string(),
        ..GeneratorOptions::default()
    };

    let plan = Generator::new(options, temp_dir.path()).plan(fixture())?;
    let names: Vec<&str> = plan.artifact_names().collect();

    assert!(names.contains(&"StyleAPIFlex.h"));
    assert!(names.contains(&"CSSPropertyAPIAlignItems.h"));

    Ok(())
}
