use std::collections::BTreeSet;

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::property::{build_descriptors, ApiClass, ClassDescriptor, PropertyRecord, DEFAULT_CLASS_PREFIX};

fn methods(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn explicit(id: &str, class: &str, api_methods: &[&str]) -> PropertyRecord {
    PropertyRecord::new(id, id, ApiClass::Explicit(class.to_string()), api_methods.iter().copied())
}

#[test]
fn width_height_color_scenario() -> Result<()> {
    let properties = vec![
        PropertyRecord::new("color", "Color", ApiClass::Absent, Vec::<String>::new()),
        PropertyRecord::new("width", "Width", ApiClass::AutoDerived, ["parse"]),
        explicit("height", "CustomHeightAPI", &["parse", "apply"]),
    ];

    let descriptors = build_descriptors(&properties, DEFAULT_CLASS_PREFIX)?;

    assert_eq!(
        descriptors,
        vec![
            ClassDescriptor {
                index: 1,
                classname: "CSSPropertyAPIWidth".to_string(),
                property_ids: vec!["width".to_string()],
                api_methods: methods(&["parse"]),
            },
            ClassDescriptor {
                index: 2,
                classname: "CustomHeightAPI".to_string(),
                property_ids: vec!["height".to_string()],
                api_methods: methods(&["parse", "apply"]),
            },
        ]
    );
    assert!(descriptors.iter().all(|d| !d.property_ids.contains(&"color".to_string())));

    Ok(())
}

#[test]
fn shared_class_scenario() -> Result<()> {
    let properties = vec![
        explicit("border-top-width", "SharedAPI", &["parse"]),
        explicit("border-left-width", "SharedAPI", &["parse"]),
    ];

    let descriptors = build_descriptors(&properties, DEFAULT_CLASS_PREFIX)?;

    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].classname, "SharedAPI");
    assert_eq!(descriptors[0].property_ids, vec!["border-top-width", "border-left-width"]);

    Ok(())
}

#[test]
fn grouping_is_stable_regardless_of_intervening_properties() -> Result<()> {
    let mut properties = vec![explicit("first", "TargetAPI", &[])];
    for i in 0..20 {
        properties.push(explicit(&format!("filler-{i}"), &format!("FillerAPI{}", i % 4), &[]));
        properties.push(PropertyRecord::new(format!("plain-{i}"), "Plain", ApiClass::Absent, Vec::<String>::new()));
    }
    properties.push(explicit("second", "TargetAPI", &[]));

    let descriptors = build_descriptors(&properties, DEFAULT_CLASS_PREFIX)?;

    let target = descriptors.iter().find(|d| d.classname == "TargetAPI").expect("TargetAPI missing");
    assert_eq!(target.property_ids, vec!["first", "second"]);

    let mut indices: Vec<usize> = descriptors.iter().map(|d| d.index).collect();
    indices.sort_unstable();
    assert_eq!(indices, (1..=descriptors.len()).collect::<Vec<_>>());
    assert_eq!(descriptors.len(), 5);

    Ok(())
}

#[test]
fn descriptors_are_deterministic() -> Result<()> {
    let properties = vec![
        PropertyRecord::new("width", "Width", ApiClass::AutoDerived, ["parse"]),
        explicit("height", "SharedAPI", &["parse"]),
        explicit("depth", "SharedAPI", &["parse"]),
    ];

    let first = build_descriptors(&properties, DEFAULT_CLASS_PREFIX)?;
    let second = build_descriptors(&properties, DEFAULT_CLASS_PREFIX)?;
    assert_eq!(first, second);

    Ok(())
}
