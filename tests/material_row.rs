use material_comparison_toolbox::material::MaterialRecord;
use material_comparison_toolbox::schema::{PropertyDescriptor, PropertySchema, SchemaError};

#[test]
fn new_material_has_full_standard_schema() {
    let m = MaterialRecord::new("Low carbon steel", Some("Fe/0.02-0.3C"));
    let schema = PropertySchema::standard();
    assert_eq!(schema.len(), 28);
    assert!(m.property_keys().eq(schema.keys()));
    assert!(m.properties().iter().all(|p| !p.is_set()));
    assert_eq!(m.property("price").map(|p| p.name()), Some("Price"));
    assert_eq!(m.property("density").and_then(|p| p.units()), Some("kg/m3"));
}

#[test]
fn to_row_contains_exactly_name_composition_and_schema_keys() {
    let mut m = MaterialRecord::new("A", None);
    m.update("density", Some(7800.0), Some(7900.0), None)
        .expect("density update");
    let row = m.to_row();

    let schema = PropertySchema::standard();
    let mut expected = vec!["name", "composition"];
    expected.extend(schema.keys());
    assert_eq!(row.column_names(), expected);

    assert_eq!(row.name, "A");
    assert_eq!(row.composition, None);
    assert_eq!(row.get("density"), Some(7850.0));
    // 갱신하지 않은 물성은 null로 남는다.
    assert_eq!(row.get("price"), None);
}

#[test]
fn update_unknown_key_reports_not_found() {
    let mut m = MaterialRecord::new("A", None);
    assert_eq!(m.update("colour", None, None, Some(1.0)), Ok(false));
    assert_eq!(m.update("price", None, None, Some(1.0)), Ok(true));
}

#[test]
fn detailed_row_carries_all_statistics() {
    let mut m = MaterialRecord::new("A", Some("Fe"));
    m.property_mut("price")
        .expect("price exists")
        .set_range(0.68, 0.74)
        .expect("price range");
    let detail = m.to_detailed_row();
    assert_eq!(detail.len(), 28);
    let price = &detail[0];
    assert_eq!(price.key, "price");
    assert_eq!(price.units.as_deref(), Some("USD/kg"));
    assert_eq!(price.lower_bound, Some(0.68));
    assert_eq!(price.upper_bound, Some(0.74));
    let value = price.representative_value.expect("midpoint");
    assert!((value - 0.71).abs() < 1e-12);
    assert!((price.dispersion.expect("dispersion") - 0.03).abs() < 1e-12);
}

#[test]
fn restricted_schema_follows_caller_order() {
    let schema = PropertySchema::standard()
        .restricted(&["density", "price"])
        .expect("restricted schema");
    assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["density", "price"]);

    let m = MaterialRecord::with_schema("A", None, &schema);
    assert_eq!(m.properties().len(), 2);
    assert_eq!(m.to_row().column_names(), vec!["name", "composition", "density", "price"]);
}

#[test]
fn schema_rejects_unknown_and_duplicate_keys() {
    let err = PropertySchema::standard().restricted(&["density", "colour"]).unwrap_err();
    assert_eq!(err, SchemaError::UnknownProperty("colour".into()));

    let err = PropertySchema::new(vec![
        PropertyDescriptor::numeric("density", "Density", "kg/m3"),
        PropertyDescriptor::numeric("density", "Density", "g/cm3"),
    ])
    .unwrap_err();
    assert_eq!(err, SchemaError::DuplicateKey("density".into()));
}
