use material_comparison_toolbox::builtin;
use material_comparison_toolbox::comparison::{compare, Normalization};
use material_comparison_toolbox::export::{write_series_json, write_table_csv};
use material_comparison_toolbox::material::MaterialRecord;
use material_comparison_toolbox::schema::PropertySchema;

fn two_materials() -> Vec<MaterialRecord> {
    let schema = PropertySchema::standard()
        .restricted(&["density", "price"])
        .unwrap();
    let mut a = MaterialRecord::with_schema("A", Some("Fe, C"), &schema);
    a.update("density", Some(7800.0), Some(7900.0), None).unwrap();
    a.update("price", None, None, Some(0.7)).unwrap();
    let mut b = MaterialRecord::with_schema("B \"light\"", None, &schema);
    b.update("density", Some(2500.0), Some(2900.0), None).unwrap();
    vec![a, b]
}

#[test]
fn csv_has_units_row_and_one_row_per_statistic() {
    let mut buf = Vec::new();
    write_table_csv(&two_materials(), &mut buf).expect("csv");
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2 + 2 * 4);
    assert_eq!(lines[0], "material,composition,statistic,density,price");
    assert_eq!(lines[1], ",,units,kg/m3,USD/kg");
    assert_eq!(lines[2], "A,\"Fe, C\",lower_bound,7800,0.7");
    assert_eq!(lines[3], "A,\"Fe, C\",upper_bound,7900,0.7");
    assert_eq!(lines[4], "A,\"Fe, C\",value,7850,0.7");
    assert_eq!(lines[5], "A,\"Fe, C\",dispersion,50,0");
    // 값이 없는 칸은 비워 둔다.
    assert_eq!(lines[8], "\"B \"\"light\"\"\",,value,2700,");
}

#[test]
fn builtin_csv_covers_every_material() {
    let cat = builtin::catalogue().unwrap();
    let mut buf = Vec::new();
    write_table_csv(cat.materials(), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), 2 + 9 * 4);
    assert!(text.lines().next().unwrap().ends_with(",recycle_fraction"));
    assert!(text.contains("\"Cast iron, ductile (nodular)\""));
}

#[test]
fn series_json_is_an_array_of_labelled_axes() {
    let materials = two_materials();
    let series = compare(&materials, &["density"], &Normalization::default()).unwrap();
    let mut buf = Vec::new();
    write_series_json(&series, &mut buf).expect("json");

    let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    let arr = parsed.as_array().expect("array");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["label"], "A");
    assert_eq!(arr[0]["axis_labels"][0], "density");
    assert!((arr[0]["axis_values"][0].as_f64().unwrap() - 1.1).abs() < 1e-9);
    assert!((arr[1]["axis_values"][0].as_f64().unwrap() - 0.1).abs() < 1e-9);
}
