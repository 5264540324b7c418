//! 비교표 구성, 정규화, 차트 시리즈 테스트.
use material_comparison_toolbox::comparison::{
    build_table, column_ranges, compare, normalize, select_numeric_columns, to_chart_series,
    ComparisonError, DegeneratePolicy, Normalization,
};
use material_comparison_toolbox::material::MaterialRecord;
use material_comparison_toolbox::schema::{PropertyDescriptor, PropertySchema, ValueKind};
use proptest::prelude::*;

fn close(a: Option<f64>, b: f64) -> bool {
    a.map(|a| (a - b).abs() < 1e-9).unwrap_or(false)
}

fn two_axis_schema() -> PropertySchema {
    PropertySchema::standard()
        .restricted(&["density", "price"])
        .expect("schema")
}

fn scenario() -> Vec<MaterialRecord> {
    let schema = two_axis_schema();
    let mut a = MaterialRecord::with_schema("A", None, &schema);
    a.update("density", Some(7800.0), Some(7900.0), None).unwrap();
    a.update("price", None, None, Some(0.7)).unwrap();
    let mut b = MaterialRecord::with_schema("B", None, &schema);
    b.update("density", Some(2500.0), Some(2900.0), None).unwrap();
    b.update("price", None, None, Some(2.5)).unwrap();
    vec![a, b]
}

#[test]
fn two_material_scenario() {
    let materials = scenario();
    let table = build_table(&materials).expect("table");
    assert_eq!(table.rows[0].cells, vec![Some(7850.0), Some(0.7)]);
    assert_eq!(table.rows[1].cells, vec![Some(2700.0), Some(2.5)]);

    let numeric = select_numeric_columns(&table);
    let normalized = normalize(&numeric, &Normalization::default()).expect("normalize");
    let series = to_chart_series(&normalized);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].label, "A");
    assert_eq!(series[1].label, "B");
    assert_eq!(series[0].axis_labels, vec!["density", "price"]);
    assert!(close(series[0].axis_values[0], 1.1));
    assert!(close(series[0].axis_values[1], 0.1));
    assert!(close(series[1].axis_values[0], 0.1));
    assert!(close(series[1].axis_values[1], 1.1));
}

#[test]
fn compare_restricts_columns_in_given_order() {
    let materials: Vec<MaterialRecord> = ["A", "B"]
        .iter()
        .zip([(0.7, 7850.0), (2.5, 2700.0)])
        .map(|(name, (price, density))| {
            let mut m = MaterialRecord::new(name, None);
            m.update("price", None, None, Some(price)).unwrap();
            m.update("density", None, None, Some(density)).unwrap();
            m
        })
        .collect();
    let series = compare(&materials, &["density", "price"], &Normalization::default())
        .expect("compare");
    assert_eq!(series[0].axis_labels, vec!["density", "price"]);
    assert!(close(series[0].axis_values[0], 1.1));
    assert!(close(series[0].axis_values[1], 0.1));
}

#[test]
fn unknown_column_is_reported() {
    let materials = scenario();
    let err = compare(&materials, &["colour"], &Normalization::default()).unwrap_err();
    assert_eq!(err, ComparisonError::UnknownColumn("colour".into()));
}

#[test]
fn degenerate_column_errors_by_default() {
    let schema = two_axis_schema();
    let mut a = MaterialRecord::with_schema("A", None, &schema);
    a.update("density", None, None, Some(7850.0)).unwrap();
    a.update("price", None, None, Some(1.0)).unwrap();
    let mut b = MaterialRecord::with_schema("B", None, &schema);
    b.update("density", None, None, Some(7850.0)).unwrap();
    b.update("price", None, None, Some(2.0)).unwrap();

    let no_keys: &[&str] = &[];
    let err = compare([&a, &b], no_keys, &Normalization::default()).unwrap_err();
    assert_eq!(
        err,
        ComparisonError::DegenerateColumn {
            column: "density".into(),
            value: 7850.0
        }
    );

    let midpoint = Normalization {
        degenerate: DegeneratePolicy::Midpoint,
        ..Normalization::default()
    };
    let series = compare([&a, &b], no_keys, &midpoint).expect("midpoint policy");
    assert!(close(series[0].axis_values[0], 0.6));
    assert!(close(series[1].axis_values[0], 0.6));
    assert!(close(series[0].axis_values[1], 0.1));
    assert!(close(series[1].axis_values[1], 1.1));
}

#[test]
fn nulls_propagate_through_normalization() {
    let schema = two_axis_schema();
    let mut a = MaterialRecord::with_schema("A", None, &schema);
    a.update("density", None, None, Some(1000.0)).unwrap();
    let mut b = MaterialRecord::with_schema("B", None, &schema);
    b.update("density", None, None, Some(3000.0)).unwrap();
    let mut c = MaterialRecord::with_schema("C", None, &schema);
    c.update("price", None, None, Some(4.0)).unwrap();

    let table = build_table([&a, &b, &c]).expect("table");
    let numeric = select_numeric_columns(&table);
    let ranges = column_ranges(&numeric);
    assert_eq!(ranges[0].map(|r| (r.min, r.max)), Some((1000.0, 3000.0)));
    assert_eq!(ranges[1].map(|r| (r.min, r.max)), Some((4.0, 4.0)));

    // price는 값이 하나뿐이라 중앙값 정책이 필요하다.
    let settings = Normalization {
        degenerate: DegeneratePolicy::Midpoint,
        ..Normalization::default()
    };
    let normalized = normalize(&numeric, &settings).expect("normalize");
    assert_eq!(normalized.values[2][0], None);
    assert_eq!(normalized.values[0][1], None);
    assert!(close(normalized.values[2][1], 0.6));
}

#[test]
fn null_axes_are_reported_not_plotted() {
    let schema = two_axis_schema();
    let mut a = MaterialRecord::with_schema("A", None, &schema);
    a.update("density", None, None, Some(1000.0)).unwrap();
    a.update("price", None, None, Some(1.0)).unwrap();
    let mut b = MaterialRecord::with_schema("B", None, &schema);
    b.update("density", None, None, Some(3000.0)).unwrap();
    let mut c = MaterialRecord::with_schema("C", None, &schema);
    c.update("price", None, None, Some(2.0)).unwrap();

    let no_keys: &[&str] = &[];
    let series = compare([&a, &b, &c], no_keys, &Normalization::default()).expect("compare");

    assert!(series[0].missing_axes().is_empty());
    assert_eq!(series[0].plotted().count(), 2);

    assert_eq!(series[1].missing_axes(), vec![1]);
    let plotted: Vec<(usize, f64)> = series[1].plotted().collect();
    assert_eq!(plotted.len(), 1);
    assert_eq!(plotted[0].0, 0);
    assert!(close(Some(plotted[0].1), 1.1));

    assert_eq!(series[2].missing_axes(), vec![0]);
    assert_eq!(series[2].plotted().map(|(axis, _)| axis).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn all_null_column_stays_null() {
    let schema = two_axis_schema();
    let mut a = MaterialRecord::with_schema("A", None, &schema);
    a.update("density", None, None, Some(1.0)).unwrap();
    let mut b = MaterialRecord::with_schema("B", None, &schema);
    b.update("density", None, None, Some(2.0)).unwrap();

    let table = build_table([&a, &b]).expect("table");
    let normalized = normalize(&select_numeric_columns(&table), &Normalization::default())
        .expect("empty column is not degenerate");
    assert_eq!(normalized.values[0][1], None);
    assert_eq!(normalized.values[1][1], None);
}

#[test]
fn schema_mismatch_is_rejected() {
    let a = MaterialRecord::new("A", None);
    let b = MaterialRecord::with_schema("B", None, &two_axis_schema());
    let err = build_table([&a, &b]).unwrap_err();
    match err {
        ComparisonError::SchemaMismatch {
            material,
            expected,
            found,
        } => {
            assert_eq!(material, "B");
            assert_eq!(expected.len(), 28);
            assert_eq!(found, vec!["density", "price"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn opaque_columns_are_dropped() {
    let schema = PropertySchema::new(vec![
        PropertyDescriptor::numeric("density", "Density", "kg/m3"),
        PropertyDescriptor {
            key: "grade".into(),
            label: "Grade".into(),
            units: None,
            kind: ValueKind::Opaque,
        },
    ])
    .expect("schema");
    let mut a = MaterialRecord::with_schema("A", Some("Fe"), &schema);
    a.update("density", None, None, Some(1.0)).unwrap();
    a.update("grade", None, None, Some(304.0)).unwrap();

    let table = build_table([&a]).expect("table");
    assert_eq!(table.columns.len(), 2);
    let numeric = select_numeric_columns(&table);
    assert_eq!(numeric.columns, vec!["density"]);
    assert_eq!(numeric.row_labels, vec!["A"]);
    assert_eq!(numeric.values, vec![vec![Some(1.0)]]);
}

#[test]
fn empty_input_gives_empty_series() {
    let none: Vec<MaterialRecord> = Vec::new();
    let table = build_table(&none).expect("empty table");
    assert!(table.columns.is_empty());
    let normalized = normalize(&select_numeric_columns(&table), &Normalization::default())
        .expect("empty normalize");
    assert!(to_chart_series(&normalized).is_empty());
}

#[test]
fn chart_series_is_idempotent() {
    let materials = scenario();
    let numeric = select_numeric_columns(&build_table(&materials).unwrap());
    let normalized = normalize(&numeric, &Normalization::default()).unwrap();
    assert_eq!(to_chart_series(&normalized), to_chart_series(&normalized));
}

#[test]
fn custom_scale_and_offset() {
    let materials = scenario();
    let settings = Normalization {
        scale: 10.0,
        offset: 1.0,
        degenerate: DegeneratePolicy::Error,
    };
    let no_keys: &[&str] = &[];
    let series = compare(&materials, no_keys, &settings).unwrap();
    assert!(close(series[0].axis_values[0], 11.0));
    assert!(close(series[1].axis_values[0], 1.0));
}

fn density_column(values: &[f64]) -> Vec<MaterialRecord> {
    let schema = PropertySchema::standard().restricted(&["density"]).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let mut m = MaterialRecord::with_schema(&format!("M{i}"), None, &schema);
            m.update("density", None, None, Some(*v)).unwrap();
            m
        })
        .collect()
}

#[test]
fn extreme_column_span_does_not_overflow() {
    let materials = density_column(&[-1.0e308, 0.0, 1.0e308]);
    let no_keys: &[&str] = &[];
    let series = compare(&materials, no_keys, &Normalization::default()).expect("compare");
    assert!(close(series[0].axis_values[0], 0.1));
    assert!(close(series[1].axis_values[0], 0.6));
    assert!(close(series[2].axis_values[0], 1.1));

    let materials = density_column(&[-f64::MAX, f64::MAX]);
    let series = compare(&materials, no_keys, &Normalization::default()).expect("compare");
    assert!(close(series[0].axis_values[0], 0.1));
    assert!(close(series[1].axis_values[0], 1.1));
}

proptest! {
    #[test]
    fn wide_columns_stay_in_band(
        values in prop::collection::vec((-1.0f64..1.0).prop_map(|x| x * f64::MAX), 2..8)
    ) {
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assume!(max > min);

        let settings = Normalization::default();
        let no_keys: &[&str] = &[];
        let series = compare(&density_column(&values), no_keys, &settings).unwrap();
        for (s, v) in series.iter().zip(&values) {
            let n = s.axis_values[0].unwrap();
            prop_assert!(n.is_finite());
            prop_assert!(n >= settings.lower() - 1e-12 && n <= settings.upper() + 1e-12);
            if *v == max {
                prop_assert!((n - settings.upper()).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn normalized_values_stay_in_band(
        values in prop::collection::vec(-1.0e6f64..1.0e6, 2..12)
    ) {
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assume!(max > min);

        let schema = PropertySchema::standard().restricted(&["density"]).unwrap();
        let materials: Vec<MaterialRecord> = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let mut m = MaterialRecord::with_schema(&format!("M{i}"), None, &schema);
                m.update("density", None, None, Some(*v)).unwrap();
                m
            })
            .collect();

        let settings = Normalization::default();
        let no_keys: &[&str] = &[];
        let series = compare(&materials, no_keys, &settings).unwrap();

        prop_assert_eq!(series.len(), values.len());
        for (i, (s, v)) in series.iter().zip(&values).enumerate() {
            prop_assert_eq!(&s.label, &format!("M{i}"));
            let n = s.axis_values[0].unwrap();
            prop_assert!(n >= settings.lower() - 1e-12 && n <= settings.upper() + 1e-12);
            if *v == min {
                prop_assert!((n - settings.lower()).abs() < 1e-12);
            }
            if *v == max {
                prop_assert!((n - settings.upper()).abs() < 1e-12);
            }
        }
    }
}
