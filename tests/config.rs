use material_comparison_toolbox::comparison::DegeneratePolicy;
use material_comparison_toolbox::config::{load_from, Config, ConfigError};
use std::path::PathBuf;

#[test]
fn defaults_match_reference_normalization() {
    let cfg = Config::default();
    assert_eq!(cfg.normalization.scale, 1.0);
    assert_eq!(cfg.normalization.offset, 0.1);
    assert_eq!(cfg.normalization.degenerate, DegeneratePolicy::Error);
    assert!(cfg.catalogue_path.is_none());
    assert!(cfg.materials.is_empty() && cfg.properties.is_empty());
}

#[test]
fn partial_file_fills_missing_fields() {
    let cfg = Config::from_toml_str(
        r#"
        properties = ["density", "price"]

        [normalization]
        degenerate = "midpoint"
        "#,
    )
    .expect("config");
    assert_eq!(cfg.properties, vec!["density", "price"]);
    assert_eq!(cfg.normalization.degenerate, DegeneratePolicy::Midpoint);
    assert_eq!(cfg.normalization.offset, 0.1);
    assert_eq!(cfg.table_path, PathBuf::from("materials.csv"));
}

#[test]
fn invalid_scale_is_rejected() {
    let err = Config::from_toml_str("[normalization]\nscale = 0.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn save_and_reload() {
    let path = std::env::temp_dir().join(format!("material_config_{}.toml", std::process::id()));
    let mut cfg = Config::default();
    cfg.catalogue_path = Some(PathBuf::from("catalogue.toml"));
    cfg.materials = vec!["Aluminium alloys".into()];
    cfg.save_to(&path).expect("save");
    let loaded = load_from(&path).expect("load");
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, cfg);
}
