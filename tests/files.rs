//! CSV export and settings files.
use eoq_calculator::config::{self, Config};
use eoq_calculator::export::write_cost_curve_csv;
use eoq_calculator::inventory::{sample_cost_curve, InventoryParameters};

#[test]
fn csv_has_header_and_one_row_per_quantity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("curve.csv");
    let rows = write_cost_curve_csv(&path, sample_cost_curve(5.0, 10.0, 2.0).unwrap()).unwrap();
    assert_eq!(rows, 5);

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("quantity,holding_cost,ordering_cost,total_cost"));
    assert_eq!(lines.next(), Some("1,1.0,50.0,51.0"));
    assert_eq!(lines.count(), 4);
}

#[test]
fn csv_for_an_empty_curve_keeps_the_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    let curve = InventoryParameters::new(0.25, 1.0, 1.0).unwrap().cost_curve();
    assert_eq!(write_cost_curve_csv(&path, curve).unwrap(), 0);
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.trim_end(), "quantity,holding_cost,ordering_cost,total_cost");
}

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = config::load_from(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

#[test]
fn saved_settings_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.currency_label = "USD".into();
    cfg.defaults.demand = 2400.0;
    cfg.scatter_point_limit = 50;
    cfg.chart_sample_limit = 1500;
    cfg.save_to(&path).unwrap();

    let loaded = config::load_from(&path).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn malformed_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "currency_label = [").unwrap();
    let err = config::load_from(&path).unwrap_err();
    assert!(matches!(err, config::ConfigError::Deserialize(_)), "{err}");
}
