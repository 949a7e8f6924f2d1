use card_mapper::mapping::store::MappingStore;
use card_mapper::source::error::SourceError;
use card_mapper::source::fetcher::{load_response, load_yaml};
use card_mapper::source::slot::InFlightSlot;
use serde_json::json;

use crate::common::fixtures::product_store;

mod common;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("card_mapper_{}_{}", std::process::id(), name))
}

// ============================================================================
// Response loading
// ============================================================================

#[test]
fn loads_a_json_response_file() {
    let path = temp_path("response.json");
    std::fs::write(&path, r#"{"data": [{"name": "x"}]}"#).unwrap();

    let value = load_response(path.to_str().unwrap()).unwrap();
    assert_eq!(value["data"][0]["name"], json!("x"));

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_file_is_a_file_read_error() {
    let err = load_response("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, SourceError::FileRead { .. }));
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn invalid_json_is_a_parse_error_with_context() {
    let path = temp_path("broken.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = load_response(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, SourceError::JsonParse { .. }));
    assert!(err.to_string().contains("JSON parse error"));

    std::fs::remove_file(&path).ok();
}

#[test]
fn mapping_yaml_loads_back_into_a_store() {
    let path = temp_path("mapping.yaml");
    let store = product_store();
    std::fs::write(&path, serde_yaml::to_string(&store).unwrap()).unwrap();

    let loaded: MappingStore = load_yaml(path.to_str().unwrap()).unwrap();
    assert_eq!(loaded.product, store.product);

    std::fs::remove_file(&path).ok();
}

#[test]
fn invalid_yaml_is_a_yaml_error() {
    let path = temp_path("broken.yaml");
    std::fs::write(&path, "cardType: [unclosed").unwrap();

    let err = load_yaml::<MappingStore>(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, SourceError::YamlParse { .. }));

    std::fs::remove_file(&path).ok();
}

// ============================================================================
// In-flight request slot — newest request wins
// ============================================================================

#[test]
fn stale_result_cannot_overwrite_newer_selection() {
    let mut slot: InFlightSlot<&str> = InFlightSlot::new();

    let first = slot.begin(); // user selects channel A
    let second = slot.begin(); // user switches to channel B before A resolves

    assert!(slot.complete(second, "accounts-for-B"));
    assert!(!slot.complete(first, "accounts-for-A"), "stale ticket must be rejected");

    assert_eq!(slot.latest(), Some(&"accounts-for-B"));
}

#[test]
fn out_of_order_completion_keeps_newest() {
    let mut slot: InFlightSlot<u32> = InFlightSlot::new();

    let a = slot.begin();
    assert!(slot.is_current(a));
    assert!(slot.complete(a, 1));

    let b = slot.begin();
    assert!(!slot.is_current(a));
    assert!(slot.is_current(b));

    // The old value is still visible until the new request lands.
    assert_eq!(slot.latest(), Some(&1));
    assert!(slot.complete(b, 2));
    assert_eq!(slot.latest(), Some(&2));
}

#[test]
fn clear_drops_the_stored_result() {
    let mut slot: InFlightSlot<u32> = InFlightSlot::new();
    let t = slot.begin();
    slot.complete(t, 7);

    slot.clear();
    assert_eq!(slot.latest(), None);
}
