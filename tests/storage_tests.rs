use chrono::{Duration, TimeZone, Utc};
use estimap::core::{ComplexityLevel, ModuleMetrics};
use estimap::engine;
use estimap::storage::{AnalysisStore, JsonFileStore, MemoryStore, COLLECTION_FILE};
use pretty_assertions::assert_eq;

fn sample_records() -> Vec<estimap::AnalysisRecord> {
    let base = Utc.with_ymd_and_hms(2026, 2, 1, 8, 0, 0).unwrap();
    [
        ("auth", 800, ComplexityLevel::Low, 4),
        ("billing", 2500, ComplexityLevel::Medium, 25),
        ("search", 6000, ComplexityLevel::High, 60),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, loc, complexity, commits))| {
        let metrics = ModuleMetrics::new(name, loc, complexity, commits);
        engine::analyze_at(&metrics, base + Duration::milliseconds(i as i64)).unwrap()
    })
    .collect()
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    assert_eq!(store.load().unwrap(), vec![]);
}

#[test]
fn test_round_trip_preserves_order_and_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let records = sample_records();

    store.save(&records).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn test_save_writes_fixed_collection_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    store.save(&sample_records()).unwrap();

    assert!(dir.path().join(COLLECTION_FILE).is_file());
    assert_eq!(store.collection_path(), dir.path().join(COLLECTION_FILE));
}

#[test]
fn test_clear_removes_collection() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    store.save(&sample_records()).unwrap();

    store.clear().unwrap();
    assert!(!dir.path().join(COLLECTION_FILE).exists());
    assert_eq!(store.load().unwrap(), vec![]);
}

#[test]
fn test_clear_on_empty_store_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    store.clear().unwrap();
}

#[test]
fn test_save_creates_store_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested").join("store");
    let store = JsonFileStore::new(&nested);

    store.save(&sample_records()).unwrap();
    assert!(nested.join(COLLECTION_FILE).is_file());
}

#[test]
fn test_memory_store_round_trip() {
    let store = MemoryStore::new();
    let records = sample_records();

    store.save(&records).unwrap();
    assert_eq!(store.load().unwrap(), records);

    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), vec![]);
}

#[test]
fn test_ids_are_unique_and_monotonic_in_sample() {
    let records = sample_records();
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(ids, sorted);
}
