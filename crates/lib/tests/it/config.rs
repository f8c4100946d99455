//! Loading and saving the rank alphabet.

use lexorank::{OrderedList, RankConfig, RankGenerator, store::InMemory};
use tempfile::tempdir;

#[test]
fn test_config_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rank.json");

    let config = RankConfig::new('A', 'Z').with_seed_char('B');
    config.save_to_file(&path).unwrap();

    let loaded = RankConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_config_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let loaded = RankConfig::load_from_file(dir.path().join("absent.json")).unwrap();
    assert_eq!(loaded, RankConfig::default());
    assert_eq!(
        RankGenerator::new(loaded).unwrap(),
        RankGenerator::default()
    );
}

#[test]
fn test_partial_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rank.json");
    std::fs::write(&path, r#"{ "seed_char": "b" }"#).unwrap();

    let loaded = RankConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.min_char, '0');
    assert_eq!(loaded.max_char, 'z');
    assert_eq!(loaded.seed_char, 'b');
}

#[test]
fn test_invalid_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rank.json");
    std::fs::write(&path, r#"{ "min_char": 12 }"#).unwrap();

    let err = RankConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, lexorank::Error::Serialize(_)));
    assert_eq!(err.module(), "serialize");
    assert!(!err.is_store_error());
}

#[test]
fn test_config_read_failure_is_io_error() {
    let dir = tempdir().unwrap();

    // A directory exists at the path but cannot be read as a file
    let err = RankConfig::load_from_file(dir.path()).unwrap_err();
    assert!(matches!(err, lexorank::Error::Io(_)));
    assert!(err.is_io_error());
    assert_eq!(err.module(), "io");
    assert!(!err.is_store_error());
}

#[test]
fn test_config_save_to_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("rank.json");

    let err = RankConfig::default().save_to_file(&path).unwrap_err();
    assert!(err.is_io_error());
    assert_eq!(err.module(), "io");
}

#[test]
fn test_loaded_config_is_validated_by_generator() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rank.json");
    std::fs::write(&path, r#"{ "min_char": "a", "max_char": "b" }"#).unwrap();

    let loaded = RankConfig::load_from_file(&path).unwrap();
    let err: lexorank::Error = RankGenerator::new(loaded).unwrap_err().into();
    assert!(err.is_config_error());
}

#[test]
fn test_list_from_loaded_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rank.json");
    RankConfig::new('a', 'z')
        .with_seed_char('m')
        .save_to_file(&path)
        .unwrap();

    let generator = RankGenerator::new(RankConfig::load_from_file(&path).unwrap()).unwrap();
    let list = OrderedList::with_generator(InMemory::<String>::new(), generator);

    assert_eq!(list.create("first".to_string()).unwrap(), "m");
    assert_eq!(list.create("second".to_string()).unwrap(), "n");
    assert_eq!(list.generator().config().seed_char, 'm');
}
