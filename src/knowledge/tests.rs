use super::*;
use tempfile::TempDir;

#[test]
fn test_knowledge_base_rejects_empty() {
    let result = KnowledgeBase::new(vec![]);
    assert!(matches!(result, Err(KnowledgeError::Empty)));
}

#[test]
fn test_knowledge_base_preserves_order() {
    let kb = KnowledgeBase::new(default_entries()).expect("defaults are non-empty");
    assert_eq!(kb.len(), 6);
    assert!(!kb.is_empty());
    assert_eq!(kb[0].intent, "business_hours");
    assert_eq!(kb[5].intent, "password_reset");
    assert_eq!(kb.questions()[3], "How do I track my order?");
    assert!(kb.get(6).is_none());
}

#[test]
fn test_entry_keywords_default_when_missing() {
    let json = r#"[{"question": "Q?", "response": "A.", "intent": "x"}]"#;
    let entries: Vec<Entry> = serde_json::from_str(json).expect("valid json");
    assert!(entries[0].keywords.is_empty());
}

#[test]
fn test_json_source_reads_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("kb.json");
    let entries = vec![Entry::new("Where are you?", "Here.", "location").with_keywords(["where"])];
    std::fs::write(&path, serde_json::to_string(&entries).unwrap()).unwrap();

    let kb = load(&JsonFileSource::new(&path)).expect("should load");
    assert_eq!(kb.len(), 1);
    assert_eq!(kb[0], entries[0]);
}

#[test]
fn test_json_source_seeds_missing_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("kb.json");

    let kb = load(&JsonFileSource::new(&path)).expect("should seed defaults");
    assert_eq!(kb.len(), default_entries().len());
    assert!(path.exists(), "seed should be written back");

    let reloaded = load(&JsonFileSource::new(&path)).expect("should reload seed");
    assert_eq!(reloaded.entries(), kb.entries());
}

#[test]
fn test_json_source_missing_without_seed_is_error() {
    let dir = TempDir::new().expect("temp dir");
    let source = JsonFileSource::new(dir.path().join("absent.json")).seed_defaults(false);
    assert!(matches!(source.load_entries(), Err(KnowledgeError::Io { .. })));
}

#[test]
fn test_json_source_malformed_is_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("kb.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = JsonFileSource::new(&path).load_entries();
    assert!(matches!(result, Err(KnowledgeError::Parse { .. })));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn test_json_source_empty_array_fails_load() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("kb.json");
    std::fs::write(&path, "[]").unwrap();

    assert!(matches!(
        load(&JsonFileSource::new(&path)),
        Err(KnowledgeError::Empty)
    ));
}

#[test]
fn test_static_source_defaults() {
    let entries = StaticSource::defaults().load_entries().unwrap();
    assert_eq!(entries, default_entries());
}
