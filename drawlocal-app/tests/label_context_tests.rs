#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `LabelContextBuilder` and the JSON file store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use drawlocal_app::adapters::JsonFilePreferenceStore;
use drawlocal_app::LabelContextBuilder;
use drawlocal_core::{
    Language, LabelSet, LocaleError, LocaleResult, MemoryPreferenceStore, PreferenceStore,
    LANGUAGE_PREFERENCE_KEY,
};
use serde_json::json;

// ===== Mock Implementations =====

/// Counts reads so tests can check the preference is read exactly once.
struct CountingStore {
    inner: MemoryPreferenceStore,
    reads: AtomicUsize,
}

impl CountingStore {
    fn new(value: &str) -> Self {
        Self {
            inner: MemoryPreferenceStore::new().with(LANGUAGE_PREFERENCE_KEY, value),
            reads: AtomicUsize::new(0),
        }
    }
}

impl PreferenceStore for CountingStore {
    fn get(&self, key: &str) -> LocaleResult<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key)
    }
}

struct FailingStore;

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> LocaleResult<Option<String>> {
        Err(LocaleError::StorageError("quota exceeded".to_string()))
    }
}

// ===== Tests =====

#[test]
fn english_preference_from_store() {
    let store = Arc::new(CountingStore::new("en"));
    let ctx = LabelContextBuilder::new()
        .preference_store(store.clone())
        .build()
        .unwrap();

    assert_eq!(ctx.language(), Language::English);
    assert_eq!(ctx.get("draw.toolbar.buttons.polygon"), Some("Draw a polygon"));
    assert_eq!(ctx.get("edit.toolbar.actions.cancel.text"), Some("Cancel"));
    assert_eq!(store.reads.load(Ordering::SeqCst), 1);

    // 之后的读取不会再访问存储
    let _ = ctx.get("draw.handlers.circle.radius");
    let _ = ctx.labels();
    assert_eq!(store.reads.load(Ordering::SeqCst), 1);
}

#[test]
fn albanian_preference_from_store() {
    let ctx = LabelContextBuilder::new()
        .preference_store(Arc::new(CountingStore::new("sq")))
        .build()
        .unwrap();

    assert_eq!(ctx.language(), Language::Albanian);
    assert_eq!(ctx.get("draw.toolbar.buttons.polygon"), Some("Vizato një poligon"));
    assert_eq!(ctx.get("draw.handlers.circle.radius"), Some("Rrezja"));
}

#[test]
fn absent_preference_behaves_like_albanian() {
    let without_store = LabelContextBuilder::new().build().unwrap();
    let empty_store = LabelContextBuilder::new()
        .preference_store(Arc::new(MemoryPreferenceStore::new()))
        .build()
        .unwrap();
    let albanian = LabelContextBuilder::new().preference("sq").build().unwrap();

    assert_eq!(without_store.language(), Language::Albanian);
    assert_eq!(*without_store.labels(), *albanian.labels());
    assert_eq!(*empty_store.labels(), *albanian.labels());
}

#[test]
fn store_failure_behaves_like_albanian() {
    let ctx = LabelContextBuilder::new()
        .preference_store(Arc::new(FailingStore))
        .build()
        .unwrap();
    assert_eq!(ctx.language(), Language::Albanian);
    assert_eq!(*ctx.labels(), LabelSet::for_language(Language::Albanian));
}

#[test]
fn explicit_preference_skips_store() {
    let store = Arc::new(CountingStore::new("sq"));
    let ctx = LabelContextBuilder::new()
        .preference_store(store.clone())
        .preference("en")
        .build()
        .unwrap();

    assert_eq!(ctx.language(), Language::English);
    assert_eq!(store.reads.load(Ordering::SeqCst), 0);
}

#[test]
fn custom_storage_key() {
    let store = MemoryPreferenceStore::new().with("app:lang", "en");
    let ctx = LabelContextBuilder::new()
        .preference_store(Arc::new(store))
        .storage_key("app:lang")
        .build()
        .unwrap();
    assert_eq!(ctx.language(), Language::English);
}

#[test]
fn overrides_are_applied() {
    let ctx = LabelContextBuilder::new()
        .preference("en")
        .overrides(json!({
            "draw": { "toolbar": { "buttons": { "polygon": "Draw an awesome polygon" } } }
        }))
        .build()
        .unwrap();

    assert_eq!(ctx.get("draw.toolbar.buttons.polygon"), Some("Draw an awesome polygon"));
    assert_eq!(ctx.get("draw.toolbar.buttons.rectangle"), Some("Draw a rectangle"));
}

#[test]
fn invalid_overrides_fail_build() {
    let result = LabelContextBuilder::new()
        .preference("en")
        .overrides(json!({ "draw": { "toolbar": { "buttons": { "hexagon": "Draw a hexagon" } } } }))
        .build();

    match result {
        Err(LocaleError::UnknownKey(key)) => assert_eq!(key, "draw.toolbar.buttons.hexagon"),
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn context_is_shared_across_threads() {
    let ctx = LabelContextBuilder::new().preference("en").build().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ctx = ctx.clone();
            thread::spawn(move || ctx.get("draw.handlers.circle.tooltip.start").map(str::to_string))
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap().as_deref(),
            Some("Click and drag to draw circle")
        );
    }
    assert!(Arc::ptr_eq(&ctx.labels(), &ctx.clone().labels()));
}

#[test]
fn per_session_contexts_do_not_leak() {
    let english = LabelContextBuilder::new().preference("en").build().unwrap();
    let albanian = LabelContextBuilder::new().preference("sq").build().unwrap();

    assert_eq!(english.get("draw.toolbar.finish.text"), Some("Finish"));
    assert_eq!(albanian.get("draw.toolbar.finish.text"), Some("Përfundo"));
}

#[test]
fn json_file_store_drives_language() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let store = JsonFilePreferenceStore::new(tmp.path().join("preferences.json"));
    store.set(LANGUAGE_PREFERENCE_KEY, "en").unwrap();

    let ctx = LabelContextBuilder::new()
        .preference_store(Arc::new(store))
        .build()
        .unwrap();
    assert_eq!(ctx.language(), Language::English);
    assert_eq!(ctx.get("edit.toolbar.actions.save.title"), Some("Save changes"));
}

#[test]
fn malformed_json_file_falls_back_to_albanian() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("preferences.json");
    std::fs::write(&path, "[\"en\"]").unwrap();

    let ctx = LabelContextBuilder::new()
        .preference_store(Arc::new(JsonFilePreferenceStore::new(path)))
        .build()
        .unwrap();
    assert_eq!(ctx.language(), Language::Albanian);
    assert_eq!(ctx.get("edit.toolbar.actions.save.text"), Some("Ruaj"));
}
