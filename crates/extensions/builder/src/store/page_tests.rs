use super::*;
use serde_json::json;

fn page(id: u64, order: u32) -> PageRecord {
    PageRecord {
        id,
        builder_id: 1,
        name: format!("Page {}", id),
        path: format!("/page-{}", id),
        order,
    }
}

#[test]
fn test_upsert_and_get() {
    let store = PageStore::new();
    assert!(store.is_empty());
    store.upsert(page(1, 0));
    store.upsert(page(1, 5));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(1).unwrap().order, 5);
    assert!(store.get(2).is_none());
}

#[test]
fn test_list_sorted_by_order() {
    let store = PageStore::new();
    store.upsert(page(1, 2));
    store.upsert(page(2, 1));
    store.upsert(page(3, 1));
    let ids: Vec<u64> = store.list().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn test_update() {
    let store = PageStore::new();
    store.upsert(page(1, 0));
    let changes = json!({"name": "About", "path": "/about"});
    let updated = store.update(1, changes.as_object().unwrap()).unwrap();
    assert_eq!(updated.name, "About");
    assert_eq!(store.get(1).unwrap().path, "/about");
}

#[test]
fn test_update_missing_page() {
    let store = PageStore::new();
    let result = store.update(4, &Map::new());
    assert_eq!(result, Err(StateError::RecordNotFound { kind: "Page", id: 4 }));
}

#[test]
fn test_remove_clears_selection() {
    let store = PageStore::new();
    store.upsert(page(1, 0));
    store.select(1).unwrap();
    assert_eq!(store.selected().unwrap().id, 1);

    store.remove(1).unwrap();
    assert!(store.selected().is_none());
    assert!(store.remove(1).is_err());
}

#[test]
fn test_select_unknown_page() {
    let store = PageStore::new();
    assert!(store.select(9).is_err());
}

#[test]
fn test_snapshot_and_reset() {
    let store = PageStore::new();
    store.upsert(page(1, 0));
    store.select(1).unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot["pages"][0]["name"], "Page 1");
    assert_eq!(snapshot["selected"], 1);

    store.reset();
    assert!(store.is_empty());
    assert_eq!(store.snapshot(), json!({"pages": [], "selected": null}));
}
