#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn geo(left: f64, top: f64, width: f64, height: f64) -> Geometry {
    Geometry::new(left, top, width, height)
}

fn store_with_one() -> (HistoryStore, ElementId) {
    let mut store = HistoryStore::default();
    let id = Uuid::new_v4();
    store.load_snapshot([(id, geo(0.0, 0.0, 100.0, 50.0))]);
    (store, id)
}

// =============================================================
// Basic CRUD
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = HistoryStore::default();
    assert!(store.is_empty());
    assert_eq!(store.history_len(), 1);
    assert!(!store.can_undo());
    assert!(!store.can_redo());
}

#[test]
fn insert_get_remove() {
    let mut store = HistoryStore::default();
    let id = Uuid::new_v4();
    store.insert(id, geo(1.0, 2.0, 3.0, 4.0));
    assert_eq!(store.get(&id), Some(&geo(1.0, 2.0, 3.0, 4.0)));
    assert_eq!(store.len(), 1);
    assert_eq!(store.remove(&id), Some(geo(1.0, 2.0, 3.0, 4.0)));
    assert!(store.get(&id).is_none());
}

#[test]
fn current_geometry_missing_is_not_found() {
    let store = HistoryStore::default();
    let id = Uuid::new_v4();
    assert_eq!(store.current_geometry(id), Err(StoreError::NotFound(id)));
}

#[test]
fn sorted_elements_orders_by_id() {
    let mut store = HistoryStore::default();
    for _ in 0..5 {
        store.insert(Uuid::new_v4(), Geometry::default());
    }
    let ids: Vec<_> = store.sorted_elements().into_iter().map(|(id, _)| id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

// =============================================================
// Live updates vs history
// =============================================================

#[test]
fn live_update_does_not_touch_history() {
    let (mut store, id) = store_with_one();
    store.set_live_geometry(id, geo(0.0, 0.0, 120.0, 50.0));
    store.set_live_geometry(id, geo(0.0, 0.0, 140.0, 50.0));
    assert_eq!(store.current_geometry(id), Ok(geo(0.0, 0.0, 140.0, 50.0)));
    assert_eq!(store.history_len(), 1);
    assert!(!store.can_undo());
}

#[test]
fn commit_then_undo_restores_baseline() {
    let (mut store, id) = store_with_one();
    store.set_live_geometry(id, geo(0.0, 0.0, 140.0, 50.0));
    store.commit_history();
    assert_eq!(store.history_len(), 2);

    assert!(store.undo());
    assert_eq!(store.current_geometry(id), Ok(geo(0.0, 0.0, 100.0, 50.0)));
    assert!(store.redo());
    assert_eq!(store.current_geometry(id), Ok(geo(0.0, 0.0, 140.0, 50.0)));
    assert!(!store.redo());
}

#[test]
fn commit_after_undo_drops_redo_tail() {
    let (mut store, id) = store_with_one();
    store.set_live_geometry(id, geo(0.0, 0.0, 110.0, 50.0));
    store.commit_history();
    store.set_live_geometry(id, geo(0.0, 0.0, 120.0, 50.0));
    store.commit_history();
    assert!(store.undo());

    store.set_live_geometry(id, geo(0.0, 0.0, 90.0, 50.0));
    store.commit_history();
    assert!(!store.can_redo());
    assert_eq!(store.history_len(), 3);
    assert!(store.undo());
    assert_eq!(store.current_geometry(id), Ok(geo(0.0, 0.0, 110.0, 50.0)));
}

#[test]
fn undo_at_baseline_is_noop() {
    let (mut store, id) = store_with_one();
    assert!(!store.undo());
    assert_eq!(store.current_geometry(id), Ok(geo(0.0, 0.0, 100.0, 50.0)));
}

#[test]
fn history_limit_evicts_oldest() {
    let mut store = HistoryStore::new(3);
    let id = Uuid::new_v4();
    store.load_snapshot([(id, geo(0.0, 0.0, 10.0, 10.0))]);
    for w in [20.0, 30.0, 40.0, 50.0] {
        store.set_live_geometry(id, geo(0.0, 0.0, w, 10.0));
        store.commit_history();
    }
    assert_eq!(store.history_len(), 3);
    assert!(store.undo());
    assert!(store.undo());
    assert!(!store.undo());
    assert_eq!(store.current_geometry(id), Ok(geo(0.0, 0.0, 30.0, 10.0)));
}

#[test]
fn zero_limit_is_raised_to_one() {
    let mut store = HistoryStore::new(0);
    let id = Uuid::new_v4();
    store.insert(id, Geometry::default());
    store.commit_history();
    assert_eq!(store.history_len(), 1);
    assert!(!store.can_undo());
}

// =============================================================
// Seeding without load_snapshot
// =============================================================

#[test]
fn inserted_element_survives_undo() {
    let mut store = HistoryStore::default();
    let id = Uuid::new_v4();
    store.insert(id, geo(0.0, 0.0, 100.0, 50.0));
    store.set_live_geometry(id, geo(0.0, 0.0, 140.0, 50.0));
    store.commit_history();

    assert!(store.undo());
    assert_eq!(store.current_geometry(id), Ok(geo(0.0, 0.0, 100.0, 50.0)));
    assert!(store.redo());
    assert_eq!(store.current_geometry(id), Ok(geo(0.0, 0.0, 140.0, 50.0)));
}

#[test]
fn removed_element_is_dropped_from_current_snapshot() {
    let (mut store, id) = store_with_one();
    store.set_live_geometry(id, geo(0.0, 0.0, 140.0, 50.0));
    store.commit_history();
    assert_eq!(store.remove(&id), Some(geo(0.0, 0.0, 140.0, 50.0)));

    assert!(store.undo());
    assert_eq!(store.current_geometry(id), Ok(geo(0.0, 0.0, 100.0, 50.0)));
    assert!(store.redo());
    assert_eq!(store.current_geometry(id), Err(StoreError::NotFound(id)));
}
