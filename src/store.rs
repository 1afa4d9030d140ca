//! Position store: the contract the interactor drives, and an in-memory store.
//!
//! The interactor never owns element geometry. It reads the baseline once at
//! gesture start, overwrites the displayed geometry on every move, and asks
//! for one history entry when the gesture ends. [`HistoryStore`] implements
//! that contract with full-document snapshots and linear undo/redo.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use uuid::Uuid;

use crate::consts::DEFAULT_HISTORY_LIMIT;
use crate::geometry::Geometry;

/// Unique identifier for an editor element.
pub type ElementId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("element not found: {0}")]
    NotFound(ElementId),
}

/// Geometry state consumed by the resize interactor.
pub trait PositionStore {
    /// Current geometry of an element. No side effects.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the store has no such element.
    fn current_geometry(&self, id: ElementId) -> Result<Geometry, StoreError>;

    /// Overwrite the displayed geometry without touching history.
    fn set_live_geometry(&mut self, id: ElementId, geometry: Geometry);

    /// Record the current state as one new undoable history entry.
    fn commit_history(&mut self);
}

type Snapshot = HashMap<ElementId, Geometry>;

/// In-memory element geometry with snapshot-based undo/redo.
///
/// `history[cursor]` is always the snapshot matching the last committed (or
/// restored) state. Live updates only touch `elements`; `insert` and `remove`
/// edit both, so an element added outside a gesture survives undo.
#[derive(Debug)]
pub struct HistoryStore {
    elements: Snapshot,
    history: Vec<Snapshot>,
    cursor: usize,
    limit: usize,
}

impl HistoryStore {
    /// Create an empty store keeping at most `limit` snapshots (minimum 1).
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { elements: HashMap::new(), history: vec![HashMap::new()], cursor: 0, limit: limit.max(1) }
    }

    /// Insert or replace an element in the current state and its snapshot.
    /// Does not add a history entry.
    pub fn insert(&mut self, id: ElementId, geometry: Geometry) {
        self.elements.insert(id, geometry);
        if let Some(snapshot) = self.history.get_mut(self.cursor) {
            snapshot.insert(id, geometry);
        }
    }

    /// Remove an element from the current state and its snapshot, returning
    /// its geometry if it was present.
    pub fn remove(&mut self, id: &ElementId) -> Option<Geometry> {
        if let Some(snapshot) = self.history.get_mut(self.cursor) {
            snapshot.remove(id);
        }
        self.elements.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Geometry> {
        self.elements.get(id)
    }

    /// Replace all elements and reset history to this single baseline.
    pub fn load_snapshot(&mut self, elements: impl IntoIterator<Item = (ElementId, Geometry)>) {
        self.elements = elements.into_iter().collect();
        self.history = vec![self.elements.clone()];
        self.cursor = 0;
    }

    /// Step back one history entry. Returns `false` at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        self.elements = self.history[self.cursor].clone();
        tracing::debug!(cursor = self.cursor, "history undo");
        true
    }

    /// Step forward one history entry. Returns `false` at the newest entry.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        self.elements = self.history[self.cursor].clone();
        tracing::debug!(cursor = self.cursor, "history redo");
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Number of snapshots held, including the baseline.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All elements sorted by id, for stable output.
    #[must_use]
    pub fn sorted_elements(&self) -> Vec<(ElementId, Geometry)> {
        let mut out: Vec<_> = self.elements.iter().map(|(id, g)| (*id, *g)).collect();
        out.sort_by_key(|(id, _)| *id);
        out
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl PositionStore for HistoryStore {
    fn current_geometry(&self, id: ElementId) -> Result<Geometry, StoreError> {
        self.elements.get(&id).copied().ok_or(StoreError::NotFound(id))
    }

    fn set_live_geometry(&mut self, id: ElementId, geometry: Geometry) {
        self.elements.insert(id, geometry);
    }

    fn commit_history(&mut self) {
        self.history.truncate(self.cursor + 1);
        self.history.push(self.elements.clone());
        if self.history.len() > self.limit {
            let excess = self.history.len() - self.limit;
            self.history.drain(..excess);
        }
        self.cursor = self.history.len() - 1;
        tracing::debug!(entries = self.history.len(), "history committed");
    }
}
