//! Replay scripts: JSON-described gestures run against a [`HistoryStore`].
//!
//! A script lists the starting elements and a sequence of pointer steps.
//! Running it drives a real [`ResizeInteractor`] so the resulting geometry
//! and history match what an interactive session would produce.
//!
//! ```json
//! {
//!   "elements": [{ "id": "…", "left": 0, "top": 0, "width": 100, "height": 50 }],
//!   "steps": [
//!     { "op": "down", "element": "…", "direction": "se", "x": 100, "y": 50 },
//!     { "op": "move", "x": 140, "y": 70 },
//!     { "op": "up" },
//!     { "op": "undo" }
//!   ]
//! }
//! ```

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::ResizeConfig;
use crate::geometry::{BoundingRect, Geometry};
use crate::handle::Edges;
use crate::input::{PointerEvent, PointerHub};
use crate::interactor::{Action, ResizeError, ResizeInteractor};
use crate::store::{ElementId, HistoryStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("invalid script JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("step {step}: {source}")]
    Resize { step: usize, source: ResizeError },
    #[error("step {step}: pointer-down did not land on a resize handle")]
    MissedHandle { step: usize },
}

/// An element and its starting geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSpec {
    pub id: ElementId,
    #[serde(flatten)]
    pub geometry: Geometry,
}

/// One scripted input step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Step {
    /// Pointer-down. Without `direction` the handle under the pointer is used.
    Down {
        element: ElementId,
        #[serde(default)]
        direction: Option<String>,
        x: f64,
        y: f64,
        /// Rendered bounding box; defaults to the element's own geometry.
        #[serde(default)]
        rendered: Option<BoundingRect>,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up,
    Undo,
    Redo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub elements: Vec<ElementSpec>,
    pub steps: Vec<Step>,
}

impl Script {
    /// Parse a script from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON or unknown step kinds.
    pub fn parse(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Final state after a replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    pub elements: Vec<ElementSpec>,
    /// Gestures that ended with a history commit.
    pub commits: usize,
    pub history_len: usize,
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Run every step of `script` and report the resulting store state.
///
/// # Errors
///
/// Returns the first failing step as `Resize` or `MissedHandle`.
pub fn run(script: &Script, config: &ResizeConfig) -> Result<ReplayReport, ScriptError> {
    let mut store = HistoryStore::new(config.history_limit);
    store.load_snapshot(script.elements.iter().map(|e| (e.id, e.geometry)));

    let mut interactor = ResizeInteractor::new(store, Rc::new(PointerHub::new()));
    let mut commits = 0;

    for (step, op) in script.steps.iter().enumerate() {
        match op {
            Step::Down { element, direction, x, y, rendered } => {
                let down = PointerEvent::at(*x, *y);
                let rect = match rendered {
                    Some(rect) => *rect,
                    None => rendered_from_store(&interactor, *element, step)?,
                };
                match direction {
                    Some(token) => interactor
                        .begin_gesture(*element, Edges::from_token(token), down, rect)
                        .map_err(|source| ScriptError::Resize { step, source })?,
                    None => {
                        let anchor = interactor
                            .begin_at_pointer(*element, down, rect, config.handle_radius_px)
                            .map_err(|source| ScriptError::Resize { step, source })?;
                        if anchor.is_none() {
                            return Err(ScriptError::MissedHandle { step });
                        }
                    }
                }
            }
            Step::Move { x, y } => {
                interactor.on_pointer_move(PointerEvent::at(*x, *y));
            }
            Step::Up => {
                if matches!(interactor.on_pointer_up(), Action::HistoryCommitted { .. }) {
                    commits += 1;
                }
            }
            Step::Undo => {
                if !interactor.store_mut().undo() {
                    tracing::debug!(step, "nothing to undo");
                }
            }
            Step::Redo => {
                if !interactor.store_mut().redo() {
                    tracing::debug!(step, "nothing to redo");
                }
            }
        }
    }

    if matches!(interactor.on_pointer_up(), Action::HistoryCommitted { .. }) {
        tracing::debug!("script ended mid-gesture; committed on release");
        commits += 1;
    }
    let store = interactor.into_store();
    Ok(ReplayReport {
        elements: store
            .sorted_elements()
            .into_iter()
            .map(|(id, geometry)| ElementSpec { id, geometry })
            .collect(),
        commits,
        history_len: store.history_len(),
        can_undo: store.can_undo(),
        can_redo: store.can_redo(),
    })
}

fn rendered_from_store(
    interactor: &ResizeInteractor<HistoryStore, PointerHub>,
    id: ElementId,
    step: usize,
) -> Result<BoundingRect, ScriptError> {
    let Some(g) = interactor.store().get(&id) else {
        return Err(ScriptError::Resize { step, source: StoreError::NotFound(id).into() });
    };
    Ok(BoundingRect::new(g.left, g.top, g.width, g.height))
}
