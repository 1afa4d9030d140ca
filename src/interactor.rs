//! Resize interactor: the gesture state machine.
//!
//! DESIGN
//! ======
//! Two states, `Idle` and `Resizing`. Pointer-down on a handle copies the
//! element's baseline geometry out of the store, captures the frame offset
//! between logical and rendered coordinates once, and acquires a
//! [`PointerCapture`] on the shared pointer source. Every pointer move
//! recomputes geometry from the baseline and the cumulative displacement and
//! pushes it as a live update. Pointer-up commits one history entry if at
//! least one move was seen, then releases the capture. The capture lives
//! inside the session, so dropping the session for any reason unregisters
//! the listeners.

#[cfg(test)]
#[path = "interactor_test.rs"]
mod interactor_test;

use std::rc::Rc;

use crate::geometry::{BoundingRect, Delta, FrameOffset, Geometry, Point, compute_resize};
use crate::handle::{Edges, ResizeAnchor, handle_at};
use crate::input::{PointerCapture, PointerEvent, PointerSource};
use crate::store::{ElementId, PositionStore, StoreError};

/// Outcome of an input handler, for the host to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    /// Live geometry was pushed to the store.
    GeometryChanged { id: ElementId, geometry: Geometry },
    /// The gesture ended after movement and one history entry was recorded.
    HistoryCommitted { id: ElementId, geometry: Geometry },
    /// The gesture ended without movement; history is untouched.
    GestureDiscarded { id: ElementId },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResizeError {
    #[error("resize already in progress on element {0}")]
    GestureActive(ElementId),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Context for one resize drag, from pointer-down to pointer-up.
#[derive(Debug)]
pub struct GestureSession<P: PointerSource> {
    /// Element being resized.
    pub id: ElementId,
    /// Edges moved by the dragged handle.
    pub edges: Edges,
    /// Geometry copied from the store at gesture start.
    pub baseline: Geometry,
    /// Rendered origin minus logical origin, captured once.
    pub offset: FrameOffset,
    /// Logical pointer position at pointer-down.
    pub start: Point,
    /// Last geometry pushed to the store.
    pub current: Geometry,
    /// Set by the first pointer move.
    pub moved: bool,
    capture: PointerCapture<P>,
}

/// Interactor state.
#[derive(Debug)]
pub enum InputState<P: PointerSource> {
    /// No gesture in progress.
    Idle,
    /// A handle is being dragged.
    Resizing(GestureSession<P>),
}

impl<P: PointerSource> Default for InputState<P> {
    fn default() -> Self {
        Self::Idle
    }
}

/// Drives resize gestures against an injected store and pointer source.
pub struct ResizeInteractor<S: PositionStore, P: PointerSource> {
    store: S,
    source: Rc<P>,
    input: InputState<P>,
}

impl<S: PositionStore, P: PointerSource> ResizeInteractor<S, P> {
    #[must_use]
    pub fn new(store: S, source: Rc<P>) -> Self {
        Self { store, source, input: InputState::Idle }
    }

    // --- Gesture lifecycle ---

    /// Start resizing `id` by dragging `edges`.
    ///
    /// `rendered` is the element's on-screen bounding box, used to map screen
    /// coordinates into the store's coordinate space.
    ///
    /// # Errors
    ///
    /// Returns `GestureActive` while another gesture is in progress (the
    /// active gesture is left untouched), or `Store` if `id` is unknown.
    pub fn begin_gesture(
        &mut self,
        id: ElementId,
        edges: impl Into<Edges>,
        down: PointerEvent,
        rendered: BoundingRect,
    ) -> Result<(), ResizeError> {
        if let InputState::Resizing(active) = &self.input {
            tracing::warn!(element = %id, active = %active.id, "rejecting resize: gesture already active");
            return Err(ResizeError::GestureActive(active.id));
        }

        let baseline = self.store.current_geometry(id)?;
        let offset = FrameOffset::between(rendered, &baseline);
        let edges = edges.into();
        let capture = PointerCapture::acquire(Rc::clone(&self.source));

        tracing::debug!(element = %id, ?edges, ?baseline, "resize started");
        self.input = InputState::Resizing(GestureSession {
            id,
            edges,
            baseline,
            offset,
            start: offset.to_logical(down.client),
            current: baseline,
            moved: false,
            capture,
        });
        Ok(())
    }

    /// Hit-test the handles of `id` under `down` and begin a gesture on a hit.
    ///
    /// Returns the anchor that was grabbed, or `None` when the pointer is not
    /// within `radius` of any handle.
    ///
    /// # Errors
    ///
    /// Same as [`Self::begin_gesture`].
    pub fn begin_at_pointer(
        &mut self,
        id: ElementId,
        down: PointerEvent,
        rendered: BoundingRect,
        radius: f64,
    ) -> Result<Option<ResizeAnchor>, ResizeError> {
        let geometry = self.store.current_geometry(id)?;
        let offset = FrameOffset::between(rendered, &geometry);
        let Some(anchor) = handle_at(&geometry, offset.to_logical(down.client), radius) else {
            return Ok(None);
        };
        self.begin_gesture(id, anchor, down, rendered)?;
        Ok(Some(anchor))
    }

    /// Handle a pointer move. No-op when idle.
    pub fn on_pointer_move(&mut self, ev: PointerEvent) -> Action {
        let InputState::Resizing(session) = &mut self.input else {
            return Action::None;
        };
        session.moved = true;

        let delta = Delta::between(session.start, session.offset.to_logical(ev.client));
        let geometry = compute_resize(session.edges, delta, &session.baseline);
        tracing::trace!(element = %session.id, ?delta, ?geometry, "resize move");
        session.current = geometry;
        self.store.set_live_geometry(session.id, geometry);
        Action::GeometryChanged { id: session.id, geometry }
    }

    /// Handle pointer release: commit if moved, release the capture, go idle.
    pub fn on_pointer_up(&mut self) -> Action {
        let InputState::Resizing(mut session) = std::mem::take(&mut self.input) else {
            return Action::None;
        };

        let action = if session.moved {
            self.store.commit_history();
            tracing::debug!(element = %session.id, geometry = ?session.current, "resize committed");
            Action::HistoryCommitted { id: session.id, geometry: session.current }
        } else {
            tracing::debug!(element = %session.id, "resize ended without movement");
            Action::GestureDiscarded { id: session.id }
        };
        session.capture.release();
        action
    }

    // --- Queries ---

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        matches!(self.input, InputState::Resizing(_))
    }

    /// The active gesture, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession<P>> {
        match &self.input {
            InputState::Resizing(session) => Some(session),
            InputState::Idle => None,
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable store access for host operations such as undo.
    ///
    /// Callers must not touch the resized element while a gesture is active.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Finish any active gesture as a pointer-up would, then hand back the store.
    #[must_use]
    pub fn into_store(mut self) -> S {
        self.on_pointer_up();
        self.store
    }
}
