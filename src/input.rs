//! Pointer input: events, the document-level pointer source, and capture tokens.
//!
//! A resize gesture listens on the global pointer source rather than on the
//! handle element, so the drag keeps working after the pointer leaves the
//! handle. The listeners are owned by a [`PointerCapture`] token: acquiring
//! the token registers one move and one up listener, and releasing it (either
//! explicitly or on drop) unregisters both exactly once.
//!
//! Registration here is lifetime bookkeeping only. Listeners carry no
//! handler and [`PointerHub`] never dispatches: the host's real event binding
//! attaches and detaches on these calls and forwards each notification to
//! [`ResizeInteractor::on_pointer_move`] or
//! [`ResizeInteractor::on_pointer_up`], which are safe to call in any state.
//!
//! [`ResizeInteractor::on_pointer_move`]: crate::interactor::ResizeInteractor::on_pointer_move
//! [`ResizeInteractor::on_pointer_up`]: crate::interactor::ResizeInteractor::on_pointer_up

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::geometry::Point;

/// A pointer event as delivered by the host, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer position relative to the viewport (CSS pixels).
    pub client: Point,
}

impl PointerEvent {
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self { client: Point::new(x, y) }
    }
}

/// Which pointer notification a listener is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    Move,
    Up,
}

/// Opaque handle to a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The document-level source of pointer notifications.
///
/// Methods take `&self`: the source is shared between the host event loop and
/// any live capture token, all on the UI thread.
pub trait PointerSource {
    /// Register a listener and return its handle.
    fn listen(&self, kind: ListenerKind) -> ListenerId;

    /// Unregister a listener. Unknown handles are ignored.
    fn unlisten(&self, id: ListenerId);
}

/// In-process pointer source that tracks which listeners are attached,
/// without routing events to them.
#[derive(Debug, Default)]
pub struct PointerHub {
    next_id: Cell<u64>,
    attached: RefCell<Vec<(ListenerId, ListenerKind)>>,
}

impl PointerHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listeners currently attached.
    #[must_use]
    pub fn attached(&self) -> usize {
        self.attached.borrow().len()
    }

    /// Number of attached listeners of the given kind.
    #[must_use]
    pub fn attached_of(&self, kind: ListenerKind) -> usize {
        self.attached.borrow().iter().filter(|(_, k)| *k == kind).count()
    }

    /// Detach every listener, as when the host binding is torn down.
    pub fn detach_all(&self) {
        self.attached.borrow_mut().clear();
    }

    /// Returns `true` when no listener is attached.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.attached.borrow().is_empty()
    }
}

impl PointerSource for PointerHub {
    fn listen(&self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.attached.borrow_mut().push((id, kind));
        id
    }

    fn unlisten(&self, id: ListenerId) {
        self.attached.borrow_mut().retain(|(attached, _)| *attached != id);
    }
}

/// Scoped ownership of the move and up listeners for one gesture.
pub struct PointerCapture<P: PointerSource> {
    source: Rc<P>,
    listeners: Option<(ListenerId, ListenerId)>,
}

impl<P: PointerSource> PointerCapture<P> {
    /// Register the move and up listeners on `source`.
    #[must_use]
    pub fn acquire(source: Rc<P>) -> Self {
        let on_move = source.listen(ListenerKind::Move);
        let on_up = source.listen(ListenerKind::Up);
        Self { source, listeners: Some((on_move, on_up)) }
    }

    /// Unregister both listeners. Returns `false` if already released.
    pub fn release(&mut self) -> bool {
        let Some((on_move, on_up)) = self.listeners.take() else {
            return false;
        };
        self.source.unlisten(on_move);
        self.source.unlisten(on_up);
        true
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.listeners.is_none()
    }
}

impl<P: PointerSource> Drop for PointerCapture<P> {
    fn drop(&mut self) {
        if self.release() {
            tracing::trace!("pointer capture released on drop");
        }
    }
}

impl<P: PointerSource> fmt::Debug for PointerCapture<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerCapture")
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
