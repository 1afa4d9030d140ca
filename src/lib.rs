//! Interactive resize engine for rectangular shapes in a layout editor.
//!
//! A pointer-drag gesture that starts on one of the eight resize handles of
//! an element recomputes the element's geometry on every pointer move and
//! pushes it to the position store as a live update. When the pointer is
//! released the gesture commits exactly one undoable history entry, but only
//! if the pointer actually moved. The host layer is responsible for wiring
//! real pointer events into the [`interactor::ResizeInteractor`] and for
//! rendering whatever the store holds.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Geometry types and the pure resize computation |
//! | [`handle`] | Resize anchors, edge flags, handle placement and hit-testing |
//! | [`input`] | Pointer events, the pointer source, and the capture token |
//! | [`store`] | Position store contract and the in-memory history store |
//! | [`interactor`] | Gesture state machine driving geometry and store |
//! | [`config`] | Environment-driven configuration |
//! | [`script`] | JSON replay scripts used by the `shape-resize` binary |
//! | [`consts`] | Shared numeric constants |

pub mod config;
pub mod consts;
pub mod geometry;
pub mod handle;
pub mod input;
pub mod interactor;
pub mod script;
pub mod store;
