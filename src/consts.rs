//! Shared numeric constants for the resize engine.

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels around each resize handle.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

// ── History ─────────────────────────────────────────────────────

/// Maximum number of snapshots the in-memory history keeps by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;
