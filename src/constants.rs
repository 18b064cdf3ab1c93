//! Fixed numeric contract shared with previously persisted zoom values.

/// Base of the exponential law relating zoom factors to zoom levels:
/// `level = ZOOM_BASE^factor`.
pub const ZOOM_BASE: f64 = 1.2;

/// Smallest displayable zoom level (50%).
pub const MIN_ZOOM_LEVEL: f64 = 0.5;

/// Largest nominal zoom level (300%). Stored values may exceed it while
/// OS font-scale adjustment is active.
pub const MAX_ZOOM_LEVEL: f64 = 3.0;

/// Upper bound of the legacy seek bar control.
pub const LEGACY_MAX_BAR: u32 = 100;

/// Upper bound of the current slider control.
pub const SLIDER_MAX_BAR: u32 = 250;

/// Zoom-level distance within which a dragged bar value snaps back to the
/// default zoom (±3 percentage points).
pub const DEFAULT_SNAP_TOLERANCE: f64 = 0.03;

/// Zoom factors reachable through the increase/decrease steppers, sorted
/// ascending. Free slider dragging is not restricted to these.
pub const PRESET_FACTORS: [f64; 14] = [
    -3.80, -2.20, -1.58, -1.22, -0.58, 0.00, 0.52, 1.22, 1.56, 2.22, 3.07,
    3.80, 5.03, 6.03,
];
