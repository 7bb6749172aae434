use std::time::Duration;

/// Largest supported board edge in cells. Bounds per-tick work and keeps
/// derived pixel coordinates comfortably inside `u32`.
pub const MAX_GRID_SIZE: usize = 2048;

/// Largest supported window edge in pixels.
pub const MAX_SURFACE_SIDE: u32 = 8192;

/// Fixed per-tick pause used while debug mode is active.
pub const DEBUG_TICK_DELAY: Duration = Duration::from_millis(500);
