//! # Gameplay Constants
//!
//! Values the server and the client must agree on.
//!
//! **CRITICAL:** The grid geometry is baked into the server's placement
//! logic. Changing it here without changing the server breaks selling.

// =============================================================================
// BOARD GEOMETRY
// =============================================================================

/// Side length of one board grid square, in pixels.
pub const GRID_SQUARE_SIZE: f32 = 60.0;

/// Width of the player's own board, in pixels. Clicks right of it land on
/// the opponent's board and are ignored.
pub const BOARD_WIDTH: f32 = 600.0;

/// Inset between a grid square and the unit drawn inside it.
///
/// A unit occupies `GRID_SQUARE_SIZE - UNIT_INSET` pixels on each side.
pub const UNIT_INSET: f32 = 20.0;

// =============================================================================
// COMBAT EFFECT TIMING
// =============================================================================

/// How long a ranged attack's projectile takes to reach its target (ms).
pub const PROJECTILE_DURATION_MS: u64 = 300;

/// How long a melee impact ring stays on screen (ms).
pub const MELEE_DURATION_MS: u64 = 200;

/// Converts a board coordinate to its grid cell index.
///
/// Negative coordinates clamp to cell 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn grid_cell(coordinate: f32, square_size: f32) -> u32 {
    if square_size <= 0.0 {
        return 0;
    }
    (coordinate / square_size).floor().max(0.0) as u32
}
