//! Grid-wide constants.
//!
//! Centralizes the column counts, spacing and timing values used by the
//! placement engine so they are not scattered as magic numbers.

// ============================================================================
// Grid Dimensions
// ============================================================================

/// Number of grid columns on mobile
pub const MOBILE_COLS: i32 = 8;

/// Number of grid columns on desktop
pub const DESKTOP_COLS: i32 = 32;

/// Pixel height of a single grid row (presentation only)
pub const LAYOUT_ROW_HEIGHT: f32 = 20.0;

// ============================================================================
// Block Defaults
// ============================================================================

/// Fallback height on desktop when a block declares no preferred height
pub const DEFAULT_DESKTOP_HEIGHT: i32 = DESKTOP_COLS / 3;

/// Fallback height on mobile when a block declares no preferred height
pub const DEFAULT_MOBILE_HEIGHT: i32 = MOBILE_COLS / 2;

/// Blank rows between blocks stacked by the mobile layout deriver
pub const MOBILE_ROW_SPACING: i32 = 1;

// ============================================================================
// Insertion Indicator
// ============================================================================

/// Delay before the insertion line hides once no target is found
pub const INDICATOR_HIDE_DELAY_MS: u64 = 150;

/// Thickness of the insertion line in pixels
pub const INDICATOR_THICKNESS: f32 = 2.0;

// ============================================================================
// Containment
// ============================================================================

/// Wildcard entry in a containment table allowing any child type
pub const ANY_CHILD: &str = "*";
