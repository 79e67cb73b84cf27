/// Playable cells per axis. Index 0 and `BOARD_SIZE + 1` are the label border.
pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 10;

/// One battleship, two cruisers, three destroyers and four submarines.
pub const FLEET_LENGTHS: [u8; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship cells in a standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Rejection-sampling budget for placing a single ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

pub const DEFAULT_SQUARE_SIZE: u32 = 30;
pub const DEFAULT_LINE_WIDTH: u32 = 1;
/// Horizontal gap in pixels between the two grids.
pub const GRID_GAP: u32 = 10;

/// Pixel geometry of the two side-by-side grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub square_size: u32,
    pub line_width: u32,
    pub gap: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            square_size: DEFAULT_SQUARE_SIZE,
            line_width: DEFAULT_LINE_WIDTH,
            gap: GRID_GAP,
        }
    }
}
