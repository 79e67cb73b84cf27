//! Mapping between canvas pixels and board squares.
//!
//! A grid is `BOARD_SIZE + 2` squares wide: the first row and column hold the
//! axis labels and the last ones close the frame, so playable squares are
//! `1..=BOARD_SIZE` on both axes.

use crate::common::Coord;
use crate::config::{LayoutConfig, BOARD_SIZE};

/// A point on the canvas in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One 12×12-square grid drawn at a fixed canvas position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    x: f64,
    y: f64,
    square_size: u32,
    line_width: u32,
}

impl Grid {
    /// Grid whose top-left line starts at (`x`, `y`). Odd line widths shift
    /// the origin by half a pixel so lines land on pixel centres.
    pub fn new(x: f64, y: f64, square_size: u32, line_width: u32) -> Self {
        let shift = if line_width % 2 == 0 { 0.0 } else { 0.5 };
        Grid {
            x: x + shift,
            y: y + shift,
            square_size,
            line_width,
        }
    }

    /// Pixel origin after the odd-width shift.
    pub fn origin(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }

    pub fn square_size(&self) -> u32 {
        self.square_size
    }

    pub fn line_width(&self) -> u32 {
        self.line_width
    }

    /// Distance between two consecutive grid lines.
    pub fn stride(&self) -> f64 {
        self.square_size as f64 + self.line_width as f64
    }

    /// Edge length in pixels, border squares included.
    pub fn size(&self) -> f64 {
        let n = BOARD_SIZE as f64 + 1.0;
        n * self.square_size as f64 + (n + 1.0) * self.line_width as f64
    }

    /// Square under the pixel (`px`, `py`), or `None` outside the playable
    /// squares (label border included).
    pub fn to_square(&self, px: f64, py: f64) -> Option<Coord> {
        let sx = libm::floor((px - self.x) / self.stride());
        let sy = libm::floor((py - self.y) / self.stride());
        let range = 1.0..=BOARD_SIZE as f64;
        if !range.contains(&sx) || !range.contains(&sy) {
            return None;
        }
        Some(Coord::new(sx as u8, sy as u8))
    }

    /// Top-left pixel of the square at (`x`, `y`), or `None` if that square
    /// is not playable.
    pub fn to_pixel(&self, x: u8, y: u8) -> Option<PixelPoint> {
        let c = Coord::on_board(x, y)?;
        Some(PixelPoint::new(
            libm::ceil(self.x) + c.x as f64 * self.stride(),
            libm::ceil(self.y) + c.y as f64 * self.stride(),
        ))
    }

    /// Centre pixel of a playable square.
    pub fn center_of(&self, c: Coord) -> Option<PixelPoint> {
        let half = self.square_size as f64 / 2.0;
        self.to_pixel(c.x, c.y)
            .map(|p| PixelPoint::new(p.x + half, p.y + half))
    }
}

/// The two grids of a game: the human's fleet on the left, the opponent's
/// waters on the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub player_grid: Grid,
    pub opponent_grid: Grid,
}

impl BoardLayout {
    pub fn new(config: LayoutConfig) -> Self {
        let player_grid = Grid::new(0.0, 0.0, config.square_size, config.line_width);
        let opponent_x = libm::floor(player_grid.size()) + config.gap as f64;
        let opponent_grid = Grid::new(opponent_x, 0.0, config.square_size, config.line_width);
        BoardLayout {
            player_grid,
            opponent_grid,
        }
    }

    /// Canvas size (width, height) needed to show both grids.
    pub fn canvas_size(&self) -> (f64, f64) {
        let g = self.opponent_grid;
        (libm::ceil(g.x + g.size()), libm::ceil(g.y + g.size()))
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        BoardLayout::new(LayoutConfig::default())
    }
}
