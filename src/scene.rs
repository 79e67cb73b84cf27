//! Backend-neutral draw list for the two-grid canvas.
//!
//! Positions come from the grid mapper; any canvas or vector backend can
//! replay the commands in order.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::config::BOARD_SIZE;
use crate::game::Session;
use crate::grid::{Grid, PixelPoint};
use crate::player::Shot;
use crate::ship::Ship;

const GRID_COLOR: &str = "black";
const SHIP_FILL: &str = "#aaaaaa";
const SHIP_STROKE: &str = "#555555";
const SUNK_FILL: &str = "#aa0000";
const SUNK_STROKE: &str = "#550000";
const HIT_FILL: &str = "red";
const MISS_FILL: &str = "green";
const SHIP_OUTLINE_WIDTH: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(tag = "kind", rename_all = "snake_case"))]
pub enum DrawCommand {
    Line {
        from: PixelPoint,
        to: PixelPoint,
        width: f64,
        color: &'static str,
    },
    /// Centred text.
    Label {
        text: String,
        at: PixelPoint,
        size: f64,
        color: &'static str,
    },
    /// Stadium shape joining the centres of a ship's end squares.
    Capsule {
        from: PixelPoint,
        to: PixelPoint,
        radius: f64,
        fill: &'static str,
        stroke: &'static str,
        width: f64,
    },
    /// Filled circle with a thin black outline.
    Marker {
        center: PixelPoint,
        radius: f64,
        fill: &'static str,
    },
}

/// Grid lines and axis labels: letters across the top, numbers down the side.
pub fn grid_commands(grid: &Grid, out: &mut Vec<DrawCommand>) {
    let o = grid.origin();
    let size = grid.size();
    let half = grid.square_size() as f64 / 2.0;
    let font = libm::ceil(grid.square_size() as f64 * 0.6);
    for i in 0..=BOARD_SIZE + 1 {
        let offset = i as f64 * grid.stride();
        out.push(DrawCommand::Line {
            from: PixelPoint::new(o.x + offset, o.y),
            to: PixelPoint::new(o.x + offset, o.y + size),
            width: grid.line_width() as f64,
            color: GRID_COLOR,
        });
        out.push(DrawCommand::Line {
            from: PixelPoint::new(o.x, o.y + offset),
            to: PixelPoint::new(o.x + size, o.y + offset),
            width: grid.line_width() as f64,
            color: GRID_COLOR,
        });
        if (1..=BOARD_SIZE).contains(&i) {
            out.push(DrawCommand::Label {
                text: ((b'A' + i - 1) as char).to_string(),
                at: PixelPoint::new(o.x + offset + half, o.y + half),
                size: font,
                color: GRID_COLOR,
            });
            out.push(DrawCommand::Label {
                text: i.to_string(),
                at: PixelPoint::new(o.x + half, o.y + offset + half),
                size: font,
                color: GRID_COLOR,
            });
        }
    }
}

pub fn ship_command(grid: &Grid, ship: &Ship) -> Option<DrawCommand> {
    let from = grid.center_of(ship.origin())?;
    let to = grid.center_of(ship.end())?;
    let (fill, stroke) = if ship.is_sunk() {
        (SUNK_FILL, SUNK_STROKE)
    } else {
        (SHIP_FILL, SHIP_STROKE)
    };
    Some(DrawCommand::Capsule {
        from,
        to,
        radius: grid.square_size() as f64 / 2.0 - 4.0,
        fill,
        stroke,
        width: SHIP_OUTLINE_WIDTH,
    })
}

pub fn shot_command(grid: &Grid, shot: &Shot) -> Option<DrawCommand> {
    let center = grid.center_of(shot.pos)?;
    Some(DrawCommand::Marker {
        center,
        radius: grid.square_size() as f64 / 2.0 - 5.0,
        fill: if shot.hit { HIT_FILL } else { MISS_FILL },
    })
}

/// Full frame: both grids, the human's ships and incoming shots, sunk enemy
/// ships and the human's shots on the enemy grid.
pub fn build_scene(session: &Session) -> Vec<DrawCommand> {
    let layout = session.layout();
    let (mine, theirs) = (&layout.player_grid, &layout.opponent_grid);
    let mut out = Vec::new();
    grid_commands(mine, &mut out);
    grid_commands(theirs, &mut out);
    let human = session.human();
    out.extend(human.fleet().ships().iter().filter_map(|s| ship_command(mine, s)));
    out.extend(human.shots().iter().filter_map(|s| shot_command(mine, s)));
    let opponent = session.opponent();
    out.extend(
        opponent
            .fleet()
            .ships()
            .iter()
            .filter(|s| s.is_sunk())
            .filter_map(|s| ship_command(theirs, s)),
    );
    out.extend(opponent.shots().iter().filter_map(|s| shot_command(theirs, s)));
    out
}
