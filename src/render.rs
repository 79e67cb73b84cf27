//! Text rendering of both boards.

use alloc::string::String;
use core::fmt::Write;

use crate::common::Coord;
use crate::config::BOARD_SIZE;
use crate::game::Session;
use crate::player::Player;

const GUTTER: &str = "      ";

/// Symbol for one square of `side`. Ships are drawn when `reveal` is set or
/// when they are sunk.
fn square_symbol(side: &Player, c: Coord, reveal: bool) -> char {
    let ship = side.fleet().ship_at(c);
    let shot = side.shot_log().contains(c);
    match ship {
        Some(s) if shot && s.is_sunk() => '#',
        Some(_) if shot => 'X',
        Some(s) if s.is_sunk() => '#',
        Some(_) if reveal => 'S',
        _ if shot => 'o',
        _ => '.',
    }
}

fn header(out: &mut String) {
    out.push_str("   ");
    for x in 1..=BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + x - 1) as char);
    }
}

fn row(out: &mut String, side: &Player, y: u8, reveal: bool) {
    let _ = write!(out, "{:2} ", y);
    for x in 1..=BOARD_SIZE {
        let _ = write!(out, " {}", square_symbol(side, Coord::new(x, y), reveal));
    }
}

/// Both boards side by side: the human's fleet on the left with ships shown,
/// the enemy waters on the right with only shots and sunk ships.
///
/// `S` ship, `X` hit, `o` miss, `#` sunk ship.
pub fn render_text(session: &Session) -> String {
    let mut out = String::new();
    let width = 3 + 2 * BOARD_SIZE as usize;
    let _ = writeln!(out, "{:<width$}{}{}", "Your fleet", GUTTER, "Enemy waters");
    header(&mut out);
    out.push_str(GUTTER);
    header(&mut out);
    out.push('\n');
    for y in 1..=BOARD_SIZE {
        row(&mut out, session.human(), y, true);
        out.push_str(GUTTER);
        row(&mut out, session.opponent(), y, false);
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "Shots fired: {} ({} hits)    Enemy shots: {} ({} hits)",
        session.opponent().shot_count(),
        session.opponent().hit_count(),
        session.human().shot_count(),
        session.human().hit_count(),
    );
    out
}
