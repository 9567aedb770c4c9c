//! Line-art rendering of a board using block and box-drawing characters.
//!
//! Every cell is three characters wide (four in the last column, which also draws the right
//! border) and two lines high, the last row gets one more line for the bottom border.

use crate::{cell::CellWall, dims::Dims, grid::Board};

pub const FULL: char = '\u{2588}';
pub const UPPER_HALF: char = '\u{2580}';
pub const LOWER_HALF: char = '\u{2584}';
pub const LEFT_HALF: char = '\u{258c}';
pub const RIGHT_HALF: char = '\u{2590}';
pub const DASHED_HORIZONTAL: char = '\u{2504}';
pub const DASHED_VERTICAL: char = '\u{2506}';

pub const HIGHLIGHT: &str = "**";
pub const BLANK: &str = "  ";

/// Renders `board`, marking the cell at `highlight` if there is one.
///
/// If a position inside the board's size doesn't resolve to a cell, a diagnostic message is
/// returned instead of the drawing.
pub fn render<B: Board + ?Sized>(board: &B, highlight: Option<Dims>) -> String {
    let Dims(width, height) = board.size();
    let mut out = String::new();

    for y in 0..height {
        let mut top = String::new();
        let mut body = String::new();
        let mut bottom = String::new();

        for x in 0..width {
            let pos = Dims(x, y);
            let Some(this) = board.get_cell(pos) else {
                log::warn!(
                    "Cell {:?} missing while rendering board of size {:?}",
                    pos,
                    board.size()
                );
                return format!("Labyrinth is broken, cannot get cell: {}, {}", x, y);
            };

            let up = board.get_cell(pos + CellWall::Top.to_coord());
            let right = board.get_cell(pos + CellWall::Right.to_coord());
            let down = board.get_cell(pos + CellWall::Bottom.to_coord());
            let left = board.get_cell(pos + CellWall::Left.to_coord());
            let span = if right.is_none() { 4 } else { 3 };

            let this_top = this.has_wall(CellWall::Top);
            match up.map(|up| up.has_wall(CellWall::Bottom)) {
                None => repeat(&mut top, LOWER_HALF, span),
                Some(true) if this_top => repeat(&mut top, FULL, span),
                Some(true) => repeat(&mut top, UPPER_HALF, span),
                Some(false) if this_top => repeat(&mut top, LOWER_HALF, span),
                Some(false) if left.is_none() => {
                    top.push(FULL);
                    repeat(&mut top, DASHED_HORIZONTAL, 2);
                }
                Some(false) if right.is_none() => {
                    repeat(&mut top, DASHED_HORIZONTAL, 3);
                    top.push(FULL);
                }
                Some(false) => repeat(&mut top, DASHED_HORIZONTAL, span),
            }

            let this_left = this.has_wall(CellWall::Left);
            body.push(match left.map(|left| left.has_wall(CellWall::Right)) {
                None => FULL,
                Some(true) if this_left => FULL,
                Some(true) => LEFT_HALF,
                Some(false) if this_left => RIGHT_HALF,
                Some(false) => DASHED_VERTICAL,
            });
            body.push_str(if highlight == Some(pos) {
                HIGHLIGHT
            } else {
                BLANK
            });
            if right.is_none() {
                body.push(FULL);
            }

            if down.is_none() {
                repeat(&mut bottom, UPPER_HALF, span);
            }
        }

        for line in [top, body, bottom] {
            if !line.is_empty() {
                out.push_str(&line);
                out.push('\n');
            }
        }
    }

    out
}

fn repeat(line: &mut String, glyph: char, count: usize) {
    line.extend(std::iter::repeat(glyph).take(count));
}
