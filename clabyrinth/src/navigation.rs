use std::collections::VecDeque;

use crate::{
    array::{self, Array2D},
    cell::{CellWall, Direction},
    dims::Dims,
    grid::Board,
};

/// Position one step from `pos` in `dir`.
///
/// `None` when `pos` isn't on the board, when the cell has a wall in that direction, or when
/// the step would leave the board.
pub fn go<B: Board + ?Sized>(board: &B, dir: Direction, pos: Dims) -> Option<Dims> {
    let cell = board.get_cell(pos)?;
    if cell.has_wall(dir.wall()) {
        return None;
    }

    let next = pos + dir.offset();
    board.get_cell(next).map(|_| next)
}

/// All positions reachable from `start` through open walls, in breadth-first order.
///
/// Empty if `start` isn't on the board.
pub fn reachable<B: Board + ?Sized>(board: &B, start: Dims) -> Vec<Dims> {
    let size = board.size();
    if board.get_cell(start).is_none() {
        return Vec::new();
    }

    let mut visited = Array2D::new(false, size.0 as usize, size.1 as usize);
    let mut order = Vec::with_capacity(size.product());
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);
    while let Some(pos) = queue.pop_front() {
        order.push(pos);
        for dir in Direction::get_in_order() {
            if let Some(next) = go(board, dir, pos) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
    }

    order
}

/// Whether every cell can be reached from every other cell.
pub fn is_connected<B: Board + ?Sized>(board: &B) -> bool {
    let size = board.size();
    size.all_positive() && reachable(board, Dims::ZERO).len() == size.product()
}

/// Number of open walls between neighboring cells, each shared wall counted once.
///
/// A wall only counts as open when both of its sides are open.
pub fn passage_count<B: Board + ?Sized>(board: &B) -> usize {
    let size = board.size();
    let mut count = 0;

    for idx in 0..size.product() {
        let pos = array::idx_to_dim(idx, size.0 as usize);
        let Some(cell) = board.get_cell(pos) else {
            continue;
        };

        for wall in [CellWall::Right, CellWall::Bottom] {
            let Some(neighbor) = board.get_cell(pos + wall.to_coord()) else {
                continue;
            };
            if !cell.has_wall(wall) && !neighbor.has_wall(wall.reverse_wall()) {
                count += 1;
            }
        }
    }

    count
}
