use rand::{seq::SliceRandom as _, Rng};

use super::MazeAlgorithm;
use crate::{
    array::{self, Array2D},
    cell::{Cell, CellWall},
    dims::Dims,
    error::MazeError,
    grid::{self, Grid},
};

/// Randomized frontier growth, close to randomized Prim's algorithm.
///
/// Starts from a random cell and repeatedly connects a random frontier cell to the cell that
/// offered it. The frontier is a list of `(candidate, connected)` pairs where one candidate
/// can be offered from several sides; once a candidate is picked, all of its offers are
/// dropped, so every cell joins the maze through exactly one opened wall.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontierGrowth;

impl MazeAlgorithm for FrontierGrowth {
    fn generate<R: Rng + ?Sized>(&self, size: Dims, rng: &mut R) -> Result<Grid, MazeError> {
        grid::check_size(size)?;

        let (width, height) = (size.0 as usize, size.1 as usize);
        let mut cells = Array2D::new(Cell::FULL, width, height);
        let mut free = Array2D::new(true, width, height);
        let mut frontier: Vec<(usize, usize)> = Vec::new();

        log::debug!("Generating {}x{} maze", width, height);

        let start = rng.gen_range(0..cells.len());
        free[start] = false;
        add_free_neighbors(start, size, &free, &mut frontier);

        let mut opened = 0;
        while let Some(&(candidate, connected)) = frontier.choose(rng) {
            drop_offers(&mut frontier, candidate);

            if free[candidate] {
                free[candidate] = false;
                add_free_neighbors(candidate, size, &free, &mut frontier);
            }

            if remove_wall_between(&mut cells, candidate, connected) {
                opened += 1;
            }
        }

        log::debug!("Maze done, started at {}, opened {} walls", start, opened);

        Grid::from_cells(size, cells.into_vec())
    }
}

fn add_free_neighbors(
    idx: usize,
    size: Dims,
    free: &Array2D<bool>,
    frontier: &mut Vec<(usize, usize)>,
) {
    let pos = array::idx_to_dim(idx, size.0 as usize);

    for wall in CellWall::get_in_order() {
        let Some(neighbor) = array::dim_to_idx(pos + wall.to_coord(), size) else {
            continue;
        };
        if free[neighbor] {
            frontier.push((neighbor, idx));
        }
    }
}

/// Drops every offer of `candidate`, whichever side it came from.
fn drop_offers(frontier: &mut Vec<(usize, usize)>, candidate: usize) {
    frontier.retain(|&(other, _)| other != candidate);
}

/// Opens the wall between two neighboring cells, replacing both cells.
///
/// Returns `false`, leaving the cells alone, if the cells aren't neighbors.
fn remove_wall_between(cells: &mut Array2D<Cell>, idx: usize, other: usize) -> bool {
    let (Some(pos), Some(other_pos)) = (cells.idx_to_dim(idx), cells.idx_to_dim(other)) else {
        return false;
    };
    let Some(wall) = CellWall::between(pos, other_pos) else {
        return false;
    };

    cells[idx] = cells[idx].without_wall(wall);
    cells[other] = cells[other].without_wall(wall.reverse_wall());
    true
}
