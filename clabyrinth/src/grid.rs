use std::fmt;

use crate::{
    array::{self, Array2D},
    cell::{Cell, Direction},
    dims::Dims,
    error::MazeError,
    navigation, render,
};

/// Read access to a rectangle of cells.
///
/// Navigation and rendering only need these two queries, so they work on anything that
/// implements it, not just on [`Grid`].
pub trait Board {
    fn size(&self) -> Dims;

    /// Cell at `pos`, `None` for positions outside of the board.
    fn get_cell(&self, pos: Dims) -> Option<Cell>;
}

/// Immutable rectangle of cells, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    /// Grid where every cell is a copy of `initial`.
    pub fn create(size: Dims, initial: Cell) -> Result<Grid, MazeError> {
        check_size(size)?;

        Ok(Grid {
            cells: Array2D::new(initial, size.0 as usize, size.1 as usize),
        })
    }

    /// Takes ownership of already built cells, which must be in row-major order.
    pub fn from_cells(size: Dims, cells: Vec<Cell>) -> Result<Grid, MazeError> {
        check_size(size)?;

        let found = cells.len();
        Array2D::from_buf(cells, size.0 as usize, size.1 as usize)
            .map(|cells| Grid { cells })
            .ok_or(MazeError::CellCountMismatch {
                expected: size.product(),
                found,
            })
    }

    /// Rebuilds a grid from the flat mask sequence returned by [`Grid::masks`].
    pub fn from_masks(size: Dims, masks: &[u8]) -> Result<Grid, MazeError> {
        let cells = masks.iter().copied().map(Cell::from_bits).collect();
        Self::from_cells(size, cells)
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn width(&self) -> usize {
        self.size().0 as usize
    }

    pub fn height(&self) -> usize {
        self.size().1 as usize
    }

    pub fn get_cell(&self, pos: Dims) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    pub fn cells(&self) -> &[Cell] {
        self.cells.as_slice()
    }

    /// Raw wall masks of all cells, row by row.
    pub fn masks(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.bits()).collect()
    }

    /// Position of the `index`-th cell of a grid `width` cells wide, `width` must be positive.
    pub fn coord_by_index(index: usize, width: usize) -> Dims {
        array::idx_to_dim(index, width)
    }

    pub fn index_by_coord(pos: Dims, width: usize, height: usize) -> Option<usize> {
        array::dim_to_idx(pos, Dims(width as i32, height as i32))
    }

    pub fn go(&self, dir: Direction, pos: Dims) -> Option<Dims> {
        navigation::go(self, dir, pos)
    }

    pub fn render(&self, highlight: Option<Dims>) -> String {
        render::render(self, highlight)
    }
}

impl Board for Grid {
    fn size(&self) -> Dims {
        Grid::size(self)
    }

    fn get_cell(&self, pos: Dims) -> Option<Cell> {
        Grid::get_cell(self, pos)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

pub(crate) fn check_size(size: Dims) -> Result<(), MazeError> {
    if size.all_positive() {
        Ok(())
    } else {
        Err(MazeError::InvalidDimension {
            width: size.0,
            height: size.1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellWall;

    #[test]
    fn create_copies_initial_cell() {
        let initial = Cell::new(true, false, true, false);
        let grid = Grid::create(Dims(6, 3), initial).unwrap();

        assert_eq!(grid.size(), Dims(6, 3));
        assert_eq!(grid.cells().len(), 18);
        for pos in Dims::iter_fill(Dims::ZERO, grid.size()) {
            let cell = grid.get_cell(pos).unwrap();
            for wall in CellWall::get_in_order() {
                assert_eq!(cell.has_wall(wall), initial.has_wall(wall));
            }
        }
    }

    #[test]
    fn corners_and_outside() {
        let grid = Grid::create(Dims(6, 3), Cell::FULL).unwrap();

        for pos in [Dims(0, 0), Dims(0, 2), Dims(5, 0), Dims(5, 2)] {
            assert_eq!(grid.get_cell(pos), Some(Cell::FULL));
        }
        for pos in [
            Dims(6, 3),
            Dims(6, 0),
            Dims(0, 3),
            Dims(-1, -1),
            Dims(0, -1),
            Dims(-1, 0),
        ] {
            assert_eq!(grid.get_cell(pos), None);
        }
    }

    #[test]
    fn invalid_dimension() {
        for size in [Dims(0, 3), Dims(3, 0), Dims(-1, 5), Dims(0, 0)] {
            assert_eq!(
                Grid::create(size, Cell::FULL),
                Err(MazeError::InvalidDimension {
                    width: size.0,
                    height: size.1
                })
            );
        }
    }

    #[test]
    fn index_conversion_round_trip() {
        let (width, height) = (6, 3);
        for index in 0..width * height {
            let pos = Grid::coord_by_index(index, width);
            assert_eq!(Grid::index_by_coord(pos, width, height), Some(index));
        }
        assert_eq!(Grid::coord_by_index(7, width), Dims(1, 1));
        assert_eq!(Grid::index_by_coord(Dims(6, 0), width, height), None);
        assert_eq!(Grid::index_by_coord(Dims(0, -1), width, height), None);
    }

    #[test]
    fn masks_round_trip() {
        let cells = vec![
            Cell::from_bits(0x0D),
            Cell::from_bits(0x07),
            Cell::from_bits(0x0B),
            Cell::from_bits(0x0E),
        ];
        let grid = Grid::from_cells(Dims(2, 2), cells).unwrap();

        assert_eq!(grid.masks(), vec![0x0D, 0x07, 0x0B, 0x0E]);
        assert_eq!(Grid::from_masks(Dims(2, 2), &grid.masks()), Ok(grid));
    }

    #[test]
    fn cell_count_must_match() {
        assert_eq!(
            Grid::from_masks(Dims(2, 2), &[0x0F; 3]),
            Err(MazeError::CellCountMismatch {
                expected: 4,
                found: 3
            })
        );
    }
}
