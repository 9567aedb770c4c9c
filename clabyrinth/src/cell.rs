use serde::{Deserialize, Serialize};

use crate::dims::Dims;

/// Walls of a single cell, packed into the low four bits.
///
/// Cells are values: changing a wall produces a new cell, see [`Cell::without_wall`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell(u8);

impl Cell {
    /// Cell with all four walls.
    pub const FULL: Cell = Cell(CellWall::ALL);
    /// Cell without any wall.
    pub const EMPTY: Cell = Cell(0);

    pub fn new(top: bool, right: bool, bottom: bool, left: bool) -> Cell {
        let mut bits = 0;
        for (present, wall) in [top, right, bottom, left]
            .into_iter()
            .zip(CellWall::get_in_order())
        {
            if present {
                bits |= wall.mask();
            }
        }

        Cell(bits)
    }

    /// Anything above the four wall bits is dropped.
    pub fn from_bits(bits: u8) -> Cell {
        Cell(bits & CellWall::ALL)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn has_wall(self, wall: CellWall) -> bool {
        self.0 & wall.mask() == wall.mask()
    }

    pub fn without_wall(self, wall: CellWall) -> Cell {
        Cell(self.0 & !wall.mask())
    }

    pub fn open_sides(self) -> usize {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| !self.has_wall(wall))
            .count()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::FULL
    }
}

/// Side of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellWall {
    Top,
    Right,
    Bottom,
    Left,
}

impl CellWall {
    pub const ALL: u8 = 0x0F;

    pub fn mask(self) -> u8 {
        match self {
            Self::Top => 0x01,
            Self::Right => 0x02,
            Self::Bottom => 0x04,
            Self::Left => 0x08,
        }
    }

    /// Offset to the cell on the other side of this wall.
    pub fn to_coord(self) -> Dims {
        match self {
            Self::Top => Dims(0, -1),
            Self::Right => Dims(1, 0),
            Self::Bottom => Dims(0, 1),
            Self::Left => Dims(-1, 0),
        }
    }

    pub fn reverse_wall(self) -> CellWall {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Wall of `cell` that faces `other`, `None` if the two aren't orthogonal neighbors.
    pub fn between(cell: Dims, other: Dims) -> Option<CellWall> {
        match other - cell {
            Dims(0, -1) => Some(Self::Top),
            Dims(1, 0) => Some(Self::Right),
            Dims(0, 1) => Some(Self::Bottom),
            Dims(-1, 0) => Some(Self::Left),
            _ => None,
        }
    }

    pub fn get_in_order() -> [CellWall; 4] {
        [Self::Top, Self::Right, Self::Bottom, Self::Left]
    }
}

/// Direction of a single step through the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// The wall that blocks a step in this direction.
    pub fn wall(self) -> CellWall {
        match self {
            Self::Up => CellWall::Top,
            Self::Right => CellWall::Right,
            Self::Down => CellWall::Bottom,
            Self::Left => CellWall::Left,
        }
    }

    pub fn offset(self) -> Dims {
        self.wall().to_coord()
    }

    pub fn reverse(self) -> Direction {
        self.wall().reverse_wall().into()
    }

    pub fn get_in_order() -> [Direction; 4] {
        [Self::Up, Self::Right, Self::Down, Self::Left]
    }
}

impl From<CellWall> for Direction {
    fn from(wall: CellWall) -> Self {
        match wall {
            CellWall::Top => Direction::Up,
            CellWall::Right => Direction::Right,
            CellWall::Bottom => Direction::Down,
            CellWall::Left => Direction::Left,
        }
    }
}

impl From<Direction> for CellWall {
    fn from(dir: Direction) -> Self {
        dir.wall()
    }
}
