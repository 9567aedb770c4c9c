//! Core of labyrinth: a rectangular maze of cells separated by walls.
//!
//! [`algorithms::FrontierGrowth`] builds a [`grid::Grid`] whose open walls form a spanning
//! tree, [`navigation`] moves through it and [`render`] draws it as character art.

pub mod algorithms;
pub mod array;
pub mod cell;
pub mod dims;
pub mod error;
pub mod grid;
pub mod navigation;
pub mod render;

pub use cell::{Cell, CellWall, Direction};
pub use dims::Dims;
pub use error::MazeError;
pub use grid::{Board, Grid};
