use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Pair of integers, used both for positions `(column, row)` and sizes `(width, height)`.
///
/// Signed on purpose, so that positions left of or above the grid can be asked for and
/// answered with `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    /// Iterates positions in row-major order, `from` inclusive, `to` exclusive.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }

    pub fn all_positive(self) -> bool {
        self.0 > 0 && self.1 > 0
    }

    /// Number of cells in an area of this size, zero for non-positive sizes.
    pub fn product(self) -> usize {
        if self.all_positive() {
            self.0 as usize * self.1 as usize
        } else {
            0
        }
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_fill_is_row_major() {
        let positions: Vec<_> = Dims::iter_fill(Dims::ZERO, Dims(3, 2)).collect();
        assert_eq!(
            positions,
            vec![
                Dims(0, 0),
                Dims(1, 0),
                Dims(2, 0),
                Dims(0, 1),
                Dims(1, 1),
                Dims(2, 1),
            ]
        );
    }

    #[test]
    fn product() {
        assert_eq!(Dims(6, 3).product(), 18);
        assert_eq!(Dims(0, 3).product(), 0);
        assert_eq!(Dims(-2, -3).product(), 0);
    }

    #[test]
    fn arithmetic() {
        let pos = Dims(1, 1) + Dims(0, -1);
        assert_eq!(pos, Dims(1, 0));
        assert_eq!(pos - Dims(1, 0), Dims::ZERO);
        assert!(Dims(2, 1).all_positive());
        assert!(!Dims(2, 0).all_positive());
    }
}
