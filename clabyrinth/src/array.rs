use std::ops;

use crate::dims::Dims;

/// Converts a position into a row-major index, `None` when the position is outside of `size`.
pub fn dim_to_idx(pos: Dims, size: Dims) -> Option<usize> {
    let Dims(x, y) = pos;
    let Dims(width, height) = size;

    if x < 0 || x >= width || y < 0 || y >= height {
        return None;
    }

    Some(y as usize * width as usize + x as usize)
}

/// Converts a row-major index back into a position.
///
/// Pure arithmetic, the index isn't checked against any height. `width` must be positive.
pub fn idx_to_dim(idx: usize, width: usize) -> Dims {
    debug_assert!(width > 0, "width must be positive");
    let y = idx / width;
    let x = idx - width * y;

    Dims(x as i32, y as i32)
}

/// Flat row-major buffer with 2D addressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    /// Wraps an existing buffer, `None` if its length doesn't match `width * height`.
    pub fn from_buf(buf: Vec<T>, width: usize, height: usize) -> Option<Self> {
        if buf.len() != width * height {
            return None;
        }

        Some(Self { buf, width, height })
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        dim_to_idx(pos, self.size())
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(idx_to_dim(idx, self.width))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).map(move |i| idx_to_dim(i, self.width))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    pub fn into_vec(self) -> Vec<T> {
        self.buf
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, width: usize, height: usize) -> Self {
        Self {
            buf: vec![item; width * height],
            width,
            height,
        }
    }
}

impl<T> ops::Index<usize> for Array2D<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.buf[index]
    }
}

impl<T> ops::IndexMut<usize> for Array2D<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.buf[index]
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}
