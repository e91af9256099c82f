// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor shape descriptors and dimension utilities.

use crate::storage::try_vec_from_elem;
use crate::ElementKind;
use memory_manager::MemoryError;
use std::fmt;

/// Describes the dimensionality of a [`crate::Tensor`].
///
/// Shapes are immutable once created. Zero-sized dimensions and rank 0
/// are both valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Creates a new shape from the given dimensions.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::Shape;
    /// let s = Shape::new(vec![2, 3, 4]);
    /// assert_eq!(s.rank(), 3);
    /// assert_eq!(s.num_elements(), 24);
    /// ```
    pub fn new(dims: Vec<usize>) -> Self {
        Self { dims }
    }

    /// Creates a scalar shape (rank 0).
    pub fn scalar() -> Self {
        Self { dims: vec![] }
    }

    /// Creates a 1-D shape.
    pub fn vector(len: usize) -> Self {
        Self { dims: vec![len] }
    }

    /// Creates a 2-D shape (matrix).
    pub fn matrix(rows: usize, cols: usize) -> Self {
        Self {
            dims: vec![rows, cols],
        }
    }

    /// Copies `dims` into a fresh shape, reporting allocation failure.
    pub(crate) fn try_from_dims(dims: &[usize]) -> Result<Self, MemoryError> {
        let mut owned = try_vec_from_elem(dims.len(), 0, "shape")?;
        owned.copy_from_slice(dims);
        Ok(Self { dims: owned })
    }

    /// Returns the number of dimensions (rank).
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Returns the total number of elements.
    ///
    /// A scalar shape holds one element; any zero dimension gives zero.
    ///
    /// # Panics
    /// Panics if the product overflows `usize`. Tensors are only ever
    /// built from shapes whose [`checked_num_elements`](Shape::checked_num_elements)
    /// succeeded.
    pub fn num_elements(&self) -> usize {
        self.checked_num_elements()
            .expect("shape element count overflows usize")
    }

    /// Element count, or `None` on overflow.
    pub fn checked_num_elements(&self) -> Option<usize> {
        checked_product(&self.dims)
    }

    /// Returns the dimensions as a slice.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the size of a specific dimension, or `None` if out of bounds.
    pub fn dim(&self, index: usize) -> Option<usize> {
        self.dims.get(index).copied()
    }

    /// Computes the memory footprint in bytes for a given [`ElementKind`].
    pub fn size_bytes(&self, kind: ElementKind) -> usize {
        self.num_elements() * kind.byte_size()
    }

    /// Computes row-major (C-order) strides for this shape.
    ///
    /// The stride for dimension `i` is the number of elements to skip
    /// in the flat buffer to advance one step along that dimension:
    /// `strides[rank-1] = 1` and `strides[i] = strides[i+1] * dims[i+1]`.
    ///
    /// # Errors
    /// [`MemoryError::CapacityOverflow`] if a stride does not fit in
    /// `usize`, which only happens for shapes containing a zero dimension
    /// ahead of huge ones.
    pub fn strides(&self) -> Result<Vec<usize>, MemoryError> {
        let rank = self.dims.len();
        let mut strides = try_vec_from_elem(rank, 1usize, "strides")?;
        for i in (0..rank.saturating_sub(1)).rev() {
            strides[i] = strides[i + 1]
                .checked_mul(self.dims[i + 1])
                .ok_or(MemoryError::CapacityOverflow { what: "strides" })?;
        }
        Ok(strides)
    }
}

/// Product of `dims`; the empty product is 1 and a zero dimension wins
/// over an overflowing one.
pub(crate) fn checked_product(dims: &[usize]) -> Option<usize> {
    if dims.contains(&0) {
        return Some(0);
    }
    dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}

/// Convenience: `Shape::from(vec![2, 3])`.
impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self::new(dims)
    }
}

/// Convenience: `Shape::from(&[2, 3][..])`.
impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self::new(dims.to_vec())
    }
}

impl PartialEq<[usize]> for Shape {
    fn eq(&self, other: &[usize]) -> bool {
        self.dims == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_shape() {
        let s = Shape::scalar();
        assert_eq!(s.rank(), 0);
        assert_eq!(s.num_elements(), 1);
        assert!(s.strides().unwrap().is_empty());
    }

    #[test]
    fn test_vector_shape() {
        let s = Shape::vector(5);
        assert_eq!(s.rank(), 1);
        assert_eq!(s.num_elements(), 5);
        assert_eq!(s.strides().unwrap(), vec![1]);
    }

    #[test]
    fn test_matrix_shape() {
        let s = Shape::matrix(3, 4);
        assert_eq!(s.rank(), 2);
        assert_eq!(s.num_elements(), 12);
        assert_eq!(s.strides().unwrap(), vec![4, 1]);
        assert_eq!(s.size_bytes(ElementKind::F32), 48);
    }

    #[test]
    fn test_3d_strides() {
        let s = Shape::new(vec![2, 3, 4]);
        assert_eq!(s.strides().unwrap(), vec![12, 4, 1]);
    }

    #[test]
    fn test_zero_dimension() {
        let s = Shape::new(vec![3, 0, 2]);
        assert_eq!(s.num_elements(), 0);
        assert_eq!(s.strides().unwrap(), vec![0, 2, 1]);
        assert_eq!(s.size_bytes(ElementKind::U64), 0);
    }

    #[test]
    fn test_checked_product() {
        assert_eq!(checked_product(&[]), Some(1));
        assert_eq!(checked_product(&[usize::MAX, 2]), None);
        assert_eq!(checked_product(&[usize::MAX, usize::MAX, 0]), Some(0));
    }

    #[test]
    fn test_stride_overflow() {
        let s = Shape::new(vec![0, usize::MAX, 2]);
        assert!(matches!(
            s.strides(),
            Err(MemoryError::CapacityOverflow { what: "strides" })
        ));
    }

    #[test]
    fn test_try_from_dims() {
        let s = Shape::try_from_dims(&[4, 5]).unwrap();
        assert_eq!(s, Shape::matrix(4, 5));
        assert_eq!(&s, &[4usize, 5][..]);
    }

    #[test]
    fn test_display() {
        let s = Shape::new(vec![2, 3, 4]);
        assert_eq!(format!("{s}"), "[2, 3, 4]");
        assert_eq!(Shape::scalar().to_string(), "[]");
    }

    #[test]
    fn test_size_bytes() {
        let s = Shape::new(vec![10, 20]);
        assert_eq!(s.size_bytes(ElementKind::F64), 1600);
        assert_eq!(s.size_bytes(ElementKind::F16), 400);
        assert_eq!(s.size_bytes(ElementKind::Bool), 200);
    }

    #[test]
    fn test_from_conversions() {
        let s1: Shape = vec![2, 3].into();
        let s2: Shape = (&[2, 3][..]).into();
        assert_eq!(s1, s2);
    }
}
