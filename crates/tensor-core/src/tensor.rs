// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Core tensor type.

use crate::shape::checked_product;
use crate::storage::Storage;
use crate::{ops, Element, ElementKind, Shape, TensorError};
use memory_manager::{Allocator, MemoryError, Reservation};

/// A dense, row-major, n-dimensional tensor.
///
/// `Tensor` exclusively owns its element buffer, its shape and its strides.
/// The element kind is the storage variant, so it cannot drift from the
/// buffer and never changes after construction.
///
/// # Lifecycle
/// A tensor is accounted against an [`Allocator`] by [`Tensor::create`]
/// and handed back with [`Tensor::release`]. Neither call stores the
/// allocator. `release` consumes the tensor, so using it afterwards or
/// releasing it twice does not compile.
///
/// ```
/// use memory_manager::{Allocator, SystemAllocator};
/// use tensor_core::{ElementKind, Tensor};
///
/// let alloc = SystemAllocator::new();
/// let mut t = Tensor::create(&alloc, &[2, 3], ElementKind::F32).unwrap();
/// t.fill(1.5);
/// assert_eq!(t.sum(), 9.0);
/// t.release(&alloc);
/// assert_eq!(alloc.allocated_bytes(), 0);
/// ```
#[derive(Debug, PartialEq)]
pub struct Tensor {
    storage: Storage,
    shape: Shape,
    strides: Vec<usize>,
}

impl Tensor {
    /// Allocates a tensor of `kind` with the given dimensions.
    ///
    /// The buffer, the shape copy and the strides are reserved against
    /// `allocator` in that order. If any step fails, everything reserved
    /// so far is returned before the error surfaces. Element contents are
    /// zeroed, but callers should `fill` before reading.
    ///
    /// # Errors
    /// Returns [`TensorError::Allocation`] when the allocator (or the
    /// global heap) cannot satisfy a request, or when a size overflows.
    pub fn create<A: Allocator + ?Sized>(
        allocator: &A,
        dims: &[usize],
        kind: ElementKind,
    ) -> Result<Self, TensorError> {
        let num_elements = checked_product(dims).ok_or(MemoryError::CapacityOverflow {
            what: "element count",
        })?;
        let buffer_bytes = num_elements
            .checked_mul(kind.byte_size())
            .ok_or(MemoryError::CapacityOverflow { what: "tensor buffer" })?;
        let index_bytes = index_bytes(dims.len());

        let buffer_reservation = Reservation::new(allocator, buffer_bytes)?;
        let shape_reservation = Reservation::new(allocator, index_bytes)?;
        let strides_reservation = Reservation::new(allocator, index_bytes)?;

        let storage = Storage::try_zeroed(kind, num_elements)?;
        let shape = Shape::try_from_dims(dims)?;
        let strides = shape.strides()?;

        buffer_reservation.commit();
        shape_reservation.commit();
        strides_reservation.commit();

        tracing::trace!(%shape, %kind, buffer_bytes, "tensor created");
        Ok(Self {
            storage,
            shape,
            strides,
        })
    }

    /// Allocates a tensor and copies `values` into it.
    ///
    /// # Errors
    /// Returns [`TensorError::ElementCountMismatch`] if `values.len()`
    /// differs from the shape's element count, before anything is reserved.
    pub fn from_slice<T: Element, A: Allocator + ?Sized>(
        allocator: &A,
        dims: &[usize],
        values: &[T],
    ) -> Result<Self, TensorError> {
        let expected = checked_product(dims).ok_or(MemoryError::CapacityOverflow {
            what: "element count",
        })?;
        if values.len() != expected {
            return Err(TensorError::ElementCountMismatch {
                shape: Shape::from(dims),
                expected,
                actual: values.len(),
            });
        }
        let mut tensor = Self::create(allocator, dims, T::KIND)?;
        tensor.as_slice_mut::<T>()?.copy_from_slice(values);
        Ok(tensor)
    }

    /// Returns the buffer, shape and strides to `allocator`.
    ///
    /// `allocator` must be the one the tensor was created against.
    pub fn release<A: Allocator + ?Sized>(self, allocator: &A) {
        let buffer_bytes = self.size_bytes();
        let index_bytes = index_bytes(self.shape.rank());
        tracing::trace!(shape = %self.shape, kind = %self.kind(), buffer_bytes, "tensor released");

        allocator.release(buffer_bytes);
        allocator.release(index_bytes);
        allocator.release(index_bytes);
    }

    /// Returns the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Row-major strides, one per dimension.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Returns the tensor's element kind.
    pub fn kind(&self) -> ElementKind {
        self.storage.kind()
    }

    pub fn num_elements(&self) -> usize {
        self.storage.len()
    }

    /// Returns the buffer length in bytes.
    pub fn size_bytes(&self) -> usize {
        self.storage.size_bytes()
    }

    /// Returns the buffer as raw native-endian bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.storage.as_bytes()
    }

    /// Borrows the elements as `&[T]`.
    ///
    /// # Errors
    /// Returns [`TensorError::DtypeMismatch`] if `T` is not this tensor's
    /// element type.
    pub fn as_slice<T: Element>(&self) -> Result<&[T], TensorError> {
        let kind = self.kind();
        T::slice(&self.storage).ok_or(TensorError::DtypeMismatch {
            op: "as_slice",
            lhs: kind,
            rhs: T::KIND,
        })
    }

    /// Borrows the elements as `&mut [T]`.
    ///
    /// # Errors
    /// Returns [`TensorError::DtypeMismatch`] if `T` is not this tensor's
    /// element type.
    pub fn as_slice_mut<T: Element>(&mut self) -> Result<&mut [T], TensorError> {
        let kind = self.kind();
        T::slice_mut(&mut self.storage).ok_or(TensorError::DtypeMismatch {
            op: "as_slice_mut",
            lhs: kind,
            rhs: T::KIND,
        })
    }

    /// Overwrites every element with `value` converted to this kind.
    pub fn fill(&mut self, value: f64) {
        ops::fill(self, value)
    }

    /// Sums every element, in storage order, into an `f64`.
    pub fn sum(&self) -> f64 {
        ops::sum(self)
    }

    /// Adds `source` into `self` element by element.
    ///
    /// # Errors
    /// [`TensorError::ShapeMismatch`] or [`TensorError::DtypeMismatch`];
    /// on error neither tensor is modified.
    pub fn add(&mut self, source: &Tensor) -> Result<(), TensorError> {
        ops::add(self, source)
    }

    pub(crate) fn storage(&self) -> &Storage {
        &self.storage
    }

    pub(crate) fn storage_mut(&mut self) -> &mut Storage {
        &mut self.storage
    }
}

/// Bytes needed for one `usize` per dimension.
fn index_bytes(rank: usize) -> usize {
    rank * std::mem::size_of::<usize>()
}
