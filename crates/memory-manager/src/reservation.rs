// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scoped reservation that hands its bytes back unless committed.
//!
//! Multi-step construction reserves each piece through a [`Reservation`].
//! If a later step fails, the earlier reservations go out of scope and
//! return their bytes on drop, so a failed construction leaves the
//! allocator exactly as it found it.

use crate::{Allocator, MemoryError};

/// An RAII reservation against an [`Allocator`].
///
/// # Example
/// ```
/// use memory_manager::{Allocator, MemoryBudget, MemoryPool, Reservation};
///
/// let pool = MemoryPool::new(MemoryBudget::from_bytes(64));
/// {
///     let _r = Reservation::new(&pool, 48).unwrap();
///     assert_eq!(pool.allocated_bytes(), 48);
/// }
/// assert_eq!(pool.allocated_bytes(), 0);
/// ```
#[must_use = "a reservation is released as soon as it is dropped"]
pub struct Reservation<'a, A: Allocator + ?Sized> {
    allocator: &'a A,
    size_bytes: usize,
    committed: bool,
}

impl<'a, A: Allocator + ?Sized> Reservation<'a, A> {
    /// Reserves `size_bytes` from `allocator`.
    pub fn new(allocator: &'a A, size_bytes: usize) -> Result<Self, MemoryError> {
        allocator.reserve(size_bytes)?;
        Ok(Self {
            allocator,
            size_bytes,
            committed: false,
        })
    }

    /// Size of this reservation in bytes.
    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    /// Keeps the bytes reserved past the guard's lifetime.
    ///
    /// The caller becomes responsible for calling
    /// [`Allocator::release`] with the returned size.
    pub fn commit(mut self) -> usize {
        self.committed = true;
        self.size_bytes
    }
}

impl<A: Allocator + ?Sized> Drop for Reservation<'_, A> {
    fn drop(&mut self) {
        if !self.committed {
            self.allocator.release(self.size_bytes);
        }
    }
}

impl<A: Allocator + ?Sized> std::fmt::Debug for Reservation<'_, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reservation")
            .field("size_bytes", &self.size_bytes)
            .field("committed", &self.committed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryBudget, MemoryPool};

    #[test]
    fn test_drop_releases() {
        let pool = MemoryPool::new(MemoryBudget::from_bytes(100));
        let r = Reservation::new(&pool, 60).unwrap();
        assert_eq!(r.size_bytes(), 60);
        assert_eq!(pool.allocated_bytes(), 60);

        drop(r);
        assert_eq!(pool.allocated_bytes(), 0);
    }

    #[test]
    fn test_commit_keeps_bytes() {
        let pool = MemoryPool::new(MemoryBudget::from_bytes(100));
        let size = Reservation::new(&pool, 60).unwrap().commit();
        assert_eq!(size, 60);
        assert_eq!(pool.allocated_bytes(), 60);

        pool.release(size);
        assert_eq!(pool.allocated_bytes(), 0);
    }

    #[test]
    fn test_failed_step_unwinds_earlier_steps() {
        let pool = MemoryPool::new(MemoryBudget::from_bytes(100));

        let build = || -> Result<(usize, usize), MemoryError> {
            let first = Reservation::new(&pool, 70)?;
            let second = Reservation::new(&pool, 70)?;
            Ok((first.commit(), second.commit()))
        };

        assert!(matches!(build(), Err(MemoryError::OutOfMemory { .. })));
        assert_eq!(pool.allocated_bytes(), 0);
    }

    #[test]
    fn test_dyn_allocator() {
        let pool = MemoryPool::new(MemoryBudget::from_bytes(10));
        let alloc: &dyn Allocator = &pool;
        let r = Reservation::new(alloc, 10).unwrap();
        assert!(format!("{r:?}").contains("committed: false"));
    }
}
