// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The allocator capability borrowed by tensor construction and release.

use crate::MemoryError;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Byte accounting for tensor-owned memory.
///
/// An allocator is passed by reference to whatever needs memory and is
/// never stored by the consumer. `reserve` either admits the full request
/// or rejects it without side effects; `release` returns bytes previously
/// admitted by `reserve` on the same allocator.
pub trait Allocator {
    /// Admits `size_bytes` or fails without changing any accounting.
    fn reserve(&self, size_bytes: usize) -> Result<(), MemoryError>;

    /// Returns `size_bytes` previously admitted by [`reserve`](Allocator::reserve).
    fn release(&self, size_bytes: usize);

    /// Bytes currently reserved and not yet released.
    fn allocated_bytes(&self) -> usize;
}

impl<A: Allocator + ?Sized> Allocator for &A {
    fn reserve(&self, size_bytes: usize) -> Result<(), MemoryError> {
        (**self).reserve(size_bytes)
    }

    fn release(&self, size_bytes: usize) {
        (**self).release(size_bytes)
    }

    fn allocated_bytes(&self) -> usize {
        (**self).allocated_bytes()
    }
}

impl<A: Allocator + ?Sized> Allocator for std::sync::Arc<A> {
    fn reserve(&self, size_bytes: usize) -> Result<(), MemoryError> {
        (**self).reserve(size_bytes)
    }

    fn release(&self, size_bytes: usize) {
        (**self).release(size_bytes)
    }

    fn allocated_bytes(&self) -> usize {
        (**self).allocated_bytes()
    }
}

/// An allocator with no ceiling.
///
/// It still counts live bytes so leaks show up in `allocated_bytes()`.
#[derive(Debug, Default)]
pub struct SystemAllocator {
    allocated_bytes: AtomicUsize,
}

impl SystemAllocator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Allocator for SystemAllocator {
    fn reserve(&self, size_bytes: usize) -> Result<(), MemoryError> {
        self.allocated_bytes
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                current.checked_add(size_bytes)
            })
            .map(|_| ())
            .map_err(|_| MemoryError::CapacityOverflow {
                what: "system allocator total",
            })
    }

    fn release(&self, size_bytes: usize) {
        let prev = self.allocated_bytes.fetch_sub(size_bytes, Ordering::AcqRel);
        debug_assert!(prev >= size_bytes, "released more bytes than reserved");
    }

    fn allocated_bytes(&self) -> usize {
        self.allocated_bytes.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_system_reserve_release() {
        let alloc = SystemAllocator::new();
        alloc.reserve(128).unwrap();
        alloc.reserve(64).unwrap();
        assert_eq!(alloc.allocated_bytes(), 192);

        alloc.release(128);
        alloc.release(64);
        assert_eq!(alloc.allocated_bytes(), 0);
    }

    #[test]
    fn test_system_zero_sized() {
        let alloc = SystemAllocator::new();
        alloc.reserve(0).unwrap();
        assert_eq!(alloc.allocated_bytes(), 0);
    }

    #[test]
    fn test_system_overflow() {
        let alloc = SystemAllocator::new();
        alloc.reserve(usize::MAX).unwrap();
        let err = alloc.reserve(1).unwrap_err();
        assert!(matches!(err, MemoryError::CapacityOverflow { .. }));
        assert_eq!(alloc.allocated_bytes(), usize::MAX);
    }

    #[test]
    fn test_blanket_impls() {
        let alloc = Arc::new(SystemAllocator::new());
        let by_ref = &alloc;
        by_ref.reserve(10).unwrap();
        assert_eq!(alloc.allocated_bytes(), 10);
        alloc.release(10);
        assert_eq!(by_ref.allocated_bytes(), 0);
    }
}
