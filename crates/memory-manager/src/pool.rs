// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Budget-enforcing allocator.
//!
//! The [`MemoryPool`] is the allocator tensors are normally created
//! against. It:
//!
//! 1. Enforces a hard memory ceiling: reservations that would exceed the
//!    budget return `Err(OutOfMemory)` and leave the pool untouched.
//! 2. Tracks live bytes so that a tensor which was never released shows
//!    up as outstanding memory.
//! 3. Records allocation statistics for diagnostics.
//!
//! # Thread Safety
//! `MemoryPool` is `Send + Sync`. The live-byte counter is updated with a
//! compare-and-swap loop, so two threads can never jointly overshoot the
//! budget.

use crate::{AllocationStats, Allocator, MemoryBudget, MemoryError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// An [`Allocator`] with a fixed byte budget.
///
/// # Example
/// ```
/// use memory_manager::{Allocator, MemoryBudget, MemoryPool};
///
/// let pool = MemoryPool::new(MemoryBudget::from_kb(4));
/// pool.reserve(1024).unwrap();
/// assert_eq!(pool.available_bytes(), 3 * 1024);
///
/// pool.release(1024);
/// assert_eq!(pool.allocated_bytes(), 0);
/// ```
pub struct MemoryPool {
    budget: MemoryBudget,
    /// Currently reserved bytes (live, not yet released).
    allocated_bytes: AtomicUsize,
    /// Statistics (behind a Mutex since updates are infrequent).
    stats: Mutex<AllocationStats>,
}

impl MemoryPool {
    /// Creates a new pool with the given budget.
    pub fn new(budget: MemoryBudget) -> Self {
        Self {
            budget,
            allocated_bytes: AtomicUsize::new(0),
            stats: Mutex::new(AllocationStats::default()),
        }
    }

    /// Creates a pool whose budget never rejects a request.
    pub fn unbounded() -> Self {
        Self::new(MemoryBudget::unlimited())
    }

    /// Returns the number of bytes remaining before hitting the budget.
    pub fn available_bytes(&self) -> usize {
        self.budget.as_bytes().saturating_sub(self.allocated_bytes())
    }

    /// Returns the memory budget.
    pub fn budget(&self) -> MemoryBudget {
        self.budget
    }

    /// Returns a snapshot of allocation statistics.
    pub fn stats(&self) -> AllocationStats {
        self.stats
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    fn with_stats(&self, f: impl FnOnce(&mut AllocationStats)) {
        if let Ok(mut stats) = self.stats.lock() {
            f(&mut stats);
        }
    }
}

impl Allocator for MemoryPool {
    fn reserve(&self, size_bytes: usize) -> Result<(), MemoryError> {
        if size_bytes == 0 {
            return Ok(());
        }

        let budget = self.budget.as_bytes();
        let admitted = self
            .allocated_bytes
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                current
                    .checked_add(size_bytes)
                    .filter(|&total| total <= budget)
            });

        match admitted {
            Ok(previous) => {
                let total = previous + size_bytes;
                tracing::debug!(size_bytes, total, "pool reservation admitted");
                self.with_stats(|s| {
                    s.record_allocation(size_bytes);
                    s.update_peak(total);
                });
                Ok(())
            }
            Err(current) => {
                tracing::warn!(
                    size_bytes,
                    allocated = current,
                    budget = %self.budget,
                    "pool reservation rejected"
                );
                self.with_stats(AllocationStats::record_oom);
                Err(MemoryError::OutOfMemory {
                    requested_bytes: size_bytes,
                    available_bytes: budget.saturating_sub(current),
                    budget_bytes: budget,
                })
            }
        }
    }

    fn release(&self, size_bytes: usize) {
        if size_bytes == 0 {
            return;
        }
        let previous = self.allocated_bytes.fetch_sub(size_bytes, Ordering::AcqRel);
        debug_assert!(previous >= size_bytes, "released more bytes than reserved");
        self.with_stats(AllocationStats::record_deallocation);
    }

    fn allocated_bytes(&self) -> usize {
        self.allocated_bytes.load(Ordering::Acquire)
    }
}

impl std::fmt::Debug for MemoryPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryPool")
            .field("budget", &self.budget)
            .field("allocated_bytes", &self.allocated_bytes())
            .field("available_bytes", &self.available_bytes())
            .finish()
    }
}
