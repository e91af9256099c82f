// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # memory-manager
//!
//! Byte accounting for tensor storage.
//!
//! # Key Components
//!
//! - [`Allocator`] - the capability a tensor borrows at construction and
//!   release. It admits or rejects byte reservations; it is never stored
//!   inside the tensor.
//! - [`SystemAllocator`] - no ceiling, counts live bytes.
//! - [`MemoryPool`] - enforces a [`MemoryBudget`] and records
//!   [`AllocationStats`].
//! - [`Reservation`] - an RAII reservation. Dropped uncommitted, it hands
//!   its bytes back, which is how partially built tensors unwind.
//!
//! # Ownership Model
//!
//! ```text
//! Tensor::create(&alloc, ..)
//!       │  Reservation::new(&alloc, n)   ×3 (buffer, shape, strides)
//!       │  any step fails → earlier reservations drop → alloc.release(n)
//!       ▼
//!   Tensor  (owns its Vecs, holds no allocator)
//!       │
//!       │  tensor.release(&alloc)
//!       ▼
//!   alloc.release(buffer + shape + strides)
//! ```
//!
//! # Example
//! ```
//! use memory_manager::{Allocator, MemoryBudget, MemoryPool};
//!
//! let pool = MemoryPool::new(MemoryBudget::from_mb(1));
//! pool.reserve(4096).unwrap();
//! assert_eq!(pool.allocated_bytes(), 4096);
//! pool.release(4096);
//! assert_eq!(pool.allocated_bytes(), 0);
//! ```

mod allocator;
mod budget;
mod error;
pub mod pool;
mod reservation;
mod stats;

pub use allocator::{Allocator, SystemAllocator};
pub use budget::MemoryBudget;
pub use error::MemoryError;
pub use pool::MemoryPool;
pub use reservation::Reservation;
pub use stats::AllocationStats;
