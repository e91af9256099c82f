// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for memory accounting.

/// Errors that can occur while reserving memory from an [`Allocator`](crate::Allocator).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryError {
    /// The requested reservation would exceed the memory budget.
    #[error("out of memory: requested {requested_bytes} bytes, but only {available_bytes} available (budget: {budget_bytes})")]
    OutOfMemory {
        requested_bytes: usize,
        available_bytes: usize,
        budget_bytes: usize,
    },

    /// A size computation overflowed `usize`.
    #[error("capacity overflow while sizing {what}")]
    CapacityOverflow { what: &'static str },

    /// The global allocator refused the request.
    #[error("system allocator could not provide {requested_bytes} bytes")]
    SystemExhausted { requested_bytes: usize },

    /// A budget string could not be parsed.
    #[error("invalid budget: {0}")]
    InvalidBudget(String),
}
