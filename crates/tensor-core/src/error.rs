// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for tensor operations.

use crate::{ElementKind, Shape};
use memory_manager::MemoryError;

/// Errors that can occur during tensor operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TensorError {
    /// The allocator could not satisfy a reservation during construction.
    #[error("allocation failed: {0}")]
    Allocation(#[from] MemoryError),

    /// Two tensors have different shapes.
    #[error("incompatible shapes for {op}: {lhs} vs {rhs}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// Two tensors (or a tensor and a requested view) have different kinds.
    #[error("dtype mismatch for {op}: {lhs} vs {rhs}")]
    DtypeMismatch {
        op: &'static str,
        lhs: ElementKind,
        rhs: ElementKind,
    },

    /// The number of supplied values does not match the shape.
    #[error("shape {shape} holds {expected} elements, got {actual}")]
    ElementCountMismatch {
        shape: Shape,
        expected: usize,
        actual: usize,
    },

    /// A kind label could not be parsed.
    #[error("unknown element kind '{0}'")]
    UnknownKind(String),
}
