// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tensor-core
//!
//! A minimal dense tensor over twelve scalar element kinds.
//!
//! This crate provides:
//! - [`Tensor`] - an owned, row-major, n-dimensional buffer with
//!   precomputed strides, accounted against a borrowed
//!   [`memory_manager::Allocator`].
//! - [`Shape`] - dimension descriptors and stride computation.
//! - [`ElementKind`] - the twelve supported kinds (f16/f32/f64, i8–i64,
//!   u8–u64, bool) and their size/classification queries.
//! - [`Element`] - the per-type numeric semantics the kernels are
//!   generic over.
//! - Operations: [`fill`], [`sum`], [`add`].
//!
//! # Design Goals
//! - Typed storage (`Vec<T>` per kind) instead of reinterpreted bytes, so
//!   typed access needs no `unsafe`.
//! - One generic kernel per operation, dispatched by kind.
//! - Construction never leaks accounting, even when it fails halfway.
//! - Clean error types via `thiserror`.

mod element;
mod error;
mod kind;
pub mod ops;
mod shape;
mod storage;
mod tensor;

pub use element::Element;
pub use error::TensorError;
pub use kind::ElementKind;
pub use ops::{add, fill, sum};
pub use shape::Shape;
pub use storage::Storage;
pub use tensor::Tensor;

pub use half::f16;
