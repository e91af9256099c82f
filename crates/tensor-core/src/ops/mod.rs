// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor operations.
//!
//! Each kernel is written once over [`crate::Element`] and instantiated
//! per storage variant by the dispatch macros in `storage`. All of them
//! run sequentially over the buffer in storage order.

mod add_op;
mod fill_op;
mod sum_op;

pub use add_op::add;
pub use fill_op::fill;
pub use sum_op::sum;
