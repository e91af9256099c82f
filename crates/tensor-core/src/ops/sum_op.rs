// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Full reduction to a scalar.

use crate::storage::dispatch;
use crate::{Element, Tensor};

/// Sums every element of `tensor` into an `f64`.
///
/// Elements are widened with [`Element::to_f64_lossless`] and accumulated
/// strictly left to right in storage order, so float results are
/// bit-reproducible. `bool` counts `true` as 1.0. Returns 0.0 for an
/// empty tensor.
pub fn sum(tensor: &Tensor) -> f64 {
    dispatch!(tensor.storage(), data => sum_slice(data))
}

#[inline]
fn sum_slice<T: Element>(data: &[T]) -> f64 {
    data.iter().fold(0.0, |acc, &x| acc + x.to_f64_lossless())
}
