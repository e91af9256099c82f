// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Element-wise in-place addition.

use crate::storage::dispatch_pair;
use crate::{Element, Tensor, TensorError};

/// Computes `destination[i] = destination[i] + source[i]` for every `i`.
///
/// Floats use IEEE addition, integers wrap on overflow, `bool` is logical
/// OR. `source` is never modified.
///
/// # Errors
/// Returns [`TensorError::ShapeMismatch`] if the shapes differ, otherwise
/// [`TensorError::DtypeMismatch`] if the kinds differ. Both checks run
/// before any element is written.
pub fn add(destination: &mut Tensor, source: &Tensor) -> Result<(), TensorError> {
    if destination.shape() != source.shape() {
        return Err(TensorError::ShapeMismatch {
            op: "add",
            lhs: destination.shape().clone(),
            rhs: source.shape().clone(),
        });
    }

    let (lhs, rhs) = (destination.kind(), source.kind());
    dispatch_pair!(
        destination.storage_mut(),
        source.storage(),
        dst, src => {
            add_slices(dst, src);
            Ok(())
        },
        else Err(TensorError::DtypeMismatch { op: "add", lhs, rhs })
    )
}

#[inline]
fn add_slices<T: Element>(dst: &mut [T], src: &[T]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = d.add_elem(s);
    }
}
