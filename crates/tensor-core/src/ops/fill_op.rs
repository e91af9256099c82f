// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Uniform fill.

use crate::storage::dispatch;
use crate::{Element, Tensor};

/// Overwrites every element of `tensor` with `value` converted to its kind.
///
/// Conversion follows [`Element::from_f64_lossy`]: floats narrow, signed
/// integers truncate toward zero, unsigned integers clamp negatives to
/// zero, `bool` is `value != 0`. Never fails.
pub fn fill(tensor: &mut Tensor, value: f64) {
    dispatch!(tensor.storage_mut(), data => fill_slice(data, value))
}

#[inline]
fn fill_slice<T: Element>(data: &mut [T], value: f64) {
    data.fill(T::from_f64_lossy(value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementKind;
    use half::f16;
    use memory_manager::SystemAllocator;

    #[test]
    fn test_fill_f32() {
        let alloc = SystemAllocator::new();
        let mut t = Tensor::create(&alloc, &[5], ElementKind::F32).unwrap();
        fill(&mut t, 3.14);
        assert!(t
            .as_slice::<f32>()
            .unwrap()
            .iter()
            .all(|&x| (x - 3.14).abs() < 1e-6));
        t.release(&alloc);
    }

    #[test]
    fn test_fill_f16_narrows() {
        let alloc = SystemAllocator::new();
        let mut t = Tensor::create(&alloc, &[2], ElementKind::F16).unwrap();
        fill(&mut t, 0.1);
        assert!(t
            .as_slice::<f16>()
            .unwrap()
            .iter()
            .all(|&x| x == f16::from_f64(0.1)));
        t.release(&alloc);
    }

    #[test]
    fn test_fill_signed_truncates() {
        let alloc = SystemAllocator::new();
        let mut t = Tensor::create(&alloc, &[3], ElementKind::I32).unwrap();
        fill(&mut t, -7.9);
        assert_eq!(t.as_slice::<i32>().unwrap(), &[-7, -7, -7]);
        t.release(&alloc);
    }

    #[test]
    fn test_fill_unsigned_clamps() {
        let alloc = SystemAllocator::new();
        let mut t = Tensor::create(&alloc, &[4], ElementKind::U8).unwrap();
        fill(&mut t, 9.0);
        fill(&mut t, -5.0);
        assert_eq!(t.as_slice::<u8>().unwrap(), &[0, 0, 0, 0]);
        t.release(&alloc);
    }

    #[test]
    fn test_fill_bool() {
        let alloc = SystemAllocator::new();
        let mut t = Tensor::create(&alloc, &[2, 2], ElementKind::Bool).unwrap();
        fill(&mut t, 0.5);
        assert!(t.as_slice::<bool>().unwrap().iter().all(|&b| b));
        fill(&mut t, 0.0);
        assert!(t.as_slice::<bool>().unwrap().iter().all(|&b| !b));
        t.release(&alloc);
    }

    #[test]
    fn test_fill_empty_tensor() {
        let alloc = SystemAllocator::new();
        let mut t = Tensor::create(&alloc, &[0, 3], ElementKind::F64).unwrap();
        fill(&mut t, 1.0);
        assert_eq!(t.size_bytes(), 0);
        t.release(&alloc);
    }
}
