// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-type numeric semantics.
//!
//! [`Element`] is implemented for exactly the twelve Rust scalar types that
//! back an [`ElementKind`]. The tensor kernels are written once against
//! this trait and instantiated per storage variant.

use crate::{storage::Storage, ElementKind};
use half::f16;

mod sealed {
    pub trait Sealed {}
}

/// A scalar type a tensor can store.
///
/// The trait is sealed: the set of element types is closed.
pub trait Element:
    Copy + Default + PartialEq + std::fmt::Debug + bytemuck::NoUninit + Send + Sync + 'static + sealed::Sealed
{
    /// The kind tag for this type.
    const KIND: ElementKind;

    /// Converts a fill value into this type.
    ///
    /// Floats narrow, signed integers truncate toward zero, unsigned
    /// integers clamp negatives to zero first, and `bool` is `value != 0`.
    /// Out-of-range integer conversions saturate and NaN becomes zero.
    fn from_f64_lossy(value: f64) -> Self;

    /// Widens the element for accumulation.
    fn to_f64_lossless(self) -> f64;

    /// Element-wise addition: IEEE for floats, wrapping for integers,
    /// logical OR for `bool`.
    fn add_elem(self, rhs: Self) -> Self;

    #[doc(hidden)]
    fn into_storage(data: Vec<Self>) -> Storage;

    #[doc(hidden)]
    fn slice(storage: &Storage) -> Option<&[Self]>;

    #[doc(hidden)]
    fn slice_mut(storage: &mut Storage) -> Option<&mut [Self]>;
}

macro_rules! impl_element {
    (
        $ty:ty, $variant:ident,
        from: |$v:ident| $from:expr,
        widen: |$w:ident| $widen:expr,
        add: |$a:ident, $b:ident| $add:expr $(,)?
    ) => {
        impl sealed::Sealed for $ty {}

        impl Element for $ty {
            const KIND: ElementKind = ElementKind::$variant;

            #[inline]
            fn from_f64_lossy($v: f64) -> Self {
                $from
            }

            #[inline]
            fn to_f64_lossless(self) -> f64 {
                let $w = self;
                $widen
            }

            #[inline]
            fn add_elem(self, rhs: Self) -> Self {
                let ($a, $b) = (self, rhs);
                $add
            }

            fn into_storage(data: Vec<Self>) -> Storage {
                Storage::$variant(data)
            }

            fn slice(storage: &Storage) -> Option<&[Self]> {
                match storage {
                    Storage::$variant(data) => Some(data.as_slice()),
                    _ => None,
                }
            }

            fn slice_mut(storage: &mut Storage) -> Option<&mut [Self]> {
                match storage {
                    Storage::$variant(data) => Some(data.as_mut_slice()),
                    _ => None,
                }
            }
        }
    };
}

macro_rules! impl_float {
    ($($ty:ty => $variant:ident),*) => {$(
        impl_element!($ty, $variant,
            from: |v| v as $ty,
            widen: |x| x as f64,
            add: |a, b| a + b,
        );
    )*};
}

macro_rules! impl_signed {
    ($($ty:ty => $variant:ident),*) => {$(
        impl_element!($ty, $variant,
            from: |v| v as $ty,
            widen: |x| x as f64,
            add: |a, b| a.wrapping_add(b),
        );
    )*};
}

macro_rules! impl_unsigned {
    ($($ty:ty => $variant:ident),*) => {$(
        impl_element!($ty, $variant,
            from: |v| v.max(0.0) as $ty,
            widen: |x| x as f64,
            add: |a, b| a.wrapping_add(b),
        );
    )*};
}

impl_element!(f16, F16,
    from: |v| f16::from_f64(v),
    widen: |x| x.to_f64(),
    add: |a, b| a + b,
);
impl_float!(f32 => F32, f64 => F64);
impl_signed!(i8 => I8, i16 => I16, i32 => I32, i64 => I64);
impl_unsigned!(u8 => U8, u16 => U16, u32 => U32, u64 => U64);
impl_element!(bool, Bool,
    from: |v| v != 0.0,
    widen: |x| if x { 1.0 } else { 0.0 },
    add: |a, b| a || b,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(<f16 as Element>::KIND, ElementKind::F16);
        assert_eq!(<u64 as Element>::KIND, ElementKind::U64);
        assert_eq!(<bool as Element>::KIND, ElementKind::Bool);
        assert_eq!(std::mem::size_of::<bool>(), ElementKind::Bool.byte_size());
        assert_eq!(std::mem::size_of::<f16>(), ElementKind::F16.byte_size());
    }

    #[test]
    fn test_float_narrowing() {
        assert_eq!(f32::from_f64_lossy(0.1), 0.1f64 as f32);
        assert_eq!(<f16 as Element>::from_f64_lossy(1.5).to_f64_lossless(), 1.5);
        assert!(<f16 as Element>::from_f64_lossy(1.0e6).to_f64_lossless().is_infinite());
    }

    #[test]
    fn test_signed_truncation() {
        assert_eq!(i32::from_f64_lossy(2.9), 2);
        assert_eq!(i32::from_f64_lossy(-2.9), -2);
        assert_eq!(i8::from_f64_lossy(300.0), i8::MAX);
        assert_eq!(i8::from_f64_lossy(f64::NAN), 0);
    }

    #[test]
    fn test_unsigned_clamps_negative() {
        assert_eq!(u8::from_f64_lossy(-5.0), 0);
        assert_eq!(u16::from_f64_lossy(-0.5), 0);
        assert_eq!(u32::from_f64_lossy(7.8), 7);
        assert_eq!(u64::from_f64_lossy(f64::NAN), 0);
    }

    #[test]
    fn test_bool_conversion() {
        assert!(bool::from_f64_lossy(0.25));
        assert!(bool::from_f64_lossy(-1.0));
        assert!(!bool::from_f64_lossy(0.0));
        assert!(!bool::from_f64_lossy(-0.0));
        assert_eq!(true.to_f64_lossless(), 1.0);
        assert_eq!(false.to_f64_lossless(), 0.0);
    }

    #[test]
    fn test_add_semantics() {
        assert_eq!(127i8.add_elem(1), i8::MIN);
        assert_eq!(u8::MAX.add_elem(2), 1);
        assert_eq!(i64::MAX.add_elem(1), i64::MIN);
        assert_eq!(2.0f32.add_elem(3.0), 5.0);
        assert!(f64::MAX.add_elem(f64::MAX).is_infinite());
        assert!(true.add_elem(false));
        assert!(!false.add_elem(false));
    }

    #[test]
    fn test_slice_access() {
        let mut storage = <i16 as Element>::into_storage(vec![1, 2, 3]);
        assert_eq!(i16::slice(&storage), Some(&[1i16, 2, 3][..]));
        assert!(u16::slice(&storage).is_none());

        i16::slice_mut(&mut storage).unwrap()[0] = 9;
        assert_eq!(i16::slice(&storage).unwrap()[0], 9);
        assert!(f32::slice_mut(&mut storage).is_none());
    }
}
