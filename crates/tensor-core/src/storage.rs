// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Typed element storage.
//!
//! A tensor's buffer is one `Vec<T>` per kind rather than a `Vec<u8>`
//! cast on access, so every element is correctly aligned and typed views
//! never need `unsafe`. Byte-level access goes through `bytemuck`.

use crate::{Element, ElementKind};
use half::f16;
use memory_manager::MemoryError;

/// Owned element buffer, one variant per [`ElementKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Storage {
    F16(Vec<f16>),
    F32(Vec<f32>),
    F64(Vec<f64>),
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    U64(Vec<u64>),
    Bool(Vec<bool>),
}

/// Binds the typed `Vec` inside a [`Storage`] and evaluates `$body` once
/// per variant, so `$body` is monomorphised for every element type.
macro_rules! dispatch {
    ($storage:expr, $data:ident => $body:expr) => {
        match $storage {
            $crate::storage::Storage::F16($data) => $body,
            $crate::storage::Storage::F32($data) => $body,
            $crate::storage::Storage::F64($data) => $body,
            $crate::storage::Storage::I8($data) => $body,
            $crate::storage::Storage::I16($data) => $body,
            $crate::storage::Storage::I32($data) => $body,
            $crate::storage::Storage::I64($data) => $body,
            $crate::storage::Storage::U8($data) => $body,
            $crate::storage::Storage::U16($data) => $body,
            $crate::storage::Storage::U32($data) => $body,
            $crate::storage::Storage::U64($data) => $body,
            $crate::storage::Storage::Bool($data) => $body,
        }
    };
}

/// Like [`dispatch!`] for two storages of the same variant. Pairs of
/// different variants evaluate `$mismatch` instead.
macro_rules! dispatch_pair {
    ($lhs:expr, $rhs:expr, $l:ident, $r:ident => $body:expr, else $mismatch:expr) => {
        match ($lhs, $rhs) {
            ($crate::storage::Storage::F16($l), $crate::storage::Storage::F16($r)) => $body,
            ($crate::storage::Storage::F32($l), $crate::storage::Storage::F32($r)) => $body,
            ($crate::storage::Storage::F64($l), $crate::storage::Storage::F64($r)) => $body,
            ($crate::storage::Storage::I8($l), $crate::storage::Storage::I8($r)) => $body,
            ($crate::storage::Storage::I16($l), $crate::storage::Storage::I16($r)) => $body,
            ($crate::storage::Storage::I32($l), $crate::storage::Storage::I32($r)) => $body,
            ($crate::storage::Storage::I64($l), $crate::storage::Storage::I64($r)) => $body,
            ($crate::storage::Storage::U8($l), $crate::storage::Storage::U8($r)) => $body,
            ($crate::storage::Storage::U16($l), $crate::storage::Storage::U16($r)) => $body,
            ($crate::storage::Storage::U32($l), $crate::storage::Storage::U32($r)) => $body,
            ($crate::storage::Storage::U64($l), $crate::storage::Storage::U64($r)) => $body,
            ($crate::storage::Storage::Bool($l), $crate::storage::Storage::Bool($r)) => $body,
            _ => $mismatch,
        }
    };
}

pub(crate) use dispatch;
pub(crate) use dispatch_pair;

impl Storage {
    /// Allocates `len` default-valued elements of `kind`.
    ///
    /// Uses `try_reserve_exact`, so an exhausted global allocator is
    /// reported instead of aborting the process.
    pub fn try_zeroed(kind: ElementKind, len: usize) -> Result<Self, MemoryError> {
        match kind {
            ElementKind::F16 => zeroed_as::<f16>(len),
            ElementKind::F32 => zeroed_as::<f32>(len),
            ElementKind::F64 => zeroed_as::<f64>(len),
            ElementKind::I8 => zeroed_as::<i8>(len),
            ElementKind::I16 => zeroed_as::<i16>(len),
            ElementKind::I32 => zeroed_as::<i32>(len),
            ElementKind::I64 => zeroed_as::<i64>(len),
            ElementKind::U8 => zeroed_as::<u8>(len),
            ElementKind::U16 => zeroed_as::<u16>(len),
            ElementKind::U32 => zeroed_as::<u32>(len),
            ElementKind::U64 => zeroed_as::<u64>(len),
            ElementKind::Bool => zeroed_as::<bool>(len),
        }
    }

    /// Returns the kind tag matching this variant.
    pub fn kind(&self) -> ElementKind {
        fn kind_of<T: Element>(_: &[T]) -> ElementKind {
            T::KIND
        }
        dispatch!(self, data => kind_of(data))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        dispatch!(self, data => data.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Storage length in bytes: `len() * kind().byte_size()`.
    pub fn size_bytes(&self) -> usize {
        self.as_bytes().len()
    }

    /// Views the elements as raw native-endian bytes.
    pub fn as_bytes(&self) -> &[u8] {
        dispatch!(self, data => bytemuck::cast_slice(data.as_slice()))
    }
}

pub(crate) fn try_vec_from_elem<T: Clone>(
    len: usize,
    elem: T,
    what: &'static str,
) -> Result<Vec<T>, MemoryError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| MemoryError::SystemExhausted {
        requested_bytes: len.saturating_mul(std::mem::size_of::<T>()),
    })?;
    data.resize(len, elem);
    tracing::trace!(len, what, "vec allocated");
    Ok(data)
}

fn zeroed_as<T: Element>(len: usize) -> Result<Storage, MemoryError> {
    try_vec_from_elem(len, T::default(), "tensor buffer").map(T::into_storage)
}
