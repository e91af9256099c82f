// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Supported tensor element kinds.

use crate::TensorError;
use std::fmt;

/// Enumerates the scalar types a [`crate::Tensor`] can hold.
///
/// The kind decides the element width, the typed storage variant, and the
/// numeric semantics `fill`, `sum` and `add` apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// 16-bit IEEE 754 floating point.
    F16,
    /// 32-bit IEEE 754 floating point.
    F32,
    /// 64-bit IEEE 754 floating point.
    F64,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    /// One byte per element; `true` counts as 1.0 when summed.
    Bool,
}

impl ElementKind {
    /// Every kind, in declaration order.
    pub const ALL: [ElementKind; 12] = [
        ElementKind::F16,
        ElementKind::F32,
        ElementKind::F64,
        ElementKind::I8,
        ElementKind::I16,
        ElementKind::I32,
        ElementKind::I64,
        ElementKind::U8,
        ElementKind::U16,
        ElementKind::U32,
        ElementKind::U64,
        ElementKind::Bool,
    ];

    /// Returns the size of a single element in bytes.
    pub const fn byte_size(self) -> usize {
        match self {
            ElementKind::I8 | ElementKind::U8 | ElementKind::Bool => 1,
            ElementKind::F16 | ElementKind::I16 | ElementKind::U16 => 2,
            ElementKind::F32 | ElementKind::I32 | ElementKind::U32 => 4,
            ElementKind::F64 | ElementKind::I64 | ElementKind::U64 => 8,
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, ElementKind::F16 | ElementKind::F32 | ElementKind::F64)
    }

    pub const fn is_int(self) -> bool {
        matches!(
            self,
            ElementKind::I8
                | ElementKind::I16
                | ElementKind::I32
                | ElementKind::I64
                | ElementKind::U8
                | ElementKind::U16
                | ElementKind::U32
                | ElementKind::U64
        )
    }

    /// True for signed integers and for every float kind.
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            ElementKind::I8
                | ElementKind::I16
                | ElementKind::I32
                | ElementKind::I64
                | ElementKind::F16
                | ElementKind::F32
                | ElementKind::F64
        )
    }

    /// Returns a lowercase label for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            ElementKind::F16 => "f16",
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
            ElementKind::I8 => "i8",
            ElementKind::I16 => "i16",
            ElementKind::I32 => "i32",
            ElementKind::I64 => "i64",
            ElementKind::U8 => "u8",
            ElementKind::U16 => "u16",
            ElementKind::U32 => "u32",
            ElementKind::U64 => "u64",
            ElementKind::Bool => "bool",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ElementKind {
    type Err = TensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ElementKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TensorError::UnknownKind(wanted.to_string()))
    }
}
