// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Memory budget configuration and parsing.
//!
//! A [`MemoryBudget`] is the hard byte ceiling enforced by a
//! [`MemoryPool`](crate::MemoryPool). It parses human-readable strings so
//! budgets can come straight from a CLI flag or a TOML file.

use crate::MemoryError;
use std::fmt;

const KIB: usize = 1024;
const MIB: usize = 1024 * KIB;
const GIB: usize = 1024 * MIB;

/// Recognised suffixes, longest first so `"MB"` wins over `"B"`.
const SUFFIXES: [(&str, usize); 7] = [
    ("GB", GIB),
    ("MB", MIB),
    ("KB", KIB),
    ("G", GIB),
    ("M", MIB),
    ("K", KIB),
    ("B", 1),
];

/// A hard ceiling on the bytes a pool may hand out at once.
///
/// # Parsing
/// - `"64M"` or `"64MB"` → 64 × 1024² bytes
/// - `"1G"` or `"1GB"` → 1024³ bytes
/// - `"16K"` or `"16KB"` → 16 × 1024 bytes
/// - `"4096"` or `"4096B"` → raw byte count
///
/// # Examples
/// ```
/// use memory_manager::MemoryBudget;
///
/// let b = MemoryBudget::parse("64M").unwrap();
/// assert_eq!(b.as_bytes(), 64 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MemoryBudget {
    bytes: usize,
}

impl MemoryBudget {
    /// Creates a budget from a byte count.
    pub fn from_bytes(bytes: usize) -> Self {
        Self { bytes }
    }

    /// Creates a budget from kibibytes.
    pub fn from_kb(kb: usize) -> Self {
        Self { bytes: kb * KIB }
    }

    /// Creates a budget from mebibytes.
    pub fn from_mb(mb: usize) -> Self {
        Self { bytes: mb * MIB }
    }

    /// A budget no allocation can exceed.
    pub fn unlimited() -> Self {
        Self { bytes: usize::MAX }
    }

    /// Returns the budget in bytes.
    pub fn as_bytes(&self) -> usize {
        self.bytes
    }

    /// Parses a human-readable budget string (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, MemoryError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MemoryError::InvalidBudget("empty budget string".into()));
        }

        let upper = trimmed.to_ascii_uppercase();
        let (digits, multiplier) = SUFFIXES
            .iter()
            .find(|(suffix, _)| upper.ends_with(suffix))
            .map(|(suffix, mult)| (&trimmed[..trimmed.len() - suffix.len()], *mult))
            .unwrap_or((trimmed, 1));

        let value: usize = digits.trim().parse().map_err(|_| {
            MemoryError::InvalidBudget(format!(
                "'{trimmed}': expected a number with an optional K, M or G suffix"
            ))
        })?;

        let bytes = value
            .checked_mul(multiplier)
            .ok_or_else(|| MemoryError::InvalidBudget(format!("'{trimmed}' overflows usize")))?;

        if bytes == 0 {
            return Err(MemoryError::InvalidBudget(format!("'{trimmed}' is zero")));
        }

        Ok(Self { bytes })
    }
}

impl fmt::Display for MemoryBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bytes {
            usize::MAX => write!(f, "unlimited"),
            b if b >= GIB && b % GIB == 0 => write!(f, "{} GB", b / GIB),
            b if b >= MIB && b % MIB == 0 => write!(f, "{} MB", b / MIB),
            b if b >= KIB && b % KIB == 0 => write!(f, "{} KB", b / KIB),
            b => write!(f, "{b} B"),
        }
    }
}

impl std::str::FromStr for MemoryBudget {
    type Err = MemoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(MemoryBudget::from_kb(2).as_bytes(), 2048);
        assert_eq!(MemoryBudget::from_mb(1).as_bytes(), MIB);
        assert_eq!(MemoryBudget::unlimited().as_bytes(), usize::MAX);
    }

    #[test]
    fn test_parse_suffixes() {
        assert_eq!(MemoryBudget::parse("64M").unwrap().as_bytes(), 64 * MIB);
        assert_eq!(MemoryBudget::parse("64mb").unwrap().as_bytes(), 64 * MIB);
        assert_eq!(MemoryBudget::parse("1G").unwrap().as_bytes(), GIB);
        assert_eq!(MemoryBudget::parse("1gb").unwrap().as_bytes(), GIB);
        assert_eq!(MemoryBudget::parse("16K").unwrap().as_bytes(), 16 * KIB);
        assert_eq!(MemoryBudget::parse("16KB").unwrap().as_bytes(), 16 * KIB);
        assert_eq!(MemoryBudget::parse("40B").unwrap().as_bytes(), 40);
    }

    #[test]
    fn test_parse_raw_bytes() {
        assert_eq!(MemoryBudget::parse("4096").unwrap().as_bytes(), 4096);
        assert_eq!(MemoryBudget::parse("  48  ").unwrap().as_bytes(), 48);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(MemoryBudget::parse(""), Err(MemoryError::InvalidBudget(_))));
        assert!(matches!(MemoryBudget::parse("lots"), Err(MemoryError::InvalidBudget(_))));
        assert!(matches!(MemoryBudget::parse("0K"), Err(MemoryError::InvalidBudget(_))));
        assert!(MemoryBudget::parse("99999999999999999999G").is_err());
    }

    #[test]
    fn test_from_str() {
        let b: MemoryBudget = "2K".parse().unwrap();
        assert_eq!(b.as_bytes(), 2048);
    }

    #[test]
    fn test_display() {
        assert_eq!(MemoryBudget::from_mb(1024).to_string(), "1 GB");
        assert_eq!(MemoryBudget::from_mb(64).to_string(), "64 MB");
        assert_eq!(MemoryBudget::from_bytes(2048).to_string(), "2 KB");
        assert_eq!(MemoryBudget::from_bytes(100).to_string(), "100 B");
        assert_eq!(MemoryBudget::unlimited().to_string(), "unlimited");
    }

    #[test]
    fn test_serde_roundtrip() {
        let b = MemoryBudget::from_kb(256);
        let json = serde_json::to_string(&b).unwrap();
        let back: MemoryBudget = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }
}
