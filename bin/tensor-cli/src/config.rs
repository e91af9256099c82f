// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tool configuration loaded from TOML files or built from defaults.
//!
//! # TOML Format
//! ```toml
//! memory_budget = "64M"
//! default_kind = "f32"
//! log_filter = "info"
//! ```
//!
//! Every key is optional. Command-line flags take precedence.

use anyhow::Context;
use memory_manager::MemoryBudget;
use std::path::Path;
use tensor_core::ElementKind;

/// Configuration for `tensor-rt`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Memory budget for every tensor a command creates (e.g. `"64M"`).
    pub memory_budget: String,
    /// Kind used when `--kind` is not given.
    pub default_kind: ElementKind,
    /// `tracing` filter directive used when no `-v` flag is given.
    pub log_filter: Option<String>,
}

impl ToolConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config '{}'", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("invalid config '{}'", path.display()))
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> anyhow::Result<Self> {
        toml::from_str(toml_str).context("TOML parse error")
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("TOML serialise error")
    }

    /// Parses the configured memory budget.
    pub fn parse_budget(&self) -> anyhow::Result<MemoryBudget> {
        MemoryBudget::parse(&self.memory_budget)
            .with_context(|| format!("invalid memory_budget '{}'", self.memory_budget))
    }

    /// Picks the command-line budget if one was given, else the configured one.
    pub fn resolve_budget(&self, flag: Option<&str>) -> anyhow::Result<MemoryBudget> {
        match flag {
            Some(s) => MemoryBudget::parse(s).with_context(|| format!("invalid --budget '{s}'")),
            None => self.parse_budget(),
        }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            memory_budget: "64M".to_string(),
            default_kind: ElementKind::F32,
            log_filter: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = ToolConfig::default();
        assert_eq!(c.memory_budget, "64M");
        assert_eq!(c.default_kind, ElementKind::F32);
        assert!(c.log_filter.is_none());
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
memory_budget = "2K"
default_kind = "u16"
log_filter = "debug"
"#;
        let c = ToolConfig::from_toml(toml).unwrap();
        assert_eq!(c.parse_budget().unwrap().as_bytes(), 2048);
        assert_eq!(c.default_kind, ElementKind::U16);
        assert_eq!(c.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let c = ToolConfig::from_toml("default_kind = \"bool\"").unwrap();
        assert_eq!(c.default_kind, ElementKind::Bool);
        assert_eq!(c.memory_budget, "64M");
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(ToolConfig::from_toml("default_kind = \"bf16\"").is_err());
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = ToolConfig {
            default_kind: ElementKind::I64,
            ..Default::default()
        };
        let back = ToolConfig::from_toml(&c.to_toml().unwrap()).unwrap();
        assert_eq!(back.default_kind, ElementKind::I64);
        assert_eq!(back.memory_budget, c.memory_budget);
    }

    #[test]
    fn test_resolve_budget_prefers_flag() {
        let c = ToolConfig::default();
        assert_eq!(c.resolve_budget(Some("1K")).unwrap().as_bytes(), 1024);
        assert_eq!(c.resolve_budget(None).unwrap().as_bytes(), 64 * 1024 * 1024);
        assert!(c.resolve_budget(Some("nope")).is_err());
    }

    #[test]
    fn test_from_missing_file() {
        let err = ToolConfig::from_file(Path::new("/nonexistent/tensor-rt.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read config"));
    }
}
