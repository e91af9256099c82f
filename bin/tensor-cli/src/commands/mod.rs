// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared helpers.

pub mod add;
pub mod fill_sum;
pub mod kinds;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `-v` flags win over the configured filter; with neither, only
/// warnings are shown. Logs go to stderr so command output stays clean.
pub fn init_tracing(verbose: u8, configured: Option<&str>) {
    let directive = match (verbose, configured) {
        (0, Some(filter)) => filter.to_string(),
        (0, None) => "warn".to_string(),
        (1, _) => "info".to_string(),
        (2, _) => "debug".to_string(),
        _ => "trace".to_string(),
    };

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses `"2,3,4"` into dimensions. Blank input is a scalar shape.
pub fn parse_shape(s: &str) -> anyhow::Result<Vec<usize>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|d| {
            d.trim()
                .parse::<usize>()
                .with_context(|| format!("invalid dimension '{}' in shape '{s}'", d.trim()))
        })
        .collect()
}
