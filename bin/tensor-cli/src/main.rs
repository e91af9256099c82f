// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tensor-rt
//!
//! Command-line front-end for `tensor-core`.
//!
//! ## Usage
//! ```bash
//! # List the supported element kinds
//! tensor-rt kinds
//!
//! # Show the effective configuration
//! tensor-rt --config tensor-rt.toml config
//!
//! # Fill a 2x3 f32 tensor with 1.5 and sum it under a 1 MB budget
//! tensor-rt fill-sum --shape 2,3 --kind f32 --value 1.5 --budget 1M
//!
//! # Add two i8 tensors (127 + 1 wraps to -128)
//! tensor-rt add --shape 2,2 --kind i8 --lhs 127 --rhs 1
//! ```

mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::ToolConfig;
use tensor_core::ElementKind;

#[derive(Parser)]
#[command(
    name = "tensor-rt",
    about = "Dense tensor fill/sum/add over twelve element kinds",
    version
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every element kind with its size and classification.
    Kinds,

    /// Print the effective configuration as TOML.
    Config,

    /// Create a tensor, fill it with a value, and print its sum.
    FillSum {
        /// Comma-separated dimensions, e.g. "2,3". Empty for a scalar.
        #[arg(short, long, default_value = "")]
        shape: String,

        /// Element kind (defaults to the config's `default_kind`).
        #[arg(short, long)]
        kind: Option<ElementKind>,

        /// Fill value.
        #[arg(long, allow_hyphen_values = true)]
        value: f64,

        /// Memory budget, e.g. "64M" (defaults to the config's `memory_budget`).
        #[arg(short, long)]
        budget: Option<String>,
    },

    /// Create two tensors, fill them, add the second into the first.
    Add {
        /// Comma-separated dimensions, e.g. "2,2". Empty for a scalar.
        #[arg(short, long, default_value = "")]
        shape: String,

        /// Element kind (defaults to the config's `default_kind`).
        #[arg(short, long)]
        kind: Option<ElementKind>,

        /// Fill value for the destination tensor.
        #[arg(long, allow_hyphen_values = true)]
        lhs: f64,

        /// Fill value for the source tensor.
        #[arg(long, allow_hyphen_values = true)]
        rhs: f64,

        /// Memory budget, e.g. "64M" (defaults to the config's `memory_budget`).
        #[arg(short, long)]
        budget: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ToolConfig::from_file(path)?,
        None => ToolConfig::default(),
    };

    commands::init_tracing(cli.verbose, config.log_filter.as_deref());
    tracing::debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Kinds => commands::kinds::execute(),
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        Commands::FillSum {
            shape,
            kind,
            value,
            budget,
        } => {
            let shape = commands::parse_shape(&shape)?;
            let kind = kind.unwrap_or(config.default_kind);
            let budget = config.resolve_budget(budget.as_deref())?;
            commands::fill_sum::execute(&shape, kind, value, budget)
        }
        Commands::Add {
            shape,
            kind,
            lhs,
            rhs,
            budget,
        } => {
            let shape = commands::parse_shape(&shape)?;
            let kind = kind.unwrap_or(config.default_kind);
            let budget = config.resolve_budget(budget.as_deref())?;
            commands::add::execute(&shape, kind, lhs, rhs, budget)
        }
    }
}
