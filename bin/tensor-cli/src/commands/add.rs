// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `tensor-rt add` command: element-wise addition of two filled tensors.

use anyhow::Context;
use memory_manager::{MemoryBudget, MemoryPool};
use tensor_core::{ElementKind, Shape, Tensor};

pub fn execute(
    dims: &[usize],
    kind: ElementKind,
    lhs: f64,
    rhs: f64,
    budget: MemoryBudget,
) -> anyhow::Result<()> {
    let pool = MemoryPool::new(budget);
    let shape = Shape::from(dims);

    let mut destination = Tensor::create(&pool, dims, kind)
        .with_context(|| format!("cannot allocate destination {kind} tensor of shape {shape}"))?;
    let mut source = match Tensor::create(&pool, dims, kind) {
        Ok(t) => t,
        Err(e) => {
            destination.release(&pool);
            return Err(e)
                .with_context(|| format!("cannot allocate source {kind} tensor of shape {shape}"));
        }
    };

    destination.fill(lhs);
    source.fill(rhs);
    let result = destination.add(&source);
    let total = destination.sum();

    destination.release(&pool);
    source.release(&pool);
    result.context("add failed")?;

    println!("  Shape: {shape}  Kind: {kind}");
    println!("  {lhs} + {rhs} per element");
    println!("  Sum:   {total}");
    println!("  {}", pool.stats().summary());
    Ok(())
}
