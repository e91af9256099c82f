// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `tensor-rt fill-sum` command: allocate, fill, reduce, release.

use anyhow::Context;
use memory_manager::{Allocator, MemoryBudget, MemoryPool};
use tensor_core::{ElementKind, Shape, Tensor};

pub fn execute(
    dims: &[usize],
    kind: ElementKind,
    value: f64,
    budget: MemoryBudget,
) -> anyhow::Result<()> {
    let pool = MemoryPool::new(budget);
    tracing::info!(%budget, "memory pool created");

    let mut tensor = Tensor::create(&pool, dims, kind).with_context(|| {
        format!("cannot allocate {kind} tensor of shape {}", Shape::from(dims))
    })?;
    tensor.fill(value);
    let total = tensor.sum();

    println!("  Shape:    {}", tensor.shape());
    println!("  Strides:  {:?}", tensor.strides());
    println!("  Kind:     {kind}");
    println!("  Elements: {}", tensor.num_elements());
    println!("  Bytes:    {}", tensor.size_bytes());
    println!("  Fill:     {value}");
    println!("  Sum:      {total}");

    tensor.release(&pool);
    debug_assert_eq!(pool.allocated_bytes(), 0);
    println!("  {}", pool.stats().summary());
    Ok(())
}
