// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `tensor-rt kinds` command: list the supported element kinds.

use tensor_core::ElementKind;

pub fn execute() -> anyhow::Result<()> {
    println!("  {:<6} {:>5} {:>6} {:>5} {:>7}", "Kind", "Bytes", "Float", "Int", "Signed");
    println!("  {}", "-".repeat(33));
    for kind in ElementKind::ALL {
        println!(
            "  {:<6} {:>5} {:>6} {:>5} {:>7}",
            kind.as_str(),
            kind.byte_size(),
            yes_no(kind.is_float()),
            yes_no(kind.is_int()),
            yes_no(kind.is_signed()),
        );
    }
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "-"
    }
}
