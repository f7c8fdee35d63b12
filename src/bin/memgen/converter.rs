// Copyright 2024, The Horizen Foundation
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use memgen::MemImage;

use crate::utils::out_file;

pub fn generate_mem_file(
    input: &PathBuf,
    output: &PathBuf,
    capacity: usize,
    verbose: bool,
) -> Result<()> {
    if verbose {
        println!("Reading input file: {input:?}");
    }

    let rom = std::fs::read(input).with_context(|| format!("Failed to read file: {input:?}"))?;

    info!("Read {} bytes", rom.len());

    // The capacity check runs before the output file is touched, so a
    // failed conversion never truncates an existing memory file.
    let image = MemImage::from_rom(rom, capacity)?;

    info!("Padded to {} lines", image.capacity());

    if verbose {
        println!("Writing output file: {output:?}");
    }

    let mut w = BufWriter::new(out_file(output)?);
    image
        .write_hex_lines(&mut w)
        .and_then(|()| w.flush())
        .with_context(|| format!("Failed to write output file: {output:?}"))?;

    println!(
        "Wrote {output:?} ({} bytes, padded to {capacity} lines)",
        image.capacity()
    );

    Ok(())
}
