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

//! Builds line-oriented hex memory files from raw ROM binaries.
//!
//! A memory file holds one two-digit lowercase hex value per line, one line
//! per byte of a fixed-size memory array, in the format consumed by Verilog
//! `$readmemh` and similar ROM loaders. Space past the end of the binary is
//! filled with [`FILL_BYTE`].

pub mod errors;
mod image;

pub use image::MemImage;

/// Fill value for every byte past the end of the input binary.
pub const FILL_BYTE: u8 = 0xff;
