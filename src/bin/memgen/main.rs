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

use anyhow::Result;
use clap::Parser;

mod cli;
mod converter;
mod errors;
mod utils;

fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Cli::parse();

    if args.verbose {
        println!("Running in verbose mode");
    }

    converter::generate_mem_file(&args.input, &args.output, args.capacity, args.verbose)
}
