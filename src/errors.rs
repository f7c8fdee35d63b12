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

use std::fmt;

/// The padding error type.
#[derive(Debug, PartialEq, Eq)]
pub enum PadError {
    /// The input binary does not fit within the requested capacity.
    CapacityExceeded { size: usize, limit: usize },
}

impl fmt::Display for PadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PadError::CapacityExceeded { size, limit } => {
                write!(f, "Binary too large: {size} bytes (limit {limit})")
            }
        }
    }
}

impl std::error::Error for PadError {}
