/*
 * Copyright (c) 2024 Libraz Team
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! The analysis pipeline: lattice construction, Viterbi search and the
//! top-level analyzer.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub mod analyzer;
pub mod lattice;
pub mod morpheme;
pub mod scorer;
pub mod tokenizer;
pub mod unknown;

/// Analysis mode biasing segmentation granularity
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// No bias
    Normal,
    /// Prefer long dictionary nouns (search indexing)
    Search,
    /// Prefer fine-grained segmentation
    Split,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Normal
    }
}

impl FromStr for Mode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" | "NORMAL" => Ok(Mode::Normal),
            "search" | "SEARCH" => Ok(Mode::Search),
            "split" | "SPLIT" => Ok(Mode::Split),
            _ => Err("mode must be one of \"normal\", \"search\", or \"split\""),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            Mode::Normal => "normal",
            Mode::Search => "search",
            Mode::Split => "split",
        };
        f.write_str(repr)
    }
}
