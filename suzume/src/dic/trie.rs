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

//! Double-array trie with XOR addressing.
//!
//! Each cell is a node. Transition from node `n` on byte `b` targets
//! `base(n) ^ b` and is valid iff `check[target] == n`. A NUL (0) child
//! holds the payload with the high bit of `base_or_value` set. Cell 0 is
//! the root and is never a child; empty cells are all-zero.

use crate::error::{SuzumeError, SuzumeResult};

const INITIAL_SIZE: usize = 8192;
const BLOCK_SIZE: usize = 256;
const MAX_SIZE: usize = 1 << 24;

const LEAF_BIT: u32 = 0x8000_0000;
const VALUE_MASK: u32 = 0x7FFF_FFFF;

const SERIAL_MAGIC: &[u8; 4] = b"DA02";

/// One unit of the double array: `base` for internal cells, payload value
/// (high bit set) for leaf cells
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct Unit {
    base_or_value: u32,
    check: u32,
}

impl Unit {
    #[inline]
    fn is_leaf(&self) -> bool {
        self.base_or_value & LEAF_BIT != 0
    }

    #[inline]
    fn base(&self) -> usize {
        (self.base_or_value & VALUE_MASK) as usize
    }

    #[inline]
    fn value(&self) -> u32 {
        self.base_or_value & VALUE_MASK
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.base_or_value == 0 && self.check == 0
    }
}

/// One hit of a common prefix search
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrefixMatch {
    pub value: u32,
    /// Match length in bytes from the search start
    pub byte_len: usize,
}

/// Double-array trie
#[derive(Default, Debug)]
pub struct DoubleArray {
    units: Vec<Unit>,
}

struct BuildState {
    units: Vec<Unit>,
    used: Vec<bool>,
    next_check_pos: usize,
}

impl BuildState {
    fn resize(&mut self, new_size: usize) {
        self.units.resize(new_size, Unit::default());
        self.used.resize(new_size, false);
    }

    /// Search for a base such that every child slot `base ^ c` is free.
    /// The scan is bounded by the current length extended by one block.
    fn find_base(&mut self, children: &[u8]) -> usize {
        let first_child = children[0] as usize;
        let start = self.next_check_pos.max(first_child);
        for base in start..self.units.len() + BLOCK_SIZE {
            let ok = children.iter().all(|&c| {
                let pos = base ^ c as usize;
                pos >= self.used.len() || !self.used[pos]
            });
            if ok {
                return base;
            }
        }
        self.units.len()
    }
}

impl DoubleArray {
    /// Build from keys sorted lexicographically, strictly ascending, with a
    /// payload value per key. Values must fit in 31 bits.
    pub fn build(keys: &[&[u8]], values: &[u32]) -> SuzumeResult<DoubleArray> {
        if keys.len() != values.len() {
            return Err(SuzumeError::InternalError(
                "trie build: key/value length mismatch".to_string(),
            ));
        }
        if keys.is_empty() {
            return Ok(DoubleArray::default());
        }
        for w in keys.windows(2) {
            if w[1] <= w[0] {
                return Err(SuzumeError::InternalError(
                    "trie build: keys must be sorted and unique".to_string(),
                ));
            }
        }
        if let Some(&v) = values.iter().find(|&&v| v > VALUE_MASK) {
            return Err(SuzumeError::InternalError(format!(
                "trie build: value {} exceeds 31 bits",
                v
            )));
        }

        let mut state = BuildState {
            units: vec![Unit::default(); INITIAL_SIZE],
            used: vec![false; INITIAL_SIZE],
            next_check_pos: 0,
        };
        state.used[0] = true;

        build_node(&mut state, keys, values, 0, keys.len(), 0, 0)?;

        // shrink to the last used cell
        let last = state
            .units
            .iter()
            .rposition(|u| !u.is_empty())
            .map(|i| i + 1)
            .unwrap_or(0);
        state.units.truncate(last);

        Ok(DoubleArray { units: state.units })
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Number of units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Value of the exact key, if present
    pub fn exact_match(&self, key: &[u8]) -> Option<u32> {
        if self.units.is_empty() {
            return None;
        }
        let mut node = 0usize;
        for &b in key {
            node = self.transition(node, b)?;
        }
        let leaf = self.units[node].base() ^ 0;
        if leaf < self.units.len() && self.units[leaf].check as usize == node {
            let unit = self.units[leaf];
            if unit.is_leaf() {
                return Some(unit.value());
            }
        }
        None
    }

    /// Enumerate every key that is a prefix of `text[start..]`, walking
    /// byte-by-byte from the root
    pub fn common_prefix_search(&self, text: &[u8], start: usize) -> Vec<PrefixMatch> {
        let mut results = Vec::new();
        if self.units.is_empty() || start >= text.len() {
            return results;
        }

        let mut node = 0usize;
        for i in start..=text.len() {
            // NUL child first: emit a hit for the prefix consumed so far
            let leaf = self.units[node].base() ^ 0;
            if leaf < self.units.len() && self.units[leaf].check as usize == node {
                let unit = self.units[leaf];
                if unit.is_leaf() && i > start {
                    results.push(PrefixMatch {
                        value: unit.value(),
                        byte_len: i - start,
                    });
                }
            }
            if i >= text.len() {
                break;
            }
            match self.transition(node, text[i]) {
                Some(next) => node = next,
                None => break,
            }
        }
        results
    }

    #[inline]
    fn transition(&self, node: usize, byte: u8) -> Option<usize> {
        let child = self.units[node].base() ^ byte as usize;
        if child >= self.units.len() {
            return None;
        }
        let unit = self.units[child];
        // the check test alone cannot reject empty cells under the root
        if unit.check as usize != node || unit.is_empty() {
            return None;
        }
        Some(child)
    }

    /// Serialize as `DA02` + unit count + unit array
    pub fn serialize(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(8 + self.units.len() * 8);
        data.extend_from_slice(SERIAL_MAGIC);
        data.extend_from_slice(&(self.units.len() as u32).to_le_bytes());
        for unit in &self.units {
            data.extend_from_slice(&unit.base_or_value.to_le_bytes());
            data.extend_from_slice(&unit.check.to_le_bytes());
        }
        data
    }

    pub fn deserialize(data: &[u8]) -> SuzumeResult<DoubleArray> {
        if data.len() < 8 || &data[0..4] != SERIAL_MAGIC {
            return Err(SuzumeError::InvalidInput(
                "invalid trie image".to_string(),
            ));
        }
        let count = u32::from_le_bytes([data[4], data[5], data[6], data[7]]) as usize;
        let expected = 8 + count * 8;
        if data.len() < expected {
            return Err(SuzumeError::InvalidInput(
                "truncated trie image".to_string(),
            ));
        }
        let mut units = Vec::with_capacity(count);
        for i in 0..count {
            let off = 8 + i * 8;
            units.push(Unit {
                base_or_value: u32::from_le_bytes([
                    data[off],
                    data[off + 1],
                    data[off + 2],
                    data[off + 3],
                ]),
                check: u32::from_le_bytes([
                    data[off + 4],
                    data[off + 5],
                    data[off + 6],
                    data[off + 7],
                ]),
            });
        }
        Ok(DoubleArray { units })
    }
}

/// Place the children of one node and recurse per distinct next byte.
/// `begin..end` is the key range passing through this node at `depth`.
fn build_node(
    state: &mut BuildState,
    keys: &[&[u8]],
    values: &[u32],
    begin: usize,
    end: usize,
    depth: usize,
    parent: usize,
) -> SuzumeResult<()> {
    if begin >= end {
        return Ok(());
    }

    // keys terminating here become the NUL child
    let mut leaf_end = begin;
    while leaf_end < end && keys[leaf_end].len() == depth {
        leaf_end += 1;
    }

    let mut children: Vec<u8> = Vec::new();
    if leaf_end > begin {
        children.push(0);
    }
    let mut prev = None;
    for key in &keys[leaf_end..end] {
        let b = key[depth];
        if prev != Some(b) {
            children.push(b);
            prev = Some(b);
        }
    }
    if children.is_empty() {
        return Ok(());
    }

    let base = state.find_base(&children);
    let max_pos = children.iter().map(|&c| base ^ c as usize).max().unwrap();
    if max_pos >= MAX_SIZE {
        return Err(SuzumeError::InternalError(
            "trie build: array size limit exceeded".to_string(),
        ));
    }
    if max_pos >= state.units.len() {
        let grown = (max_pos + BLOCK_SIZE).max(state.units.len() * 2);
        state.resize(grown.min(MAX_SIZE));
    }

    state.units[parent].base_or_value = base as u32 & VALUE_MASK;

    // claim every child cell before recursing, so sibling subtrees cannot
    // steal them via find_base
    for &c in &children {
        let pos = base ^ c as usize;
        state.units[pos].check = parent as u32;
        state.used[pos] = true;
    }

    if base >= state.next_check_pos {
        state.next_check_pos = base + 1;
    }

    if leaf_end > begin {
        let pos = base ^ 0;
        state.units[pos].base_or_value = values[begin] | LEAF_BIT;
    }

    let mut range_begin = leaf_end;
    for &c in children.iter().skip(if leaf_end > begin { 1 } else { 0 }) {
        let mut range_end = range_begin;
        while range_end < end && keys[range_end][depth] == c {
            range_end += 1;
        }
        build_node(state, keys, values, range_begin, range_end, depth + 1, base ^ c as usize)?;
        range_begin = range_end;
    }

    Ok(())
}
