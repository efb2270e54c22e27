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

//! Runtime-loaded user dictionary.
//!
//! The lenient TSV/CSV reader: `#` starts a comment, the delimiter is
//! detected per line (tab wins over comma), malformed fields fall back to
//! defaults instead of failing the whole load. The strict variant used by
//! the compiler lives in [`crate::dic::compiler`].

use std::path::Path;

use super::DictionaryEntry;
use crate::error::{SuzumeError, SuzumeResult};
use crate::pos::{ConjugationType, PartOfSpeech};

/// Adjacency-list trie. Slower than the double array but supports
/// incremental insertion; fine for the small entry counts of user
/// dictionaries and the built-in lexicon.
#[derive(Default, Debug)]
pub(crate) struct NodeTrie {
    nodes: Vec<TrieNode>,
}

#[derive(Default, Debug)]
struct TrieNode {
    children: Vec<(u8, u32)>,
    entry_ids: Vec<u32>,
}

impl NodeTrie {
    pub fn new() -> NodeTrie {
        NodeTrie {
            nodes: vec![TrieNode::default()],
        }
    }

    pub fn insert(&mut self, key: &[u8], entry_id: u32) {
        let mut node = 0usize;
        for &b in key {
            node = match self.nodes[node].children.iter().find(|(c, _)| *c == b) {
                Some(&(_, next)) => next as usize,
                None => {
                    let next = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.push((b, next));
                    next as usize
                }
            };
        }
        self.nodes[node].entry_ids.push(entry_id);
    }

    /// Entry ids of every key that prefixes `text[start..]`, with byte
    /// lengths, shortest first
    pub fn common_prefix_search(&self, text: &[u8], start: usize) -> Vec<(u32, usize)> {
        let mut results = Vec::new();
        let mut node = 0usize;
        for (i, &b) in text[start..].iter().enumerate() {
            node = match self.nodes[node].children.iter().find(|(c, _)| *c == b) {
                Some(&(_, next)) => next as usize,
                None => return results,
            };
            for &id in &self.nodes[node].entry_ids {
                results.push((id, i + 1));
            }
        }
        results
    }
}

/// User dictionary: entries in insertion order plus a node trie index
#[derive(Default, Debug)]
pub struct UserDictionary {
    entries: Vec<DictionaryEntry>,
    trie: NodeTrie,
}

impl UserDictionary {
    pub fn new() -> UserDictionary {
        UserDictionary {
            entries: Vec::new(),
            trie: NodeTrie::new(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> SuzumeResult<UserDictionary> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| super::binary::read_error(e, path))?;
        let content = std::str::from_utf8(&data)
            .map_err(|_| SuzumeError::InvalidUtf8.with_context(path.display().to_string()))?;
        UserDictionary::from_str_content(content)
    }

    pub fn from_str_content(content: &str) -> SuzumeResult<UserDictionary> {
        let mut dict = UserDictionary::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(entry) = parse_line(line) {
                dict.add_entry(entry);
            }
        }
        Ok(dict)
    }

    pub fn add_entry(&mut self, entry: DictionaryEntry) {
        let id = self.entries.len() as u32;
        self.trie.insert(entry.surface.as_bytes(), id);
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, id: u32) -> Option<&DictionaryEntry> {
        self.entries.get(id as usize)
    }

    pub fn lookup(&self, text: &str, byte_start: usize) -> Vec<(&DictionaryEntry, usize)> {
        self.trie
            .common_prefix_search(text.as_bytes(), byte_start)
            .into_iter()
            .filter_map(|(id, len)| self.entries.get(id as usize).map(|e| (e, len)))
            .collect()
    }
}

/// Parse one data line. TSV: surface, pos, reading, cost, conj_type.
/// CSV: surface, pos, cost, lemma. Returns None for lines without the
/// two required fields.
fn parse_line(line: &str) -> Option<DictionaryEntry> {
    let is_tsv = line.contains('\t');
    let delimiter = if is_tsv { '\t' } else { ',' };
    let fields: Vec<&str> = line.split(delimiter).map(|f| f.trim()).collect();

    if fields.len() < 2 || fields[0].is_empty() {
        return None;
    }

    let surface = fields[0];
    let pos: PartOfSpeech = fields[1].parse().ok()?;
    let mut entry = DictionaryEntry::new(surface, pos, 0.5);

    if is_tsv {
        if let Some(reading) = fields.get(2).filter(|r| !r.is_empty()) {
            entry.reading = reading.to_string();
        }
        entry.cost = parse_cost(fields.get(3).copied());
        if let Some(conj) = fields.get(4) {
            entry.conj_type = conj.parse().unwrap_or(ConjugationType::None);
        }
    } else {
        entry.cost = parse_cost(fields.get(2).copied());
        if let Some(lemma) = fields.get(3).filter(|l| !l.is_empty()) {
            entry.lemma = lemma.to_string();
        }
    }

    Some(entry)
}

/// Missing cost defaults to 0.5; an unparseable cost falls back to 1.0
fn parse_cost(field: Option<&str>) -> f32 {
    match field {
        None => 0.5,
        Some("") => 0.5,
        Some(s) => s.parse().unwrap_or(1.0),
    }
}
