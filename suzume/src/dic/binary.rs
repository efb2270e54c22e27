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

//! Compiled binary dictionary: header, double-array trie, fixed-size entry
//! records and a string pool, loaded whole into an owned buffer.

use std::io::Write;
use std::path::Path;

use nom::bytes::complete::take;
use nom::number::complete::{le_i16, le_u16, le_u32, le_u8};
use nom::sequence::tuple;

use super::header::DictionaryHeader;
use super::trie::DoubleArray;
use super::{DictionaryEntry, EntryFlags};
use crate::error::{SuzumeError, SuzumeResult};
use crate::pos::{ConjugationType, PartOfSpeech};

/// Size of one packed entry record
pub const ENTRY_RECORD_SIZE: usize = 20;

/// Read-only compiled dictionary
#[derive(Debug)]
pub struct BinaryDictionary {
    header: DictionaryHeader,
    trie: DoubleArray,
    entries: Vec<DictionaryEntry>,
}

impl BinaryDictionary {
    /// Load from a file, reading the entire contents into memory
    pub fn from_file<P: AsRef<Path>>(path: P) -> SuzumeResult<BinaryDictionary> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| read_error(e, path))?;
        BinaryDictionary::from_bytes(&data)
            .map_err(|e| e.with_context(path.display().to_string()))
    }

    /// Load from a caller-provided image
    pub fn from_bytes(data: &[u8]) -> SuzumeResult<BinaryDictionary> {
        let header = DictionaryHeader::parse(data)?;
        header.validate_regions(data.len())?;

        let trie_region =
            &data[header.trie_offset as usize..(header.trie_offset + header.trie_size) as usize];
        let trie = DoubleArray::deserialize(trie_region)?;

        let string_pool = &data[header.string_offset as usize..];
        let mut entries = Vec::with_capacity(header.entry_count as usize);
        for i in 0..header.entry_count as usize {
            let off = header.entry_offset as usize + i * ENTRY_RECORD_SIZE;
            let record = &data[off..off + ENTRY_RECORD_SIZE];
            entries.push(decode_entry(record, string_pool)?);
        }

        Ok(BinaryDictionary {
            header,
            trie,
            entries,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn header(&self) -> &DictionaryHeader {
        &self.header
    }

    pub fn entry(&self, id: u32) -> Option<&DictionaryEntry> {
        self.entries.get(id as usize)
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Common-prefix lookup; returns `(entry, byte_len)` pairs
    pub fn lookup(&self, text: &str, byte_start: usize) -> Vec<(&DictionaryEntry, usize)> {
        self.trie
            .common_prefix_search(text.as_bytes(), byte_start)
            .into_iter()
            .filter_map(|m| self.entries.get(m.value as usize).map(|e| (e, m.byte_len)))
            .collect()
    }
}

/// Decode one 20-byte record against the string pool
fn decode_entry(record: &[u8], string_pool: &[u8]) -> SuzumeResult<DictionaryEntry> {
    let mut parser = tuple((le_u32, le_u16, le_u8, le_u8, le_u32, le_u16, le_i16, le_u8, take(3usize)));
    let (_rest, (surface_offset, surface_length, pos, conj_type, lemma_offset, lemma_length, cost, flags, _reserved)) =
        parser(record).map_err(|_: nom::Err<nom::error::Error<&[u8]>>| {
            SuzumeError::InvalidInput("truncated entry record".to_string())
        })?;

    let surface = pool_str(string_pool, surface_offset, surface_length)?;
    // lemma_length 0 means the lemma equals the surface
    let lemma = if lemma_length > 0 {
        pool_str(string_pool, lemma_offset, lemma_length)?
    } else {
        surface.clone()
    };

    Ok(DictionaryEntry {
        surface,
        lemma,
        reading: String::new(),
        pos: PartOfSpeech::from_u8(pos),
        cost: cost as f32 / 100.0,
        conj_type: ConjugationType::from_u8(conj_type),
        flags: EntryFlags::from_bits_truncate(flags),
    })
}

/// An unopenable file is FileNotFound; any other read failure keeps its IO
/// cause with the path as context
pub(crate) fn read_error(e: std::io::Error, path: &Path) -> SuzumeError {
    if e.kind() == std::io::ErrorKind::NotFound {
        SuzumeError::FileNotFound(path.display().to_string())
    } else {
        SuzumeError::from(e).with_context(path.display().to_string())
    }
}

fn pool_str(pool: &[u8], offset: u32, length: u16) -> SuzumeResult<String> {
    let start = offset as usize;
    let end = start + length as usize;
    if end > pool.len() {
        return Err(SuzumeError::InvalidInput(
            "string pool reference out of bounds".to_string(),
        ));
    }
    std::str::from_utf8(&pool[start..end])
        .map(|s| s.to_string())
        .map_err(|_| SuzumeError::InvalidUtf8)
}

/// Builds the binary image from entries; used by the dictionary compiler
#[derive(Default)]
pub struct BinaryDictWriter {
    entries: Vec<DictionaryEntry>,
}

impl BinaryDictWriter {
    pub fn new() -> BinaryDictWriter {
        BinaryDictWriter::default()
    }

    pub fn add_entry(&mut self, entry: DictionaryEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sort, build string pool and trie, emit the full image
    pub fn build(&mut self) -> SuzumeResult<Vec<u8>> {
        if self.entries.is_empty() {
            return Err(SuzumeError::InvalidInput(
                "no entries to write".to_string(),
            ));
        }

        self.entries.sort_by(|a, b| a.surface.cmp(&b.surface));
        // the trie requires strictly ascending keys
        self.entries.dedup_by(|a, b| a.surface == b.surface);

        let mut string_pool: Vec<u8> = Vec::new();
        let mut records: Vec<u8> = Vec::with_capacity(self.entries.len() * ENTRY_RECORD_SIZE);

        for entry in &self.entries {
            let surface_offset = string_pool.len() as u32;
            let surface_length = entry.surface.len() as u16;
            string_pool.extend_from_slice(entry.surface.as_bytes());

            let (lemma_offset, lemma_length) =
                if !entry.lemma.is_empty() && entry.lemma != entry.surface {
                    let off = string_pool.len() as u32;
                    string_pool.extend_from_slice(entry.lemma.as_bytes());
                    (off, entry.lemma.len() as u16)
                } else {
                    (0u32, 0u16)
                };

            records.extend_from_slice(&surface_offset.to_le_bytes());
            records.extend_from_slice(&surface_length.to_le_bytes());
            records.push(entry.pos as u8);
            records.push(entry.conj_type as u8);
            records.extend_from_slice(&lemma_offset.to_le_bytes());
            records.extend_from_slice(&lemma_length.to_le_bytes());
            records.extend_from_slice(&((entry.cost * 100.0) as i16).to_le_bytes());
            records.push(entry.flags.bits());
            records.extend_from_slice(&[0u8; 3]);
        }

        let keys: Vec<&[u8]> = self.entries.iter().map(|e| e.surface.as_bytes()).collect();
        let values: Vec<u32> = (0..self.entries.len() as u32).collect();
        let trie = DoubleArray::build(&keys, &values)?;
        let trie_bytes = trie.serialize();

        let header = DictionaryHeader::new(self.entries.len() as u32, trie_bytes.len() as u32);

        let mut output = Vec::with_capacity(
            DictionaryHeader::STORAGE_SIZE + trie_bytes.len() + records.len() + string_pool.len(),
        );
        header.write_to(&mut output)?;
        output.write_all(&trie_bytes)?;
        output.write_all(&records)?;
        output.write_all(&string_pool)?;
        Ok(output)
    }

    pub fn write_to_file<P: AsRef<Path>>(&mut self, path: P) -> SuzumeResult<usize> {
        let data = self.build()?;
        std::fs::write(path, &data)?;
        Ok(data.len())
    }
}
