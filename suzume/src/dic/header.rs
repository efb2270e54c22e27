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

use nom::number::complete::{le_u16, le_u32};
use nom::sequence::tuple;
use std::io::Write;
use thiserror::Error;

/// Binary dictionary header errors
#[derive(Error, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum HeaderError {
    #[error("Invalid dictionary magic number")]
    InvalidMagic,

    #[error("Unsupported dictionary version {0}.{1}")]
    UnsupportedVersion(u16, u16),

    #[error("Dictionary file too small")]
    TooSmall,

    #[error("Dictionary region out of bounds")]
    RegionOutOfBounds,
}

/// On-disk header of a compiled dictionary.
///
/// Fixed 36-byte little-endian layout; `flags` and `checksum` are reserved
/// and written as zero.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DictionaryHeader {
    pub entry_count: u32,
    pub trie_offset: u32,
    pub trie_size: u32,
    pub entry_offset: u32,
    pub string_offset: u32,
    pub flags: u32,
    pub checksum: u32,
}

impl DictionaryHeader {
    /// "SZMD" little-endian
    pub const MAGIC: u32 = 0x444D_5A53;
    pub const VERSION_MAJOR: u16 = 1;
    pub const VERSION_MINOR: u16 = 0;
    pub const STORAGE_SIZE: usize = 36;

    pub fn new(entry_count: u32, trie_size: u32) -> DictionaryHeader {
        let trie_offset = DictionaryHeader::STORAGE_SIZE as u32;
        let entry_offset = trie_offset + trie_size;
        let string_offset = entry_offset + entry_count * super::binary::ENTRY_RECORD_SIZE as u32;
        DictionaryHeader {
            entry_count,
            trie_offset,
            trie_size,
            entry_offset,
            string_offset,
            flags: 0,
            checksum: 0,
        }
    }

    /// Parse and validate a header from the start of a dictionary image
    pub fn parse(bytes: &[u8]) -> Result<DictionaryHeader, HeaderError> {
        if bytes.len() < DictionaryHeader::STORAGE_SIZE {
            return Err(HeaderError::TooSmall);
        }
        let mut parser = tuple((
            le_u32, le_u16, le_u16, le_u32, le_u32, le_u32, le_u32, le_u32, le_u32, le_u32,
        ));
        let (_rest, (magic, major, minor, entry_count, trie_offset, trie_size, entry_offset, string_offset, flags, checksum)) =
            parser(bytes).map_err(|_: nom::Err<nom::error::Error<&[u8]>>| HeaderError::TooSmall)?;

        if magic != DictionaryHeader::MAGIC {
            return Err(HeaderError::InvalidMagic);
        }
        if major != DictionaryHeader::VERSION_MAJOR {
            return Err(HeaderError::UnsupportedVersion(major, minor));
        }

        Ok(DictionaryHeader {
            entry_count,
            trie_offset,
            trie_size,
            entry_offset,
            string_offset,
            flags,
            checksum,
        })
    }

    /// Check that every region the header points at lies inside the buffer
    pub fn validate_regions(&self, total_len: usize) -> Result<(), HeaderError> {
        let trie_end = self.trie_offset as usize + self.trie_size as usize;
        let entry_end = self.entry_offset as usize
            + self.entry_count as usize * super::binary::ENTRY_RECORD_SIZE;
        if trie_end > total_len || entry_end > total_len || self.string_offset as usize > total_len
        {
            return Err(HeaderError::RegionOutOfBounds);
        }
        Ok(())
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<usize> {
        w.write_all(&DictionaryHeader::MAGIC.to_le_bytes())?;
        w.write_all(&DictionaryHeader::VERSION_MAJOR.to_le_bytes())?;
        w.write_all(&DictionaryHeader::VERSION_MINOR.to_le_bytes())?;
        w.write_all(&self.entry_count.to_le_bytes())?;
        w.write_all(&self.trie_offset.to_le_bytes())?;
        w.write_all(&self.trie_size.to_le_bytes())?;
        w.write_all(&self.entry_offset.to_le_bytes())?;
        w.write_all(&self.string_offset.to_le_bytes())?;
        w.write_all(&self.flags.to_le_bytes())?;
        w.write_all(&self.checksum.to_le_bytes())?;
        Ok(DictionaryHeader::STORAGE_SIZE)
    }
}
