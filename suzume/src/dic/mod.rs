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

//! Dictionary model: entries, the compiled binary dictionary, runtime user
//! dictionaries, the built-in lexicon, and the manager that stacks them.

use std::sync::Arc;

use bitflags::bitflags;

use crate::pos::{ConjugationType, PartOfSpeech};

pub mod binary;
pub mod compiler;
pub mod header;
pub mod lexicon;
pub mod trie;
pub mod user_dict;

bitflags! {
    /// Entry flag byte as persisted in the binary record
    #[derive(Default)]
    pub struct EntryFlags: u8 {
        /// 形式名詞 — semantically weak noun, excluded from tags
        const FORMAL_NOUN = 0x01;
        /// Word carrying little information, excluded from tags
        const LOW_INFO = 0x02;
        /// Productive prefix (お, ご, 不, ...) joinable onto a following noun
        const PREFIX = 0x04;
    }
}

/// A single dictionary entry. Constructed once at load time, immutable
/// thereafter; interned per dictionary and addressed by `u32` id.
#[derive(Clone, Debug, PartialEq)]
pub struct DictionaryEntry {
    pub surface: String,
    pub lemma: String,
    pub reading: String,
    pub pos: PartOfSpeech,
    pub cost: f32,
    pub conj_type: ConjugationType,
    pub flags: EntryFlags,
}

impl DictionaryEntry {
    pub fn new<S: Into<String>>(surface: S, pos: PartOfSpeech, cost: f32) -> DictionaryEntry {
        let surface = surface.into();
        DictionaryEntry {
            lemma: surface.clone(),
            reading: String::new(),
            surface,
            pos,
            cost,
            conj_type: ConjugationType::None,
            flags: EntryFlags::empty(),
        }
    }

    pub fn with_conj(mut self, conj_type: ConjugationType) -> DictionaryEntry {
        self.conj_type = conj_type;
        self
    }

    pub fn with_lemma<S: Into<String>>(mut self, lemma: S) -> DictionaryEntry {
        self.lemma = lemma.into();
        self
    }

    pub fn with_reading<S: Into<String>>(mut self, reading: S) -> DictionaryEntry {
        self.reading = reading.into();
        self
    }

    pub fn with_flags(mut self, flags: EntryFlags) -> DictionaryEntry {
        self.flags = flags;
        self
    }

    pub fn is_formal_noun(&self) -> bool {
        self.flags.contains(EntryFlags::FORMAL_NOUN)
    }

    pub fn is_low_info(&self) -> bool {
        self.flags.contains(EntryFlags::LOW_INFO)
    }

    pub fn is_prefix(&self) -> bool {
        self.flags.contains(EntryFlags::PREFIX)
    }
}

/// Which stacked source produced a lookup hit
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DictionarySource {
    Hardcoded,
    Core,
    User,
}

/// One common-prefix hit resolved to its entry
#[derive(Clone, Copy, Debug)]
pub struct LookupHit<'a> {
    pub entry: &'a DictionaryEntry,
    pub byte_len: usize,
    pub source: DictionarySource,
}

/// Ordered stack of dictionary sources: the built-in lexicon is always
/// present, then an optional core dictionary, then user dictionaries in
/// load order. Lookups return the union of hits from every source.
///
/// User dictionaries are shared (`Arc`), so one dictionary may be
/// registered with several analyzers. Adding a dictionary while another
/// analysis is running on the same analyzer is not supported.
pub struct DictionaryManager {
    core: Option<Arc<binary::BinaryDictionary>>,
    users: Vec<Arc<user_dict::UserDictionary>>,
}

impl Default for DictionaryManager {
    fn default() -> Self {
        DictionaryManager {
            core: None,
            users: Vec::new(),
        }
    }
}

impl DictionaryManager {
    pub fn new() -> DictionaryManager {
        DictionaryManager::default()
    }

    pub fn set_core_dictionary(&mut self, dict: Arc<binary::BinaryDictionary>) {
        self.core = Some(dict);
    }

    pub fn has_core_dictionary(&self) -> bool {
        self.core.is_some()
    }

    pub fn add_user_dictionary(&mut self, dict: Arc<user_dict::UserDictionary>) {
        self.users.push(dict);
    }

    pub fn user_dictionary_count(&self) -> usize {
        self.users.len()
    }

    /// Union of common-prefix hits from every source at `byte_start`
    pub fn lookup<'a>(&'a self, text: &str, byte_start: usize) -> Vec<LookupHit<'a>> {
        let mut hits = Vec::new();
        for hit in lexicon::lexicon().lookup(text, byte_start) {
            hits.push(LookupHit {
                entry: hit.0,
                byte_len: hit.1,
                source: DictionarySource::Hardcoded,
            });
        }
        if let Some(core) = &self.core {
            for hit in core.lookup(text, byte_start) {
                hits.push(LookupHit {
                    entry: hit.0,
                    byte_len: hit.1,
                    source: DictionarySource::Core,
                });
            }
        }
        for user in &self.users {
            for hit in user.lookup(text, byte_start) {
                hits.push(LookupHit {
                    entry: hit.0,
                    byte_len: hit.1,
                    source: DictionarySource::User,
                });
            }
        }
        hits
    }

    /// Entries whose surface equals `surface` exactly, across all sources.
    /// Used by lemma verification.
    pub fn find_exact<'a>(&'a self, surface: &str) -> Vec<&'a DictionaryEntry> {
        self.lookup(surface, 0)
            .into_iter()
            .filter(|h| h.byte_len == surface.len())
            .map(|h| h.entry)
            .collect()
    }

    /// True when `surface` is a dictionary base form of a verb or adjective
    /// with the given conjugation type (None matches any)
    pub fn verifies_base_form(&self, surface: &str, conj_type: ConjugationType) -> bool {
        self.find_exact(surface).iter().any(|e| {
            (e.pos == PartOfSpeech::Verb || e.pos == PartOfSpeech::Adjective)
                && (conj_type == ConjugationType::None || e.conj_type == conj_type)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_flags_round_trip_bits() {
        let flags = EntryFlags::FORMAL_NOUN | EntryFlags::PREFIX;
        assert_eq!(flags.bits(), 0x05);
        assert_eq!(EntryFlags::from_bits_truncate(0x05), flags);
    }

    #[test]
    fn manager_always_has_lexicon() {
        let manager = DictionaryManager::new();
        let hits = manager.lookup("は", 0);
        assert!(hits
            .iter()
            .any(|h| h.entry.pos == PartOfSpeech::Particle && h.source == DictionarySource::Hardcoded));
    }

    #[test]
    fn user_dictionary_stacks() {
        let mut manager = DictionaryManager::new();
        let mut dict = user_dict::UserDictionary::new();
        dict.add_entry(DictionaryEntry::new("テスト語", PartOfSpeech::Noun, 0.2));
        manager.add_user_dictionary(Arc::new(dict));

        let hits = manager.lookup("テスト語です", 0);
        assert!(hits
            .iter()
            .any(|h| h.source == DictionarySource::User && h.entry.surface == "テスト語"));
    }

    #[test]
    fn verifies_base_form_checks_conj_type() {
        let manager = DictionaryManager::new();
        // 呼ぶ is a godan-ba essential verb in the lexicon
        assert!(manager.verifies_base_form("呼ぶ", ConjugationType::GodanBa));
        assert!(manager.verifies_base_form("呼ぶ", ConjugationType::None));
        assert!(!manager.verifies_base_form("呼ぶ", ConjugationType::Ichidan));
        assert!(!manager.verifies_base_form("ねこねこ", ConjugationType::None));
    }
}
