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

//! Built-in lexicon of closed-class words: particles, auxiliaries,
//! pronouns, essential verbs, adjectives and friends. Built once at first
//! use and immutable afterwards; always the first dictionary source.

use lazy_static::lazy_static;

use super::user_dict::NodeTrie;
use super::{DictionaryEntry, EntryFlags};
use crate::pos::{ConjugationType, PartOfSpeech};

mod adjectives;
mod misc;
mod nouns;
mod particles;
mod verbs;

// Per-class authored costs. These are the calibrated constants the scorer
// tests rely on; change them only together with the tests.
const COST_PARTICLE: f32 = 0.3;
const COST_COMPOUND_PARTICLE: f32 = 0.35;
const COST_AUXILIARY: f32 = 0.4;
const COST_GREETING: f32 = 0.35;
const COST_PRONOUN: f32 = 0.5;
const COST_DETERMINER: f32 = 0.5;
const COST_CONJUNCTION: f32 = 0.5;
const COST_VERB: f32 = 0.5;
const COST_ADJECTIVE: f32 = 0.55;
const COST_ADVERB: f32 = 0.55;
const COST_TIME_NOUN: f32 = 0.55;
const COST_FORMAL_NOUN: f32 = 0.6;
const COST_LOW_INFO: f32 = 0.5;
const COST_COMMON_NOUN: f32 = 0.6;
const COST_PREFIX: f32 = 0.5;

/// The immutable built-in lexicon
pub struct Lexicon {
    entries: Vec<DictionaryEntry>,
    trie: NodeTrie,
}

impl Lexicon {
    fn build() -> Lexicon {
        let mut entries = Vec::new();

        for &surface in particles::PARTICLES {
            entries.push(DictionaryEntry::new(surface, PartOfSpeech::Particle, COST_PARTICLE));
        }
        for &surface in particles::COMPOUND_PARTICLES {
            entries.push(DictionaryEntry::new(
                surface,
                PartOfSpeech::Particle,
                COST_COMPOUND_PARTICLE,
            ));
        }
        for &surface in misc::AUXILIARIES {
            entries.push(DictionaryEntry::new(surface, PartOfSpeech::Auxiliary, COST_AUXILIARY));
        }
        for &(surface, reading) in misc::GREETINGS {
            entries.push(
                DictionaryEntry::new(surface, PartOfSpeech::Noun, COST_GREETING)
                    .with_reading(reading),
            );
        }
        for &(surface, reading) in misc::PRONOUNS {
            entries.push(
                DictionaryEntry::new(surface, PartOfSpeech::Pronoun, COST_PRONOUN)
                    .with_reading(reading),
            );
        }
        for &surface in misc::DETERMINERS {
            entries.push(DictionaryEntry::new(
                surface,
                PartOfSpeech::Determiner,
                COST_DETERMINER,
            ));
        }
        for &surface in misc::CONJUNCTIONS {
            entries.push(DictionaryEntry::new(
                surface,
                PartOfSpeech::Conjunction,
                COST_CONJUNCTION,
            ));
        }
        for &(surface, reading) in misc::ADVERBS {
            entries.push(
                DictionaryEntry::new(surface, PartOfSpeech::Adverb, COST_ADVERB)
                    .with_reading(reading),
            );
        }
        for &surface in misc::PREFIXES {
            entries.push(
                DictionaryEntry::new(surface, PartOfSpeech::Noun, COST_PREFIX)
                    .with_flags(EntryFlags::PREFIX),
            );
        }
        for &(surface, reading, conj) in verbs::ESSENTIAL_VERBS {
            entries.push(
                DictionaryEntry::new(surface, PartOfSpeech::Verb, COST_VERB)
                    .with_reading(reading)
                    .with_conj(conj),
            );
        }
        for &(surface, reading) in adjectives::I_ADJECTIVES {
            entries.push(
                DictionaryEntry::new(surface, PartOfSpeech::Adjective, COST_ADJECTIVE)
                    .with_reading(reading)
                    .with_conj(ConjugationType::IAdjective),
            );
        }
        for &(surface, reading) in adjectives::NA_ADJECTIVES {
            entries.push(
                DictionaryEntry::new(surface, PartOfSpeech::Adjective, COST_ADJECTIVE)
                    .with_reading(reading)
                    .with_conj(ConjugationType::NaAdjective),
            );
        }
        for &surface in nouns::FORMAL_NOUNS {
            entries.push(
                DictionaryEntry::new(surface, PartOfSpeech::Noun, COST_FORMAL_NOUN)
                    .with_flags(EntryFlags::FORMAL_NOUN),
            );
        }
        for &(surface, reading) in nouns::TIME_NOUNS {
            entries.push(
                DictionaryEntry::new(surface, PartOfSpeech::Noun, COST_TIME_NOUN)
                    .with_reading(reading),
            );
        }
        for &surface in nouns::LOW_INFO {
            entries.push(
                DictionaryEntry::new(surface, PartOfSpeech::Noun, COST_LOW_INFO)
                    .with_flags(EntryFlags::LOW_INFO),
            );
        }
        for &(surface, reading) in nouns::COMMON_NOUNS {
            entries.push(
                DictionaryEntry::new(surface, PartOfSpeech::Noun, COST_COMMON_NOUN)
                    .with_reading(reading),
            );
        }

        let mut trie = NodeTrie::new();
        for (id, entry) in entries.iter().enumerate() {
            trie.insert(entry.surface.as_bytes(), id as u32);
        }

        Lexicon { entries, trie }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, text: &str, byte_start: usize) -> Vec<(&DictionaryEntry, usize)> {
        self.trie
            .common_prefix_search(text.as_bytes(), byte_start)
            .into_iter()
            .filter_map(|(id, len)| self.entries.get(id as usize).map(|e| (e, len)))
            .collect()
    }
}

lazy_static! {
    static ref LEXICON: Lexicon = Lexicon::build();
}

/// The process-wide built-in lexicon
pub fn lexicon() -> &'static Lexicon {
    &LEXICON
}
