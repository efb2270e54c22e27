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

//! Lattice construction for one open segment: dictionary edges from every
//! stacked source, grammar (inflection) edges, unknown fallback edges, and
//! the derived prefix-join / 〜的 edges.

use std::collections::HashMap;

use super::lattice::{EdgeSource, EdgeSpec, Lattice};
use super::unknown::UnknownWordGenerator;
use crate::chars::is_japanese;
use crate::dic::{DictionaryManager, DictionarySource, EntryFlags};
use crate::grammar::inflection::Inflection;
use crate::grammar::ConjForm;
use crate::pos::{ConjugationType, PartOfSpeech};

/// Longest surface span handed to the inflection analyzer, in characters
const MAX_INFLECTION_SPAN: usize = 16;
/// Candidates below this confidence never become edges
const MIN_GRAMMAR_CONFIDENCE: f32 = 0.45;
/// Grammar edge cost = base + (1 − confidence) × penalty [+ dictionary bonus]
const GRAMMAR_BASE_COST: f32 = 0.7;
const GRAMMAR_CONFIDENCE_PENALTY: f32 = 2.0;
const GRAMMAR_DICT_BONUS: f32 = -0.3;
/// Prefix-joined noun edges cost the noun plus this
const PREFIX_JOIN_EXTRA: f32 = 0.1;
/// Particle edge emitted after 〜的
const TEKI_PARTICLE_COST: f32 = 0.3;

const TEKI: char = '的';

/// Builds the lattice for open segments
pub struct Tokenizer<'a> {
    dict: &'a DictionaryManager,
    inflection: Inflection,
    unknown: UnknownWordGenerator,
}

impl<'a> Tokenizer<'a> {
    pub fn new(
        dict: &'a DictionaryManager,
        inflection: Inflection,
        unknown: UnknownWordGenerator,
    ) -> Tokenizer<'a> {
        Tokenizer {
            dict,
            inflection,
            unknown,
        }
    }

    /// Enumerate every candidate edge over `text` (one segment, already
    /// normalized). Character positions are segment-local.
    pub fn build_lattice(&self, text: &str) -> Lattice {
        let chars: Vec<char> = text.chars().collect();
        let mut byte_of_char: Vec<usize> = Vec::with_capacity(chars.len() + 1);
        let mut char_of_byte: HashMap<usize, usize> = HashMap::new();
        for (ci, (bi, _)) in text.char_indices().enumerate() {
            byte_of_char.push(bi);
            char_of_byte.insert(bi, ci);
        }
        byte_of_char.push(text.len());
        char_of_byte.insert(text.len(), chars.len());

        let mut lattice = Lattice::new(chars.len());

        for i in 0..chars.len() {
            self.add_dictionary_edges(text, i, &byte_of_char, &char_of_byte, &mut lattice);
            self.add_grammar_edges(text, i, &chars, &byte_of_char, &mut lattice);
            self.add_unknown_edges(i, &chars, &mut lattice);
        }

        self.add_derived_edges(&chars, &mut lattice);
        lattice
    }

    fn add_dictionary_edges(
        &self,
        text: &str,
        i: usize,
        byte_of_char: &[usize],
        char_of_byte: &HashMap<usize, usize>,
        lattice: &mut Lattice,
    ) {
        let byte_start = byte_of_char[i];
        for hit in self.dict.lookup(text, byte_start) {
            let end = match char_of_byte.get(&(byte_start + hit.byte_len)) {
                Some(&end) => end,
                // a hit not ending on a character boundary cannot happen
                // for valid UTF-8 keys; skip defensively in release
                None => continue,
            };
            let source = match hit.source {
                DictionarySource::Hardcoded => EdgeSource::Hardcoded,
                DictionarySource::Core => EdgeSource::Dictionary,
                DictionarySource::User => EdgeSource::UserDictionary,
            };
            lattice.add_edge(EdgeSpec {
                start: i,
                end,
                surface: hit.entry.surface.clone(),
                lemma: hit.entry.lemma.clone(),
                reading: hit.entry.reading.clone(),
                pos: hit.entry.pos,
                conj_type: hit.entry.conj_type,
                conj_form: ConjForm::Base,
                cost: hit.entry.cost,
                source,
                flags: hit.entry.flags,
            });
        }
    }

    fn add_grammar_edges(
        &self,
        text: &str,
        i: usize,
        chars: &[char],
        byte_of_char: &[usize],
        lattice: &mut Lattice,
    ) {
        if !is_japanese(chars[i]) {
            return;
        }
        let span_limit = (i + MAX_INFLECTION_SPAN).min(chars.len());
        for end in (i + 1)..=span_limit {
            let span = &text[byte_of_char[i]..byte_of_char[end]];
            let candidates = self.inflection.analyze_with_dict(span, Some(self.dict));

            // one edge per POS bucket is enough: further candidates of the
            // same POS only differ in lemma and would always score worse
            let mut verb_done = false;
            let mut adj_done = false;
            for candidate in candidates {
                if candidate.confidence < MIN_GRAMMAR_CONFIDENCE {
                    break;
                }
                let pos = match candidate.verb_type {
                    ConjugationType::IAdjective | ConjugationType::NaAdjective => {
                        PartOfSpeech::Adjective
                    }
                    _ => PartOfSpeech::Verb,
                };
                let done = match pos {
                    PartOfSpeech::Adjective => &mut adj_done,
                    _ => &mut verb_done,
                };
                if *done {
                    continue;
                }
                *done = true;

                let verified = self
                    .dict
                    .verifies_base_form(&candidate.base_form, candidate.verb_type);
                let mut cost = GRAMMAR_BASE_COST
                    + (1.0 - candidate.confidence) * GRAMMAR_CONFIDENCE_PENALTY;
                if verified {
                    cost += GRAMMAR_DICT_BONUS;
                }

                lattice.add_edge(EdgeSpec {
                    start: i,
                    end,
                    surface: span.to_string(),
                    lemma: candidate.base_form.clone(),
                    reading: String::new(),
                    pos,
                    conj_type: candidate.verb_type,
                    conj_form: candidate.conj_form,
                    cost,
                    source: EdgeSource::Grammar,
                    flags: EntryFlags::empty(),
                });

                if verb_done && adj_done {
                    break;
                }
            }
        }
    }

    fn add_unknown_edges(&self, i: usize, chars: &[char], lattice: &mut Lattice) {
        for word in self.unknown.words_at(chars, i) {
            let surface: String = chars[i..word.end].iter().collect();
            lattice.add_edge(EdgeSpec {
                start: i,
                end: word.end,
                lemma: surface.clone(),
                reading: String::new(),
                surface,
                pos: word.class.pos(),
                conj_type: ConjugationType::None,
                conj_form: ConjForm::Base,
                cost: word.cost,
                source: EdgeSource::Unknown,
                flags: EntryFlags::empty(),
            });
        }
    }

    /// Second pass over the base edges: prefix joining and 〜的 attachment
    fn add_derived_edges(&self, chars: &[char], lattice: &mut Lattice) {
        struct Derived {
            spec_start: usize,
            end: usize,
            surface: String,
            lemma: String,
            pos: PartOfSpeech,
            conj_type: ConjugationType,
            cost: f32,
        }

        let mut derived: Vec<Derived> = Vec::new();
        let mut teki_particles: Vec<usize> = Vec::new();

        for edge in lattice.edges() {
            // prefix + noun: お + 世話 → お世話
            if edge.flags.contains(EntryFlags::PREFIX) && edge.end == edge.start + 1 {
                for &nid in lattice.edges_at(edge.end) {
                    let noun = lattice.edge(nid);
                    if noun.pos != PartOfSpeech::Noun
                        || noun.flags.contains(EntryFlags::PREFIX)
                        || noun.source == EdgeSource::Grammar
                    {
                        continue;
                    }
                    derived.push(Derived {
                        spec_start: edge.start,
                        end: noun.end,
                        surface: format!("{}{}", edge.surface, noun.surface),
                        lemma: format!("{}{}", edge.surface, noun.lemma),
                        pos: PartOfSpeech::Noun,
                        conj_type: ConjugationType::None,
                        cost: noun.cost + PREFIX_JOIN_EXTRA,
                    });
                }
            }

            // noun + 的 → adjective (理性 + 的 → 理性的)
            if edge.pos == PartOfSpeech::Noun
                && edge.source != EdgeSource::Grammar
                && edge.end < chars.len()
                && chars[edge.end] == TEKI
            {
                let surface: String = format!("{}{}", edge.surface, TEKI);
                derived.push(Derived {
                    spec_start: edge.start,
                    end: edge.end + 1,
                    lemma: surface.clone(),
                    surface,
                    pos: PartOfSpeech::Adjective,
                    conj_type: ConjugationType::NaAdjective,
                    cost: edge.cost,
                });
                if edge.end + 1 < chars.len()
                    && matches!(chars[edge.end + 1], 'に' | 'な')
                {
                    teki_particles.push(edge.end + 1);
                }
            }
        }

        for d in derived {
            lattice.add_edge(EdgeSpec {
                start: d.spec_start,
                end: d.end,
                surface: d.surface,
                lemma: d.lemma,
                reading: String::new(),
                pos: d.pos,
                conj_type: d.conj_type,
                conj_form: ConjForm::Base,
                cost: d.cost,
                source: EdgeSource::Grammar,
                flags: EntryFlags::empty(),
            });
        }

        teki_particles.sort_unstable();
        teki_particles.dedup();
        for pos in teki_particles {
            let surface = chars[pos].to_string();
            lattice.add_edge(EdgeSpec {
                start: pos,
                end: pos + 1,
                lemma: surface.clone(),
                surface,
                reading: String::new(),
                pos: PartOfSpeech::Particle,
                conj_type: ConjugationType::None,
                conj_form: ConjForm::Base,
                cost: TEKI_PARTICLE_COST,
                source: EdgeSource::Grammar,
                flags: EntryFlags::empty(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::unknown::UnknownOptions;

    fn build(text: &str) -> Vec<(String, PartOfSpeech, EdgeSource)> {
        let dict = DictionaryManager::new();
        let tokenizer = Tokenizer::new(
            &dict,
            Inflection::new(),
            UnknownWordGenerator::new(UnknownOptions::default()),
        );
        let lattice = tokenizer.build_lattice(text);
        lattice
            .edges()
            .iter()
            .map(|e| (e.surface.clone(), e.pos, e.source))
            .collect()
    }

    fn has_edge(
        edges: &[(String, PartOfSpeech, EdgeSource)],
        surface: &str,
        pos: PartOfSpeech,
    ) -> bool {
        edges.iter().any(|(s, p, _)| s == surface && *p == pos)
    }

    #[test]
    fn dictionary_and_unknown_edges() {
        let edges = build("猫が");
        assert!(has_edge(&edges, "猫", PartOfSpeech::Noun));
        assert!(has_edge(&edges, "が", PartOfSpeech::Particle));
        // unknown fallback also covers 猫
        assert!(edges
            .iter()
            .any(|(s, _, src)| s == "猫" && *src == EdgeSource::Unknown));
    }

    #[test]
    fn every_position_has_an_edge() {
        let dict = DictionaryManager::new();
        let tokenizer = Tokenizer::new(
            &dict,
            Inflection::new(),
            UnknownWordGenerator::new(UnknownOptions::default()),
        );
        let text = "ゑ猫xyz😊だ";
        let lattice = tokenizer.build_lattice(text);
        for pos in 0..text.chars().count() {
            assert!(lattice.has_edge_starting_at(pos), "no edge at {}", pos);
        }
    }

    #[test]
    fn grammar_edge_for_conjugated_verb() {
        let edges = build("バズった");
        let grammar: Vec<_> = edges
            .iter()
            .filter(|(s, p, src)| s == "バズった" && *p == PartOfSpeech::Verb && *src == EdgeSource::Grammar)
            .collect();
        assert!(!grammar.is_empty());
    }

    #[test]
    fn prefix_join_edge() {
        let edges = build("お世話に");
        assert!(edges
            .iter()
            .any(|(s, p, src)| s == "お世話" && *p == PartOfSpeech::Noun && *src == EdgeSource::Grammar));
    }

    #[test]
    fn teki_adjective_edge() {
        let edges = build("理性的に");
        assert!(edges
            .iter()
            .any(|(s, p, src)| s == "理性的" && *p == PartOfSpeech::Adjective && *src == EdgeSource::Grammar));
        // the trailing に also got its particle edge
        assert!(edges
            .iter()
            .any(|(s, p, src)| s == "に" && *p == PartOfSpeech::Particle && *src == EdgeSource::Grammar));
    }

    #[test]
    fn ascii_positions_do_not_produce_grammar_edges() {
        let edges = build("abった");
        assert!(!edges
            .iter()
            .any(|(s, _, src)| s.starts_with("ab") && *src == EdgeSource::Grammar));
    }
}
