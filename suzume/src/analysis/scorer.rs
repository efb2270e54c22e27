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

//! Edge and transition scoring. The POS transition matrix and the source
//! adjustments below are fixed design constants; segmentation tests depend
//! on them being reproducible.

use super::lattice::{Edge, EdgeSource};
use super::Mode;
use crate::pos::PartOfSpeech;

/// Additive penalty for consecutive unknown edges; discourages chains of
/// unknown fallbacks when anything better connects
const UNKNOWN_CHAIN_PENALTY: f32 = 0.8;

/// Per-extra-character bias for long dictionary nouns (negative favors)
const SEARCH_LONG_NOUN_BONUS: f32 = -0.2;
const SPLIT_LONG_NOUN_PENALTY: f32 = 0.1;

/// Split mode nudges unknown edges toward single characters
const SPLIT_UNKNOWN_ADJUST: f32 = 0.2;

/// Scorer options (currently all constants; kept for API stability)
#[derive(Clone, Copy, Debug, Default)]
pub struct ScorerOptions;

/// Stateless scorer
#[derive(Clone, Copy, Debug, Default)]
pub struct Scorer {
    #[allow(dead_code)]
    options: ScorerOptions,
}

impl Scorer {
    pub fn new(options: ScorerOptions) -> Scorer {
        Scorer { options }
    }

    /// Cost of appending `next` after `prev`
    pub fn transition_cost(&self, prev: &Edge, next: &Edge) -> f32 {
        let mut cost = pos_pair_penalty(prev.pos, next.pos);
        if prev.source == EdgeSource::Unknown && next.source == EdgeSource::Unknown {
            cost += UNKNOWN_CHAIN_PENALTY;
        }
        cost
    }

    /// Authored edge cost with mode adjustments
    pub fn edge_cost(&self, edge: &Edge, mode: Mode) -> f32 {
        let mut cost = edge.cost;
        let char_len = edge.end - edge.start;

        let is_dictionary_noun = edge.pos == PartOfSpeech::Noun
            && matches!(
                edge.source,
                EdgeSource::Dictionary | EdgeSource::UserDictionary | EdgeSource::Hardcoded
            );

        match mode {
            Mode::Normal => {}
            Mode::Search => {
                if is_dictionary_noun && char_len > 2 {
                    cost += SEARCH_LONG_NOUN_BONUS * (char_len - 2) as f32;
                }
            }
            Mode::Split => {
                if is_dictionary_noun && char_len > 2 {
                    cost += SPLIT_LONG_NOUN_PENALTY * (char_len - 2) as f32;
                }
                if edge.source == EdgeSource::Unknown {
                    cost += if char_len == 1 {
                        -SPLIT_UNKNOWN_ADJUST
                    } else {
                        SPLIT_UNKNOWN_ADJUST
                    };
                }
            }
        }
        cost
    }
}

/// POS × POS additive penalty. Unlisted pairs are 0.0.
fn pos_pair_penalty(from: PartOfSpeech, to: PartOfSpeech) -> f32 {
    use PartOfSpeech::*;
    match (from, to) {
        (Noun, Adjective) => 0.2,
        (Noun, Particle) => -0.1,
        (Noun, Auxiliary) => 0.3,
        (Verb, Noun) => 0.2,
        (Verb, Verb) => 0.4,
        (Verb, Adjective) => 0.3,
        (Verb, Auxiliary) => -0.2,
        (Adjective, Noun) => 0.2,
        (Adjective, Verb) => 0.3,
        (Adjective, Adjective) => 0.5,
        (Particle, Particle) => 0.8,
        (Particle, Auxiliary) => 0.3,
        (Auxiliary, Noun) => 0.3,
        (Auxiliary, Verb) => 0.4,
        (Auxiliary, Adjective) => 0.4,
        (Auxiliary, Auxiliary) => 0.2,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lattice::{Edge, EdgeSource};
    use crate::grammar::ConjForm;
    use crate::pos::ConjugationType;

    fn edge(pos: PartOfSpeech, source: EdgeSource, start: usize, end: usize, cost: f32) -> Edge {
        Edge {
            id: 0,
            start,
            end,
            surface: String::new(),
            lemma: String::new(),
            reading: String::new(),
            pos,
            conj_type: ConjugationType::None,
            conj_form: ConjForm::Base,
            cost,
            source,
            flags: crate::dic::EntryFlags::empty(),
            prev_best: None,
            best_score: f32::INFINITY,
            path_len: 0,
        }
    }

    #[test]
    fn matrix_values_are_pinned() {
        use PartOfSpeech::*;
        assert!((pos_pair_penalty(Noun, Particle) + 0.1).abs() < 1e-6);
        assert!((pos_pair_penalty(Particle, Particle) - 0.8).abs() < 1e-6);
        assert!((pos_pair_penalty(Verb, Auxiliary) + 0.2).abs() < 1e-6);
        assert!((pos_pair_penalty(Noun, Noun)).abs() < 1e-6);
        assert!((pos_pair_penalty(Symbol, Noun)).abs() < 1e-6);
    }

    #[test]
    fn unknown_chain_is_penalized() {
        let scorer = Scorer::default();
        let a = edge(PartOfSpeech::Noun, EdgeSource::Unknown, 0, 1, 1.0);
        let b = edge(PartOfSpeech::Noun, EdgeSource::Unknown, 1, 2, 1.0);
        let c = edge(PartOfSpeech::Noun, EdgeSource::Dictionary, 1, 2, 1.0);
        assert!(scorer.transition_cost(&a, &b) > scorer.transition_cost(&a, &c));
    }

    #[test]
    fn search_mode_favors_long_nouns() {
        let scorer = Scorer::default();
        let long_noun = edge(PartOfSpeech::Noun, EdgeSource::Dictionary, 0, 5, 1.0);
        let normal = scorer.edge_cost(&long_noun, Mode::Normal);
        let search = scorer.edge_cost(&long_noun, Mode::Search);
        let split = scorer.edge_cost(&long_noun, Mode::Split);
        assert!(search < normal);
        assert!(split > normal);
    }

    #[test]
    fn split_mode_prefers_short_unknowns() {
        let scorer = Scorer::default();
        let single = edge(PartOfSpeech::Noun, EdgeSource::Unknown, 0, 1, 1.0);
        let run = edge(PartOfSpeech::Noun, EdgeSource::Unknown, 0, 3, 1.0);
        assert!(scorer.edge_cost(&single, Mode::Split) < scorer.edge_cost(&single, Mode::Normal));
        assert!(scorer.edge_cost(&run, Mode::Split) > scorer.edge_cost(&run, Mode::Normal));
    }

    #[test]
    fn grammar_edges_have_no_mode_noun_bias() {
        let scorer = Scorer::default();
        let grammar = edge(PartOfSpeech::Verb, EdgeSource::Grammar, 0, 5, 1.0);
        assert!((scorer.edge_cost(&grammar, Mode::Search) - 1.0).abs() < 1e-6);
    }
}
