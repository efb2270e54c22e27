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

//! Top-level analyzer: normalize → pretokenize → per-segment lattice +
//! Viterbi → morpheme list. Locked segments bypass the lattice.

use std::sync::Arc;

use super::lattice::EdgeSource;
use super::morpheme::{Morpheme, MorphemeFeatures};
use super::scorer::{Scorer, ScorerOptions};
use super::tokenizer::Tokenizer;
use super::unknown::{UnknownOptions, UnknownWordGenerator};
use super::Mode;
use crate::chars::is_symbol;
use crate::dic::binary::BinaryDictionary;
use crate::dic::user_dict::UserDictionary;
use crate::dic::DictionaryManager;
use crate::grammar::inflection::Inflection;
use crate::grammar::ConjForm;
use crate::normalize::{NormalizeOptions, Normalizer};
use crate::pos::{ConjugationType, PartOfSpeech};
use crate::pretok::PreTokenizer;

/// Analyzer configuration
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalyzerOptions {
    pub mode: Mode,
    pub normalize: NormalizeOptions,
    pub unknown: UnknownOptions,
    pub scorer: ScorerOptions,
}

/// Morphological analyzer. Read-only during `analyze`; dictionary mutation
/// must happen between calls.
pub struct Analyzer {
    options: AnalyzerOptions,
    normalizer: Normalizer,
    pretokenizer: PreTokenizer,
    dict_manager: DictionaryManager,
    scorer: Scorer,
    inflection: Inflection,
    unknown: UnknownWordGenerator,
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new(AnalyzerOptions::default())
    }
}

impl Analyzer {
    pub fn new(options: AnalyzerOptions) -> Analyzer {
        Analyzer {
            normalizer: Normalizer::new(options.normalize),
            pretokenizer: PreTokenizer::new(),
            dict_manager: DictionaryManager::new(),
            scorer: Scorer::new(options.scorer),
            inflection: Inflection::new(),
            unknown: UnknownWordGenerator::new(options.unknown),
            options,
        }
    }

    pub fn mode(&self) -> Mode {
        self.options.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.options.mode = mode;
    }

    pub fn dictionary_manager(&self) -> &DictionaryManager {
        &self.dict_manager
    }

    pub fn set_core_dictionary(&mut self, dict: Arc<BinaryDictionary>) {
        self.dict_manager.set_core_dictionary(dict);
    }

    pub fn add_user_dictionary(&mut self, dict: Arc<UserDictionary>) {
        self.dict_manager.add_user_dictionary(dict);
    }

    /// Analyze text into morphemes covering the normalized input without
    /// gaps. Infallible: unknown-word fallback guarantees a segmentation.
    pub fn analyze(&self, text: &str) -> Vec<Morpheme> {
        let normalized = self.normalizer.normalize(text);
        let mut morphemes = Vec::with_capacity(normalized.chars().count() / 2 + 1);

        for segment in self.pretokenizer.pretokenize(&normalized) {
            if segment.locked {
                morphemes.push(locked_morpheme(segment.text, segment.char_start));
            } else {
                self.analyze_segment(segment.text, segment.char_start, &mut morphemes);
            }
        }
        morphemes
    }

    fn analyze_segment(&self, text: &str, char_offset: usize, out: &mut Vec<Morpheme>) {
        let tokenizer = Tokenizer::new(&self.dict_manager, self.inflection, self.unknown);
        let mut lattice = tokenizer.build_lattice(text);
        let path = lattice.run_viterbi(&self.scorer, self.options.mode);

        for id in path {
            let edge = lattice.edge(id);
            out.push(Morpheme {
                surface: edge.surface.clone(),
                lemma: edge.lemma.clone(),
                reading: edge.reading.clone(),
                pos: edge.pos,
                conj_type: edge.conj_type,
                conj_form: edge.conj_form,
                start: char_offset + edge.start,
                end: char_offset + edge.end,
                features: MorphemeFeatures {
                    is_dictionary: matches!(
                        edge.source,
                        EdgeSource::Dictionary | EdgeSource::Hardcoded
                    ),
                    is_user_dict: edge.source == EdgeSource::UserDictionary,
                    is_formal_noun: edge.flags.contains(crate::dic::EntryFlags::FORMAL_NOUN),
                    is_low_info: edge.flags.contains(crate::dic::EntryFlags::LOW_INFO),
                    score: edge.best_score,
                },
            });
        }
    }
}

/// A locked span surfaces verbatim: Symbol when any scalar is
/// symbol-class, Noun otherwise
fn locked_morpheme(text: &str, char_start: usize) -> Morpheme {
    let char_len = text.chars().count();
    let pos = if text.chars().any(is_symbol) {
        PartOfSpeech::Symbol
    } else {
        PartOfSpeech::Noun
    };
    Morpheme {
        surface: text.to_string(),
        lemma: text.to_string(),
        reading: String::new(),
        pos,
        conj_type: ConjugationType::None,
        conj_form: ConjForm::Base,
        start: char_start,
        end: char_start + char_len,
        features: MorphemeFeatures::default(),
    }
}
