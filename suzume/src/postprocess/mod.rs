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

//! Post-processing of the raw Viterbi output: lemmatization, compound
//! merging and filtering, plus tag generation on top.

use crate::analysis::morpheme::Morpheme;
use crate::dic::DictionaryManager;
use crate::grammar::ConjForm;
use crate::pos::{ConjugationType, PartOfSpeech};

pub mod lemmatizer;
pub mod tags;

use self::lemmatizer::Lemmatizer;

/// Counter/unit kanji that participate in numeric expressions
const NUMERIC_UNITS: &str = "千万億兆円月日時分秒年人個本枚回";

/// Post-processing options
#[derive(Clone, Copy, Debug)]
pub struct PostprocessOptions {
    pub lemmatize: bool,
    /// Collapse runs of consecutive non-formal nouns
    pub merge_noun_compounds: bool,
    pub remove_symbols: bool,
    /// Morphemes shorter than this many characters are dropped
    pub min_surface_length: usize,
}

impl Default for PostprocessOptions {
    fn default() -> Self {
        PostprocessOptions {
            lemmatize: true,
            merge_noun_compounds: false,
            remove_symbols: true,
            min_surface_length: 1,
        }
    }
}

/// Applies the post-processing passes in a fixed order
pub struct Postprocessor<'a> {
    options: PostprocessOptions,
    lemmatizer: Lemmatizer<'a>,
}

impl<'a> Postprocessor<'a> {
    pub fn new(
        dict: Option<&'a DictionaryManager>,
        options: PostprocessOptions,
    ) -> Postprocessor<'a> {
        Postprocessor {
            options,
            lemmatizer: Lemmatizer::new(dict),
        }
    }

    pub fn process(&self, morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
        let mut result = morphemes;

        if self.options.lemmatize {
            self.lemmatizer.lemmatize_all(&mut result);
        }
        if self.options.merge_noun_compounds {
            result = merge_noun_compounds(result);
        }
        result = merge_numeric_expressions(result);
        result = merge_na_adjective_na(result);
        self.filter(result)
    }

    fn filter(&self, morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
        morphemes
            .into_iter()
            .filter(|m| {
                if self.options.remove_symbols && m.pos == PartOfSpeech::Symbol {
                    return false;
                }
                m.len() >= self.options.min_surface_length
            })
            .collect()
    }
}

/// Collapse runs of consecutive non-formal nouns into one
fn merge_noun_compounds(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
    let mut result: Vec<Morpheme> = Vec::with_capacity(morphemes.len());
    for m in morphemes {
        let mergeable = m.pos == PartOfSpeech::Noun && !m.features.is_formal_noun;
        match result.last_mut() {
            Some(prev)
                if mergeable
                    && prev.pos == PartOfSpeech::Noun
                    && !prev.features.is_formal_noun =>
            {
                prev.surface.push_str(&m.surface);
                prev.lemma.push_str(m.lemma_or_surface());
                prev.end = m.end;
            }
            _ => result.push(m),
        }
    }
    result
}

fn is_numeric_element(m: &Morpheme) -> bool {
    !m.surface.is_empty()
        && (m.surface.chars().all(|c| c.is_ascii_digit())
            || m.surface.chars().all(|c| NUMERIC_UNITS.contains(c)))
}

fn has_digits(m: &Morpheme) -> bool {
    m.surface.chars().any(|c| c.is_ascii_digit())
}

/// Merge digit/unit runs (3 + 億 + 5000 + 万円 → 3億5000万円) into one Noun.
/// A run must span at least two morphemes and contain a digit, so stray
/// unit kanji are left alone.
fn merge_numeric_expressions(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
    let mut result: Vec<Morpheme> = Vec::with_capacity(morphemes.len());
    let mut i = 0;
    while i < morphemes.len() {
        if !is_numeric_element(&morphemes[i]) {
            result.push(morphemes[i].clone());
            i += 1;
            continue;
        }
        let mut j = i + 1;
        while j < morphemes.len() && is_numeric_element(&morphemes[j]) {
            j += 1;
        }
        let digits = morphemes[i..j].iter().any(has_digits);
        if j - i >= 2 && digits {
            let mut merged = morphemes[i].clone();
            for m in &morphemes[i + 1..j] {
                merged.surface.push_str(&m.surface);
                merged.lemma.push_str(m.lemma_or_surface());
            }
            merged.end = morphemes[j - 1].end;
            merged.pos = PartOfSpeech::Noun;
            merged.conj_type = ConjugationType::None;
            merged.conj_form = ConjForm::Base;
            result.push(merged);
        } else {
            result.extend(morphemes[i..j].iter().cloned());
        }
        i = j;
    }
    result
}

/// Merge a na-adjective stem with its attributive な (静か + な → 静かな)
fn merge_na_adjective_na(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
    let mut result: Vec<Morpheme> = Vec::with_capacity(morphemes.len());
    let mut i = 0;
    while i < morphemes.len() {
        let current = &morphemes[i];
        let next = morphemes.get(i + 1);
        let merge = current.pos == PartOfSpeech::Adjective
            && current.conj_type == ConjugationType::NaAdjective
            && next.map(|n| n.surface == "な").unwrap_or(false);
        if merge {
            let next = next.unwrap();
            let mut merged = current.clone();
            merged.surface.push('な');
            merged.end = next.end;
            merged.conj_form = ConjForm::Rentaikei;
            result.push(merged);
            i += 2;
        } else {
            result.push(current.clone());
            i += 1;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::morpheme::MorphemeFeatures;

    fn morpheme(surface: &str, pos: PartOfSpeech, start: usize) -> Morpheme {
        let len = surface.chars().count();
        Morpheme {
            surface: surface.to_string(),
            lemma: surface.to_string(),
            reading: String::new(),
            pos,
            conj_type: ConjugationType::None,
            conj_form: ConjForm::Base,
            start,
            end: start + len,
            features: MorphemeFeatures::default(),
        }
    }

    fn seq(parts: &[(&str, PartOfSpeech)]) -> Vec<Morpheme> {
        let mut pos = 0;
        parts
            .iter()
            .map(|(s, p)| {
                let m = morpheme(s, *p, pos);
                pos = m.end;
                m
            })
            .collect()
    }

    #[test]
    fn symbols_removed_by_default() {
        let processor = Postprocessor::new(None, PostprocessOptions::default());
        let result = processor.process(seq(&[
            ("こんにちは", PartOfSpeech::Noun),
            ("😊", PartOfSpeech::Symbol),
        ]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].surface, "こんにちは");
    }

    #[test]
    fn symbols_kept_when_configured() {
        let options = PostprocessOptions {
            remove_symbols: false,
            ..PostprocessOptions::default()
        };
        let processor = Postprocessor::new(None, options);
        let result = processor.process(seq(&[
            ("こんにちは", PartOfSpeech::Noun),
            ("😊", PartOfSpeech::Symbol),
        ]));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn numeric_run_merges() {
        let result = merge_numeric_expressions(seq(&[
            ("3", PartOfSpeech::Noun),
            ("億", PartOfSpeech::Noun),
            ("5000", PartOfSpeech::Noun),
            ("万", PartOfSpeech::Noun),
            ("円", PartOfSpeech::Noun),
            ("です", PartOfSpeech::Auxiliary),
        ]));
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].surface, "3億5000万円");
        assert_eq!(result[0].pos, PartOfSpeech::Noun);
        assert_eq!(result[0].start, 0);
        assert_eq!(result[0].end, 9);
    }

    #[test]
    fn lone_unit_kanji_not_merged() {
        let result = merge_numeric_expressions(seq(&[
            ("月", PartOfSpeech::Noun),
            ("日", PartOfSpeech::Noun),
        ]));
        // no digits anywhere: keep both
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn na_adjective_merges_with_na() {
        let mut input = seq(&[
            ("静か", PartOfSpeech::Adjective),
            ("な", PartOfSpeech::Particle),
            ("場所", PartOfSpeech::Noun),
        ]);
        input[0].conj_type = ConjugationType::NaAdjective;
        let result = merge_na_adjective_na(input);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].surface, "静かな");
        assert_eq!(result[0].lemma, "静か");
        assert_eq!(result[0].conj_form, ConjForm::Rentaikei);
        assert_eq!(result[0].end, 3);
    }

    #[test]
    fn noun_compound_merge_respects_formal_nouns() {
        let mut input = seq(&[
            ("情報", PartOfSpeech::Noun),
            ("技術", PartOfSpeech::Noun),
            ("こと", PartOfSpeech::Noun),
        ]);
        input[2].features.is_formal_noun = true;
        let result = merge_noun_compounds(input);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].surface, "情報技術");
        assert_eq!(result[1].surface, "こと");
    }

    #[test]
    fn lemmatization_pass_runs() {
        let manager = DictionaryManager::new();
        let processor = Postprocessor::new(Some(&manager), PostprocessOptions::default());
        let mut input = seq(&[("書いた", PartOfSpeech::Verb)]);
        input[0].conj_type = ConjugationType::GodanKa;
        let result = processor.process(input);
        assert_eq!(result[0].lemma, "書く");
        assert_eq!(result[0].conj_form, ConjForm::Onbinkei);
    }

    #[test]
    fn min_length_filter() {
        let options = PostprocessOptions {
            min_surface_length: 2,
            ..PostprocessOptions::default()
        };
        let processor = Postprocessor::new(None, options);
        let result = processor.process(seq(&[
            ("猫", PartOfSpeech::Noun),
            ("学校", PartOfSpeech::Noun),
        ]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].surface, "学校");
    }
}
