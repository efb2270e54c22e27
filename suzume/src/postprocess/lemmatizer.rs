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

//! Lemmatization of verb/adjective morphemes whose lemma was not resolved
//! during lattice construction, plus conjugation-form classification.
//!
//! The form classifier below is a deliberate last-resort suffix heuristic;
//! it does not try to agree with the inflection analyzer in every case.

use crate::analysis::morpheme::Morpheme;
use crate::dic::DictionaryManager;
use crate::grammar::inflection::Inflection;
use crate::grammar::ConjForm;
use crate::pos::{ConjugationType, PartOfSpeech};

/// Dictionary-verified candidates are accepted above this confidence
const VERIFIED_THRESHOLD: f32 = 0.3;
/// Unverified candidates need this much confidence
const UNVERIFIED_THRESHOLD: f32 = 0.5;

/// Derives base forms, optionally verifying them against dictionaries
pub struct Lemmatizer<'a> {
    inflection: Inflection,
    dict: Option<&'a DictionaryManager>,
}

impl<'a> Lemmatizer<'a> {
    pub fn new(dict: Option<&'a DictionaryManager>) -> Lemmatizer<'a> {
        Lemmatizer {
            inflection: Inflection::new(),
            dict,
        }
    }

    /// Base form for one morpheme
    pub fn lemmatize(&self, morpheme: &Morpheme) -> String {
        // a lemma that differs from the surface was already resolved
        if !morpheme.lemma.is_empty() && morpheme.lemma != morpheme.surface {
            return morpheme.lemma.clone();
        }
        match morpheme.pos {
            PartOfSpeech::Verb | PartOfSpeech::Adjective => {
                self.lemmatize_by_grammar(&morpheme.surface)
            }
            // everything else does not conjugate
            _ => morpheme.surface.clone(),
        }
    }

    /// Set lemma and conjugation form on every morpheme
    pub fn lemmatize_all(&self, morphemes: &mut [Morpheme]) {
        for morpheme in morphemes.iter_mut() {
            morpheme.lemma = self.lemmatize(morpheme);
            morpheme.conj_form =
                detect_conj_form(&morpheme.surface, &morpheme.lemma, morpheme.pos);
        }
    }

    fn lemmatize_by_grammar(&self, surface: &str) -> String {
        // the surface may itself be a dictionary base form (差し上げる must
        // not be re-derived to 差し上ぐ)
        if let Some(manager) = self.dict {
            if manager.verifies_base_form(surface, ConjugationType::None) {
                return surface.to_string();
            }
        }

        let candidates = self.inflection.analyze_with_dict(surface, self.dict);
        if candidates.is_empty() {
            return surface.to_string();
        }

        if let Some(manager) = self.dict {
            for candidate in &candidates {
                if candidate.confidence > VERIFIED_THRESHOLD
                    && manager.verifies_base_form(&candidate.base_form, candidate.verb_type)
                {
                    return candidate.base_form.clone();
                }
            }
        }

        let best = &candidates[0];
        if !best.base_form.is_empty() && best.confidence > UNVERIFIED_THRESHOLD {
            return best.base_form.clone();
        }
        surface.to_string()
    }
}

/// Suffix-heuristic conjugation-form classification from (surface, lemma,
/// pos). Defaults to Base when the surface is already the lemma.
pub fn detect_conj_form(surface: &str, lemma: &str, pos: PartOfSpeech) -> ConjForm {
    if pos != PartOfSpeech::Verb && pos != PartOfSpeech::Adjective {
        return ConjForm::Base;
    }
    if surface == lemma {
        return ConjForm::Base;
    }

    const MIZENKEI: &[&str] = &[
        "ない", "なかった", "ぬ", "ず", "ません", "なく", "なくて", "なければ", "なきゃ",
        "なくても", "れる", "られる", "せる", "させる", "れた", "られた", "せた", "させた",
        "される", "された",
    ];
    if ends_with_any(surface, MIZENKEI) {
        return ConjForm::Mizenkei;
    }

    if ends_with_any(surface, &["う", "よう", "まい"]) {
        return ConjForm::Ishikei;
    }

    if ends_with_any(surface, &["ば", "れば"]) {
        return ConjForm::Kateikei;
    }

    if ends_with_any(surface, &["ろ", "なさい"]) && surface.chars().count() > 1 {
        return ConjForm::Meireikei;
    }

    const ONBINKEI: &[&str] = &[
        "って", "いて", "いで", "んで", "った", "いた", "いだ", "んだ",
    ];
    if ends_with_any(surface, ONBINKEI) {
        return ConjForm::Onbinkei;
    }

    const RENYOKEI: &[&str] = &[
        "て", "で", "た", "だ", "ます", "ました", "まして", "ている", "ていた", "ておく",
        "てある", "てみる", "てくる", "ていく", "てしまう", "ちゃう", "たい", "たかった",
        "たら", "たり", "ています", "ております",
    ];
    if ends_with_any(surface, RENYOKEI) {
        return ConjForm::Renyokei;
    }

    if pos == PartOfSpeech::Adjective
        && ends_with_any(surface, &["く", "くて", "かった", "ければ", "さ", "そう"])
    {
        return ConjForm::Renyokei;
    }

    if pos == PartOfSpeech::Adjective && ends_with_any(surface, &["な", "に"]) {
        return ConjForm::Rentaikei;
    }

    // conjugated but unclassified
    ConjForm::Renyokei
}

fn ends_with_any(surface: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| surface.ends_with(s))
}
