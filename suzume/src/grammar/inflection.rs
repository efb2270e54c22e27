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

//! Recognition of conjugated verb and adjective surfaces.
//!
//! A surface is matched against ending rules, longest ending first. Each
//! firing rule proposes a base form (stem + base suffix) with a confidence;
//! the confidence is adjusted by stem shape and optional dictionary
//! verification. Katakana stems let slang verbs (バズる, サボって) conjugate
//! without dictionary entries.

use lazy_static::lazy_static;

use super::ConjForm;
use crate::chars::{is_e_row, is_hiragana, is_i_row, is_kanji, is_katakana};
use crate::dic::DictionaryManager;
use crate::pos::ConjugationType;

/// What the stem (surface minus ending) must look like for a rule to fire
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum StemKind {
    /// At least one scalar
    NonEmpty,
    /// Must be empty: the ending is the whole word (来る paradigm)
    Empty,
    /// Ichidan stem: ends in i-/e-row hiragana, or is all kanji, or is a
    /// katakana run of two or more
    Ichidan,
    /// Suru compound stem: empty (bare する) or a run of two or more
    /// kanji/katakana/ASCII-alphanumeric scalars (勉強, テスト, ...)
    Suru,
    /// Katakana run of two or more scalars (slang verbs)
    Katakana,
}

struct Rule {
    ending: &'static str,
    base_suffix: &'static str,
    verb_type: ConjugationType,
    conj_form: ConjForm,
    confidence: f32,
    stem: StemKind,
}

const fn rule(
    ending: &'static str,
    base_suffix: &'static str,
    verb_type: ConjugationType,
    conj_form: ConjForm,
    confidence: f32,
    stem: StemKind,
) -> Rule {
    Rule {
        ending,
        base_suffix,
        verb_type,
        conj_form,
        confidence,
        stem,
    }
}

use ConjForm::*;
use ConjugationType::{
    GodanBa, GodanGa, GodanKa, GodanMa, GodanNa, GodanRa, GodanSa, GodanTa, GodanWa, IAdjective,
    Ichidan, Kuru, NaAdjective, Suru,
};
use StemKind::{Empty, Katakana as KataStem, NonEmpty};

#[rustfmt::skip]
static RULE_TABLE: &[Rule] = &[
    // ---- suru compounds -------------------------------------------------
    rule("しておりました", "する", Suru, Renyokei, 0.85, StemKind::Suru),
    rule("しております",   "する", Suru, Renyokei, 0.85, StemKind::Suru),
    rule("していました",   "する", Suru, Renyokei, 0.85, StemKind::Suru),
    rule("しています",     "する", Suru, Renyokei, 0.85, StemKind::Suru),
    rule("している",       "する", Suru, Renyokei, 0.85, StemKind::Suru),
    rule("していた",       "する", Suru, Renyokei, 0.80, StemKind::Suru),
    rule("してしまった",   "する", Suru, Renyokei, 0.80, StemKind::Suru),
    rule("させられる",     "する", Suru, Mizenkei, 0.80, StemKind::Suru),
    rule("させられた",     "する", Suru, Mizenkei, 0.80, StemKind::Suru),
    rule("しなければ",     "する", Suru, Mizenkei, 0.80, StemKind::Suru),
    rule("しなかった",     "する", Suru, Mizenkei, 0.80, StemKind::Suru),
    rule("しましょう",     "する", Suru, Ishikei,  0.80, StemKind::Suru),
    rule("しました",       "する", Suru, Renyokei, 0.85, StemKind::Suru),
    rule("しません",       "する", Suru, Mizenkei, 0.80, StemKind::Suru),
    rule("します",         "する", Suru, Renyokei, 0.85, StemKind::Suru),
    rule("させる",         "する", Suru, Mizenkei, 0.80, StemKind::Suru),
    rule("させた",         "する", Suru, Mizenkei, 0.75, StemKind::Suru),
    rule("される",         "する", Suru, Mizenkei, 0.80, StemKind::Suru),
    rule("された",         "する", Suru, Mizenkei, 0.80, StemKind::Suru),
    rule("しない",         "する", Suru, Mizenkei, 0.80, StemKind::Suru),
    rule("しよう",         "する", Suru, Ishikei,  0.80, StemKind::Suru),
    rule("すれば",         "する", Suru, Kateikei, 0.80, StemKind::Suru),
    rule("しろ",           "する", Suru, Meireikei, 0.70, StemKind::Suru),
    rule("して",           "する", Suru, Renyokei, 0.70, StemKind::Suru),
    rule("した",           "する", Suru, Renyokei, 0.70, StemKind::Suru),
    rule("する",           "する", Suru, Base,     0.85, StemKind::Suru),

    // ---- kuru (literal forms) ------------------------------------------
    rule("来る",   "来る", Kuru, Base,     0.90, Empty),
    rule("来た",   "来る", Kuru, Renyokei, 0.85, Empty),
    rule("来て",   "来る", Kuru, Renyokei, 0.85, Empty),
    rule("来ない", "来る", Kuru, Mizenkei, 0.85, Empty),
    rule("来ます", "来る", Kuru, Renyokei, 0.85, Empty),
    rule("来ました", "来る", Kuru, Renyokei, 0.85, Empty),
    rule("来られる", "来る", Kuru, Mizenkei, 0.80, Empty),
    rule("来よう", "来る", Kuru, Ishikei,  0.80, Empty),
    rule("来れば", "来る", Kuru, Kateikei, 0.80, Empty),
    rule("来い",   "来る", Kuru, Meireikei, 0.75, Empty),

    // ---- irregular onbin of 行く ----------------------------------------
    rule("行った", "行く", GodanKa, Onbinkei, 0.90, Empty),
    rule("行って", "行く", GodanKa, Onbinkei, 0.90, Empty),
    rule("いった", "いく", GodanKa, Onbinkei, 0.65, Empty),
    rule("いって", "いく", GodanKa, Onbinkei, 0.65, Empty),

    // ---- godan ka-row (base く) ----------------------------------------
    rule("いておりました", "く", GodanKa, Renyokei, 0.75, NonEmpty),
    rule("いております", "く", GodanKa, Renyokei, 0.75, NonEmpty),
    rule("いています", "く", GodanKa, Renyokei, 0.75, NonEmpty),
    rule("いている", "く", GodanKa, Renyokei, 0.75, NonEmpty),
    rule("いてしまった", "く", GodanKa, Onbinkei, 0.70, NonEmpty),
    rule("かなかった", "く", GodanKa, Mizenkei, 0.75, NonEmpty),
    rule("かされた", "く", GodanKa, Mizenkei, 0.70, NonEmpty),
    rule("かない", "く", GodanKa, Mizenkei, 0.75, NonEmpty),
    rule("きました", "く", GodanKa, Renyokei, 0.75, NonEmpty),
    rule("きます", "く", GodanKa, Renyokei, 0.75, NonEmpty),
    rule("きたい", "く", GodanKa, Renyokei, 0.70, NonEmpty),
    rule("かれる", "く", GodanKa, Mizenkei, 0.70, NonEmpty),
    rule("かれた", "く", GodanKa, Mizenkei, 0.70, NonEmpty),
    rule("かせる", "く", GodanKa, Mizenkei, 0.70, NonEmpty),
    rule("かせた", "く", GodanKa, Mizenkei, 0.70, NonEmpty),
    rule("いた", "く", GodanKa, Onbinkei, 0.85, NonEmpty),
    rule("いて", "く", GodanKa, Onbinkei, 0.80, NonEmpty),
    rule("けば", "く", GodanKa, Kateikei, 0.70, NonEmpty),
    rule("こう", "く", GodanKa, Ishikei,  0.65, NonEmpty),

    // ---- godan ga-row (base ぐ) ----------------------------------------
    rule("がなかった", "ぐ", GodanGa, Mizenkei, 0.75, NonEmpty),
    rule("がない", "ぐ", GodanGa, Mizenkei, 0.75, NonEmpty),
    rule("ぎました", "ぐ", GodanGa, Renyokei, 0.75, NonEmpty),
    rule("ぎます", "ぐ", GodanGa, Renyokei, 0.75, NonEmpty),
    rule("がれる", "ぐ", GodanGa, Mizenkei, 0.70, NonEmpty),
    rule("がれた", "ぐ", GodanGa, Mizenkei, 0.70, NonEmpty),
    rule("がせる", "ぐ", GodanGa, Mizenkei, 0.70, NonEmpty),
    rule("いだ", "ぐ", GodanGa, Onbinkei, 0.85, NonEmpty),
    rule("いで", "ぐ", GodanGa, Onbinkei, 0.80, NonEmpty),
    rule("げば", "ぐ", GodanGa, Kateikei, 0.70, NonEmpty),
    rule("ごう", "ぐ", GodanGa, Ishikei,  0.60, NonEmpty),

    // ---- godan sa-row (base す) ----------------------------------------
    rule("さなかった", "す", GodanSa, Mizenkei, 0.75, NonEmpty),
    rule("さない", "す", GodanSa, Mizenkei, 0.75, NonEmpty),
    rule("される", "す", GodanSa, Mizenkei, 0.55, NonEmpty),
    rule("された", "す", GodanSa, Mizenkei, 0.55, NonEmpty),
    rule("させる", "す", GodanSa, Mizenkei, 0.55, NonEmpty),
    rule("しました", "す", GodanSa, Renyokei, 0.60, NonEmpty),
    rule("します", "す", GodanSa, Renyokei, 0.60, NonEmpty),
    rule("したい", "す", GodanSa, Renyokei, 0.60, NonEmpty),
    rule("した", "す", GodanSa, Renyokei, 0.65, NonEmpty),
    rule("して", "す", GodanSa, Renyokei, 0.60, NonEmpty),
    rule("せば", "す", GodanSa, Kateikei, 0.70, NonEmpty),
    rule("そう", "す", GodanSa, Ishikei,  0.55, NonEmpty),

    // ---- godan ta-row (base つ) ----------------------------------------
    rule("たなかった", "つ", GodanTa, Mizenkei, 0.75, NonEmpty),
    rule("たない", "つ", GodanTa, Mizenkei, 0.75, NonEmpty),
    rule("ちました", "つ", GodanTa, Renyokei, 0.75, NonEmpty),
    rule("ちます", "つ", GodanTa, Renyokei, 0.75, NonEmpty),
    rule("たれる", "つ", GodanTa, Mizenkei, 0.70, NonEmpty),
    rule("たれた", "つ", GodanTa, Mizenkei, 0.70, NonEmpty),
    rule("たせる", "つ", GodanTa, Mizenkei, 0.70, NonEmpty),
    rule("った", "つ", GodanTa, Onbinkei, 0.68, NonEmpty),
    rule("って", "つ", GodanTa, Onbinkei, 0.63, NonEmpty),
    rule("てば", "つ", GodanTa, Kateikei, 0.70, NonEmpty),
    rule("とう", "つ", GodanTa, Ishikei,  0.55, NonEmpty),

    // ---- godan na-row (base ぬ) ----------------------------------------
    rule("ななかった", "ぬ", GodanNa, Mizenkei, 0.70, NonEmpty),
    rule("なない", "ぬ", GodanNa, Mizenkei, 0.70, NonEmpty),
    rule("にます", "ぬ", GodanNa, Renyokei, 0.70, NonEmpty),
    rule("んだ", "ぬ", GodanNa, Onbinkei, 0.70, NonEmpty),
    rule("んで", "ぬ", GodanNa, Onbinkei, 0.65, NonEmpty),
    rule("ねば", "ぬ", GodanNa, Kateikei, 0.65, NonEmpty),

    // ---- godan ba-row (base ぶ) ----------------------------------------
    rule("ばなかった", "ぶ", GodanBa, Mizenkei, 0.75, NonEmpty),
    rule("ばない", "ぶ", GodanBa, Mizenkei, 0.75, NonEmpty),
    rule("びました", "ぶ", GodanBa, Renyokei, 0.75, NonEmpty),
    rule("びます", "ぶ", GodanBa, Renyokei, 0.75, NonEmpty),
    rule("ばれる", "ぶ", GodanBa, Mizenkei, 0.70, NonEmpty),
    rule("ばれた", "ぶ", GodanBa, Mizenkei, 0.70, NonEmpty),
    rule("ばせる", "ぶ", GodanBa, Mizenkei, 0.70, NonEmpty),
    rule("んだ", "ぶ", GodanBa, Onbinkei, 0.72, NonEmpty),
    rule("んで", "ぶ", GodanBa, Onbinkei, 0.67, NonEmpty),
    rule("べば", "ぶ", GodanBa, Kateikei, 0.70, NonEmpty),
    rule("ぼう", "ぶ", GodanBa, Ishikei,  0.55, NonEmpty),

    // ---- godan ma-row (base む) ----------------------------------------
    rule("まなかった", "む", GodanMa, Mizenkei, 0.75, NonEmpty),
    rule("まない", "む", GodanMa, Mizenkei, 0.75, NonEmpty),
    rule("みました", "む", GodanMa, Renyokei, 0.75, NonEmpty),
    rule("みます", "む", GodanMa, Renyokei, 0.75, NonEmpty),
    rule("みたい", "む", GodanMa, Renyokei, 0.60, NonEmpty),
    rule("まれる", "む", GodanMa, Mizenkei, 0.70, NonEmpty),
    rule("まれた", "む", GodanMa, Mizenkei, 0.70, NonEmpty),
    rule("ませる", "む", GodanMa, Mizenkei, 0.70, NonEmpty),
    rule("んだ", "む", GodanMa, Onbinkei, 0.74, NonEmpty),
    rule("んで", "む", GodanMa, Onbinkei, 0.69, NonEmpty),
    rule("めば", "む", GodanMa, Kateikei, 0.70, NonEmpty),
    rule("もう", "む", GodanMa, Ishikei,  0.55, NonEmpty),

    // ---- godan ra-row (base る) ----------------------------------------
    rule("っておりました", "る", GodanRa, Renyokei, 0.72, NonEmpty),
    rule("っております", "る", GodanRa, Renyokei, 0.72, NonEmpty),
    rule("っていました", "る", GodanRa, Renyokei, 0.72, NonEmpty),
    rule("っています", "る", GodanRa, Renyokei, 0.72, NonEmpty),
    rule("っている", "る", GodanRa, Renyokei, 0.72, NonEmpty),
    rule("っていた", "る", GodanRa, Renyokei, 0.70, NonEmpty),
    rule("らなかった", "る", GodanRa, Mizenkei, 0.75, NonEmpty),
    rule("らされた", "る", GodanRa, Mizenkei, 0.70, NonEmpty),
    rule("らない", "る", GodanRa, Mizenkei, 0.75, NonEmpty),
    rule("りました", "る", GodanRa, Renyokei, 0.75, NonEmpty),
    rule("ります", "る", GodanRa, Renyokei, 0.75, NonEmpty),
    rule("りたい", "る", GodanRa, Renyokei, 0.70, NonEmpty),
    rule("らせる", "る", GodanRa, Mizenkei, 0.70, NonEmpty),
    rule("らせた", "る", GodanRa, Mizenkei, 0.70, NonEmpty),
    rule("ってる", "る", GodanRa, Renyokei, 0.65, NonEmpty),
    rule("った", "る", GodanRa, Onbinkei, 0.70, NonEmpty),
    rule("って", "る", GodanRa, Onbinkei, 0.65, NonEmpty),
    rule("れば", "る", GodanRa, Kateikei, 0.65, NonEmpty),
    rule("ろう", "る", GodanRa, Ishikei,  0.60, NonEmpty),
    rule("る",   "る", GodanRa, Base,     0.60, KataStem),

    // ---- godan wa-row (base う) ----------------------------------------
    rule("わなかった", "う", GodanWa, Mizenkei, 0.75, NonEmpty),
    rule("わされた", "う", GodanWa, Mizenkei, 0.70, NonEmpty),
    rule("わない", "う", GodanWa, Mizenkei, 0.75, NonEmpty),
    rule("いました", "う", GodanWa, Renyokei, 0.70, NonEmpty),
    rule("います", "う", GodanWa, Renyokei, 0.70, NonEmpty),
    rule("いたい", "う", GodanWa, Renyokei, 0.65, NonEmpty),
    rule("われる", "う", GodanWa, Mizenkei, 0.70, NonEmpty),
    rule("われた", "う", GodanWa, Mizenkei, 0.70, NonEmpty),
    rule("わせる", "う", GodanWa, Mizenkei, 0.70, NonEmpty),
    rule("わせた", "う", GodanWa, Mizenkei, 0.70, NonEmpty),
    rule("った", "う", GodanWa, Onbinkei, 0.65, NonEmpty),
    rule("って", "う", GodanWa, Onbinkei, 0.60, NonEmpty),
    rule("えば", "う", GodanWa, Kateikei, 0.65, NonEmpty),
    rule("おう", "う", GodanWa, Ishikei,  0.55, NonEmpty),

    // ---- ichidan (base る) ---------------------------------------------
    rule("ておりました", "る", Ichidan, Renyokei, 0.70, StemKind::Ichidan),
    rule("ております", "る", Ichidan, Renyokei, 0.70, StemKind::Ichidan),
    rule("ていました", "る", Ichidan, Renyokei, 0.70, StemKind::Ichidan),
    rule("させられる", "る", Ichidan, Mizenkei, 0.70, StemKind::Ichidan),
    rule("なければ", "る", Ichidan, Mizenkei, 0.75, StemKind::Ichidan),
    rule("なかった", "る", Ichidan, Mizenkei, 0.72, StemKind::Ichidan),
    rule("ています", "る", Ichidan, Renyokei, 0.70, StemKind::Ichidan),
    rule("ましょう", "る", Ichidan, Ishikei,  0.70, StemKind::Ichidan),
    rule("ている", "る", Ichidan, Renyokei, 0.70, StemKind::Ichidan),
    rule("ていた", "る", Ichidan, Renyokei, 0.68, StemKind::Ichidan),
    rule("られる", "る", Ichidan, Mizenkei, 0.70, StemKind::Ichidan),
    rule("られた", "る", Ichidan, Mizenkei, 0.70, StemKind::Ichidan),
    rule("させる", "る", Ichidan, Mizenkei, 0.70, StemKind::Ichidan),
    rule("ました", "る", Ichidan, Renyokei, 0.75, StemKind::Ichidan),
    rule("ません", "る", Ichidan, Mizenkei, 0.70, StemKind::Ichidan),
    rule("たかった", "る", Ichidan, Renyokei, 0.70, StemKind::Ichidan),
    rule("ない", "る", Ichidan, Mizenkei, 0.70, StemKind::Ichidan),
    rule("ます", "る", Ichidan, Renyokei, 0.70, StemKind::Ichidan),
    rule("たい", "る", Ichidan, Renyokei, 0.65, StemKind::Ichidan),
    rule("よう", "る", Ichidan, Ishikei,  0.65, StemKind::Ichidan),
    rule("れば", "る", Ichidan, Kateikei, 0.65, StemKind::Ichidan),
    rule("てる", "る", Ichidan, Renyokei, 0.60, StemKind::Ichidan),
    rule("た", "る", Ichidan, Renyokei, 0.60, StemKind::Ichidan),
    rule("て", "る", Ichidan, Renyokei, 0.60, StemKind::Ichidan),
    rule("ろ", "る", Ichidan, Meireikei, 0.55, StemKind::Ichidan),
    rule("る", "る", Ichidan, Base,     0.55, StemKind::Ichidan),

    // ---- i-adjectives (base い) ----------------------------------------
    rule("くなかった", "い", IAdjective, Mizenkei, 0.80, NonEmpty),
    rule("かったです", "い", IAdjective, Renyokei, 0.80, NonEmpty),
    rule("くありません", "い", IAdjective, Mizenkei, 0.80, NonEmpty),
    rule("かった", "い", IAdjective, Renyokei, 0.85, NonEmpty),
    rule("くない", "い", IAdjective, Mizenkei, 0.80, NonEmpty),
    rule("ければ", "い", IAdjective, Kateikei, 0.80, NonEmpty),
    rule("くて", "い", IAdjective, Renyokei, 0.80, NonEmpty),
    rule("く", "い", IAdjective, Renyokei, 0.55, NonEmpty),

    // ---- na-adjectives (base = stem) -----------------------------------
    rule("だった", "", NaAdjective, Renyokei, 0.50, NonEmpty),
    rule("に", "", NaAdjective, Renyokei, 0.40, NonEmpty),
    rule("な", "", NaAdjective, Rentaikei, 0.40, NonEmpty),
];

lazy_static! {
    /// Rule table sorted by ending byte length, longest first, so the
    /// greedy scan fires specific endings before generic ones
    static ref RULES: Vec<&'static Rule> = {
        let mut rules: Vec<&'static Rule> = RULE_TABLE.iter().collect();
        rules.sort_by(|a, b| b.ending.len().cmp(&a.ending.len()));
        rules
    };
}

/// One proposed reading of a conjugated surface
#[derive(Clone, Debug, PartialEq)]
pub struct InflectionCandidate {
    pub base_form: String,
    pub verb_type: ConjugationType,
    pub conj_form: ConjForm,
    pub confidence: f32,
}

/// Stateless inflection analyzer
#[derive(Clone, Copy, Debug, Default)]
pub struct Inflection;

impl Inflection {
    pub fn new() -> Inflection {
        Inflection
    }

    /// Candidates for `surface` without dictionary verification
    pub fn analyze(&self, surface: &str) -> Vec<InflectionCandidate> {
        self.analyze_with_dict(surface, None)
    }

    /// Candidates for `surface`, sorted by descending confidence.
    /// With a dictionary, verified base forms get a confidence boost.
    pub fn analyze_with_dict(
        &self,
        surface: &str,
        dict: Option<&DictionaryManager>,
    ) -> Vec<InflectionCandidate> {
        let mut candidates: Vec<InflectionCandidate> = Vec::new();
        if surface.is_empty() {
            return candidates;
        }

        for rule in RULES.iter() {
            if !surface.ends_with(rule.ending) {
                continue;
            }
            let stem = &surface[..surface.len() - rule.ending.len()];
            if !stem_matches(stem, rule.stem) {
                continue;
            }
            // reject stems that span phrase boundaries (理性的に考え);
            // a verb stem is one word, not a run of words
            if !stem.is_empty() && !stem_is_wordlike(stem) {
                continue;
            }
            let base = format!("{}{}", stem, rule.base_suffix);
            if base.is_empty() {
                continue;
            }

            let stem_chars: Vec<char> = stem.chars().collect();
            let mut confidence = rule.confidence;

            if stem_chars.is_empty() && rule.stem != Empty {
                confidence -= 0.20;
            }
            // hiragana stems are the norm for ichidan; all-kanji stems are
            // possible (見る) but less certain
            if rule.stem == StemKind::Ichidan
                && !stem_chars.is_empty()
                && stem_chars.iter().all(|&c| is_kanji(c))
            {
                confidence -= 0.15;
            }
            // katakana stems mark slang verbs, which conjugate regularly
            if stem_chars.len() >= 2
                && stem_chars.iter().all(|&c| is_katakana(c))
                && matches!(rule.verb_type, GodanRa | Ichidan)
            {
                confidence += 0.05;
            }
            if let Some(manager) = dict {
                if manager.verifies_base_form(&base, rule.verb_type) {
                    confidence += 0.10;
                }
            }

            push_candidate(
                &mut candidates,
                InflectionCandidate {
                    base_form: base,
                    verb_type: rule.verb_type,
                    conj_form: rule.conj_form,
                    confidence: confidence.min(1.0),
                },
            );
        }

        candidates.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates
    }
}

/// Keep at most one candidate per (base, verb type), preferring the first
/// (longest-ending) firing unless a later one is more confident
fn push_candidate(candidates: &mut Vec<InflectionCandidate>, candidate: InflectionCandidate) {
    if let Some(existing) = candidates
        .iter_mut()
        .find(|c| c.base_form == candidate.base_form && c.verb_type == candidate.verb_type)
    {
        if candidate.confidence > existing.confidence {
            *existing = candidate;
        }
        return;
    }
    candidates.push(candidate);
}

/// Word-shaped stems only: a kanji run with a short okurigana tail, a
/// katakana run, or a short hiragana run
fn stem_is_wordlike(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    if chars.iter().all(|&c| is_hiragana(c)) {
        return chars.len() <= 3;
    }
    if chars.iter().all(|&c| is_katakana(c)) {
        return true;
    }
    let kanji_len = chars.iter().take_while(|&&c| is_kanji(c)).count();
    if kanji_len > 0 {
        let tail = &chars[kanji_len..];
        return tail.len() <= 2 && tail.iter().all(|&c| is_hiragana(c));
    }
    false
}

fn stem_matches(stem: &str, kind: StemKind) -> bool {
    match kind {
        NonEmpty => !stem.is_empty(),
        Empty => stem.is_empty(),
        StemKind::Ichidan => {
            let chars: Vec<char> = stem.chars().collect();
            match chars.last() {
                None => false,
                Some(&last) => {
                    is_i_row(last)
                        || is_e_row(last)
                        || chars.iter().all(|&c| is_kanji(c))
                        || (chars.len() >= 2 && chars.iter().all(|&c| is_katakana(c)))
                }
            }
        }
        StemKind::Suru => {
            if stem.is_empty() {
                return true;
            }
            let chars: Vec<char> = stem.chars().collect();
            chars.len() >= 2
                && chars
                    .iter()
                    .all(|&c| is_kanji(c) || is_katakana(c) || c.is_ascii_alphanumeric())
        }
        KataStem => {
            let chars: Vec<char> = stem.chars().collect();
            chars.len() >= 2 && chars.iter().all(|&c| is_katakana(c))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dic::DictionaryManager;

    fn best(surface: &str) -> InflectionCandidate {
        let manager = DictionaryManager::new();
        Inflection::new()
            .analyze_with_dict(surface, Some(&manager))
            .into_iter()
            .next()
            .unwrap_or_else(|| panic!("no candidate for {}", surface))
    }

    #[test]
    fn suru_compound() {
        let c = best("勉強する");
        assert_eq!(c.base_form, "勉強する");
        assert_eq!(c.verb_type, ConjugationType::Suru);
        assert_eq!(c.conj_form, ConjForm::Base);
        assert!(c.confidence >= 0.8);
    }

    #[test]
    fn suru_past_and_progressive() {
        assert_eq!(best("勉強した").base_form, "勉強する");
        assert_eq!(best("勉強しています").base_form, "勉強する");
        assert_eq!(best("勉強しなかった").conj_form, ConjForm::Mizenkei);
    }

    #[test]
    fn suru_rejects_single_kanji_stem() {
        // 話します must resolve through godan-sa (話す), not 話する
        let c = best("話します");
        assert_eq!(c.base_form, "話す");
        assert_eq!(c.verb_type, ConjugationType::GodanSa);
    }

    #[test]
    fn kuru_literals() {
        assert_eq!(best("来た").base_form, "来る");
        assert_eq!(best("来ない").conj_form, ConjForm::Mizenkei);
    }

    #[test]
    fn irregular_itta() {
        assert_eq!(best("行った").base_form, "行く");
        assert_eq!(best("行った").conj_form, ConjForm::Onbinkei);
    }

    #[test]
    fn godan_onbin_with_dictionary() {
        // dictionary verification picks the right base among った readings
        assert_eq!(best("なった").base_form, "なる");
        assert_eq!(best("買った").base_form, "買う");
        assert_eq!(best("待った").base_form, "待つ");
        assert_eq!(best("飲んだ").base_form, "飲む");
        assert_eq!(best("遊んだ").base_form, "遊ぶ");
        assert_eq!(best("書いた").base_form, "書く");
        assert_eq!(best("泳いだ").base_form, "泳ぐ");
    }

    #[test]
    fn polite_progressive_chain() {
        let c = best("なっております");
        assert_eq!(c.base_form, "なる");
        assert_eq!(c.verb_type, ConjugationType::GodanRa);
        assert!(c.confidence >= 0.8);
    }

    #[test]
    fn ichidan_forms() {
        assert_eq!(best("食べた").base_form, "食べる");
        assert_eq!(best("食べない").base_form, "食べる");
        assert_eq!(best("食べました").base_form, "食べる");
        assert_eq!(best("考えている").base_form, "考える");
    }

    #[test]
    fn ichidan_kanji_stem_is_penalized_but_found() {
        let c = best("見た");
        assert_eq!(c.base_form, "見る");
        assert!(c.confidence >= 0.5);
    }

    #[test]
    fn katakana_slang_verbs() {
        let c = best("バズった");
        assert_eq!(c.base_form, "バズる");
        assert_eq!(c.verb_type, ConjugationType::GodanRa);
        assert_eq!(c.conj_form, ConjForm::Onbinkei);
        assert!(c.confidence >= 0.7);

        let c = best("サボって");
        assert_eq!(c.base_form, "サボる");
        assert_eq!(c.verb_type, ConjugationType::GodanRa);
    }

    #[test]
    fn katakana_base_form() {
        let c = best("バズる");
        assert_eq!(c.base_form, "バズる");
        assert_eq!(c.conj_form, ConjForm::Base);
    }

    #[test]
    fn i_adjective_forms() {
        assert_eq!(best("面白かった").base_form, "面白い");
        assert_eq!(best("高くない").base_form, "高い");
        assert_eq!(best("楽しくて").base_form, "楽しい");
        assert_eq!(best("高ければ").conj_form, ConjForm::Kateikei);
    }

    #[test]
    fn na_adjective_needs_dictionary() {
        // 静かに verifies against the lexicon na-adjective 静か
        let manager = DictionaryManager::new();
        let candidates = Inflection::new().analyze_with_dict("静かに", Some(&manager));
        let na = candidates
            .iter()
            .find(|c| c.verb_type == ConjugationType::NaAdjective)
            .unwrap();
        assert_eq!(na.base_form, "静か");
        assert!(na.confidence >= 0.5);
    }

    #[test]
    fn no_candidates_for_plain_nouns() {
        let candidates = Inflection::new().analyze("学校");
        assert!(candidates.is_empty());
    }

    #[test]
    fn empty_surface() {
        assert!(Inflection::new().analyze("").is_empty());
    }

    #[test]
    fn phrase_spanning_stems_rejected() {
        // 理性的に考える ends in る with an e-row stem, but the stem crosses
        // a particle; it must not be read as one verb
        let manager = DictionaryManager::new();
        let candidates = Inflection::new().analyze_with_dict("理性的に考える", Some(&manager));
        assert!(candidates.is_empty());
        let candidates = Inflection::new().analyze_with_dict("お世話になっております", Some(&manager));
        assert!(candidates.is_empty());
    }

    #[test]
    fn causative_passive_composition() {
        assert_eq!(best("勉強させられる").base_form, "勉強する");
        let c = best("書かされた");
        assert_eq!(c.base_form, "書く");
    }
}
