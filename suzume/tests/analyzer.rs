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

//! End-to-end analysis scenarios.

use suzume::normalize::Normalizer;
use suzume::prelude::*;

fn suzume() -> Suzume {
    Suzume::with_options(SuzumeOptions {
        auto_load_dictionaries: false,
        ..SuzumeOptions::default()
    })
}

fn suzume_with_symbols() -> Suzume {
    Suzume::with_options(SuzumeOptions {
        remove_symbols: false,
        auto_load_dictionaries: false,
        ..SuzumeOptions::default()
    })
}

fn surfaces(morphemes: &[Morpheme]) -> Vec<&str> {
    morphemes.iter().map(|m| m.surface.as_str()).collect()
}

#[test]
fn basic_sentence_with_particles() {
    let result = suzume().analyze("私は猫が好き");
    assert!(result.len() >= 6, "got {:?}", surfaces(&result));
    assert_eq!(result[1].surface, "は");
    assert_eq!(result[1].pos, PartOfSpeech::Particle);
    assert_eq!(result[3].surface, "が");
    assert_eq!(result[3].pos, PartOfSpeech::Particle);
}

#[test]
fn polite_business_phrase_stays_coarse() {
    let result = suzume().analyze("お世話になっております");
    assert!(result.len() <= 5, "got {:?}", surfaces(&result));
    assert!(
        result[0].surface.starts_with('お'),
        "first morpheme {:?}",
        result[0].surface
    );
}

#[test]
fn ascii_word_particle_verb() {
    let result = suzume().analyze("APIを呼ぶ");
    assert_eq!(surfaces(&result), vec!["api", "を", "呼ぶ"]);
    assert_eq!(result[0].pos, PartOfSpeech::Noun);
    assert_eq!(result[1].pos, PartOfSpeech::Particle);
    assert_eq!(result[2].pos, PartOfSpeech::Verb);
    assert_eq!(result[2].lemma, "呼ぶ");
}

#[test]
fn slang_verb_recognized_by_grammar() {
    let result = suzume().analyze("バズった");
    assert_eq!(result.len(), 1);
    let m = &result[0];
    assert_eq!(m.surface, "バズった");
    assert_eq!(m.lemma, "バズる");
    assert_eq!(m.pos, PartOfSpeech::Verb);
    assert_eq!(m.conj_type, ConjugationType::GodanRa);
    assert_eq!(m.conj_form, ConjForm::Onbinkei);
}

#[test]
fn suru_compound_verb() {
    let result = suzume().analyze("勉強する");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].surface, "勉強する");
    assert_eq!(result[0].lemma, "勉強する");
    assert_eq!(result[0].conj_type, ConjugationType::Suru);
    assert_eq!(result[0].pos, PartOfSpeech::Verb);
}

#[test]
fn teki_adjective_before_particle() {
    let result = suzume().analyze("理性的に考える");
    let idx = result
        .iter()
        .position(|m| m.surface == "理性的")
        .unwrap_or_else(|| panic!("理性的 missing in {:?}", surfaces(&result)));
    assert_eq!(result[idx].pos, PartOfSpeech::Adjective);
    assert_eq!(result[idx + 1].surface, "に");
    assert_eq!(result[idx + 1].pos, PartOfSpeech::Particle);
}

#[test]
fn emoji_with_and_without_symbol_filter() {
    let result = suzume_with_symbols().analyze("こんにちは😊");
    assert_eq!(surfaces(&result), vec!["こんにちは", "😊"]);
    assert_eq!(result[0].pos, PartOfSpeech::Noun);
    assert_eq!(result[1].pos, PartOfSpeech::Symbol);

    let result = suzume().analyze("こんにちは😊");
    assert_eq!(surfaces(&result), vec!["こんにちは"]);
}

#[test]
fn zwj_emoji_cluster_is_one_token() {
    let result = suzume_with_symbols().analyze("家族👨\u{200D}👩\u{200D}👧\u{200D}👦");
    assert_eq!(result.len(), 2);
    assert_eq!(result[1].pos, PartOfSpeech::Symbol);
    assert_eq!(result[1].surface, "👨\u{200D}👩\u{200D}👧\u{200D}👦");
}

#[test]
fn consecutive_emoji_grouped() {
    let result = suzume_with_symbols().analyze("楽しい😊🎉");
    assert_eq!(result.len(), 2);
    assert_eq!(result[1].surface, "😊🎉");
}

// -- universal invariants ---------------------------------------------------

const SAMPLES: &[&str] = &[
    "",
    "猫",
    "私は猫が好き",
    "お世話になっております",
    "ＡＰＩを呼ぶ",
    "2024年3月1日に50%オフ",
    "バズった",
    "こんにちは😊",
    "今日はとても良い天気ですね。",
    "httpsではじまるURLはhttps://example.com/aです",
    "ﾃｽﾄﾀﾞｯﾀ",
];

#[test]
fn surfaces_tile_normalized_text() {
    let s = suzume();
    let normalizer = Normalizer::default();
    for &text in SAMPLES {
        let normalized = normalizer.normalize(text);
        let raw = s.analyze_raw(text);
        let joined: String = raw.iter().map(|m| m.surface.as_str()).collect();
        assert_eq!(joined, normalized, "input {:?}", text);
    }
}

#[test]
fn morpheme_spans_are_gapless() {
    let s = suzume();
    for &text in SAMPLES {
        let raw = s.analyze_raw(text);
        let mut pos = 0;
        for m in &raw {
            assert_eq!(m.start, pos, "gap before {:?} in {:?}", m.surface, text);
            assert!(m.end > m.start);
            pos = m.end;
        }
    }
}

#[test]
fn analysis_is_idempotent_on_surfaces() {
    let s = suzume();
    for &text in SAMPLES {
        let first: String = s
            .analyze_raw(text)
            .iter()
            .map(|m| m.surface.as_str())
            .collect();
        let second: String = s
            .analyze_raw(&first)
            .iter()
            .map(|m| m.surface.as_str())
            .collect();
        assert_eq!(first, second, "input {:?}", text);
    }
}

// -- boundary behaviors -----------------------------------------------------

#[test]
fn empty_input_empty_output() {
    assert!(suzume().analyze("").is_empty());
}

#[test]
fn pure_punctuation() {
    let raw = suzume().analyze_raw("。。、！");
    assert!(raw.iter().all(|m| m.pos == PartOfSpeech::Symbol));
    // filtered entirely under default options
    assert!(suzume().analyze("。。、！").is_empty());
}

#[test]
fn single_character_input() {
    let result = suzume().analyze("木");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].surface, "木");
}

#[test]
fn na_adjective_merges_attributive_na() {
    let result = suzume().analyze("静かな場所");
    assert_eq!(result[0].surface, "静かな");
    assert_eq!(result[0].lemma, "静か");
    assert_eq!(result[0].pos, PartOfSpeech::Adjective);
}

#[test]
fn numeric_expression_merges() {
    let result = suzume().analyze("3億5000万円です");
    assert_eq!(result[0].surface, "3億5000万円");
    assert_eq!(result[0].pos, PartOfSpeech::Noun);
}

#[test]
fn i_adjective_past_lemmatized() {
    let result = suzume().analyze("面白かった");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].lemma, "面白い");
    assert_eq!(result[0].pos, PartOfSpeech::Adjective);
}

#[test]
fn search_mode_keeps_long_nouns_together() {
    let mut split = suzume();
    split.set_mode(Mode::Split);
    let mut search = suzume();
    search.set_mode(Mode::Search);
    // both must still tile the text
    for s in [&split, &search] {
        let joined: String = s
            .analyze_raw("日本語の情報技術")
            .iter()
            .map(|m| m.surface.as_str())
            .collect();
        assert_eq!(joined, "日本語の情報技術");
    }
}

#[test]
fn tags_from_mixed_sentence() {
    let tags = suzume().generate_tags("新しい技術を勉強する");
    assert!(tags.contains(&"技術".to_string()), "tags {:?}", tags);
    assert!(tags.contains(&"新しい".to_string()), "tags {:?}", tags);
    assert!(tags.contains(&"勉強する".to_string()), "tags {:?}", tags);
}
