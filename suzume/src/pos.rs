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

//! Part-of-speech and conjugation-type enumerations shared by the whole
//! pipeline. The numeric values of both enums are persisted in the binary
//! dictionary format and must not be reordered.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

/// Part of speech, minimal closed set
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[repr(u8)]
pub enum PartOfSpeech {
    Unknown = 0,
    Noun = 1,
    Verb = 2,
    Adjective = 3,
    Adverb = 4,
    Particle = 5,
    Auxiliary = 6,
    Conjunction = 7,
    Determiner = 8,
    Pronoun = 9,
    Symbol = 10,
    Other = 11,
}

impl PartOfSpeech {
    /// Stable string surface used by output formats and tests
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Adjective => "ADJ",
            PartOfSpeech::Adverb => "ADV",
            PartOfSpeech::Particle => "PARTICLE",
            PartOfSpeech::Auxiliary => "AUX",
            PartOfSpeech::Conjunction => "CONJ",
            PartOfSpeech::Determiner => "DET",
            PartOfSpeech::Pronoun => "PRON",
            PartOfSpeech::Symbol => "SYMBOL",
            PartOfSpeech::Other | PartOfSpeech::Unknown => "OTHER",
        }
    }

    /// Japanese name, used by the `-f tsv` output
    pub fn as_japanese(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "名詞",
            PartOfSpeech::Verb => "動詞",
            PartOfSpeech::Adjective => "形容詞",
            PartOfSpeech::Adverb => "副詞",
            PartOfSpeech::Particle => "助詞",
            PartOfSpeech::Auxiliary => "助動詞",
            PartOfSpeech::Conjunction => "接続詞",
            PartOfSpeech::Determiner => "連体詞",
            PartOfSpeech::Pronoun => "代名詞",
            PartOfSpeech::Symbol => "記号",
            PartOfSpeech::Other | PartOfSpeech::Unknown => "その他",
        }
    }

    pub fn from_u8(v: u8) -> PartOfSpeech {
        match v {
            1 => PartOfSpeech::Noun,
            2 => PartOfSpeech::Verb,
            3 => PartOfSpeech::Adjective,
            4 => PartOfSpeech::Adverb,
            5 => PartOfSpeech::Particle,
            6 => PartOfSpeech::Auxiliary,
            7 => PartOfSpeech::Conjunction,
            8 => PartOfSpeech::Determiner,
            9 => PartOfSpeech::Pronoun,
            10 => PartOfSpeech::Symbol,
            11 => PartOfSpeech::Other,
            _ => PartOfSpeech::Unknown,
        }
    }

    /// Content words carry meaning on their own and qualify for tags
    pub fn is_content_word(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Noun | PartOfSpeech::Verb | PartOfSpeech::Adjective | PartOfSpeech::Adverb
        )
    }

    pub fn is_function_word(&self) -> bool {
        matches!(self, PartOfSpeech::Particle | PartOfSpeech::Auxiliary)
    }
}

impl FromStr for PartOfSpeech {
    type Err = String;

    /// Accepts the output surface plus the synonyms used in dictionary
    /// sources (long English names and Japanese names)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOUN" | "名詞" => Ok(PartOfSpeech::Noun),
            // proper nouns fold into nouns; the analysis does not keep them apart
            "PROPN" => Ok(PartOfSpeech::Noun),
            "VERB" | "動詞" => Ok(PartOfSpeech::Verb),
            "ADJ" | "ADJECTIVE" | "形容詞" => Ok(PartOfSpeech::Adjective),
            "ADV" | "ADVERB" | "副詞" => Ok(PartOfSpeech::Adverb),
            "PARTICLE" | "助詞" => Ok(PartOfSpeech::Particle),
            "AUX" | "AUXILIARY" | "助動詞" => Ok(PartOfSpeech::Auxiliary),
            "CONJ" | "CONJUNCTION" | "接続詞" => Ok(PartOfSpeech::Conjunction),
            "DET" | "DETERMINER" | "連体詞" => Ok(PartOfSpeech::Determiner),
            "PRON" | "PRONOUN" | "代名詞" => Ok(PartOfSpeech::Pronoun),
            "SYM" | "SYMBOL" | "記号" => Ok(PartOfSpeech::Symbol),
            "PHRASE" | "INTJ" | "OTHER" | "その他" => Ok(PartOfSpeech::Other),
            _ => Err(format!("invalid part of speech: {}", s)),
        }
    }
}

impl Display for PartOfSpeech {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conjugation paradigm of a verb or adjective
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[repr(u8)]
pub enum ConjugationType {
    None = 0,
    Ichidan = 1,
    GodanKa = 2,
    GodanGa = 3,
    GodanSa = 4,
    GodanTa = 5,
    GodanNa = 6,
    GodanBa = 7,
    GodanMa = 8,
    GodanRa = 9,
    GodanWa = 10,
    Suru = 11,
    Kuru = 12,
    IAdjective = 13,
    NaAdjective = 14,
}

impl ConjugationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConjugationType::None => "NONE",
            ConjugationType::Ichidan => "ICHIDAN",
            ConjugationType::GodanKa => "GODAN_KA",
            ConjugationType::GodanGa => "GODAN_GA",
            ConjugationType::GodanSa => "GODAN_SA",
            ConjugationType::GodanTa => "GODAN_TA",
            ConjugationType::GodanNa => "GODAN_NA",
            ConjugationType::GodanBa => "GODAN_BA",
            ConjugationType::GodanMa => "GODAN_MA",
            ConjugationType::GodanRa => "GODAN_RA",
            ConjugationType::GodanWa => "GODAN_WA",
            ConjugationType::Suru => "SURU",
            ConjugationType::Kuru => "KURU",
            ConjugationType::IAdjective => "I_ADJ",
            ConjugationType::NaAdjective => "NA_ADJ",
        }
    }

    pub fn from_u8(v: u8) -> ConjugationType {
        match v {
            1 => ConjugationType::Ichidan,
            2 => ConjugationType::GodanKa,
            3 => ConjugationType::GodanGa,
            4 => ConjugationType::GodanSa,
            5 => ConjugationType::GodanTa,
            6 => ConjugationType::GodanNa,
            7 => ConjugationType::GodanBa,
            8 => ConjugationType::GodanMa,
            9 => ConjugationType::GodanRa,
            10 => ConjugationType::GodanWa,
            11 => ConjugationType::Suru,
            12 => ConjugationType::Kuru,
            13 => ConjugationType::IAdjective,
            14 => ConjugationType::NaAdjective,
            _ => ConjugationType::None,
        }
    }

    /// Godan paradigms share the onbin/te-form machinery
    pub fn is_godan(&self) -> bool {
        matches!(
            self,
            ConjugationType::GodanKa
                | ConjugationType::GodanGa
                | ConjugationType::GodanSa
                | ConjugationType::GodanTa
                | ConjugationType::GodanNa
                | ConjugationType::GodanBa
                | ConjugationType::GodanMa
                | ConjugationType::GodanRa
                | ConjugationType::GodanWa
        )
    }
}

impl FromStr for ConjugationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "NONE" => Ok(ConjugationType::None),
            "ICHIDAN" => Ok(ConjugationType::Ichidan),
            "GODAN_KA" => Ok(ConjugationType::GodanKa),
            "GODAN_GA" => Ok(ConjugationType::GodanGa),
            "GODAN_SA" => Ok(ConjugationType::GodanSa),
            "GODAN_TA" => Ok(ConjugationType::GodanTa),
            "GODAN_NA" => Ok(ConjugationType::GodanNa),
            "GODAN_BA" => Ok(ConjugationType::GodanBa),
            "GODAN_MA" => Ok(ConjugationType::GodanMa),
            "GODAN_RA" => Ok(ConjugationType::GodanRa),
            "GODAN_WA" => Ok(ConjugationType::GodanWa),
            "SURU" => Ok(ConjugationType::Suru),
            "KURU" => Ok(ConjugationType::Kuru),
            "I_ADJ" => Ok(ConjugationType::IAdjective),
            "NA_ADJ" => Ok(ConjugationType::NaAdjective),
            _ => Err(format!("invalid conjugation type: {}", s)),
        }
    }
}

impl Display for ConjugationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_string_round_trip() {
        let all = [
            PartOfSpeech::Noun,
            PartOfSpeech::Verb,
            PartOfSpeech::Adjective,
            PartOfSpeech::Adverb,
            PartOfSpeech::Particle,
            PartOfSpeech::Auxiliary,
            PartOfSpeech::Conjunction,
            PartOfSpeech::Determiner,
            PartOfSpeech::Pronoun,
            PartOfSpeech::Symbol,
            PartOfSpeech::Other,
        ];
        for pos in &all {
            assert_eq!(*pos, pos.as_str().parse().unwrap());
        }
    }

    #[test]
    fn pos_synonyms() {
        assert_eq!(PartOfSpeech::Noun, "名詞".parse().unwrap());
        assert_eq!(PartOfSpeech::Noun, "PROPN".parse().unwrap());
        assert_eq!(PartOfSpeech::Adjective, "ADJECTIVE".parse().unwrap());
        assert_eq!(PartOfSpeech::Other, "INTJ".parse().unwrap());
        assert_eq!(PartOfSpeech::Other, "PHRASE".parse().unwrap());
        assert!("FOO".parse::<PartOfSpeech>().is_err());
    }

    #[test]
    fn conj_type_numeric_round_trip() {
        for v in 0u8..=14 {
            let ct = ConjugationType::from_u8(v);
            assert_eq!(ct as u8, v);
        }
        assert_eq!(ConjugationType::from_u8(200), ConjugationType::None);
    }

    #[test]
    fn content_and_function_words() {
        assert!(PartOfSpeech::Noun.is_content_word());
        assert!(PartOfSpeech::Adverb.is_content_word());
        assert!(!PartOfSpeech::Particle.is_content_word());
        assert!(PartOfSpeech::Particle.is_function_word());
        assert!(PartOfSpeech::Auxiliary.is_function_word());
        assert!(!PartOfSpeech::Symbol.is_function_word());
    }
}
