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

//! Unknown-word edge generation from character-class runs.
//!
//! Every lattice position gets at least one unknown edge, which is what
//! guarantees BOS→EOS connectivity regardless of dictionary coverage.

use crate::chars;
use crate::pos::PartOfSpeech;

/// Character class; every scalar belongs to exactly one
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CharClass {
    Hiragana,
    Katakana,
    Kanji,
    LatinAlpha,
    Digit,
    Symbol,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> CharClass {
        if chars::is_hiragana(c) {
            CharClass::Hiragana
        } else if chars::is_katakana(c) {
            CharClass::Katakana
        } else if chars::is_kanji(c) {
            CharClass::Kanji
        } else if c.is_ascii_alphabetic() {
            CharClass::LatinAlpha
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else if chars::is_symbol(c) || c.is_whitespace() {
            CharClass::Symbol
        } else {
            CharClass::Other
        }
    }

    /// Authored base cost per class. Symbols are cheap so symbol runs win
    /// over being chunked into nouns.
    fn base_cost(&self) -> f32 {
        match self {
            CharClass::Hiragana => 1.1,
            CharClass::Katakana => 0.8,
            CharClass::Kanji => 0.9,
            CharClass::LatinAlpha => 0.6,
            CharClass::Digit => 0.5,
            CharClass::Symbol => 0.2,
            CharClass::Other => 1.0,
        }
    }

    pub fn pos(&self) -> PartOfSpeech {
        match self {
            CharClass::Symbol => PartOfSpeech::Symbol,
            CharClass::Other => PartOfSpeech::Other,
            _ => PartOfSpeech::Noun,
        }
    }
}

/// Options for unknown-word generation
#[derive(Clone, Copy, Debug)]
pub struct UnknownOptions {
    /// Cap on run length in characters; longer runs split into adjacent
    /// edges, which keeps edge emission O(n·k)
    pub max_run_length: usize,
}

impl Default for UnknownOptions {
    fn default() -> Self {
        UnknownOptions { max_run_length: 64 }
    }
}

/// One proposed unknown edge, by character positions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnknownWord {
    pub end: usize,
    pub class: CharClass,
    pub cost: f32,
}

const LENGTH_PENALTY: f32 = 0.3;

/// Generates unknown-word edges for runs of same-class scalars
#[derive(Clone, Copy, Debug, Default)]
pub struct UnknownWordGenerator {
    options: UnknownOptions,
}

impl UnknownWordGenerator {
    pub fn new(options: UnknownOptions) -> UnknownWordGenerator {
        UnknownWordGenerator { options }
    }

    /// Unknown words starting at character position `start`
    pub fn words_at(&self, text: &[char], start: usize) -> Vec<UnknownWord> {
        let mut words = Vec::new();
        if start >= text.len() {
            return words;
        }

        let class = CharClass::of(text[start]);
        let run_len = self.run_length(text, start, class);

        match class {
            // katakana and kanji runs propose every prefix so Viterbi can
            // pick the best split
            CharClass::Katakana | CharClass::Kanji => {
                for len in 1..=run_len {
                    words.push(UnknownWord {
                        end: start + len,
                        class,
                        cost: cost_of(class, len),
                    });
                }
            }
            // hiragana runs are normally carved up by dictionary and
            // grammar hits; propose only the full run as a fallback
            CharClass::Hiragana => {
                words.push(UnknownWord {
                    end: start + run_len,
                    class,
                    cost: cost_of(class, run_len),
                });
            }
            // one edge per contiguous symbol span (emoji clusters stay whole)
            CharClass::Symbol => {
                words.push(UnknownWord {
                    end: start + run_len,
                    class,
                    cost: cost_of(class, run_len),
                });
            }
            CharClass::LatinAlpha | CharClass::Digit => {
                words.push(UnknownWord {
                    end: start + run_len,
                    class,
                    cost: cost_of(class, run_len),
                });
            }
            CharClass::Other => {
                words.push(UnknownWord {
                    end: start + 1,
                    class,
                    cost: cost_of(class, 1),
                });
            }
        }
        words
    }

    /// Length of the same-class run at `start`, capped. ZWJ, variation
    /// selectors and skin tones extend a symbol run.
    fn run_length(&self, text: &[char], start: usize, class: CharClass) -> usize {
        let mut len = 1;
        while start + len < text.len() && len < self.options.max_run_length {
            let c = text[start + len];
            let continues = if class == CharClass::Symbol {
                CharClass::of(c) == CharClass::Symbol || chars::is_symbol_continuation(c)
            } else {
                CharClass::of(c) == class
            };
            if !continues {
                break;
            }
            len += 1;
        }
        len
    }
}

fn cost_of(class: CharClass, run_len: usize) -> f32 {
    class.base_cost() + LENGTH_PENALTY * run_len.saturating_sub(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars_of(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn classify() {
        assert_eq!(CharClass::of('あ'), CharClass::Hiragana);
        assert_eq!(CharClass::of('ア'), CharClass::Katakana);
        assert_eq!(CharClass::of('猫'), CharClass::Kanji);
        assert_eq!(CharClass::of('a'), CharClass::LatinAlpha);
        assert_eq!(CharClass::of('7'), CharClass::Digit);
        assert_eq!(CharClass::of('😊'), CharClass::Symbol);
        assert_eq!(CharClass::of('。'), CharClass::Symbol);
    }

    #[test]
    fn kanji_run_emits_all_prefixes() {
        let gen = UnknownWordGenerator::default();
        let text = chars_of("理性的だ");
        let words = gen.words_at(&text, 0);
        let ends: Vec<usize> = words.iter().map(|w| w.end).collect();
        assert_eq!(ends, vec![1, 2, 3]);
        // cost grows with length
        assert!(words[0].cost < words[2].cost);
    }

    #[test]
    fn hiragana_run_emits_single_longest() {
        let gen = UnknownWordGenerator::default();
        let text = chars_of("こんにちは");
        let words = gen.words_at(&text, 0);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].end, 5);
        // mid-run positions are still covered
        let words = gen.words_at(&text, 2);
        assert_eq!(words[0].end, 5);
    }

    #[test]
    fn katakana_run_stops_at_class_change() {
        let gen = UnknownWordGenerator::default();
        let text = chars_of("バズった");
        let words = gen.words_at(&text, 0);
        let ends: Vec<usize> = words.iter().map(|w| w.end).collect();
        assert_eq!(ends, vec![1, 2]); // バ, バズ
    }

    #[test]
    fn prolonged_mark_stays_in_katakana_run() {
        let gen = UnknownWordGenerator::default();
        let text = chars_of("サーバー");
        let words = gen.words_at(&text, 0);
        assert_eq!(words.last().unwrap().end, 4);
    }

    #[test]
    fn emoji_cluster_is_one_symbol_span() {
        let gen = UnknownWordGenerator::default();
        // ZWJ family emoji: 7 scalars, one token
        let text = chars_of("👨\u{200D}👩\u{200D}👧\u{200D}👦");
        let words = gen.words_at(&text, 0);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].end, text.len());
        assert_eq!(words[0].class, CharClass::Symbol);
    }

    #[test]
    fn skin_tone_and_variation_selector_continue() {
        let gen = UnknownWordGenerator::default();
        let text = chars_of("👍\u{1F3FB}");
        assert_eq!(gen.words_at(&text, 0)[0].end, 2);
        let text = chars_of("❤\u{FE0F}");
        assert_eq!(gen.words_at(&text, 0)[0].end, 2);
    }

    #[test]
    fn consecutive_emoji_group() {
        let gen = UnknownWordGenerator::default();
        let text = chars_of("😊🎉");
        let words = gen.words_at(&text, 0);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].end, 2);
    }

    #[test]
    fn run_cap_is_respected() {
        let gen = UnknownWordGenerator::new(UnknownOptions { max_run_length: 4 });
        let text: Vec<char> = std::iter::repeat('ア').take(10).collect();
        let words = gen.words_at(&text, 0);
        assert_eq!(words.last().unwrap().end, 4);
        // the next position still produces coverage
        assert!(!gen.words_at(&text, 4).is_empty());
    }

    #[test]
    fn symbol_cost_is_low() {
        let gen = UnknownWordGenerator::default();
        let text = chars_of("😊");
        assert!(gen.words_at(&text, 0)[0].cost < 0.5);
    }

    #[test]
    fn pos_mapping() {
        assert_eq!(CharClass::Symbol.pos(), PartOfSpeech::Symbol);
        assert_eq!(CharClass::Other.pos(), PartOfSpeech::Other);
        assert_eq!(CharClass::Kanji.pos(), PartOfSpeech::Noun);
    }
}
