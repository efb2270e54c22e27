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

//! Pre-tokenizer: carves inviolable spans out of the normalized text before
//! lattice construction. Locked spans (URLs, dates, identifiers, ...) bypass
//! the lattice entirely and surface as a single morpheme.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Priority order is fixed; first match wins at a given position.
    static ref LOCKED_PATTERNS: Vec<Regex> = vec![
        // URL: scheme + ASCII URL chars, stops at whitespace or Japanese
        Regex::new(r"^https?://[-A-Za-z0-9._~:/?#\[\]@!$&'()*+,;=%]+").unwrap(),
        // E-mail, RFC-5322 shape approximation
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+").unwrap(),
        // Version literal v2.0.1
        Regex::new(r"^v[0-9]+(?:\.[0-9]+)+").unwrap(),
        // Storage size / percentage: 50%, 1.5GB, 300mb
        Regex::new(r"^[0-9]+(?:\.[0-9]+)?(?:%|[GgMmKkTt][Bb])").unwrap(),
        // Full date with kanji markers
        Regex::new(r"^[0-9]{4}年[0-9]{1,2}月[0-9]{1,2}日").unwrap(),
        // Hashtag over a single Japanese/Latin script run
        Regex::new(r"^#(?:[\p{Hiragana}\p{Katakana}\p{Han}ー]+|[A-Za-z0-9_]+)").unwrap(),
        // Mention
        Regex::new(r"^@[A-Za-z0-9_]+").unwrap(),
        // ASCII identifier run (keeps CamelCase/snake_case whole)
        Regex::new(r"^[A-Za-z][A-Za-z0-9_]*").unwrap(),
    ];
}

/// A span of the normalized text, either locked (verbatim single morpheme)
/// or open (goes through the lattice)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Segment<'a> {
    pub text: &'a str,
    /// Character index of the first scalar in the normalized text
    pub char_start: usize,
    pub locked: bool,
}

/// Splits normalized text into locked and open segments
#[derive(Clone, Copy, Debug, Default)]
pub struct PreTokenizer;

impl PreTokenizer {
    pub fn new() -> PreTokenizer {
        PreTokenizer
    }

    pub fn pretokenize<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut open_start = 0usize; // byte offset of the pending open segment
        let mut open_char_start = 0usize;
        let mut char_pos = 0usize;
        let mut byte_pos = 0usize;

        while byte_pos < text.len() {
            let rest = &text[byte_pos..];
            if let Some(m) = match_locked(rest) {
                if byte_pos > open_start {
                    segments.push(Segment {
                        text: &text[open_start..byte_pos],
                        char_start: open_char_start,
                        locked: false,
                    });
                }
                let locked_text = &rest[..m];
                segments.push(Segment {
                    text: locked_text,
                    char_start: char_pos,
                    locked: true,
                });
                char_pos += locked_text.chars().count();
                byte_pos += m;
                open_start = byte_pos;
                open_char_start = char_pos;
            } else {
                let c = rest.chars().next().unwrap();
                byte_pos += c.len_utf8();
                char_pos += 1;
            }
        }

        if byte_pos > open_start {
            segments.push(Segment {
                text: &text[open_start..byte_pos],
                char_start: open_char_start,
                locked: false,
            });
        }
        segments
    }
}

/// Byte length of the longest locked pattern anchored at the start of `rest`
fn match_locked(rest: &str) -> Option<usize> {
    for pattern in LOCKED_PATTERNS.iter() {
        if let Some(m) = pattern.find(rest) {
            debug_assert_eq!(m.start(), 0);
            return Some(m.end());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pretok(text: &str) -> Vec<Segment> {
        PreTokenizer::new().pretokenize(text)
    }

    fn locked<'a>(segments: &[Segment<'a>]) -> Vec<&'a str> {
        segments.iter().filter(|s| s.locked).map(|s| s.text).collect()
    }

    #[test]
    fn empty_text() {
        assert!(pretok("").is_empty());
    }

    #[test]
    fn plain_japanese_is_one_open_segment() {
        let segs = pretok("私は猫が好き");
        assert_eq!(segs.len(), 1);
        assert!(!segs[0].locked);
        assert_eq!(segs[0].char_start, 0);
    }

    #[test]
    fn url_is_locked() {
        let segs = pretok("詳細はhttps://example.com/path?q=1を見て");
        assert_eq!(locked(&segs), vec!["https://example.com/path?q=1"]);
        // url stops at the Japanese scalar
        assert_eq!(segs.last().unwrap().text, "を見て");
    }

    #[test]
    fn email_is_locked() {
        let segs = pretok("連絡はinfo@example.co.jpまで");
        assert_eq!(locked(&segs), vec!["info@example.co.jp"]);
    }

    #[test]
    fn version_literal() {
        let segs = pretok("v2.0.1をリリース");
        assert_eq!(locked(&segs), vec!["v2.0.1"]);
    }

    #[test]
    fn storage_and_percent() {
        assert_eq!(locked(&pretok("50%の確率")), vec!["50%"]);
        assert_eq!(locked(&pretok("容量は1.5gbです")), vec!["1.5gb"]);
    }

    #[test]
    fn full_date() {
        let segs = pretok("2024年3月1日に開催");
        assert_eq!(locked(&segs), vec!["2024年3月1日"]);
    }

    #[test]
    fn hashtag_and_mention() {
        assert_eq!(locked(&pretok("#東京 で@taro_devと合流")), vec!["#東京", "@taro_dev"]);
    }

    #[test]
    fn ascii_identifier_run() {
        let segs = pretok("apiを呼ぶ");
        assert_eq!(locked(&segs), vec!["api"]);
        assert_eq!(segs[1].text, "を呼ぶ");
        assert_eq!(segs[1].char_start, 3);
    }

    #[test]
    fn snake_case_kept_whole() {
        assert_eq!(locked(&pretok("parse_textという関数")), vec!["parse_text"]);
    }

    #[test]
    fn char_offsets_flow_through() {
        let segs = pretok("見てhttps://a.bです");
        assert_eq!(segs[0].char_start, 0);
        assert_eq!(segs[1].char_start, 2);
        assert!(segs[1].locked);
        assert_eq!(segs[2].char_start, 2 + "https://a.b".chars().count());
    }

    #[test]
    fn version_beats_identifier() {
        // "v2" alone would match the identifier pattern; version wins
        assert_eq!(locked(&pretok("v1.2と入力")), vec!["v1.2"]);
    }
}
