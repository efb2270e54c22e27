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

//! Script predicates shared by the unknown-word generator, the inflection
//! analyzer and the pre-tokenizer.

pub fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{309F}').contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c) || c == 'ー'
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || c == '々'
}

pub fn is_japanese(c: char) -> bool {
    is_hiragana(c) || is_katakana(c) || is_kanji(c)
}

/// i-row hiragana (stems of ichidan verbs may end here)
pub fn is_i_row(c: char) -> bool {
    matches!(
        c,
        'い' | 'き' | 'ぎ' | 'し' | 'じ' | 'ち' | 'ぢ' | 'に' | 'ひ' | 'び' | 'ぴ' | 'み' | 'り'
    )
}

/// e-row hiragana (stems of ichidan verbs may end here)
pub fn is_e_row(c: char) -> bool {
    matches!(
        c,
        'え' | 'け' | 'げ' | 'せ' | 'ぜ' | 'て' | 'で' | 'ね' | 'へ' | 'べ' | 'ぺ' | 'め' | 'れ'
    )
}

/// Symbol-class scalar: punctuation, technical symbols, emoji and the
/// modifier scalars that extend an emoji cluster
pub fn is_symbol(c: char) -> bool {
    let cp = c as u32;
    if c.is_ascii() {
        return c.is_ascii_punctuation();
    }
    matches!(cp,
        0x2000..=0x206F        // general punctuation (incl. ZWJ)
        | 0x2100..=0x2BFF      // letterlike, arrows, math, technical, misc symbols
        | 0x3000..=0x303F      // CJK symbols and punctuation
        | 0x30FB               // katakana middle dot
        | 0xFE0E..=0xFE0F      // variation selectors
        | 0xFF01..=0xFF0F      // full-width punctuation
        | 0xFF1A..=0xFF20
        | 0xFF3B..=0xFF40
        | 0xFF5B..=0xFF65
        | 0x1F000..=0x1FAFF    // emoji blocks
        | 0x1FB00..=0x1FBFF
        | 0x2600..=0x27BF      // misc symbols and dingbats
    )
}

/// Scalar that continues the preceding symbol run rather than starting its
/// own token (ZWJ, variation selectors, skin tones)
pub fn is_symbol_continuation(c: char) -> bool {
    let cp = c as u32;
    matches!(cp, 0x200D | 0xFE0E..=0xFE0F | 0x1F3FB..=0x1F3FF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_predicates() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(is_kanji('日'));
        assert!(is_kanji('々'));
        assert!(!is_kanji('a'));
        assert!(is_japanese('猫'));
        assert!(!is_japanese('x'));
    }

    #[test]
    fn row_predicates() {
        assert!(is_i_row('み'));
        assert!(is_e_row('べ'));
        assert!(!is_i_row('か'));
        assert!(!is_e_row('お'));
    }

    #[test]
    fn symbols_and_continuations() {
        assert!(is_symbol('!'));
        assert!(is_symbol('。'));
        assert!(is_symbol('😊'));
        assert!(is_symbol('⌚'));
        assert!(is_symbol('❤'));
        assert!(!is_symbol('あ'));
        assert!(is_symbol_continuation('\u{200D}'));
        assert!(is_symbol_continuation('\u{FE0F}'));
        assert!(is_symbol_continuation('\u{1F3FB}'));
        assert!(!is_symbol_continuation('😊'));
    }
}
