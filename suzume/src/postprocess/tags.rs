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

//! Keyword tag selection from a post-processed morpheme list.

use std::collections::HashSet;

use crate::analysis::morpheme::Morpheme;

/// Tag generation options
#[derive(Clone, Copy, Debug)]
pub struct TagGeneratorOptions {
    /// Emit the lemma rather than the surface
    pub use_lemma: bool,
    pub exclude_formal_nouns: bool,
    pub exclude_low_info: bool,
    pub remove_duplicates: bool,
    /// Minimum tag length in characters
    pub min_tag_length: usize,
    /// Maximum number of tags; 0 means unbounded
    pub max_tags: usize,
}

impl Default for TagGeneratorOptions {
    fn default() -> Self {
        TagGeneratorOptions {
            use_lemma: true,
            exclude_formal_nouns: true,
            exclude_low_info: true,
            remove_duplicates: true,
            min_tag_length: 2,
            max_tags: 0,
        }
    }
}

/// Selects content-word keywords
#[derive(Clone, Copy, Debug, Default)]
pub struct TagGenerator {
    options: TagGeneratorOptions,
}

impl TagGenerator {
    pub fn new(options: TagGeneratorOptions) -> TagGenerator {
        TagGenerator { options }
    }

    pub fn generate(&self, morphemes: &[Morpheme]) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for morpheme in morphemes {
            if !self.should_include(morpheme) {
                continue;
            }
            let tag = if self.options.use_lemma {
                morpheme.lemma_or_surface().to_string()
            } else {
                morpheme.surface.clone()
            };
            if tag.chars().count() < self.options.min_tag_length {
                continue;
            }
            if self.options.remove_duplicates && !seen.insert(tag.clone()) {
                continue;
            }
            tags.push(tag);
            if self.options.max_tags > 0 && tags.len() >= self.options.max_tags {
                break;
            }
        }
        tags
    }

    fn should_include(&self, morpheme: &Morpheme) -> bool {
        if !morpheme.pos.is_content_word() {
            return false;
        }
        if self.options.exclude_formal_nouns && morpheme.features.is_formal_noun {
            return false;
        }
        if self.options.exclude_low_info && morpheme.features.is_low_info {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::morpheme::MorphemeFeatures;
    use crate::grammar::ConjForm;
    use crate::pos::{ConjugationType, PartOfSpeech};

    fn morpheme(surface: &str, lemma: &str, pos: PartOfSpeech) -> Morpheme {
        Morpheme {
            surface: surface.to_string(),
            lemma: lemma.to_string(),
            reading: String::new(),
            pos,
            conj_type: ConjugationType::None,
            conj_form: ConjForm::Base,
            start: 0,
            end: surface.chars().count(),
            features: MorphemeFeatures::default(),
        }
    }

    #[test]
    fn content_words_only() {
        let generator = TagGenerator::default();
        let tags = generator.generate(&[
            morpheme("情報", "情報", PartOfSpeech::Noun),
            morpheme("を", "を", PartOfSpeech::Particle),
            morpheme("調べた", "調べる", PartOfSpeech::Verb),
            morpheme("です", "です", PartOfSpeech::Auxiliary),
        ]);
        assert_eq!(tags, vec!["情報", "調べる"]);
    }

    #[test]
    fn lemma_is_used_by_default() {
        let generator = TagGenerator::default();
        let tags = generator.generate(&[morpheme("書いた", "書く", PartOfSpeech::Verb)]);
        assert_eq!(tags, vec!["書く"]);
    }

    #[test]
    fn min_length_filters_short_tags() {
        let generator = TagGenerator::default();
        let tags = generator.generate(&[
            morpheme("猫", "猫", PartOfSpeech::Noun),
            morpheme("学校", "学校", PartOfSpeech::Noun),
        ]);
        assert_eq!(tags, vec!["学校"]);
    }

    #[test]
    fn formal_nouns_and_low_info_excluded() {
        let generator = TagGenerator::default();
        let mut formal = morpheme("こと", "こと", PartOfSpeech::Noun);
        formal.features.is_formal_noun = true;
        let mut low = morpheme("感じ", "感じ", PartOfSpeech::Noun);
        low.features.is_low_info = true;
        let tags = generator.generate(&[formal, low, morpheme("技術", "技術", PartOfSpeech::Noun)]);
        assert_eq!(tags, vec!["技術"]);
    }

    #[test]
    fn duplicates_removed_preserving_first() {
        let generator = TagGenerator::default();
        let tags = generator.generate(&[
            morpheme("開発", "開発", PartOfSpeech::Noun),
            morpheme("技術", "技術", PartOfSpeech::Noun),
            morpheme("開発", "開発", PartOfSpeech::Noun),
        ]);
        assert_eq!(tags, vec!["開発", "技術"]);
    }

    #[test]
    fn max_tags_caps_output() {
        let generator = TagGenerator::new(TagGeneratorOptions {
            max_tags: 1,
            ..TagGeneratorOptions::default()
        });
        let tags = generator.generate(&[
            morpheme("開発", "開発", PartOfSpeech::Noun),
            morpheme("技術", "技術", PartOfSpeech::Noun),
        ]);
        assert_eq!(tags, vec!["開発"]);
    }
}
