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

//! The high-level entry point: analyzer plus post-processing and tag
//! generation, with dictionary auto-loading from the standard paths.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, AnalyzerOptions};
use crate::analysis::morpheme::Morpheme;
use crate::analysis::Mode;
use crate::dic::binary::BinaryDictionary;
use crate::dic::user_dict::UserDictionary;
use crate::error::SuzumeResult;
use crate::normalize::NormalizeOptions;
use crate::postprocess::tags::{TagGenerator, TagGeneratorOptions};
use crate::postprocess::{PostprocessOptions, Postprocessor};

const CORE_DICT_FILE: &str = "core.dic";
const USER_DICT_FILE: &str = "user.dic";

/// Facade options
#[derive(Clone, Copy, Debug)]
pub struct SuzumeOptions {
    pub mode: Mode,
    pub normalize: NormalizeOptions,
    pub lemmatize: bool,
    pub merge_noun_compounds: bool,
    pub remove_symbols: bool,
    pub min_surface_length: usize,
    pub tag_options: TagGeneratorOptions,
    /// Look for core.dic / user.dic in the standard search paths
    pub auto_load_dictionaries: bool,
}

impl Default for SuzumeOptions {
    fn default() -> Self {
        SuzumeOptions {
            mode: Mode::Normal,
            normalize: NormalizeOptions::default(),
            lemmatize: true,
            merge_noun_compounds: false,
            remove_symbols: true,
            min_surface_length: 1,
            tag_options: TagGeneratorOptions::default(),
            auto_load_dictionaries: true,
        }
    }
}

/// Japanese morphological analyzer and tag generator
pub struct Suzume {
    options: SuzumeOptions,
    analyzer: Analyzer,
}

impl Default for Suzume {
    fn default() -> Self {
        Suzume::new()
    }
}

impl Suzume {
    pub fn new() -> Suzume {
        Suzume::with_options(SuzumeOptions::default())
    }

    pub fn with_options(options: SuzumeOptions) -> Suzume {
        let mut analyzer = Analyzer::new(AnalyzerOptions {
            mode: options.mode,
            normalize: options.normalize,
            ..AnalyzerOptions::default()
        });

        if options.auto_load_dictionaries {
            if let Some(path) = find_dictionary(CORE_DICT_FILE) {
                let _ = load_any_dictionary(&mut analyzer, &path);
            }
            if let Some(path) = find_dictionary(USER_DICT_FILE) {
                let _ = load_any_dictionary(&mut analyzer, &path);
            }
        }

        Suzume { options, analyzer }
    }

    pub fn mode(&self) -> Mode {
        self.analyzer.mode()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.options.mode = mode;
        self.analyzer.set_mode(mode);
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Load a user dictionary file (TSV/CSV source or compiled binary,
    /// sniffed by magic)
    pub fn load_user_dictionary<P: AsRef<Path>>(&mut self, path: P) -> SuzumeResult<()> {
        load_any_dictionary(&mut self.analyzer, path.as_ref())
    }

    /// Load a user dictionary from TSV/CSV text
    pub fn load_user_dictionary_str(&mut self, content: &str) -> SuzumeResult<()> {
        let dict = UserDictionary::from_str_content(content)?;
        self.analyzer.add_user_dictionary(Arc::new(dict));
        Ok(())
    }

    pub fn add_user_dictionary(&mut self, dict: Arc<UserDictionary>) {
        self.analyzer.add_user_dictionary(dict);
    }

    /// Analyze text and post-process the morphemes
    pub fn analyze(&self, text: &str) -> Vec<Morpheme> {
        let raw = self.analyzer.analyze(text);
        self.postprocessor().process(raw)
    }

    /// Analyze without post-processing; output tiles the normalized text
    pub fn analyze_raw(&self, text: &str) -> Vec<Morpheme> {
        self.analyzer.analyze(text)
    }

    /// Keyword tags for the text
    pub fn generate_tags(&self, text: &str) -> Vec<String> {
        let morphemes = self.analyze(text);
        TagGenerator::new(self.options.tag_options).generate(&morphemes)
    }

    fn postprocessor(&self) -> Postprocessor {
        Postprocessor::new(
            Some(self.analyzer.dictionary_manager()),
            PostprocessOptions {
                lemmatize: self.options.lemmatize,
                merge_noun_compounds: self.options.merge_noun_compounds,
                remove_symbols: self.options.remove_symbols,
                min_surface_length: self.options.min_surface_length,
            },
        )
    }

    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

/// Dictionary search order: env override, working dir, home, system
fn dictionary_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(dir) = std::env::var("SUZUME_DATA_DIR") {
        paths.push(PathBuf::from(dir));
    }
    paths.push(PathBuf::from("./data"));
    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(home).join(".suzume"));
    }
    paths.push(PathBuf::from("/usr/local/share/suzume"));
    paths.push(PathBuf::from("/usr/share/suzume"));
    paths
}

fn find_dictionary(filename: &str) -> Option<PathBuf> {
    dictionary_search_paths()
        .into_iter()
        .map(|dir| dir.join(filename))
        .find(|p| p.is_file())
}

/// Compiled dictionaries start with the SZMD magic; anything else is
/// treated as TSV/CSV source
fn load_any_dictionary(analyzer: &mut Analyzer, path: &Path) -> SuzumeResult<()> {
    let is_binary = std::fs::read(path)
        .map(|data| data.len() >= 4 && &data[0..4] == b"SZMD")
        .unwrap_or(false);
    if is_binary {
        let dict = BinaryDictionary::from_file(path)?;
        analyzer.set_core_dictionary(Arc::new(dict));
    } else {
        let dict = UserDictionary::from_file(path)?;
        analyzer.add_user_dictionary(Arc::new(dict));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::PartOfSpeech;

    fn suzume() -> Suzume {
        Suzume::with_options(SuzumeOptions {
            auto_load_dictionaries: false,
            ..SuzumeOptions::default()
        })
    }

    #[test]
    fn analyze_strips_symbols_by_default() {
        let s = suzume();
        let result = s.analyze("こんにちは😊");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].surface, "こんにちは");
    }

    #[test]
    fn preserve_symbols_option() {
        let s = Suzume::with_options(SuzumeOptions {
            remove_symbols: false,
            auto_load_dictionaries: false,
            ..SuzumeOptions::default()
        });
        let result = s.analyze("こんにちは😊");
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].surface, "😊");
        assert_eq!(result[1].pos, PartOfSpeech::Symbol);
    }

    #[test]
    fn tags_pick_content_words() {
        let s = suzume();
        let tags = s.generate_tags("技術の情報を調べる");
        assert!(tags.contains(&"技術".to_string()));
        assert!(tags.contains(&"情報".to_string()));
        assert!(tags.contains(&"調べる".to_string()));
        assert!(!tags.contains(&"の".to_string()));
    }

    #[test]
    fn user_dictionary_from_str() {
        let mut s = suzume();
        s.load_user_dictionary_str("ライブラズ,NOUN,0.2\n").unwrap();
        let result = s.analyze("ライブラズです");
        assert_eq!(result[0].surface, "ライブラズ");
        assert!(result[0].features.is_user_dict);
    }

    #[test]
    fn binary_dictionary_file_sniffed(){
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("core.dic");
        let mut writer = crate::dic::binary::BinaryDictWriter::new();
        writer.add_entry(crate::dic::DictionaryEntry::new(
            "スズメ",
            PartOfSpeech::Noun,
            0.3,
        ));
        writer.write_to_file(&path).unwrap();

        let mut s = suzume();
        s.load_user_dictionary(&path).unwrap();
        let result = s.analyze("スズメがいる");
        assert_eq!(result[0].surface, "スズメ");
        assert!(result[0].features.is_dictionary);
    }

    #[test]
    fn version_is_set() {
        assert!(!Suzume::version().is_empty());
    }
}
