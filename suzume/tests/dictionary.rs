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

//! Dictionary build / load round-trips through real files.

use std::sync::Arc;

use suzume::dic::binary::{BinaryDictWriter, BinaryDictionary};
use suzume::dic::compiler::{parse_tsv, DictCompiler};
use suzume::dic::user_dict::UserDictionary;
use suzume::dic::{DictionaryEntry, EntryFlags};
use suzume::prelude::*;

#[test]
fn single_entry_round_trip() {
    let mut writer = BinaryDictWriter::new();
    writer.add_entry(DictionaryEntry::new("test", PartOfSpeech::Noun, 1.5));
    let image = writer.build().unwrap();

    let dict = BinaryDictionary::from_bytes(&image).unwrap();
    let hits = dict.lookup("test", 0);
    assert_eq!(hits.len(), 1);
    let (entry, len) = hits[0];
    assert_eq!(len, 4);
    assert!((entry.cost - 1.5).abs() < 0.01);
}

#[test]
fn entry_set_survives_round_trip() {
    let entries = vec![
        DictionaryEntry::new("ねこ", PartOfSpeech::Noun, 0.4),
        DictionaryEntry::new("ねこじた", PartOfSpeech::Noun, 0.7),
        DictionaryEntry::new("はしる", PartOfSpeech::Verb, 0.5)
            .with_conj(ConjugationType::GodanRa),
        DictionaryEntry::new("こと", PartOfSpeech::Noun, 0.6).with_flags(EntryFlags::FORMAL_NOUN),
        DictionaryEntry::new("たべた", PartOfSpeech::Verb, 0.8)
            .with_conj(ConjugationType::Ichidan)
            .with_lemma("たべる"),
    ];

    let mut writer = BinaryDictWriter::new();
    for e in &entries {
        writer.add_entry(e.clone());
    }
    let dict = BinaryDictionary::from_bytes(&writer.build().unwrap()).unwrap();
    assert_eq!(dict.len(), entries.len());

    let mut sorted = entries.clone();
    sorted.sort_by(|a, b| a.surface.cmp(&b.surface));
    for (loaded, original) in dict.entries().iter().zip(&sorted) {
        assert_eq!(loaded.surface, original.surface);
        assert_eq!(loaded.pos, original.pos);
        assert_eq!(loaded.conj_type, original.conj_type);
        assert_eq!(loaded.flags, original.flags);
        assert_eq!(loaded.lemma, original.lemma);
        assert!((loaded.cost - original.cost).abs() < 0.01);
    }
}

#[test]
fn compile_to_file_and_analyze() {
    let dir = tempfile::tempdir().unwrap();
    let dic_path = dir.path().join("custom.dic");

    let entries = parse_tsv("ライブラズ\tNOUN\tらいぶらず\t0.2\n").unwrap();
    let image = DictCompiler::new().compile(&entries).unwrap();
    std::fs::write(&dic_path, &image).unwrap();

    let mut suzume = Suzume::with_options(SuzumeOptions {
        auto_load_dictionaries: false,
        ..SuzumeOptions::default()
    });
    suzume.load_user_dictionary(&dic_path).unwrap();

    let result = suzume.analyze("ライブラズの技術");
    assert_eq!(result[0].surface, "ライブラズ");
    assert!(result[0].features.is_dictionary);
}

#[test]
fn user_dictionary_entry_beats_unknown() {
    let mut suzume = Suzume::with_options(SuzumeOptions {
        auto_load_dictionaries: false,
        ..SuzumeOptions::default()
    });
    let mut dict = UserDictionary::new();
    dict.add_entry(
        DictionaryEntry::new("ぐぐる", PartOfSpeech::Verb, 0.3).with_conj(ConjugationType::GodanRa),
    );
    suzume.add_user_dictionary(Arc::new(dict));

    let result = suzume.analyze("ぐぐる");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].pos, PartOfSpeech::Verb);
    assert!(result[0].features.is_user_dict);
}

#[test]
fn shared_dictionary_across_analyzers() {
    let mut dict = UserDictionary::new();
    dict.add_entry(DictionaryEntry::new("スズメバチ", PartOfSpeech::Noun, 0.2));
    let dict = Arc::new(dict);

    let mut a = Suzume::with_options(SuzumeOptions {
        auto_load_dictionaries: false,
        ..SuzumeOptions::default()
    });
    let mut b = Suzume::with_options(SuzumeOptions {
        auto_load_dictionaries: false,
        ..SuzumeOptions::default()
    });
    a.add_user_dictionary(Arc::clone(&dict));
    b.add_user_dictionary(Arc::clone(&dict));

    assert_eq!(a.analyze("スズメバチ")[0].surface, "スズメバチ");
    assert_eq!(b.analyze("スズメバチ")[0].surface, "スズメバチ");
}
