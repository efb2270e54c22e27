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

//! Strict TSV dictionary source parser and the TSV→binary compiler.
//!
//! Unlike the lenient runtime loader in [`crate::dic::user_dict`], every
//! malformed line here is an error with its line number, and costs are
//! range-checked. Used by the `dict` subcommands of the CLI.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::Path;

use itertools::Itertools;

use super::binary::{BinaryDictWriter, BinaryDictionary};
use super::DictionaryEntry;
use crate::error::{SuzumeError, SuzumeResult};
use crate::pos::{ConjugationType, PartOfSpeech};

const COST_MIN: f32 = -10.0;
const COST_MAX: f32 = 10.0;
const DEFAULT_COST: f32 = 0.5;

/// One parsed TSV source line:
/// `surface<TAB>pos<TAB>reading<TAB>cost<TAB>conj_type`
#[derive(Clone, Debug, PartialEq)]
pub struct TsvEntry {
    pub surface: String,
    pub pos: PartOfSpeech,
    pub reading: String,
    pub cost: f32,
    pub conj_type: ConjugationType,
    pub line_number: usize,
}

/// Parse a whole TSV document, failing on the first malformed line
pub fn parse_tsv(content: &str) -> SuzumeResult<Vec<TsvEntry>> {
    let mut entries = Vec::new();
    for (i, raw) in content.lines().enumerate() {
        let line_number = i + 1;
        let line = raw.trim_end_matches('\r');
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        entries.push(parse_tsv_line(line, line_number)?);
    }
    Ok(entries)
}

pub fn parse_tsv_file<P: AsRef<Path>>(path: P) -> SuzumeResult<Vec<TsvEntry>> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| super::binary::read_error(e, path))?;
    let content = std::str::from_utf8(&data)
        .map_err(|_| SuzumeError::InvalidUtf8.with_context(path.display().to_string()))?;
    parse_tsv(content).map_err(|e| e.with_context(path.display().to_string()))
}

fn parse_tsv_line(line: &str, line_number: usize) -> SuzumeResult<TsvEntry> {
    let fields: Vec<&str> = line.split('\t').map(|f| f.trim()).collect();

    let surface = fields[0];
    if surface.is_empty() {
        return Err(SuzumeError::parse(line_number, "empty surface"));
    }
    let pos_field = fields
        .get(1)
        .filter(|f| !f.is_empty())
        .ok_or_else(|| SuzumeError::parse(line_number, "missing POS field"))?;
    let pos: PartOfSpeech = pos_field
        .parse()
        .map_err(|e: String| SuzumeError::parse(line_number, e))?;

    let reading = fields.get(2).copied().unwrap_or("").to_string();

    let cost = match fields.get(3).filter(|f| !f.is_empty()) {
        None => DEFAULT_COST,
        Some(s) => {
            let cost: f32 = s
                .parse()
                .map_err(|_| SuzumeError::parse(line_number, format!("invalid cost: {}", s)))?;
            if !(COST_MIN..=COST_MAX).contains(&cost) {
                return Err(SuzumeError::parse(
                    line_number,
                    format!("cost out of range (-10 to 10): {}", s),
                ));
            }
            cost
        }
    };

    let conj_type = match fields.get(4).filter(|f| !f.is_empty()) {
        None => ConjugationType::None,
        Some(s) => s
            .parse()
            .map_err(|e: String| SuzumeError::parse(line_number, e))?,
    };

    Ok(TsvEntry {
        surface: surface.to_string(),
        pos,
        reading,
        cost,
        conj_type,
        line_number,
    })
}

/// Report duplicate (surface, pos) pairs and verbs/adjectives without a
/// conjugation type. Returns the list of issues; empty means valid.
pub fn validate(entries: &[TsvEntry]) -> Vec<String> {
    let mut issues = Vec::new();
    let mut seen: HashSet<(&str, PartOfSpeech)> = HashSet::new();

    for entry in entries {
        if !seen.insert((entry.surface.as_str(), entry.pos)) {
            issues.push(format!(
                "duplicate entry at line {}: {} ({})",
                entry.line_number, entry.surface, entry.pos
            ));
        }
        if matches!(entry.pos, PartOfSpeech::Verb | PartOfSpeech::Adjective)
            && entry.conj_type == ConjugationType::None
        {
            issues.push(format!(
                "missing conjugation type at line {}: {}",
                entry.line_number, entry.surface
            ));
        }
    }
    issues
}

/// Compilation statistics of the last run
#[derive(Clone, Copy, Debug, Default)]
pub struct CompileStats {
    pub entries_compiled: usize,
    pub reading_entries_added: usize,
    pub duplicates_skipped: usize,
}

/// TSV → binary dictionary compiler
#[derive(Default)]
pub struct DictCompiler {
    stats: CompileStats,
}

impl DictCompiler {
    pub fn new() -> DictCompiler {
        DictCompiler::default()
    }

    pub fn stats(&self) -> CompileStats {
        self.stats
    }

    /// Compile entries into a binary image
    pub fn compile(&mut self, entries: &[TsvEntry]) -> SuzumeResult<Vec<u8>> {
        if entries.is_empty() {
            return Err(SuzumeError::InvalidInput("no entries to compile".to_string()));
        }
        let issues = validate(entries);
        if !issues.is_empty() {
            let mut message = String::new();
            for issue in &issues {
                let _ = writeln!(message, "{}", issue);
            }
            let _ = write!(message, "validation failed: {} error(s)", issues.len());
            return Err(SuzumeError::InvalidInput(message));
        }

        self.stats = CompileStats::default();
        let mut writer = BinaryDictWriter::new();
        let mut seen: HashSet<String> = HashSet::new();

        for entry in entries {
            if !seen.insert(entry.surface.clone()) {
                self.stats.duplicates_skipped += 1;
                continue;
            }
            writer.add_entry(to_dict_entry(entry));
            self.stats.entries_compiled += 1;

            // Hiragana renderings of kanji-spelled function words must be
            // findable too; only closed-class POS are safe to expand (regular
            // nouns have too many homophones)
            if should_expand_reading(entry) && seen.insert(entry.reading.clone()) {
                let mut expanded = to_dict_entry(entry);
                expanded.surface = entry.reading.clone();
                expanded.lemma = entry.reading.clone();
                expanded.reading = entry.reading.clone();
                writer.add_entry(expanded);
                self.stats.entries_compiled += 1;
                self.stats.reading_entries_added += 1;
            }
        }

        writer.build()
    }

    /// Parse several TSV files, merge, dedup by surface, compile
    pub fn compile_files<P: AsRef<Path>>(&mut self, inputs: &[P]) -> SuzumeResult<Vec<u8>> {
        if inputs.is_empty() {
            return Err(SuzumeError::InvalidInput("no input files specified".to_string()));
        }
        let mut all = Vec::new();
        for path in inputs {
            all.extend(parse_tsv_file(path)?);
        }
        let unique: Vec<TsvEntry> = all
            .into_iter()
            .unique_by(|e| e.surface.clone())
            .collect();
        self.compile(&unique)
    }

    /// Re-emit a binary dictionary as TSV source
    pub fn decompile(&self, dict: &BinaryDictionary) -> String {
        let mut out = String::new();
        out.push_str("# suzume dictionary source file\n");
        out.push_str("# Format: surface<TAB>pos<TAB>reading<TAB>cost<TAB>conj_type\n\n");
        for entry in dict.entries() {
            let _ = write!(
                out,
                "{}\t{}\t{}\t{}",
                entry.surface,
                entry.pos.as_str(),
                entry.reading,
                entry.cost
            );
            if entry.conj_type != ConjugationType::None {
                let _ = write!(out, "\t{}", entry.conj_type.as_str());
            }
            out.push('\n');
        }
        out
    }
}

fn to_dict_entry(entry: &TsvEntry) -> DictionaryEntry {
    DictionaryEntry::new(entry.surface.clone(), entry.pos, entry.cost)
        .with_reading(entry.reading.clone())
        .with_conj(entry.conj_type)
}

fn should_expand_reading(entry: &TsvEntry) -> bool {
    if entry.reading.is_empty() || entry.reading == entry.surface {
        return false;
    }
    matches!(
        entry.pos,
        PartOfSpeech::Adjective
            | PartOfSpeech::Adverb
            | PartOfSpeech::Conjunction
            | PartOfSpeech::Pronoun
    )
}

#[cfg(test)]
mod tests {
    use claim::{assert_err, assert_ok};

    use super::*;

    const SAMPLE: &str = "\
# sample dictionary
東京\tNOUN\tとうきょう\t0.4
面白い\tADJ\tおもしろい\t0.5\tI_ADJ
必ず\tADV\tかならず\t0.5
";

    #[test]
    fn parse_strict_tsv() {
        let entries = parse_tsv(SAMPLE).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].surface, "東京");
        assert_eq!(entries[0].line_number, 2);
        assert_eq!(entries[1].conj_type, ConjugationType::IAdjective);
    }

    #[test]
    fn parse_rejects_bad_cost() {
        let err = parse_tsv("猫\tNOUN\tねこ\tabc\n").unwrap_err();
        assert!(matches!(err, SuzumeError::ParseError { line: 1, .. }));
        let err = parse_tsv("猫\tNOUN\tねこ\t99\n").unwrap_err();
        assert!(matches!(err, SuzumeError::ParseError { .. }));
    }

    #[test]
    fn parse_rejects_unknown_pos() {
        assert_err!(parse_tsv("猫\tNOPE\n"));
        assert_ok!(parse_tsv("猫\tNOUN\n"));
    }

    #[test]
    fn file_parse_error_carries_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.tsv");
        std::fs::write(&path, "猫\tNOPE\n").unwrap();
        let err = parse_tsv_file(&path).unwrap_err();
        assert!(format!("{}", err).contains("bad.tsv"));
    }

    #[test]
    fn parse_missing_cost_defaults() {
        let entries = parse_tsv("猫\tNOUN\tねこ\n").unwrap();
        assert!((entries[0].cost - 0.5).abs() < 1e-6);
    }

    #[test]
    fn validate_reports_duplicates_and_missing_conj() {
        let entries = parse_tsv("猫\tNOUN\n猫\tNOUN\n走る\tVERB\tはしる\t0.5\n").unwrap();
        let issues = validate(&entries);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("duplicate"));
        assert!(issues[1].contains("conjugation"));
    }

    #[test]
    fn reading_expansion_for_closed_classes() {
        let entries = parse_tsv("面白い\tADJ\tおもしろい\t0.5\tI_ADJ\n").unwrap();
        let mut compiler = DictCompiler::new();
        let image = compiler.compile(&entries).unwrap();
        assert_eq!(compiler.stats().reading_entries_added, 1);

        let dict = BinaryDictionary::from_bytes(&image).unwrap();
        assert_eq!(dict.len(), 2);
        let hits = dict.lookup("おもしろい", 0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0.lemma, "おもしろい");
        assert_eq!(hits[0].0.conj_type, ConjugationType::IAdjective);
    }

    #[test]
    fn no_reading_expansion_for_nouns() {
        let entries = parse_tsv("東京\tNOUN\tとうきょう\t0.4\n").unwrap();
        let mut compiler = DictCompiler::new();
        let image = compiler.compile(&entries).unwrap();
        assert_eq!(compiler.stats().reading_entries_added, 0);
        let dict = BinaryDictionary::from_bytes(&image).unwrap();
        assert!(dict.lookup("とうきょう", 0).is_empty());
    }

    #[test]
    fn compile_rejects_empty() {
        assert!(DictCompiler::new().compile(&[]).is_err());
    }

    #[test]
    fn decompile_round_trip() {
        let entries = parse_tsv(SAMPLE).unwrap();
        let mut compiler = DictCompiler::new();
        let image = compiler.compile(&entries).unwrap();
        let dict = BinaryDictionary::from_bytes(&image).unwrap();
        let tsv = compiler.decompile(&dict);

        let reparsed = parse_tsv(&tsv).unwrap();
        // reading expansion added entries, so count >= original
        assert!(reparsed.len() >= 3);
        assert!(reparsed.iter().any(|e| e.surface == "東京"));
        // readings are not persisted by the binary format
        assert!(reparsed.iter().all(|e| e.reading.is_empty()));
    }
}
