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

//! `suzume dict` — dictionary tooling: create, inspect, validate, compile
//! and decompile dictionary files.

use std::path::PathBuf;

use structopt::StructOpt;

use suzume::dic::binary::BinaryDictionary;
use suzume::dic::compiler::{parse_tsv_file, validate, DictCompiler};
use suzume::error::{SuzumeError, SuzumeResult};

const TEMPLATE: &str = "\
# suzume dictionary source file
# Format: surface<TAB>pos<TAB>reading<TAB>cost<TAB>conj_type
#
# POS: NOUN VERB ADJ ADV PARTICLE AUX CONJ DET PRON SYMBOL OTHER
# conj_type: ICHIDAN GODAN_KA .. GODAN_WA SURU KURU I_ADJ NA_ADJ
#
# Example:
#\u{30b9}\u{30ba}\u{30e1}\tNOUN\t\u{3059}\u{305a}\u{3081}\t0.4
";

#[derive(StructOpt, Debug)]
pub enum DictCommand {
    /// Create a new dictionary source file from a template
    New {
        /// Output TSV path
        #[structopt(parse(from_os_str))]
        output: PathBuf,
    },
    /// Print header information of a compiled dictionary
    Info {
        #[structopt(parse(from_os_str))]
        path: PathBuf,
    },
    /// Validate a dictionary source file
    Validate {
        #[structopt(parse(from_os_str))]
        input: PathBuf,
    },
    /// Compile TSV source files into a binary dictionary
    Compile {
        /// Input TSV files
        #[structopt(parse(from_os_str), required = true)]
        inputs: Vec<PathBuf>,
        /// Output dictionary path
        #[structopt(short = "o", long = "output", parse(from_os_str))]
        output: PathBuf,
    },
    /// Emit a compiled dictionary back as TSV source
    Decompile {
        #[structopt(parse(from_os_str))]
        path: PathBuf,
        /// Output TSV path; stdout when absent
        #[structopt(short = "o", long = "output", parse(from_os_str))]
        output: Option<PathBuf>,
    },
    /// List the entries of a compiled dictionary
    List {
        #[structopt(parse(from_os_str))]
        path: PathBuf,
    },
    /// Common-prefix search in a compiled dictionary
    Search {
        #[structopt(parse(from_os_str))]
        path: PathBuf,
        query: String,
    },
}

pub fn run(command: DictCommand) -> SuzumeResult<()> {
    match command {
        DictCommand::New { output } => {
            if output.exists() {
                return Err(SuzumeError::InvalidInput(format!(
                    "file already exists: {}",
                    output.display()
                )));
            }
            std::fs::write(&output, TEMPLATE)?;
            println!("created {}", output.display());
        }
        DictCommand::Info { path } => {
            let dict = BinaryDictionary::from_file(&path)?;
            let header = dict.header();
            println!("file:         {}", path.display());
            println!("entries:      {}", header.entry_count);
            println!("trie size:    {} bytes", header.trie_size);
            println!("entry offset: {}", header.entry_offset);
            println!("pool offset:  {}", header.string_offset);
        }
        DictCommand::Validate { input } => {
            let entries = parse_tsv_file(&input)?;
            let issues = validate(&entries);
            if issues.is_empty() {
                println!("ok: {} entries", entries.len());
            } else {
                for issue in &issues {
                    eprintln!("{}", issue);
                }
                return Err(SuzumeError::InvalidInput(format!(
                    "validation failed: {} issue(s)",
                    issues.len()
                )));
            }
        }
        DictCommand::Compile { inputs, output } => {
            let mut compiler = DictCompiler::new();
            let image = compiler.compile_files(&inputs)?;
            std::fs::write(&output, &image)?;
            let stats = compiler.stats();
            println!(
                "compiled {} entries ({} from readings, {} duplicates skipped) to {}",
                stats.entries_compiled,
                stats.reading_entries_added,
                stats.duplicates_skipped,
                output.display()
            );
        }
        DictCommand::Decompile { path, output } => {
            let dict = BinaryDictionary::from_file(&path)?;
            let tsv = DictCompiler::new().decompile(&dict);
            match output {
                Some(out) => {
                    std::fs::write(&out, tsv)?;
                    println!("decompiled {} entries to {}", dict.len(), out.display());
                }
                None => print!("{}", tsv),
            }
        }
        DictCommand::List { path } => {
            let dict = BinaryDictionary::from_file(&path)?;
            for entry in dict.entries() {
                println!(
                    "{}\t{}\t{}\t{}",
                    entry.surface,
                    entry.pos.as_str(),
                    entry.cost,
                    entry.lemma
                );
            }
        }
        DictCommand::Search { path, query } => {
            let dict = BinaryDictionary::from_file(&path)?;
            let hits = dict.lookup(&query, 0);
            if hits.is_empty() {
                println!("no matches");
            }
            for (entry, len) in hits {
                println!(
                    "{}\t{}\t{}\t(prefix of {} bytes)",
                    entry.surface,
                    entry.pos.as_str(),
                    entry.cost,
                    len
                );
            }
        }
    }
    Ok(())
}
