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

mod dict_cmd;
mod output;
mod test_cmd;

use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use structopt::StructOpt;

use suzume::error::SuzumeResult;
use suzume::prelude::*;

use crate::output::OutputFormat;

/// Japanese morphological analyzer and tag generator
#[derive(StructOpt, Debug)]
#[structopt(name = "suzume")]
enum Cli {
    /// Analyze text into morphemes or tags
    Analyze(AnalyzeArgs),
    /// Dictionary tooling
    Dict(dict_cmd::DictCommand),
    /// Check generated tags against expectations
    Test(TestArgs),
}

#[derive(StructOpt, Debug)]
struct AnalyzeArgs {
    /// Output format: morpheme, tags, json or tsv
    #[structopt(short = "f", long = "format", default_value = "morpheme")]
    format: OutputFormat,

    /// Analysis mode: normal, search or split
    #[structopt(short = "m", long = "mode", default_value = "normal")]
    mode: Mode,

    /// Additional user dictionaries (TSV/CSV source or compiled)
    #[structopt(short = "d", long = "dict", parse(from_os_str))]
    dictionaries: Vec<PathBuf>,

    /// Text to analyze; reads stdin line-per-line when absent
    text: Option<String>,
}

#[derive(StructOpt, Debug)]
struct TestArgs {
    /// Inline text case
    text: Option<String>,

    /// Expected tags for the inline case, comma-separated
    #[structopt(long = "expect")]
    expect: Option<String>,

    /// Expectation file with `text<TAB>tag1,tag2` lines
    #[structopt(short = "f", long = "file", parse(from_os_str))]
    file: Option<PathBuf>,
}

fn main() {
    let exit_code = match Cli::from_args() {
        Cli::Analyze(args) => run_or_report(analyze_main(args)),
        Cli::Dict(command) => run_or_report(dict_cmd::run(command)),
        Cli::Test(args) => match test_main(args) {
            Ok(true) => 0,
            Ok(false) => 1,
            Err(e) => {
                eprintln!("error: {}", e);
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn run_or_report(result: SuzumeResult<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {}", e);
            1
        }
    }
}

fn build_suzume(mode: Mode, dictionaries: &[PathBuf]) -> Suzume {
    let mut suzume = Suzume::with_options(SuzumeOptions {
        mode,
        ..SuzumeOptions::default()
    });
    for path in dictionaries {
        if let Err(e) = suzume.load_user_dictionary(path) {
            // analysis proceeds without the dictionary
            eprintln!("warning: failed to load {}: {}", path.display(), e);
        }
    }
    suzume
}

fn analyze_main(args: AnalyzeArgs) -> SuzumeResult<()> {
    let suzume = build_suzume(args.mode, &args.dictionaries);
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    match args.text {
        Some(text) => {
            output::write_result(&mut writer, &suzume, &text, args.format)?;
        }
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                output::write_result(&mut writer, &suzume, line.trim_end(), args.format)?;
                writer.flush()?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

fn test_main(args: TestArgs) -> SuzumeResult<bool> {
    let suzume = build_suzume(Mode::Normal, &[]);

    let cases = match (&args.file, &args.text) {
        (Some(path), _) => test_cmd::load_cases(path)?,
        (None, Some(text)) => {
            let expected = args
                .expect
                .as_deref()
                .map(test_cmd::parse_expectation)
                .unwrap_or_default();
            vec![test_cmd::TestCase {
                text: text.clone(),
                expected,
            }]
        }
        (None, None) => {
            return Err(suzume::error::SuzumeError::InvalidInput(
                "test requires TEXT or --file".to_string(),
            ));
        }
    };

    let report = test_cmd::run_cases(&suzume, &cases);
    Ok(report.all_passed())
}
