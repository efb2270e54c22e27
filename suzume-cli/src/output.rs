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

use std::io::Write;
use std::str::FromStr;

use suzume::prelude::*;

/// Output rendering of one analysis
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Morpheme,
    Tags,
    Json,
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morpheme" => Ok(OutputFormat::Morpheme),
            "tags" => Ok(OutputFormat::Tags),
            "json" => Ok(OutputFormat::Json),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err("format must be one of \"morpheme\", \"tags\", \"json\", or \"tsv\""),
        }
    }
}

pub fn write_result<W: Write>(
    writer: &mut W,
    suzume: &Suzume,
    text: &str,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Morpheme => {
            for m in suzume.analyze(text) {
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}",
                    m.surface,
                    m.pos.as_str(),
                    m.lemma,
                    m.conj_form.as_str()
                )?;
            }
            writeln!(writer, "EOS")?;
        }
        OutputFormat::Tags => {
            writeln!(writer, "{}", suzume.generate_tags(text).join(", "))?;
        }
        OutputFormat::Json => {
            let morphemes = suzume.analyze(text);
            writeln!(writer, "{}", serde_json::to_string(&morphemes)?)?;
        }
        OutputFormat::Tsv => {
            for m in suzume.analyze(text) {
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}\t{}",
                    m.surface,
                    m.pos.as_japanese(),
                    m.lemma,
                    m.reading,
                    m.conj_type.as_str()
                )?;
            }
        }
    }
    Ok(())
}
