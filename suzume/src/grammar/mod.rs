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

//! Japanese grammar: conjugation forms and the inflection analyzer that
//! recognizes conjugated verb/adjective surfaces.

use std::fmt::{Display, Formatter};

use serde::Serialize;

pub mod inflection;

/// The inflectional slot a surface occupies
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum ConjForm {
    /// Dictionary form (終止形 is identical for this analysis)
    Base,
    /// 未然形 — irrealis (negative, passive, causative stems)
    Mizenkei,
    /// 連用形 — continuative (masu stem, te/ta forms without onbin)
    Renyokei,
    /// 終止形 — terminal, kept distinct for callers that care
    Shushikei,
    /// 連体形 — attributive
    Rentaikei,
    /// 仮定形 — hypothetical (ば)
    Kateikei,
    /// 命令形 — imperative
    Meireikei,
    /// 意志形 — volitional (う/よう)
    Ishikei,
    /// 音便形 — euphonic (って/んで/いた...)
    Onbinkei,
}

impl ConjForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConjForm::Base => "BASE",
            ConjForm::Mizenkei => "MIZENKEI",
            ConjForm::Renyokei => "RENYOKEI",
            ConjForm::Shushikei => "SHUSHIKEI",
            ConjForm::Rentaikei => "RENTAIKEI",
            ConjForm::Kateikei => "KATEIKEI",
            ConjForm::Meireikei => "MEIREIKEI",
            ConjForm::Ishikei => "ISHIKEI",
            ConjForm::Onbinkei => "ONBINKEI",
        }
    }
}

impl Display for ConjForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
