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

//! Suzume, a Japanese morphological analyzer.
//!
//! Segments UTF-8 Japanese text into morphemes with part-of-speech tags,
//! dictionary-form lemmas and conjugation forms, and generates content-word
//! keyword tags from the result. Conjugated verbs and adjectives are
//! recognized by grammar rules, so neologisms (バズる) work without
//! dictionary entries.
//!
//! ```
//! use suzume::prelude::*;
//!
//! let suzume = Suzume::with_options(SuzumeOptions {
//!     auto_load_dictionaries: false,
//!     ..SuzumeOptions::default()
//! });
//! let morphemes = suzume.analyze("APIを呼ぶ");
//! assert_eq!(morphemes[2].lemma, "呼ぶ");
//! ```

pub mod analysis;
pub mod api;
pub mod dic;
pub mod error;
pub mod grammar;
pub mod normalize;
pub mod pos;
pub mod postprocess;
pub mod pretok;

pub(crate) mod chars;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, AnalyzerOptions};
    pub use crate::analysis::morpheme::Morpheme;
    pub use crate::analysis::Mode;
    pub use crate::api::{Suzume, SuzumeOptions};
    pub use crate::error::{SuzumeError, SuzumeResult};
    pub use crate::grammar::ConjForm;
    pub use crate::pos::{ConjugationType, PartOfSpeech};
}
