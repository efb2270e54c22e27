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

use serde::Serialize;

use crate::grammar::ConjForm;
use crate::pos::{ConjugationType, PartOfSpeech};

/// Auxiliary per-morpheme information
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MorphemeFeatures {
    /// Hit in the core dictionary or the built-in lexicon
    pub is_dictionary: bool,
    pub is_user_dict: bool,
    pub is_formal_noun: bool,
    pub is_low_info: bool,
    /// Accumulated Viterbi path score at this morpheme
    pub score: f32,
}

/// The output unit of analysis.
///
/// `start`/`end` are character indices into the normalized text; surfaces
/// of consecutive morphemes tile the normalized input without gaps.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Morpheme {
    pub surface: String,
    pub lemma: String,
    pub reading: String,
    pub pos: PartOfSpeech,
    pub conj_type: ConjugationType,
    pub conj_form: ConjForm,
    pub start: usize,
    pub end: usize,
    pub features: MorphemeFeatures,
}

impl Morpheme {
    /// Character length of the surface
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Lemma, falling back to the surface when unset
    pub fn lemma_or_surface(&self) -> &str {
        if self.lemma.is_empty() {
            &self.surface
        } else {
            &self.lemma
        }
    }
}
