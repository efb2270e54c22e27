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

//! Particle tables. Single particles and the compound (multi-scalar)
//! particles are kept apart because they carry different costs.

/// Case, binding and sentence-final particles
pub const PARTICLES: &[&str] = &[
    "は", "が", "を", "に", "で", "と", "も", "の", "へ", "や", "か", "ね", "よ", "わ", "ぞ",
    "ぜ", "さ", "な", "から", "まで", "より", "ば", "し", "とか", "だけ", "ほど", "くらい",
    "ぐらい", "など", "なら", "たり", "ながら", "つつ", "ので", "のに", "けど", "けれど",
    "けれども", "って", "でも", "しか", "こそ", "さえ", "すら", "ずつ", "だの", "やら",
];

/// Compound particles (複合助詞)
pub const COMPOUND_PARTICLES: &[&str] = &[
    "について", "については", "によって", "により", "による", "に対して", "に対する",
    "として", "としては", "とともに", "において", "においては", "における", "に関して",
    "に関する", "にとって", "によると", "によれば", "を通じて", "を通して", "をめぐって",
    "にわたって", "にわたり", "に際して", "にあたって", "はもちろん", "だけでなく",
    "のような", "のように", "のための", "のため", "うえで", "かぎり", "に比べて",
    "に加えて", "をはじめ", "とされる", "かどうか",
];
