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

//! Adjective tables, base forms only.

/// I-adjectives: (surface, reading)
pub const I_ADJECTIVES: &[(&str, &str)] = &[
    ("良い", "よい"),
    ("よい", "よい"),
    ("いい", "いい"),
    ("悪い", "わるい"),
    ("高い", "たかい"),
    ("安い", "やすい"),
    ("低い", "ひくい"),
    ("大きい", "おおきい"),
    ("小さい", "ちいさい"),
    ("新しい", "あたらしい"),
    ("古い", "ふるい"),
    ("早い", "はやい"),
    ("速い", "はやい"),
    ("遅い", "おそい"),
    ("多い", "おおい"),
    ("少ない", "すくない"),
    ("長い", "ながい"),
    ("短い", "みじかい"),
    ("強い", "つよい"),
    ("弱い", "よわい"),
    ("楽しい", "たのしい"),
    ("嬉しい", "うれしい"),
    ("悲しい", "かなしい"),
    ("難しい", "むずかしい"),
    ("易しい", "やさしい"),
    ("優しい", "やさしい"),
    ("美しい", "うつくしい"),
    ("面白い", "おもしろい"),
    ("つまらない", "つまらない"),
    ("暑い", "あつい"),
    ("寒い", "さむい"),
    ("熱い", "あつい"),
    ("冷たい", "つめたい"),
    ("甘い", "あまい"),
    ("辛い", "からい"),
    ("忙しい", "いそがしい"),
    ("近い", "ちかい"),
    ("遠い", "とおい"),
    ("広い", "ひろい"),
    ("狭い", "せまい"),
    ("重い", "おもい"),
    ("軽い", "かるい"),
    ("明るい", "あかるい"),
    ("暗い", "くらい"),
    ("若い", "わかい"),
    ("美味しい", "おいしい"),
    ("おいしい", "おいしい"),
    ("すごい", "すごい"),
    ("ない", "ない"),
    ("欲しい", "ほしい"),
    ("正しい", "ただしい"),
    ("詳しい", "くわしい"),
];

/// Na-adjective stems: (surface, reading). The attributive な is merged by
/// the post-processor, not stored here.
pub const NA_ADJECTIVES: &[(&str, &str)] = &[
    ("静か", "しずか"),
    ("元気", "げんき"),
    ("綺麗", "きれい"),
    ("きれい", "きれい"),
    ("簡単", "かんたん"),
    ("複雑", "ふくざつ"),
    ("便利", "べんり"),
    ("不便", "ふべん"),
    ("有名", "ゆうめい"),
    ("大切", "たいせつ"),
    ("大事", "だいじ"),
    ("必要", "ひつよう"),
    ("重要", "じゅうよう"),
    ("自由", "じゆう"),
    ("安全", "あんぜん"),
    ("危険", "きけん"),
    ("豊か", "ゆたか"),
    ("確か", "たしか"),
    ("上手", "じょうず"),
    ("下手", "へた"),
    ("得意", "とくい"),
    ("苦手", "にがて"),
    ("真面目", "まじめ"),
    ("丁寧", "ていねい"),
    ("親切", "しんせつ"),
    ("特別", "とくべつ"),
    ("普通", "ふつう"),
    ("残念", "ざんねん"),
    ("大丈夫", "だいじょうぶ"),
    ("十分", "じゅうぶん"),
];
