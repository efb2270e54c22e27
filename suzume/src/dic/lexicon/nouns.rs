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

//! Noun tables: formal nouns, time nouns, low-information words and a small
//! common-vocabulary seed. Regular content nouns are expected to come from
//! the core dictionary; this set keeps the analyzer usable without one.

/// 形式名詞 — carry little meaning of their own, flagged FORMAL_NOUN
pub const FORMAL_NOUNS: &[&str] = &[
    "こと", "もの", "ところ", "とき", "ため", "わけ", "はず", "つもり", "まま", "うち",
    "ほう", "たび", "せい", "おかげ", "とおり", "かぎり", "あたり",
];

/// Time nouns: (surface, reading)
pub const TIME_NOUNS: &[(&str, &str)] = &[
    ("今日", "きょう"),
    ("明日", "あした"),
    ("昨日", "きのう"),
    ("今", "いま"),
    ("今年", "ことし"),
    ("去年", "きょねん"),
    ("来年", "らいねん"),
    ("今月", "こんげつ"),
    ("先月", "せんげつ"),
    ("来月", "らいげつ"),
    ("今週", "こんしゅう"),
    ("先週", "せんしゅう"),
    ("来週", "らいしゅう"),
    ("毎日", "まいにち"),
    ("毎週", "まいしゅう"),
    ("毎月", "まいつき"),
    ("毎年", "まいとし"),
    ("朝", "あさ"),
    ("昼", "ひる"),
    ("夜", "よる"),
    ("晩", "ばん"),
    ("午前", "ごぜん"),
    ("午後", "ごご"),
    ("週末", "しゅうまつ"),
    ("平日", "へいじつ"),
    ("最近", "さいきん"),
    ("将来", "しょうらい"),
    ("未来", "みらい"),
    ("過去", "かこ"),
    ("現在", "げんざい"),
    ("今回", "こんかい"),
    ("次回", "じかい"),
];

/// Low-information words, flagged LOW_INFO and excluded from tags
pub const LOW_INFO: &[&str] = &[
    "よう", "そう", "ふう", "感じ", "気", "場合", "みたい", "いろいろ", "さまざま", "的",
];

/// Common vocabulary seed: (surface, reading)
pub const COMMON_NOUNS: &[(&str, &str)] = &[
    ("世界", "せかい"),
    ("日本", "にほん"),
    ("日本語", "にほんご"),
    ("世話", "せわ"),
    ("言葉", "ことば"),
    ("意味", "いみ"),
    ("問題", "もんだい"),
    ("質問", "しつもん"),
    ("答え", "こたえ"),
    ("情報", "じょうほう"),
    ("技術", "ぎじゅつ"),
    ("開発", "かいはつ"),
    ("仕事", "しごと"),
    ("会社", "かいしゃ"),
    ("会議", "かいぎ"),
    ("学校", "がっこう"),
    ("先生", "せんせい"),
    ("学生", "がくせい"),
    ("友達", "ともだち"),
    ("家族", "かぞく"),
    ("電話", "でんわ"),
    ("電車", "でんしゃ"),
    ("時間", "じかん"),
    ("場所", "ばしょ"),
    ("名前", "なまえ"),
    ("写真", "しゃしん"),
    ("音楽", "おんがく"),
    ("映画", "えいが"),
    ("天気", "てんき"),
    ("料理", "りょうり"),
    ("食事", "しょくじ"),
    ("勉強", "べんきょう"),
    ("旅行", "りょこう"),
    ("買い物", "かいもの"),
    ("猫", "ねこ"),
    ("犬", "いぬ"),
    ("人", "ひと"),
    ("方", "かた"),
    ("話", "はなし"),
    ("心", "こころ"),
    ("体", "からだ"),
    ("頭", "あたま"),
    ("手", "て"),
    ("目", "め"),
    ("家", "いえ"),
    ("店", "みせ"),
    ("駅", "えき"),
    ("道", "みち"),
    ("町", "まち"),
    ("国", "くに"),
    ("水", "みず"),
    ("本", "ほん"),
    ("字", "じ"),
    ("絵", "え"),
];
