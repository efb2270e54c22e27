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

//! Remaining closed-class tables: auxiliaries, pronouns, determiners,
//! conjunctions, greetings, adverbs and productive prefixes.

/// Auxiliary verbs and auxiliary-like endings
pub const AUXILIARIES: &[&str] = &[
    "です", "でした", "ます", "ました", "ません", "ましょう", "だ", "だった", "である",
    "だろう", "でしょう", "らしい", "みたいだ", "そうだ", "ようだ", "まい", "ぬ", "たい",
    "たかった", "ない", "なかった", "れる", "られる", "せる", "させる", "べき", "はずだ",
    "かもしれない", "なければならない", "てはいけない",
];

/// Pronouns: (surface, reading)
pub const PRONOUNS: &[(&str, &str)] = &[
    ("私", "わたし"),
    ("わたし", "わたし"),
    ("僕", "ぼく"),
    ("俺", "おれ"),
    ("あなた", "あなた"),
    ("君", "きみ"),
    ("彼", "かれ"),
    ("彼女", "かのじょ"),
    ("私たち", "わたしたち"),
    ("我々", "われわれ"),
    ("誰", "だれ"),
    ("何", "なに"),
    ("これ", "これ"),
    ("それ", "それ"),
    ("あれ", "あれ"),
    ("どれ", "どれ"),
    ("ここ", "ここ"),
    ("そこ", "そこ"),
    ("あそこ", "あそこ"),
    ("どこ", "どこ"),
    ("こちら", "こちら"),
    ("そちら", "そちら"),
    ("あちら", "あちら"),
    ("どちら", "どちら"),
    ("自分", "じぶん"),
    ("みんな", "みんな"),
    ("皆", "みな"),
];

/// Determiners (連体詞)
pub const DETERMINERS: &[&str] = &[
    "この", "その", "あの", "どの", "こんな", "そんな", "あんな", "どんな", "ある",
    "いわゆる", "大きな", "小さな", "同じ", "その他", "各",
];

/// Conjunctions
pub const CONJUNCTIONS: &[&str] = &[
    "そして", "しかし", "だが", "でも", "また", "さらに", "つまり", "ただし", "なお",
    "および", "ならびに", "または", "もしくは", "だから", "それで", "すると", "ところが",
    "ところで", "さて", "では", "それでは", "ちなみに", "一方", "例えば", "たとえば",
];

/// Greetings and set phrases, kept whole: (surface, reading)
pub const GREETINGS: &[(&str, &str)] = &[
    ("こんにちは", "こんにちは"),
    ("こんばんは", "こんばんは"),
    ("おはよう", "おはよう"),
    ("おはようございます", "おはようございます"),
    ("ありがとう", "ありがとう"),
    ("ありがとうございます", "ありがとうございます"),
    ("ありがとうございました", "ありがとうございました"),
    ("すみません", "すみません"),
    ("すいません", "すいません"),
    ("ごめんなさい", "ごめんなさい"),
    ("さようなら", "さようなら"),
    ("はじめまして", "はじめまして"),
    ("お疲れ様です", "おつかれさまです"),
    ("お疲れ様でした", "おつかれさまでした"),
    ("よろしく", "よろしく"),
    ("よろしくお願いします", "よろしくおねがいします"),
    ("いただきます", "いただきます"),
    ("ごちそうさま", "ごちそうさま"),
    ("おやすみ", "おやすみ"),
    ("おやすみなさい", "おやすみなさい"),
    ("いらっしゃいませ", "いらっしゃいませ"),
];

/// Adverbs: (surface, reading)
pub const ADVERBS: &[(&str, &str)] = &[
    ("とても", "とても"),
    ("すごく", "すごく"),
    ("かなり", "かなり"),
    ("少し", "すこし"),
    ("ちょっと", "ちょっと"),
    ("たくさん", "たくさん"),
    ("よく", "よく"),
    ("もっと", "もっと"),
    ("ずっと", "ずっと"),
    ("まだ", "まだ"),
    ("もう", "もう"),
    ("すぐ", "すぐ"),
    ("やっと", "やっと"),
    ("ついに", "ついに"),
    ("きっと", "きっと"),
    ("たぶん", "たぶん"),
    ("多分", "たぶん"),
    ("必ず", "かならず"),
    ("絶対", "ぜったい"),
    ("本当に", "ほんとうに"),
    ("実は", "じつは"),
    ("やはり", "やはり"),
    ("やっぱり", "やっぱり"),
    ("むしろ", "むしろ"),
    ("特に", "とくに"),
    ("全然", "ぜんぜん"),
    ("全く", "まったく"),
    ("あまり", "あまり"),
    ("ほとんど", "ほとんど"),
    ("いつも", "いつも"),
    ("時々", "ときどき"),
    ("たまに", "たまに"),
    ("初めて", "はじめて"),
    ("もちろん", "もちろん"),
    ("なぜ", "なぜ"),
    ("どう", "どう"),
    ("そう", "そう"),
    ("こう", "こう"),
];

/// Productive prefixes, joinable onto a following noun
pub const PREFIXES: &[&str] = &["お", "ご", "不", "未", "非", "超", "再"];
