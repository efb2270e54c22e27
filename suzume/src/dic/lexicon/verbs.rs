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

//! Essential verbs in base form. The inflection analyzer recognizes their
//! conjugated surfaces; these entries anchor base-form verification and
//! direct base-form hits.

use crate::pos::ConjugationType;
use crate::pos::ConjugationType::*;

/// (surface, reading, conjugation type)
pub const ESSENTIAL_VERBS: &[(&str, &str, ConjugationType)] = &[
    ("する", "する", Suru),
    ("来る", "くる", Kuru),
    ("くる", "くる", Kuru),
    ("行く", "いく", GodanKa),
    ("いく", "いく", GodanKa),
    ("書く", "かく", GodanKa),
    ("聞く", "きく", GodanKa),
    ("働く", "はたらく", GodanKa),
    ("歩く", "あるく", GodanKa),
    ("着く", "つく", GodanKa),
    ("開く", "ひらく", GodanKa),
    ("泳ぐ", "およぐ", GodanGa),
    ("急ぐ", "いそぐ", GodanGa),
    ("脱ぐ", "ぬぐ", GodanGa),
    ("話す", "はなす", GodanSa),
    ("出す", "だす", GodanSa),
    ("返す", "かえす", GodanSa),
    ("渡す", "わたす", GodanSa),
    ("探す", "さがす", GodanSa),
    ("待つ", "まつ", GodanTa),
    ("立つ", "たつ", GodanTa),
    ("持つ", "もつ", GodanTa),
    ("勝つ", "かつ", GodanTa),
    ("死ぬ", "しぬ", GodanNa),
    ("呼ぶ", "よぶ", GodanBa),
    ("遊ぶ", "あそぶ", GodanBa),
    ("飛ぶ", "とぶ", GodanBa),
    ("選ぶ", "えらぶ", GodanBa),
    ("学ぶ", "まなぶ", GodanBa),
    ("飲む", "のむ", GodanMa),
    ("読む", "よむ", GodanMa),
    ("休む", "やすむ", GodanMa),
    ("住む", "すむ", GodanMa),
    ("進む", "すすむ", GodanMa),
    ("頼む", "たのむ", GodanMa),
    ("なる", "なる", GodanRa),
    ("ある", "ある", GodanRa),
    ("やる", "やる", GodanRa),
    ("おる", "おる", GodanRa),
    ("分かる", "わかる", GodanRa),
    ("わかる", "わかる", GodanRa),
    ("取る", "とる", GodanRa),
    ("作る", "つくる", GodanRa),
    ("売る", "うる", GodanRa),
    ("知る", "しる", GodanRa),
    ("帰る", "かえる", GodanRa),
    ("入る", "はいる", GodanRa),
    ("走る", "はしる", GodanRa),
    ("座る", "すわる", GodanRa),
    ("終わる", "おわる", GodanRa),
    ("始まる", "はじまる", GodanRa),
    ("上がる", "あがる", GodanRa),
    ("下がる", "さがる", GodanRa),
    ("頑張る", "がんばる", GodanRa),
    ("言う", "いう", GodanWa),
    ("いう", "いう", GodanWa),
    ("思う", "おもう", GodanWa),
    ("おもう", "おもう", GodanWa),
    ("会う", "あう", GodanWa),
    ("買う", "かう", GodanWa),
    ("使う", "つかう", GodanWa),
    ("習う", "ならう", GodanWa),
    ("歌う", "うたう", GodanWa),
    ("笑う", "わらう", GodanWa),
    ("払う", "はらう", GodanWa),
    ("もらう", "もらう", GodanWa),
    ("見る", "みる", Ichidan),
    ("みる", "みる", Ichidan),
    ("いる", "いる", Ichidan),
    ("出る", "でる", Ichidan),
    ("食べる", "たべる", Ichidan),
    ("考える", "かんがえる", Ichidan),
    ("できる", "できる", Ichidan),
    ("教える", "おしえる", Ichidan),
    ("覚える", "おぼえる", Ichidan),
    ("忘れる", "わすれる", Ichidan),
    ("始める", "はじめる", Ichidan),
    ("閉める", "しめる", Ichidan),
    ("開ける", "あける", Ichidan),
    ("あげる", "あげる", Ichidan),
    ("くれる", "くれる", Ichidan),
    ("上げる", "あげる", Ichidan),
    ("下げる", "さげる", Ichidan),
    ("見せる", "みせる", Ichidan),
    ("信じる", "しんじる", Ichidan),
    ("感じる", "かんじる", Ichidan),
    ("調べる", "しらべる", Ichidan),
    ("伝える", "つたえる", Ichidan),
    ("続ける", "つづける", Ichidan),
    ("受ける", "うける", Ichidan),
    ("決める", "きめる", Ichidan),
    ("止める", "やめる", Ichidan),
];
