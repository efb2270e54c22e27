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

//! `suzume test` — compare generated tags against expectations, either for
//! one inline case or a file of `text<TAB>tag1,tag2` lines.

use std::path::Path;

use suzume::error::{SuzumeError, SuzumeResult};
use suzume::prelude::*;

pub struct TestCase {
    pub text: String,
    pub expected: Vec<String>,
}

pub struct TestReport {
    pub passed: usize,
    pub failed: usize,
}

impl TestReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

pub fn parse_expectation(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn load_cases(path: &Path) -> SuzumeResult<Vec<TestCase>> {
    let data = std::fs::read(path)
        .map_err(|_| SuzumeError::FileNotFound(path.display().to_string()))?;
    let content = std::str::from_utf8(&data).map_err(|_| SuzumeError::InvalidUtf8)?;

    let mut cases = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.splitn(2, '\t');
        let text = parts.next().unwrap_or("");
        let tags = parts.next().ok_or_else(|| {
            SuzumeError::parse(i + 1, "expected `text<TAB>tag1,tag2`")
        })?;
        cases.push(TestCase {
            text: text.to_string(),
            expected: parse_expectation(tags),
        });
    }
    Ok(cases)
}

pub fn run_cases(suzume: &Suzume, cases: &[TestCase]) -> TestReport {
    let mut report = TestReport {
        passed: 0,
        failed: 0,
    };
    for case in cases {
        let actual = suzume.generate_tags(&case.text);
        let missing: Vec<&String> = case
            .expected
            .iter()
            .filter(|t| !actual.contains(t))
            .collect();
        if missing.is_empty() {
            report.passed += 1;
            println!("ok: {}", case.text);
        } else {
            report.failed += 1;
            println!("FAIL: {}", case.text);
            println!("  expected: {}", case.expected.join(", "));
            println!("  actual:   {}", actual.join(", "));
        }
    }
    println!("{} passed, {} failed", report.passed, report.failed);
    report
}
