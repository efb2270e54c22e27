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

//! The analysis lattice and the Viterbi search over it.
//!
//! Vertices are character positions of one segment; edges are candidate
//! morphemes addressed by stable id. Unknown fallback edges cover every
//! position, so a best path always exists.

use super::scorer::Scorer;
use super::Mode;
use crate::dic::EntryFlags;
use crate::grammar::ConjForm;
use crate::pos::{ConjugationType, PartOfSpeech};

const SCORE_EPSILON: f32 = 1e-6;

/// Where an edge came from
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeSource {
    Dictionary,
    UserDictionary,
    Unknown,
    Grammar,
    Hardcoded,
}

/// One candidate morpheme in the lattice
#[derive(Clone, Debug)]
pub struct Edge {
    pub id: u32,
    /// Character positions within the segment
    pub start: usize,
    pub end: usize,
    pub surface: String,
    pub lemma: String,
    pub reading: String,
    pub pos: PartOfSpeech,
    pub conj_type: ConjugationType,
    pub conj_form: ConjForm,
    pub cost: f32,
    pub source: EdgeSource,
    pub flags: EntryFlags,
    /// Best predecessor, filled by Viterbi
    pub prev_best: Option<u32>,
    /// Minimal path cost from BOS through this edge
    pub best_score: f32,
    /// Edge count of the best path, used for tie-breaking
    pub path_len: u32,
}

/// Inputs for creating a new edge
pub struct EdgeSpec {
    pub start: usize,
    pub end: usize,
    pub surface: String,
    pub lemma: String,
    pub reading: String,
    pub pos: PartOfSpeech,
    pub conj_type: ConjugationType,
    pub conj_form: ConjForm,
    pub cost: f32,
    pub source: EdgeSource,
    pub flags: EntryFlags,
}

/// Lattice over one segment
pub struct Lattice {
    edges: Vec<Edge>,
    /// Edge ids grouped by start position
    starts: Vec<Vec<u32>>,
    /// Edge ids grouped by end position
    ends: Vec<Vec<u32>>,
    len: usize,
}

impl Lattice {
    /// Lattice for a segment of `len` characters
    pub fn new(len: usize) -> Lattice {
        Lattice {
            edges: Vec::with_capacity(len * 4),
            starts: vec![Vec::new(); len + 1],
            ends: vec![Vec::new(); len + 1],
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge(&self, id: u32) -> &Edge {
        &self.edges[id as usize]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Ids of edges starting at `pos`
    pub fn edges_at(&self, pos: usize) -> &[u32] {
        &self.starts[pos]
    }

    pub fn has_edge_starting_at(&self, pos: usize) -> bool {
        !self.starts[pos].is_empty()
    }

    pub fn add_edge(&mut self, spec: EdgeSpec) -> u32 {
        debug_assert!(spec.start < spec.end && spec.end <= self.len);
        let id = self.edges.len() as u32;
        self.starts[spec.start].push(id);
        self.ends[spec.end].push(id);
        self.edges.push(Edge {
            id,
            start: spec.start,
            end: spec.end,
            surface: spec.surface,
            lemma: spec.lemma,
            reading: spec.reading,
            pos: spec.pos,
            conj_type: spec.conj_type,
            conj_form: spec.conj_form,
            cost: spec.cost,
            source: spec.source,
            flags: spec.flags,
            prev_best: None,
            best_score: f32::INFINITY,
            path_len: 0,
        });
        id
    }

    /// Run the shortest-path search and return the best path as edge ids,
    /// BOS side first. Ties within epsilon prefer fewer edges, then the
    /// earlier-appended edge, so output is deterministic.
    pub fn run_viterbi(&mut self, scorer: &Scorer, mode: Mode) -> Vec<u32> {
        if self.len == 0 || self.edges.is_empty() {
            return Vec::new();
        }

        for pos in 0..self.len {
            for idx in 0..self.starts[pos].len() {
                let id = self.starts[pos][idx];
                let edge_cost = scorer.edge_cost(&self.edges[id as usize], mode);

                if pos == 0 {
                    let edge = &mut self.edges[id as usize];
                    edge.best_score = edge_cost;
                    edge.path_len = 1;
                    edge.prev_best = None;
                    continue;
                }

                let mut best: Option<(f32, u32, u32)> = None;
                for &pid in &self.ends[pos] {
                    let prev = &self.edges[pid as usize];
                    if prev.best_score.is_infinite() {
                        continue;
                    }
                    let score = prev.best_score
                        + scorer.transition_cost(prev, &self.edges[id as usize])
                        + edge_cost;
                    let path_len = prev.path_len + 1;
                    let better = match best {
                        None => true,
                        Some((bs, bl, bp)) => {
                            score < bs - SCORE_EPSILON
                                || ((score - bs).abs() <= SCORE_EPSILON
                                    && (path_len < bl || (path_len == bl && pid < bp)))
                        }
                    };
                    if better {
                        best = Some((score, path_len, pid));
                    }
                }

                let edge = &mut self.edges[id as usize];
                match best {
                    Some((score, path_len, pid)) => {
                        edge.best_score = score;
                        edge.path_len = path_len;
                        edge.prev_best = Some(pid);
                    }
                    None => {
                        edge.best_score = f32::INFINITY;
                    }
                }
            }
        }

        // virtual EOS: pick the best edge ending at the last position
        let mut eos: Option<(f32, u32, u32)> = None;
        for &pid in &self.ends[self.len] {
            let edge = &self.edges[pid as usize];
            if edge.best_score.is_infinite() {
                continue;
            }
            let better = match eos {
                None => true,
                Some((bs, bl, bp)) => {
                    edge.best_score < bs - SCORE_EPSILON
                        || ((edge.best_score - bs).abs() <= SCORE_EPSILON
                            && (edge.path_len < bl || (edge.path_len == bl && pid < bp)))
                }
            };
            if better {
                eos = Some((edge.best_score, edge.path_len, pid));
            }
        }

        let mut path = Vec::new();
        let mut cursor = eos.map(|(_, _, pid)| pid);
        while let Some(id) = cursor {
            path.push(id);
            cursor = self.edges[id as usize].prev_best;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scorer::Scorer;

    fn spec(start: usize, end: usize, cost: f32, source: EdgeSource) -> EdgeSpec {
        EdgeSpec {
            start,
            end,
            surface: format!("e{}-{}", start, end),
            lemma: String::new(),
            reading: String::new(),
            pos: PartOfSpeech::Noun,
            conj_type: ConjugationType::None,
            conj_form: ConjForm::Base,
            cost,
            source,
            flags: EntryFlags::empty(),
        }
    }

    #[test]
    fn single_edge_path() {
        let mut lattice = Lattice::new(2);
        let id = lattice.add_edge(spec(0, 2, 1.0, EdgeSource::Dictionary));
        let path = lattice.run_viterbi(&Scorer::default(), Mode::Normal);
        assert_eq!(path, vec![id]);
    }

    #[test]
    fn cheaper_path_wins() {
        let mut lattice = Lattice::new(2);
        let expensive = lattice.add_edge(spec(0, 2, 3.0, EdgeSource::Dictionary));
        let a = lattice.add_edge(spec(0, 1, 0.5, EdgeSource::Dictionary));
        let b = lattice.add_edge(spec(1, 2, 0.5, EdgeSource::Dictionary));
        let path = lattice.run_viterbi(&Scorer::default(), Mode::Normal);
        assert_eq!(path, vec![a, b]);
        assert_ne!(path[0], expensive);
    }

    #[test]
    fn tie_prefers_fewer_edges() {
        let mut lattice = Lattice::new(2);
        let whole = lattice.add_edge(spec(0, 2, 1.0, EdgeSource::Dictionary));
        lattice.add_edge(spec(0, 1, 0.5, EdgeSource::Dictionary));
        lattice.add_edge(spec(1, 2, 0.5, EdgeSource::Dictionary));
        let path = lattice.run_viterbi(&Scorer::default(), Mode::Normal);
        assert_eq!(path, vec![whole]);
    }

    #[test]
    fn tie_prefers_earlier_edge() {
        let mut lattice = Lattice::new(1);
        let first = lattice.add_edge(spec(0, 1, 1.0, EdgeSource::Dictionary));
        lattice.add_edge(spec(0, 1, 1.0, EdgeSource::Dictionary));
        let path = lattice.run_viterbi(&Scorer::default(), Mode::Normal);
        assert_eq!(path, vec![first]);
    }

    #[test]
    fn unreachable_edges_are_skipped() {
        let mut lattice = Lattice::new(3);
        // nothing starts at 0 except a; an edge at 2..3 without a
        // predecessor chain through 1..2 stays unreachable
        let a = lattice.add_edge(spec(0, 1, 1.0, EdgeSource::Dictionary));
        let b = lattice.add_edge(spec(1, 3, 1.0, EdgeSource::Dictionary));
        let orphan = lattice.add_edge(spec(2, 3, 0.1, EdgeSource::Dictionary));
        let path = lattice.run_viterbi(&Scorer::default(), Mode::Normal);
        assert_eq!(path, vec![a, b]);
        assert!(lattice.edge(orphan).best_score.is_infinite());
    }

    #[test]
    fn empty_lattice() {
        let mut lattice = Lattice::new(0);
        assert!(lattice.run_viterbi(&Scorer::default(), Mode::Normal).is_empty());
    }

    #[test]
    fn scores_accumulate_along_path() {
        let mut lattice = Lattice::new(2);
        let a = lattice.add_edge(spec(0, 1, 0.5, EdgeSource::Dictionary));
        let b = lattice.add_edge(spec(1, 2, 0.7, EdgeSource::Dictionary));
        lattice.run_viterbi(&Scorer::default(), Mode::Normal);
        assert!((lattice.edge(a).best_score - 0.5).abs() < 1e-6);
        // Noun→Noun transition is 0.0
        assert!((lattice.edge(b).best_score - 1.2).abs() < 1e-6);
    }
}
