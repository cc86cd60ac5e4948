// This file is part of WordGridSolver.
//
// WordGridSolver is free software: you can redistribute it and/or modify it under the terms of the
// GNU General Public License as published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// WordGridSolver is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with WordGridSolver. If
// not, see <https://www.gnu.org/licenses/>.
//

//! Straight-line search: words read from a start cell in one fixed direction,
//! with no turns and no backtracking.

use std::sync::Mutex;
use std::thread;

use itertools::iproduct;
use serde::Serialize;
use tracing::info;

use crate::collector::{Collector, Discovery};
use crate::coord::{Coord, Direction};
use crate::grid::Grid;
use crate::trie::PrefixIndex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanHit {
    pub word: String,
    pub start: Coord,
    pub direction: Direction,
    pub length: usize,
}

impl Discovery for ScanHit {
    fn key(&self) -> String {
        return format!("{}_{}_{}_{}", self.word, self.start.row, self.start.col, self.direction.tag());
    }
}

pub struct Scanner<'a> {
    grid: &'a Grid,
    index: &'a PrefixIndex,
}

impl<'a> Scanner<'a> {
    pub fn new(grid: &'a Grid, index: &'a PrefixIndex) -> Self {
        return Self { grid, index };
    }

    /// Reads from `start` towards `direction` until the edge, a blank, or a
    /// sequence no word begins with.
    pub fn scan_from(&self, start: Coord, direction: Direction, collector: &Collector<ScanHit>) {
        let (rows, cols) = self.grid.size();
        let mut letters = String::new();
        let mut cursor = Some(start).filter(|&coord| self.grid.contains(coord));

        while let Some(coord) = cursor {
            if self.grid.is_blank(coord) { break; }
            letters.push(self.grid.letter(coord));
            if !self.index.is_prefix(&letters) { break; }

            if self.index.is_word(&letters) {
                collector.record(ScanHit {
                    word: letters.clone(),
                    start,
                    direction,
                    length: letters.chars().count(),
                });
            }
            cursor = coord.step(direction, rows, cols).ok();
        }
    }

    /// Scans every (cell, direction) pair using `workers` threads.
    pub fn scan_all(&self, workers: usize) -> Vec<ScanHit> {
        assert!(workers > 0, "Expected at least one worker!");
        let collector = Collector::new();
        let jobs = Mutex::new(iproduct!(self.grid.coords(), Direction::ALL));

        thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|| loop {
                    let job = jobs.lock().unwrap_or_else(|e| e.into_inner()).next();
                    match job {
                        Some((start, direction)) => self.scan_from(start, direction, &collector),
                        None => break,
                    }
                });
            }
        });

        info!(workers, found = collector.len(), "scan finished");
        return collector.into_entries();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn scan(grid: &str, words: &[&str], start: Coord, direction: Direction) -> Vec<String> {
        let grid = Grid::parse(grid).unwrap();
        let dictionary = Dictionary::from_words(words, 2);
        let collector = Collector::new();
        Scanner::new(&grid, dictionary.index()).scan_from(start, direction, &collector);
        return collector.into_entries().into_iter().map(|hit| hit.word).collect();
    }

    #[test]
    fn reads_in_the_requested_direction() {
        let words = ["CAT", "CDB", "COT", "AT"];
        assert_eq!(scan("CAT\nDOG\nBAT", &words, Coord::new(0, 0), Direction::Right), vec!["CAT"]);
        assert_eq!(scan("CAT\nDOG\nBAT", &words, Coord::new(0, 0), Direction::Bottom), vec!["CDB"]);
        assert_eq!(scan("CAT\nDOG\nBAT", &words, Coord::new(0, 0), Direction::BottomRight), vec!["COT"]);
        assert!(scan("CAT\nDOG\nBAT", &words, Coord::new(0, 0), Direction::Left).is_empty());
    }

    #[test]
    fn stops_at_blanks() {
        assert!(scan("A B", &["AB", "A B"], Coord::new(0, 0), Direction::Right).is_empty());
    }

    #[test]
    fn records_every_word_along_the_line() {
        let found = scan("GREENS", &["GREEN", "GREENS", "GRE"], Coord::new(0, 0), Direction::Right);
        assert_eq!(found, vec!["GRE", "GREEN", "GREENS"]);
    }

    #[test]
    fn scan_all_keys_by_start_and_direction() {
        let grid = Grid::parse("ABCDEFGH\nABCDEFGH").unwrap();
        let dictionary = Dictionary::from_words(["ABC", "CBA", "AA"], 2);
        let hits = Scanner::new(&grid, dictionary.index()).scan_all(4);

        let mut keys: Vec<String> = hits.iter().map(|hit| hit.key()).collect();
        keys.sort();
        assert_eq!(keys, vec![
            "AA_0_0_B", "AA_1_0_T", "ABC_0_0_R", "ABC_1_0_R", "CBA_0_2_L", "CBA_1_2_L",
        ]);
        assert!(hits.iter().all(|hit| hit.length == hit.word.len()));
    }
}
