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

//! Exhaustive path search.
//!
//! From a start cell the explorer tries all eight neighbours of the path's tip,
//! skipping cells off the grid, blank cells, and cells the path already visited.
//! Every extension whose letters form a dictionary word is recorded, and the
//! branch only keeps growing while its letters are still a dictionary prefix.
//!
//! Sibling branches run on their own threads while the [`Governor`] has a free
//! slot. A branch that finds the governor full explores the child on its own
//! thread instead of waiting, since every thread holding a slot may itself be
//! waiting on its children.

use std::thread;

use tracing::{debug, info, trace};

use crate::collector::{Collector, FoundWord};
use crate::coord::{Coord, Direction};
use crate::governor::Governor;
use crate::grid::Grid;
use crate::path::Path;
use crate::trie::PrefixIndex;

pub struct Explorer<'a> {
    grid: &'a Grid,
    index: &'a PrefixIndex,
    governor: Governor,
}

impl<'a> Explorer<'a> {
    pub fn new(grid: &'a Grid, index: &'a PrefixIndex, capacity: usize) -> Self {
        return Self {
            grid,
            index,
            governor: Governor::new(capacity),
        };
    }

    pub fn capacity(&self) -> usize { return self.governor.capacity(); }

    /// The single-cell path for `start`, unless no word can begin there.
    pub fn seed(&self, start: Coord) -> Option<Path> {
        if !self.grid.contains(start) || self.grid.is_blank(start) { return None; }
        let path = Path::new(start, self.grid.letter(start));
        if !self.index.is_prefix(path.letters()) { return None; }
        return Some(path);
    }

    /// Every word reachable from `start`, each with the path that spells it.
    pub fn search_from(&self, start: Coord) -> Vec<FoundWord> {
        let collector = Collector::new();
        if let Some(path) = self.seed(start) {
            self.explore(&path, &collector);
        }
        debug!(start = %start, found = collector.len(), "explored start cell");
        return collector.into_entries();
    }

    /// Runs [`Explorer::search_from`] for every cell, several start cells at a time.
    /// Results come back in row-major start order.
    pub fn search_all(&self) -> Vec<(Coord, Vec<FoundWord>)> {
        let (rows, cols) = self.grid.size();
        info!(rows, cols, words = self.index.len(), capacity = self.capacity(), "searching grid");

        let results: Vec<(Coord, Vec<FoundWord>)> = thread::scope(|scope| {
            let handles: Vec<_> = self.grid.coords()
                .filter(|&start| self.seed(start).is_some())
                .map(|start| {
                    let permit = self.governor.acquire();
                    let handle = scope.spawn(move || {
                        let _permit = permit;
                        return self.search_from(start);
                    });
                    return (start, handle);
                })
                .collect();

            return handles.into_iter()
                .map(|(start, handle)| match handle.join() {
                    Ok(found) => (start, found),
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect();
        });

        info!(found = results.iter().map(|(_, found)| found.len()).sum::<usize>(), "search finished");
        return results;
    }

    /// Grows `path` in every direction, recording words into `collector`.
    /// Returns once every branch below `path` is exhausted.
    pub fn explore(&self, path: &Path, collector: &Collector<FoundWord>) {
        thread::scope(|scope| {
            for direction in Direction::ALL {
                let next = match self.advance(path, direction, collector) {
                    None => continue,
                    Some(next) => next,
                };

                match self.governor.try_acquire() {
                    Some(permit) => {
                        scope.spawn(move || {
                            let _permit = permit;
                            self.explore(&next, collector);
                        });
                    }
                    None => self.explore(&next, collector),
                }
            }
        });
    }

    fn advance(&self, path: &Path, direction: Direction, collector: &Collector<FoundWord>) -> Option<Path> {
        let (rows, cols) = self.grid.size();
        let next = match path.tip().step(direction, rows, cols) {
            Ok(next) => next,
            Err(edge) => {
                trace!(tip = %path.tip(), %edge, "cannot move");
                return None;
            }
        };

        if self.grid.is_blank(next) { return None; }
        if path.contains(next) {
            trace!(tip = %path.tip(), next = %next, "already visited");
            return None;
        }

        let extended = path.extend(next, self.grid.letter(next));
        if self.index.is_word(extended.letters()) {
            collector.record(FoundWord::from_path(&extended));
        }
        if !self.index.is_prefix(extended.letters()) {
            trace!(letters = extended.letters(), "no word continues");
            return None;
        }

        return Some(extended);
    }
}
