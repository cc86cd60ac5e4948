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

use std::collections::HashSet;
use std::sync::Mutex;

use itertools::Itertools;
use serde::Serialize;

use crate::coord::Coord;
use crate::path::Path;

/// Something a search can report, identified by a composite key.
pub trait Discovery: Clone {
    fn key(&self) -> String;
}

/// A word traced through the grid, with the cells that spell it in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Coord>,
}

impl FoundWord {
    pub fn new(word: impl Into<String>, path: Vec<Coord>) -> Self {
        return Self { word: word.into(), path };
    }

    pub fn from_path(path: &Path) -> Self {
        return Self::new(path.letters(), path.cells().to_vec());
    }

    pub fn len(&self) -> usize { return self.path.len(); }

    pub fn is_empty(&self) -> bool { return self.path.is_empty(); }

    pub fn start(&self) -> Option<Coord> { return self.path.first().copied(); }

    pub fn touches(&self, cells: &HashSet<Coord>) -> bool {
        return self.path.iter().any(|coord| cells.contains(coord));
    }
}

impl Discovery for FoundWord {
    fn key(&self) -> String {
        return format!("{} {}", self.word, self.path.iter().join(""));
    }
}

impl std::fmt::Display for FoundWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", self.key());
    }
}

#[derive(Debug)]
struct Entries<T> {
    seen: HashSet<String>,
    found: Vec<T>,
}

/// Gathers discoveries from any number of threads, keeping one entry per key.
#[derive(Debug)]
pub struct Collector<T> {
    entries: Mutex<Entries<T>>,
}

impl<T: Discovery> Collector<T> {
    pub fn new() -> Self {
        return Self {
            entries: Mutex::new(Entries { seen: HashSet::new(), found: Vec::new() }),
        };
    }

    /// Returns false if an entry with the same key was already recorded.
    pub fn record(&self, entry: T) -> bool {
        let key = entry.key();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if !entries.seen.insert(key) { return false; }
        entries.found.push(entry);
        return true;
    }

    /// A copy of everything recorded so far, in recording order.
    pub fn snapshot(&self) -> Vec<T> {
        return self.entries.lock().unwrap_or_else(|e| e.into_inner()).found.clone();
    }

    pub fn len(&self) -> usize {
        return self.entries.lock().unwrap_or_else(|e| e.into_inner()).found.len();
    }

    pub fn is_empty(&self) -> bool { return self.len() == 0; }

    pub fn into_entries(self) -> Vec<T> {
        return self.entries.into_inner().unwrap_or_else(|e| e.into_inner()).found;
    }
}

impl<T: Discovery> Default for Collector<T> {
    fn default() -> Self { return Self::new(); }
}
