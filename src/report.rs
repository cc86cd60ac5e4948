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

//! Ordering and rendering of search results for people and for scripts.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt::Write;

use itertools::Itertools;
use serde::Serialize;

use crate::collector::FoundWord;
use crate::coord::{Coord, Direction};
use crate::error::Result;
use crate::grid::Grid;
use crate::scanner::ScanHit;

/// Words touching a preferred cell first, then longer words first.
pub fn sort_preferred(found: &mut [FoundWord], preferred: &HashSet<Coord>) {
    found.sort_by(|a, b| {
        let rank = |f: &FoundWord| (!f.touches(preferred), Reverse(f.len()));
        return rank(a).cmp(&rank(b))
            .then_with(|| a.word.cmp(&b.word))
            .then_with(|| a.path.cmp(&b.path));
    });
}

pub fn grid_banner(grid: &Grid) -> String {
    let (rows, cols) = grid.size();
    let mut out = format!("Grid {}x{}\n", rows, cols);
    for (i, line) in grid.display().lines().enumerate() {
        let _ = writeln!(out, "{:2}: {}", i + 1, line);
    }
    return out;
}

/// One line per word: `WORD (r,c)(r,c)...`.
pub fn render_found(found: &[FoundWord]) -> String {
    return found.iter().map(|f| format!("{}\n", f)).collect();
}

#[derive(Serialize)]
struct StartReport<'a> {
    start: Coord,
    found: &'a [FoundWord],
}

/// Text listing of a full search, grouped under each start cell that produced words.
pub fn render_by_start(results: &[(Coord, Vec<FoundWord>)]) -> String {
    let mut out = String::new();
    for (start, found) in results.iter().filter(|(_, found)| !found.is_empty()) {
        let _ = writeln!(out, "{} {} word(s)", start, found.len());
        for f in found {
            let _ = writeln!(out, "  {}", f);
        }
    }
    let total: usize = results.iter().map(|(_, found)| found.len()).sum();
    let _ = writeln!(out, "Total words found: {}", total);
    return out;
}

pub fn json_by_start(results: &[(Coord, Vec<FoundWord>)]) -> Result<String> {
    let reports: Vec<StartReport> = results.iter()
        .map(|(start, found)| StartReport { start: *start, found })
        .collect();
    return Ok(serde_json::to_string_pretty(&reports)?);
}

/// Text listing of scanner hits, grouped by direction in the canonical order.
pub fn render_scan(hits: &[ScanHit]) -> String {
    let mut by_direction = hits.iter().into_group_map_by(|hit| hit.direction);
    let mut out = format!("Total words found: {}\n", hits.len());
    for direction in Direction::ALL {
        let mut group = match by_direction.remove(&direction) {
            None => continue,
            Some(group) => group,
        };
        group.sort_by_key(|hit| (hit.start, hit.word.clone()));
        let _ = writeln!(out, "\n{} ({} words):", direction, group.len());
        for hit in group {
            let _ = writeln!(out, "  '{}' at {} - {} letters", hit.word, hit.start, hit.length);
        }
    }
    return out;
}

pub fn json_scan(hits: &[ScanHit]) -> Result<String> {
    return Ok(serde_json::to_string_pretty(hits)?);
}
