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

//! Property tests for the prefix index and the path explorer.
//!
//! The explorer is checked against a plain single-threaded depth-first search
//! over small random grids, so any capacity must give exactly the same words.

use std::collections::HashSet;

use proptest::prelude::*;
use wordgrid::{Coord, Dictionary, Direction, Discovery, Explorer, Grid, PrefixIndex};

fn brute_force(grid: &Grid, words: &HashSet<String>) -> HashSet<String> {
    fn walk(grid: &Grid, words: &HashSet<String>, max: usize, path: &mut Vec<Coord>, out: &mut HashSet<String>) {
        let letters: String = path.iter().map(|&c| grid.letter(c)).collect();
        if path.len() > 1 && words.contains(&letters) {
            let cells: String = path.iter().map(Coord::to_string).collect();
            out.insert(format!("{} {}", letters, cells));
        }
        if path.len() == max { return; }

        let (rows, cols) = grid.size();
        let tip = path[path.len() - 1];
        for direction in Direction::ALL {
            let next = match tip.step(direction, rows, cols) {
                Ok(next) => next,
                Err(_) => continue,
            };
            if grid.is_blank(next) || path.contains(&next) { continue; }
            path.push(next);
            walk(grid, words, max, path, out);
            path.pop();
        }
    }

    let max = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    let mut out = HashSet::new();
    for start in grid.coords().filter(|&c| !grid.is_blank(c)) {
        walk(grid, words, max, &mut vec![start], &mut out);
    }
    return out;
}

fn grid_text() -> impl Strategy<Value = String> {
    return prop::collection::vec("[ABC ]{1,4}", 1..4).prop_map(|rows| rows.join("\n"));
}

fn word_list() -> impl Strategy<Value = Vec<String>> {
    return prop::collection::vec("[ABC]{2,5}", 0..12);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn inserted_words_and_their_prefixes_are_found(words in prop::collection::vec("[a-dA-D]{1,8}", 1..20)) {
        let index: PrefixIndex = words.iter().collect();
        for word in &words {
            let upper = word.to_uppercase();
            prop_assert!(index.is_word(&upper));
            for end in 1..=upper.len() {
                prop_assert!(index.is_prefix(&upper[..end]));
            }
        }
    }

    #[test]
    fn sequences_that_start_no_word_are_rejected(
        words in prop::collection::vec("[A-D]{1,6}", 0..20),
        probe in "[A-F]{1,6}",
    ) {
        let index: PrefixIndex = words.iter().collect();
        let expected = words.iter().any(|w| w.starts_with(probe.as_str()));
        prop_assert_eq!(index.is_prefix(&probe), expected);
        prop_assert_eq!(index.is_word(&probe), words.contains(&probe));
    }

    #[test]
    fn explorer_matches_a_plain_depth_first_search(
        text in grid_text(),
        words in word_list(),
        capacity in 1usize..6,
    ) {
        let grid = Grid::parse(&text).unwrap();
        let dictionary = Dictionary::from_words(&words, 2);
        let expected = brute_force(&grid, &words.iter().cloned().collect());

        let explorer = Explorer::new(&grid, dictionary.index(), capacity);
        let keys: Vec<String> = explorer.search_all().into_iter()
            .flat_map(|(_, found)| found)
            .map(|f| f.key())
            .collect();
        let unique: HashSet<String> = keys.iter().cloned().collect();

        prop_assert_eq!(unique.len(), keys.len());
        prop_assert_eq!(unique, expected);
    }
}
