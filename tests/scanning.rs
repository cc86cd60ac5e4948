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

use std::io::Write;

use tempfile::NamedTempFile;
use wordgrid::report;
use wordgrid::scanner::Scanner;
use wordgrid::{Coord, Dictionary, Direction, Discovery, Grid};

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    return file;
}

#[test]
fn scans_words_from_files_in_every_direction() {
    let grid_file = write_temp("CAT\nDOG\nBAT\n");
    let words_file = write_temp("cat\ntac\ncdb\ncot\nGOD\nat\n");
    let grid = Grid::from_file(grid_file.path()).unwrap();
    let dictionary = Dictionary::from_file(words_file.path(), 3).unwrap();

    let hits = Scanner::new(&grid, dictionary.index()).scan_all(3);
    let mut keys: Vec<String> = hits.iter().map(|hit| hit.key()).collect();
    keys.sort();
    assert_eq!(keys, vec!["CAT_0_0_R", "CDB_0_0_B", "COT_0_0_BR", "GOD_1_2_L", "TAC_0_2_L"]);

    let cot = hits.iter().find(|hit| hit.word == "COT").unwrap();
    assert_eq!((cot.start, cot.direction, cot.length), (Coord::new(0, 0), Direction::BottomRight, 3));
}

#[test]
fn straight_lines_do_not_turn_or_cross_blanks() {
    let grid_file = write_temp("CA\n T\n");
    let words_file = write_temp("CAT\nCT\n");
    let grid = Grid::from_file(grid_file.path()).unwrap();
    let dictionary = Dictionary::from_file(words_file.path(), 2).unwrap();

    let hits = Scanner::new(&grid, dictionary.index()).scan_all(2);
    let words: Vec<&str> = hits.iter().map(|hit| hit.word.as_str()).collect();
    assert_eq!(words, vec!["CT"]);
}

#[test]
fn worker_count_does_not_change_the_hits() {
    let grid_file = write_temp("ABCDEFGH\nHGFEDCBA\nABCDEFGH\n");
    let words_file = write_temp("ABC\nCBA\nAHA\nHGF\nBGB\nDEF\n");
    let grid = Grid::from_file(grid_file.path()).unwrap();
    let dictionary = Dictionary::from_file(words_file.path(), 3).unwrap();
    let scanner = Scanner::new(&grid, dictionary.index());

    let sorted_keys = |workers: usize| {
        let mut keys: Vec<String> = scanner.scan_all(workers).iter().map(|hit| hit.key()).collect();
        keys.sort();
        return keys;
    };
    let single = sorted_keys(1);
    assert!(!single.is_empty());
    for workers in [2, 4, 16] {
        assert_eq!(sorted_keys(workers), single, "{} workers", workers);
    }
}

#[test]
fn scan_output_renders_as_text_and_json() {
    let grid_file = write_temp("CAT\n");
    let words_file = write_temp("CAT\nTAC\n");
    let grid = Grid::from_file(grid_file.path()).unwrap();
    let dictionary = Dictionary::from_file(words_file.path(), 3).unwrap();
    let hits = Scanner::new(&grid, dictionary.index()).scan_all(2);

    let text = report::render_scan(&hits);
    assert!(text.starts_with("Total words found: 2\n"));
    assert!(text.contains("'TAC' at (1,3) - 3 letters"));

    let json: serde_json::Value = serde_json::from_str(&report::json_scan(&hits).unwrap()).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(2));
}
