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

use crate::coord::Coord;

/// The cells walked so far and the letters they spell.
///
/// A path is never changed once built: [`Path::extend`] returns a new path and
/// leaves the original alone, so sibling branches can grow the same parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Coord>,
    letters: String,
}

impl Path {
    pub fn new(start: Coord, letter: char) -> Self {
        return Self {
            cells: vec![start],
            letters: letter.to_string(),
        };
    }

    pub fn extend(&self, coord: Coord, letter: char) -> Self {
        debug_assert!(!self.contains(coord), "{} is already on the path", coord);
        let mut cells = Vec::with_capacity(self.cells.len() + 1);
        cells.extend_from_slice(&self.cells);
        cells.push(coord);

        let mut letters = self.letters.clone();
        letters.push(letter);

        return Self { cells, letters };
    }

    pub fn contains(&self, coord: Coord) -> bool {
        return self.cells.iter().rev().any(|&cell| cell == coord);
    }

    pub fn tip(&self) -> Coord {
        return self.cells[self.cells.len() - 1];
    }

    pub fn start(&self) -> Coord { return self.cells[0]; }

    pub fn cells(&self) -> &[Coord] { return &self.cells; }

    pub fn letters(&self) -> &str { return &self.letters; }

    pub fn len(&self) -> usize { return self.cells.len(); }

    pub fn is_empty(&self) -> bool { return self.cells.is_empty(); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_leaves_the_parent_untouched() {
        let parent = Path::new(Coord::new(0, 0), 'C');
        let left = parent.extend(Coord::new(0, 1), 'A');
        let right = parent.extend(Coord::new(1, 1), 'O');

        assert_eq!(parent.letters(), "C");
        assert_eq!(parent.cells(), &[Coord::new(0, 0)]);
        assert_eq!(left.letters(), "CA");
        assert_eq!(right.letters(), "CO");
        assert_eq!(right.cells(), &[Coord::new(0, 0), Coord::new(1, 1)]);
    }

    #[test]
    fn tip_and_start_track_the_ends() {
        let path = Path::new(Coord::new(2, 2), 'B')
            .extend(Coord::new(2, 1), 'A')
            .extend(Coord::new(2, 0), 'T');
        assert_eq!(path.start(), Coord::new(2, 2));
        assert_eq!(path.tip(), Coord::new(2, 0));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn contains_every_visited_cell() {
        let path = Path::new(Coord::new(0, 0), 'A').extend(Coord::new(1, 1), 'B');
        assert!(path.contains(Coord::new(0, 0)));
        assert!(path.contains(Coord::new(1, 1)));
        assert!(!path.contains(Coord::new(0, 1)));
    }
}
