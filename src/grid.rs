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
use std::path::Path;

use itertools::Itertools;
use tracing::info;

use crate::coord::Coord;
use crate::error::{Error, Result};

/// Placeholder for padding and removed letters. Never part of a word.
pub const BLANK: char = ' ';

/// A rectangular letter grid. Short rows are right-padded with [`BLANK`].
///
/// Cells keep the character they were loaded with; an uppercase character marks
/// a "special" cell. Matching against the dictionary always uses [`Grid::letter`],
/// the uppercased form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let grid = Self::parse(&text)?;
        info!(path = %path.display(), rows = grid.rows(), cols = grid.cols(), "loaded grid");
        return Ok(grid);
    }

    /// Builds a grid from text, one row per non-empty line.
    pub fn parse(text: &str) -> Result<Self> {
        let mut cells: Vec<Vec<char>> = text.lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();

        let width = cells.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 { return Err(Error::EmptyGrid); }

        for row in cells.iter_mut() {
            row.resize(width, BLANK);
        }

        return Ok(Self { cells });
    }

    pub fn rows(&self) -> usize { return self.cells.len(); }

    pub fn cols(&self) -> usize { return self.cells[0].len(); }

    pub fn size(&self) -> (usize, usize) {
        return (self.rows(), self.cols());
    }

    pub fn contains(&self, coord: Coord) -> bool {
        return coord.row < self.rows() && coord.col < self.cols();
    }

    /// The character as loaded.
    pub fn get(&self, coord: Coord) -> char {
        return self.cells[coord.row][coord.col];
    }

    /// The character in the dictionary's canonical (upper) case.
    pub fn letter(&self, coord: Coord) -> char {
        let c = self.get(coord);
        let mut upper = c.to_uppercase();
        return match (upper.next(), upper.next()) {
            (Some(u), None) => u,
            _ => c,
        };
    }

    pub fn is_blank(&self, coord: Coord) -> bool {
        return self.get(coord) == BLANK;
    }

    pub fn is_special(&self, coord: Coord) -> bool {
        return self.get(coord).is_uppercase();
    }

    /// Every coordinate, row by row.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let (rows, cols) = self.size();
        return (0..rows).cartesian_product(0..cols).map(|(row, col)| Coord::new(row, col));
    }

    pub fn specials(&self) -> Vec<Coord> {
        return self.coords().filter(|&coord| self.is_special(coord)).collect();
    }

    /// Drops the letters at `removed` and lets everything above them fall down,
    /// leaving blanks at the top of each affected column.
    pub fn remove_letters(&mut self, removed: &[Coord]) -> Result<()> {
        if let Some(outside) = removed.iter().find(|&&coord| !self.contains(coord)) {
            return Err(Error::invalid(format!("cannot remove {}: outside the grid", outside)));
        }

        let removed: HashSet<Coord> = removed.iter().copied().collect();
        for col in removed.iter().map(|coord| coord.col).unique().collect::<Vec<_>>() {
            let kept: Vec<char> = (0..self.rows())
                .filter(|&row| !removed.contains(&Coord::new(row, col)))
                .map(|row| self.cells[row][col])
                .collect();
            let gap = self.rows() - kept.len();
            for row in 0..self.rows() {
                self.cells[row][col] = if row < gap { BLANK } else { kept[row - gap] };
            }
        }

        return Ok(());
    }

    pub fn display(&self) -> String {
        return self.cells.iter()
            .map(|row| row.iter().collect::<String>())
            .join("\n");
    }
}
