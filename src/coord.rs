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

use serde::Serialize;
use thiserror::Error;

use crate::error::{Error, Result};

/// A cell position, 0-based. Shown to users 1-based, as `(row,col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        return Self { row, col };
    }

    /// Parses the 1-based `ROW,COL` form used on the command line.
    pub fn parse_one_based(text: &str) -> Result<Self> {
        let invalid = || Error::invalid(format!("expected ROW,COL with 1-based values, got {:?}", text));
        let (row, col) = text.split_once(',').ok_or_else(invalid)?;
        let row: usize = row.trim().parse().map_err(|_| invalid())?;
        let col: usize = col.trim().parse().map_err(|_| invalid())?;
        if row == 0 || col == 0 { return Err(invalid()); }
        return Ok(Self::new(row - 1, col - 1));
    }

    /// The neighbouring cell in `direction`, checked against a `rows` x `cols` grid.
    pub fn step(self, direction: Direction, rows: usize, cols: usize) -> std::result::Result<Coord, BoundaryError> {
        let (drow, dcol) = direction.delta();
        let row = shift(self.row, drow, rows, BoundaryError::Top, BoundaryError::Bottom)?;
        let col = shift(self.col, dcol, cols, BoundaryError::Left, BoundaryError::Right)?;
        return Ok(Coord::new(row, col));
    }
}

fn shift(value: usize, delta: isize, limit: usize, below: BoundaryError, above: BoundaryError)
    -> std::result::Result<usize, BoundaryError>
{
    return match delta {
        0 => Ok(value),
        d if d < 0 => value.checked_sub(d.unsigned_abs()).ok_or(below),
        d => match value + d.unsigned_abs() {
            next if next < limit => Ok(next),
            _ => Err(above),
        },
    };
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "({},{})", self.row + 1, self.col + 1);
    }
}

impl Serialize for Coord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        return [self.row + 1, self.col + 1].serialize(serializer);
    }
}

/// Which edge of the grid a step would have crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundaryError {
    #[error("out of boundaries <")]
    Left,
    #[error("out of boundaries >")]
    Right,
    #[error("out of boundaries ^")]
    Top,
    #[error("out of boundaries v")]
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Left,
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
}

impl Direction {
    /// Canonical evaluation order, clockwise from the left.
    pub const ALL: [Direction; 8] = [
        Direction::Left,
        Direction::TopLeft,
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
    ];

    /// (Δrow, Δcol)
    pub const fn delta(self) -> (isize, isize) {
        return match self {
            Direction::Left => (0, -1),
            Direction::TopLeft => (-1, -1),
            Direction::Top => (-1, 0),
            Direction::TopRight => (-1, 1),
            Direction::Right => (0, 1),
            Direction::BottomRight => (1, 1),
            Direction::Bottom => (1, 0),
            Direction::BottomLeft => (1, -1),
        };
    }

    pub const fn tag(self) -> &'static str {
        return match self {
            Direction::Left => "L",
            Direction::TopLeft => "TL",
            Direction::Top => "T",
            Direction::TopRight => "TR",
            Direction::Right => "R",
            Direction::BottomRight => "BR",
            Direction::Bottom => "B",
            Direction::BottomLeft => "BL",
        };
    }

    pub const fn arrow(self) -> char {
        return match self {
            Direction::Left => '←',
            Direction::TopLeft => '↖',
            Direction::Top => '↑',
            Direction::TopRight => '↗',
            Direction::Right => '→',
            Direction::BottomRight => '↘',
            Direction::Bottom => '↓',
            Direction::BottomLeft => '↙',
        };
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{} {}", self.tag(), self.arrow());
    }
}
