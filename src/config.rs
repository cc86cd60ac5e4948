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

use crate::error::{Error, Result};

pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;
pub const DEFAULT_CAPACITY: usize = 32;

/// Knobs shared by both search modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Dictionary entries shorter than this are dropped at load time.
    pub min_word_length: usize,
    /// Most explorations (or scanner workers) running at once.
    pub capacity: usize,
}

impl SearchConfig {
    pub fn new(min_word_length: usize, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid("capacity must be at least 1"));
        }
        return Ok(Self { min_word_length, capacity });
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        return Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            capacity: DEFAULT_CAPACITY,
        };
    }
}
