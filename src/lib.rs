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

//! Finds every dictionary word traceable through adjacent cells of a letter grid.
//!
//! The path search lives in [`explorer`]; [`scanner`] is the simpler straight-line mode.

pub mod collector;
pub mod config;
pub mod coord;
pub mod dictionary;
pub mod error;
pub mod explorer;
pub mod governor;
pub mod grid;
pub mod logging;
pub mod path;
pub mod report;
pub mod scanner;
pub mod trie;

pub use collector::{Collector, Discovery, FoundWord};
pub use config::SearchConfig;
pub use coord::{BoundaryError, Coord, Direction};
pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use explorer::Explorer;
pub use grid::Grid;
pub use trie::PrefixIndex;
