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
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use wordgrid::report;
use wordgrid::{Coord, Dictionary, Error, Explorer, Grid, Result, SearchConfig};

/// Lists every dictionary word that can be traced through touching cells of a letter grid.
#[derive(Debug, Parser)]
#[command(name = "findwords", version)]
struct Args {
    /// Grid file, one row per line. Short rows are padded with blanks.
    grid: PathBuf,

    /// Word list, one word per line.
    dictionary: PathBuf,

    /// Ignore dictionary words shorter than this.
    #[arg(long, default_value_t = wordgrid::config::DEFAULT_MIN_WORD_LENGTH)]
    min_length: usize,

    /// Most explorations running at once.
    #[arg(long, default_value_t = wordgrid::config::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Only search from this cell (1-based ROW,COL).
    #[arg(long, value_parser = parse_coord)]
    start: Option<Coord>,

    /// Remove the letter at ROW,COL (1-based) and let the column fall before searching.
    #[arg(long, value_parser = parse_coord)]
    remove: Vec<Coord>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// More log output on stderr (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_coord(text: &str) -> std::result::Result<Coord, String> {
    return Coord::parse_one_based(text).map_err(|e| e.to_string());
}

fn run(args: Args) -> Result<()> {
    let config = SearchConfig::new(args.min_length, args.capacity)?;
    let mut grid = Grid::from_file(&args.grid)?;
    if !args.remove.is_empty() {
        grid.remove_letters(&args.remove)?;
    }
    let dictionary = Dictionary::from_file(&args.dictionary, config.min_word_length)?;
    let explorer = Explorer::new(&grid, dictionary.index(), config.capacity);
    let preferred: HashSet<Coord> = grid.specials().into_iter().collect();

    if !args.json {
        println!("{}", report::grid_banner(&grid));
        println!("Dictionary: {} words\n", dictionary.len());
    }

    match args.start {
        Some(start) => {
            if !grid.contains(start) {
                return Err(Error::invalid(format!("start {} is outside the grid", start)));
            }
            let mut found = explorer.search_from(start);
            report::sort_preferred(&mut found, &preferred);
            if args.json {
                println!("{}", report::json_by_start(&[(start, found)])?);
            } else {
                print!("{}", report::render_found(&found));
                println!("Total words found: {}", found.len());
            }
        }
        None => {
            let mut results = explorer.search_all();
            for (_, found) in results.iter_mut() {
                report::sort_preferred(found, &preferred);
            }
            if args.json {
                println!("{}", report::json_by_start(&results)?);
            } else {
                print!("{}", report::render_by_start(&results));
            }
        }
    }

    return Ok(());
}

fn main() -> ExitCode {
    let args = Args::parse();
    wordgrid::logging::init(args.verbose);

    return match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("findwords: {}", e);
            ExitCode::FAILURE
        }
    };
}
