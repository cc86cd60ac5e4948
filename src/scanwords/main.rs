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

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use wordgrid::report;
use wordgrid::scanner::Scanner;
use wordgrid::{Dictionary, Grid, Result, SearchConfig};

/// Lists dictionary words read in a straight line, in any of the eight directions.
#[derive(Debug, Parser)]
#[command(name = "scanwords", version)]
struct Args {
    /// Grid file, one row per line. Short rows are padded with blanks.
    grid: PathBuf,

    /// Word list, one word per line.
    dictionary: PathBuf,

    /// Ignore dictionary words shorter than this.
    #[arg(long, default_value_t = wordgrid::config::DEFAULT_MIN_WORD_LENGTH)]
    min_length: usize,

    /// Worker threads.
    #[arg(long, default_value_t = 4)]
    workers: usize,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// More log output on stderr (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: Args) -> Result<()> {
    let config = SearchConfig::new(args.min_length, args.workers)?;
    let grid = Grid::from_file(&args.grid)?;
    let dictionary = Dictionary::from_file(&args.dictionary, config.min_word_length)?;
    let hits = Scanner::new(&grid, dictionary.index()).scan_all(config.capacity);

    if args.json {
        println!("{}", report::json_scan(&hits)?);
    } else {
        println!("{}", report::grid_banner(&grid));
        println!("Dictionary: {} words", dictionary.len());
        print!("{}", report::render_scan(&hits));
    }

    return Ok(());
}

fn main() -> ExitCode {
    let args = Args::parse();
    wordgrid::logging::init(args.verbose);

    return match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("scanwords: {}", e);
            ExitCode::FAILURE
        }
    };
}
