#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::io;
use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use itertools::Itertools;
use rand::Rng;

use kendoku::collections::square::Coord;
use kendoku::puzzle::seed::Seed;
use kendoku::puzzle::Puzzle;
use kendoku::session::{InputMode, Session};
use kendoku::streak::StreakStore;

use crate::options::{Options, Source};

mod options;

/// At most this many check messages are shown at once
const MAX_SHOWN_ERRORS: usize = 3;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let puzzle = match options.source() {
        Source::Daily { date, category } => Puzzle::daily(*date, category),
        Source::Practice => {
            let label = rand::thread_rng().gen_range(0, 1_000_000_000_u32);
            Puzzle::with_seed(Seed::new(format!("practice-{}", label)))
        }
    };
    println!(
        "Puzzle \"{}\" ({}x{})",
        puzzle.seed().text(),
        puzzle.width(),
        puzzle.width()
    );
    print_puzzle(&puzzle);
    if options.show_solution() {
        println!("Solution:\n{}", puzzle.solution());
    }
    if options.play() {
        play(puzzle, &options)?;
    }
    Ok(())
}

fn print_puzzle(puzzle: &Puzzle) {
    let cages = puzzle
        .cages()
        .enumerate()
        .map(|(i, cage)| {
            format!(
                " {:>2}: {}{}",
                i,
                &cage.operator().symbol().unwrap_or(' '),
                cage.target()
            )
        })
        .join("\n");
    println!("{}{}", puzzle.cell_cage_ids(), cages);
}

fn play(puzzle: Puzzle, options: &Options) -> Result<()> {
    let category = match options.source() {
        Source::Daily { category, .. } => Some(category.clone()),
        Source::Practice => None,
    };
    let mut store = match options.store_path() {
        Some(path) => StreakStore::open(path)?,
        None => StreakStore::open_default()?,
    };
    if let Some(category) = &category {
        if let Some(record) = store.record(category) {
            println!(
                "Current \"{}\" streak: {} (last played {})",
                category, record.streak, record.last_played
            );
        }
    }
    println!("Commands: set R C V, note R C V, R C V, mode, undo, hint, check, board, reset, quit");
    let mut session = Session::new(puzzle);
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["quit"] | ["q"] => break,
            ["board"] | ["b"] => print_board(&session),
            ["mode"] | ["m"] => {
                session.toggle_mode();
                println!("Input mode: {:?}", session.mode());
            }
            ["undo"] | ["u"] => {
                if session.undo() {
                    print_board(&session);
                } else {
                    println!("Nothing to undo");
                }
            }
            ["hint"] | ["h"] => println!("{}", session.hint().message),
            ["reset"] => {
                session.reset();
                println!("Board cleared");
            }
            ["check"] | ["c"] => check(&mut session, &mut store, category.as_deref())?,
            ["set", row, col, value] => {
                session.set_mode(InputMode::Normal);
                apply(&mut session, row, col, value);
            }
            ["note", row, col, value] => {
                session.set_mode(InputMode::Notes);
                apply(&mut session, row, col, value);
            }
            [row, col, value] => apply(&mut session, row, col, value),
            _ => println!("Unrecognized command"),
        }
    }
    Ok(())
}

fn check(session: &mut Session, store: &mut StreakStore, category: Option<&str>) -> Result<()> {
    if session.check() {
        println!("Solved in {}", format_elapsed(session.elapsed()));
        if let Some(category) = category {
            let today = Local::now().naive_local().date();
            let record = store.record_completion(category, today)?;
            println!("\"{}\" streak: {}", category, record.streak);
        }
    } else if session.is_complete() {
        println!("Already solved");
    } else {
        let errors = session.errors();
        for error in errors.iter().take(MAX_SHOWN_ERRORS) {
            println!("{}", error);
        }
        if errors.len() > MAX_SHOWN_ERRORS {
            println!("...and {} more", errors.len() - MAX_SHOWN_ERRORS);
        }
    }
    Ok(())
}

fn apply(session: &mut Session, row: &str, col: &str, value: &str) {
    let parsed = (
        row.parse::<usize>(),
        col.parse::<usize>(),
        value.parse::<i32>(),
    );
    let (row, col, value) = match parsed {
        (Ok(row), Ok(col), Ok(value)) if row >= 1 && col >= 1 => (row, col, value),
        _ => {
            println!("Expected: ROW COL VALUE (1-based; value 0 clears)");
            return;
        }
    };
    session.apply_input(Coord::new(col - 1, row - 1), value);
    print_board(session);
}

fn print_board(session: &Session) {
    for cells in session.entries().rows() {
        let line = cells
            .iter()
            .map(|&v| {
                if v == 0 {
                    ".".to_string()
                } else {
                    v.to_string()
                }
            })
            .join(" ");
        println!("{}", line);
    }
    for (coord, _) in session.entries().iter_coord() {
        let notes = session.notes(coord);
        if !notes.is_empty() {
            println!(
                "notes ({}, {}): {}",
                coord.row() + 1,
                coord.col() + 1,
                notes.iter().join(" ")
            );
        }
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
