use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::ArgMatches;

const DEFAULT_CATEGORY: &str = "games";

#[derive(Clone)]
pub(crate) struct Options {
    source: Source,
    show_solution: bool,
    play: bool,
    store_path: Option<PathBuf>,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let source = if matches.is_present("practice") {
            Source::Practice
        } else {
            let date = match matches.value_of("date") {
                Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map_err(|e| anyhow!("invalid date \"{}\": {}", s, e))?,
                None => Local::now().naive_local().date(),
            };
            Source::Daily {
                date,
                category: matches
                    .value_of("category")
                    .unwrap_or(DEFAULT_CATEGORY)
                    .to_string(),
            }
        };
        Ok(Self {
            source,
            show_solution: matches.is_present("solution"),
            play: matches.is_present("play"),
            store_path: matches.value_of("store").map(PathBuf::from),
        })
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn show_solution(&self) -> bool {
        self.show_solution
    }

    pub fn play(&self) -> bool {
        self.play
    }

    pub fn store_path(&self) -> Option<&Path> {
        self.store_path.as_deref()
    }
}

#[derive(Clone)]
pub(crate) enum Source {
    Daily { date: NaiveDate, category: String },
    Practice,
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("Kendoku")
        .help_message("Generate and play daily KenKen-style puzzles")
        .arg(
            Arg::with_name("date")
                .short("d")
                .long("date")
                .takes_value(true)
                .value_name("YYYY-MM-DD")
                .conflicts_with("practice")
                .help("generate the puzzle for a specific date")
                .display_order(1),
        )
        .arg(
            Arg::with_name("category")
                .short("c")
                .long("category")
                .takes_value(true)
                .value_name("NAME")
                .conflicts_with("practice")
                .help("puzzle category; each category has its own daily puzzle and streak")
                .display_order(1),
        )
        .arg(
            Arg::with_name("practice")
                .short("p")
                .long("practice")
                .help("generate a randomly-seeded practice puzzle (no streak)"),
        )
        .arg(
            Arg::with_name("solution")
                .long("solution")
                .help("print the solution grid"),
        )
        .arg(
            Arg::with_name("play")
                .long("play")
                .help("play the puzzle interactively on stdin"),
        )
        .arg(
            Arg::with_name("store")
                .long("store")
                .takes_value(true)
                .value_name("PATH")
                .help("streak store file (defaults to the user data directory)"),
        )
}
