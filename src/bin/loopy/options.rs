use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use loopy::solve::Difficulty;

#[derive(Clone)]
pub(crate) struct Options {
    input: PathBuf,
    difficulty: Difficulty,
    grade: bool,
    minimize: Option<Minimize>,
    show_steps: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let difficulty = match matches.value_of("difficulty") {
            Some(s) => s.parse()?,
            None => Difficulty::default(),
        };
        let minimize = if matches.is_present("minimize") {
            let seed = match matches.value_of("seed") {
                Some(s) => Some(s.parse::<u64>().context("invalid seed")?),
                None => None,
            };
            Some(Minimize { seed })
        } else {
            None
        };
        Ok(Self {
            input: matches
                .value_of("input")
                .context("no input file given")?
                .into(),
            difficulty,
            grade: matches.is_present("grade"),
            minimize,
            show_steps: matches.is_present("steps"),
        })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn grade(&self) -> bool {
        self.grade
    }

    pub fn minimize(&self) -> Option<&Minimize> {
        self.minimize.as_ref()
    }

    pub fn show_steps(&self) -> bool {
        self.show_steps
    }
}

#[derive(Clone)]
pub(crate) struct Minimize {
    pub seed: Option<u64>,
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg};

    App::new("Loopy")
        .author("Cameron Steffen <cam.steffen94@gmail.com>")
        .help_message("Solve loop puzzles")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .required(true)
                .help("read a puzzle from a file")
                .display_order(1),
        )
        .arg(
            Arg::with_name("difficulty")
                .short("d")
                .long("difficulty")
                .takes_value(true)
                .value_name("LEVEL")
                .possible_values(&["easy", "normal", "tricky", "hard"])
                .help("the hardest deductions to use (default hard)"),
        )
        .arg(
            Arg::with_name("grade")
                .short("g")
                .long("grade")
                .help("find the easiest difficulty that solves the puzzle"),
        )
        .arg(
            Arg::with_name("minimize")
                .short("m")
                .long("minimize")
                .help("remove clues while the puzzle stays solvable at the difficulty"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .value_name("SEED")
                .requires("minimize")
                .help("seed the order clues are removed in"),
        )
        .arg(
            Arg::with_name("steps")
                .short("s")
                .long("steps")
                .help("print every line set by the solver"),
        )
}
