#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use anyhow::{Context, Result};
use loopy::puzzle::render::format_lines;
use loopy::puzzle::Puzzle;
use loopy::solve::{grade, PuzzleSolver, SolveStatus};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::options::{Minimize, Options};

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let path = options.input();
    println!("Reading puzzle from \"{}\"", path.display());
    let puzzle = Puzzle::from_file(path)
        .with_context(|| format!("could not read puzzle from \"{}\"", path.display()))?;
    let puzzle = match options.minimize() {
        Some(minimize) => minimize_puzzle(&puzzle, &options, minimize),
        None => puzzle,
    };
    print!("{}", puzzle);
    if options.grade() {
        match grade(&puzzle) {
            Some(difficulty) => println!("Difficulty: {}", difficulty),
            None => println!("Puzzle cannot be solved at any difficulty"),
        }
    }
    solve_puzzle(&puzzle, &options);
    Ok(())
}

fn minimize_puzzle(puzzle: &Puzzle, options: &Options, minimize: &Minimize) -> Puzzle {
    let mut rng = match minimize.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let minimized = puzzle.minimize_clues(options.difficulty(), &mut rng);
    println!(
        "Kept {} of {} clues",
        minimized.clue_count(),
        puzzle.clue_count()
    );
    minimized
}

fn solve_puzzle(puzzle: &Puzzle, options: &Options) {
    let mut solver = PuzzleSolver::new(puzzle);
    solver.difficulty(options.difficulty());
    if options.show_steps() {
        solver.save_steps();
    }
    let result = solver.solve();
    for step in result.steps() {
        println!("{}", step);
    }
    println!("{}", format_lines(puzzle, result.lines()));
    let msg = match result.status() {
        SolveStatus::Solved => "Puzzle solved",
        SolveStatus::Mistake => "Puzzle has no solution",
        SolveStatus::Ambiguous => "Puzzle has a solution that may not be unique",
        SolveStatus::Incomplete => "Puzzle could not be solved",
    };
    println!("{}", msg);
}
