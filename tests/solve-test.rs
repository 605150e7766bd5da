use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use loopy::grid::{DotId, EdgeId, Grid};
use loopy::puzzle::{LineState, Puzzle};
use loopy::solve::{grade, has_unique_solution, Difficulty, PuzzleSolver, SolveStatus};

#[test]
fn test_puzzles() -> Result<()> {
    test_puzzle_dir(project_path("res/test/puzzles/solved"), SolveStatus::Solved)?;
    test_puzzle_dir(project_path("res/test/puzzles/mistake"), SolveStatus::Mistake)?;
    test_puzzle_dir(project_path("res/test/puzzles/incomplete"), SolveStatus::Incomplete)?;
    Ok(())
}

fn test_puzzle_dir(path: impl AsRef<Path>, status: SolveStatus) -> Result<()> {
    let mut files: Vec<_> = fs::read_dir(path).unwrap().map(|f| f.unwrap()).collect();
    files.sort_unstable_by_key(|f| f.path());
    for file in files {
        println!("Solving {}", file.path().display());
        let puzzle = Puzzle::from_file(&file.path())?;
        let result = PuzzleSolver::new(&puzzle).solve();
        assert_eq!(result.status(), status, "{}", file.path().display());
        if result.is_solved() {
            assert!(puzzle.verify_solution(result.lines()));
        }
    }
    Ok(())
}

#[test]
fn puzzle_file_round_trip() -> Result<()> {
    let puzzle = Puzzle::parse("square 3 2\n3.1\n.20\n")?;
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "{}", puzzle)?;
    let read = Puzzle::from_file(file.path())?;
    assert_eq!(read.clues(), puzzle.clues());
    assert_eq!(read.grid().num_edges(), puzzle.grid().num_edges());
    Ok(())
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Puzzle::from_file(dir.path().join("missing.txt")).is_err());
}

#[test]
fn loop_counts() -> Result<()> {
    assert_eq!(all_loops(&Grid::square(1, 1)?).len(), 1);
    assert_eq!(all_loops(&Grid::square(2, 2)?).len(), 13);
    assert_eq!(all_loops(&Grid::square(3, 3)?).len(), 213);
    Ok(())
}

#[test]
fn random_puzzles_are_solved_soundly() -> Result<()> {
    let grid = Arc::new(Grid::square(3, 3)?);
    let loops = all_loops(&grid);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..300 {
        let lines = loops.choose(&mut rng).unwrap();
        let mut puzzle = Puzzle::from_solution(Arc::clone(&grid), lines);
        for f in 0..grid.num_faces() {
            if rng.gen_bool(0.5) {
                puzzle = puzzle.with_clue(f, None)?;
            }
        }
        let solutions = solutions(&puzzle, &loops);
        for &difficulty in &Difficulty::ALL {
            let result = PuzzleSolver::new(&puzzle).difficulty(difficulty).solve();
            match result.status() {
                SolveStatus::Solved => {
                    assert_eq!(solutions, vec![result.lines()], "{}", puzzle);
                    let again = PuzzleSolver::new(&puzzle)
                        .difficulty(difficulty)
                        .start_from(result.lines())
                        .solve();
                    assert_eq!(again.status(), SolveStatus::Solved);
                    assert_eq!(again.lines(), result.lines());
                }
                SolveStatus::Ambiguous => {
                    assert!(solutions.contains(&result.lines()), "{}", puzzle);
                }
                SolveStatus::Mistake => panic!("solvable puzzle reported as a mistake\n{}", puzzle),
                SolveStatus::Incomplete => {}
            }
        }
    }
    Ok(())
}

#[test]
fn harder_difficulties_solve_more() -> Result<()> {
    let grid = Arc::new(Grid::square(3, 3)?);
    let loops = all_loops(&grid);
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let lines = loops.choose(&mut rng).unwrap();
        let puzzle = Puzzle::from_solution(Arc::clone(&grid), lines);
        let puzzle = puzzle.minimize_clues(Difficulty::Easy, &mut rng);
        if !has_unique_solution(&puzzle, Difficulty::Easy) {
            continue;
        }
        for &difficulty in &Difficulty::ALL {
            let result = PuzzleSolver::new(&puzzle).difficulty(difficulty).solve();
            assert!(result.is_solved(), "{}", puzzle);
            assert_eq!(result.lines(), &lines[..]);
        }
    }
    Ok(())
}

/// A puzzle on a 4x4 grid which needs lines linked by parity to be solved
#[test]
fn hard_only_puzzle() -> Result<()> {
    let grid = Arc::new(Grid::square(4, 4)?);
    let loops = all_loops(&grid);
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..500 {
        let lines = loops.choose(&mut rng).unwrap();
        let full = Puzzle::from_solution(Arc::clone(&grid), lines);
        let puzzle = full.minimize_clues(Difficulty::Hard, &mut rng);
        if grade(&puzzle) != Some(Difficulty::Hard) {
            continue;
        }
        let normal = PuzzleSolver::new(&puzzle)
            .difficulty(Difficulty::Normal)
            .solve();
        if normal.status() != SolveStatus::Incomplete {
            continue;
        }
        println!("{}", puzzle);
        let hard = PuzzleSolver::new(&puzzle).difficulty(Difficulty::Hard).solve();
        assert_eq!(hard.status(), SolveStatus::Solved);
        assert_eq!(solutions(&puzzle, &loops), vec![hard.lines()]);
        return Ok(());
    }
    panic!("no puzzle found that needs hard deductions");
}

/// The clue-satisfying loops, found by brute force
fn solutions<'a>(puzzle: &Puzzle, loops: &'a [Vec<LineState>]) -> Vec<&'a [LineState]> {
    loops
        .iter()
        .filter(|lines| puzzle.verify_solution(lines))
        .map(|lines| &lines[..])
        .collect()
}

/// Every simple loop in a grid
fn all_loops(grid: &Grid) -> Vec<Vec<LineState>> {
    let mut loops = Vec::new();
    let mut visited = vec![false; grid.num_dots()];
    let mut path = Vec::new();
    for start in 0..grid.num_dots() {
        visited[start] = true;
        extend_path(grid, start, start, &mut visited, &mut path, &mut loops);
        visited[start] = false;
    }
    loops
}

/// Finds each loop once, from its lowest dot, in the direction that leaves by the lower edge
fn extend_path(
    grid: &Grid,
    start: DotId,
    dot: DotId,
    visited: &mut [bool],
    path: &mut Vec<EdgeId>,
    loops: &mut Vec<Vec<LineState>>,
) {
    for &e in grid.dot(dot).edges() {
        let edge = grid.edge(e);
        let next = if edge.dot1() == dot {
            edge.dot2()
        } else {
            edge.dot1()
        };
        if next == start {
            if path.len() >= 2 && path[0] < e {
                let mut lines = vec![LineState::No; grid.num_edges()];
                for &p in path.iter().chain(Some(&e)) {
                    lines[p] = LineState::Yes;
                }
                loops.push(lines);
            }
        } else if next > start && !visited[next] {
            visited[next] = true;
            path.push(e);
            extend_path(grid, start, next, visited, path, loops);
            path.pop();
            visited[next] = false;
        }
    }
}

fn project_path(path: impl AsRef<Path>) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}
