//! Solve and generate loop puzzles
//!
//! A loop puzzle (also known as Slitherlink) is a grid of faces, some of which carry a clue.
//! The goal is to draw a single closed loop along the edges of the grid so that every clued
//! face has exactly as many of its edges on the loop as its clue says.

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod error;
pub mod grid;
pub mod puzzle;
pub mod solve;
