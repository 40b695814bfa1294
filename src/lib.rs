//! Generate, check, and play daily KenKen-style puzzles

#[macro_use]
extern crate log;

pub mod collections;
pub mod error;
pub mod puzzle;
pub mod session;
pub mod streak;
