//! Daily KenKen-style puzzles

pub use self::cage::{Cage, Operator};
pub use self::check::{check_entries, CheckError};

pub mod seed;

mod cage;
mod check;
mod generate;

use std::fmt;
use std::fmt::Display;

use chrono::NaiveDate;

use crate::collections::square::Coord;
use crate::collections::Square;
use crate::puzzle::seed::Seed;

pub type CageId = usize;
pub type CellId = usize;
pub type Value = i32;
pub type Solution = Square<Value>;

/// A generated puzzle: the cage layout plus the solution grid it was built
/// from
pub struct Puzzle {
    /// the width and height of the puzzle
    width: usize,
    seed: Seed,
    /// contains all cages in the puzzle
    cages: Vec<Cage>,
    cage_map: Square<CageId>,
    solution: Solution,
}

impl Puzzle {
    /// The puzzle for a category on a calendar date.
    ///
    /// The same date and category always produce the same puzzle.
    pub fn daily(date: NaiveDate, category: &str) -> Self {
        Self::with_seed(Seed::daily(date, category))
    }

    pub fn with_seed(seed: Seed) -> Self {
        let (width, cages, solution) = generate::generate_puzzle(&seed);
        let cage_map = cage_map(width, &cages);
        Self {
            width,
            seed,
            cages,
            cage_map,
            solution,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    pub fn cell_count(&self) -> usize {
        self.width.pow(2)
    }

    pub fn cage(&self, id: CageId) -> &Cage {
        &self.cages[id]
    }

    pub fn cages(&self) -> impl Iterator<Item = &Cage> {
        self.cages.iter()
    }

    pub fn cage_count(&self) -> usize {
        self.cages.len()
    }

    /// The cage containing a cell
    pub fn cell_cage(&self, cell: CellId) -> CageId {
        self.cage_map[cell]
    }

    /// Square of values where each value is the index of the cage containing
    /// that position
    pub fn cell_cage_ids(&self) -> &Square<CageId> {
        &self.cage_map
    }

    /// The solved grid this puzzle was generated from, the oracle for checks
    /// and hints. Hosts should not display it outright.
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn coord_at(&self, cell: CellId) -> Coord {
        self.cage_map.coord_at(cell)
    }
}

/**
 * Create a square of values where each value represents the index of the cage
 * containing that position
 */
fn cage_map(width: usize, cages: &[Cage]) -> Square<CageId> {
    let mut cage_map = Square::with_width_and_value(width, 0);
    for (i, cage) in cages.iter().enumerate() {
        for &j in cage.cell_ids() {
            cage_map[j] = i;
        }
    }
    cage_map
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.width)?;
        for i in 0..self.width {
            for j in 0..self.width {
                let byte = b'A' + self.cage_map[Coord::new(j, i)] as u8;
                write!(f, "{}", byte as char)?;
            }
            writeln!(f)?;
        }
        for cage in &self.cages {
            write!(f, "{}", cage.target())?;
            if let Some(s) = cage.operator().symbol() {
                write!(f, "{}", s)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
