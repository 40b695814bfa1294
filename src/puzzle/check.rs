use thiserror::Error;
use vec_map::VecMap;

use crate::collections::{RangeSet, Square};
use crate::puzzle::cage::min_max;
use crate::puzzle::{Cage, CageId, Operator, Puzzle, Value};

/// A problem found in the entered grid.
///
/// Rendered through `Display`, these are the user-facing check messages.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CheckError {
    #[error("Cell ({row}, {col}) is empty")]
    EmptyCell { row: usize, col: usize },
    #[error("Row {row} has duplicate values")]
    RowDuplicates { row: usize },
    #[error("Column {col} has duplicate values")]
    ColDuplicates { col: usize },
    #[error("Cage {label} is not satisfied")]
    CageUnsatisfied { cage: CageId, label: String },
}

/// Checks entries against the puzzle.
///
/// The returned list is ordered: empty cells first (row-major), then row
/// duplicates, column duplicates, and finally unsatisfied cages. Cages with
/// an empty cell are skipped, the empty-cell pass already covers them. An
/// empty list means the puzzle is solved.
pub fn check_entries(puzzle: &Puzzle, entries: &Square<Value>) -> Vec<CheckError> {
    let width = puzzle.width();
    let mut errors = Vec::new();
    for (coord, &value) in entries.iter_coord() {
        if value == 0 {
            errors.push(CheckError::EmptyCell {
                row: coord.row() + 1,
                col: coord.col() + 1,
            });
        }
    }
    for (row, cells) in entries.rows().enumerate() {
        if has_duplicates(width, cells.iter().copied()) {
            errors.push(CheckError::RowDuplicates { row: row + 1 });
        }
    }
    for (col, cells) in entries.cols().enumerate() {
        if has_duplicates(width, cells.copied()) {
            errors.push(CheckError::ColDuplicates { col: col + 1 });
        }
    }

    // entered values grouped by cage; cell ids ascend within a cage, so each
    // group comes out in cage cell order
    let mut cage_values: VecMap<Vec<Value>> = VecMap::with_capacity(puzzle.cage_count());
    for (cell, &value) in entries.iter().enumerate() {
        cage_values
            .entry(puzzle.cell_cage(cell))
            .or_insert_with(Vec::new)
            .push(value);
    }
    for (id, values) in &cage_values {
        if values.contains(&0) {
            continue;
        }
        let cage = puzzle.cage(id);
        if !cage_satisfied(cage, values) {
            errors.push(CheckError::CageUnsatisfied {
                cage: id,
                label: cage.label(),
            });
        }
    }
    errors
}

fn has_duplicates(width: usize, values: impl Iterator<Item = Value>) -> bool {
    let mut seen = RangeSet::new(width + 1);
    for value in values {
        if value <= 0 || value > width as Value {
            continue;
        }
        if !seen.insert(value as usize) {
            return true;
        }
    }
    false
}

fn cage_satisfied(cage: &Cage, values: &[Value]) -> bool {
    match cage.operator() {
        // an entered pair may not divide evenly at all; integer division
        // would hide that, so divisibility is part of the check
        Operator::Divide => {
            let (min, max) = min_max(values);
            max % min == 0 && max / min == cage.target()
        }
        operator => operator.apply(values) == cage.target(),
    }
}
