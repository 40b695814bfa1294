use crate::collections::Square;
use crate::puzzle::seed::{unit_rand, Seed};
use crate::puzzle::{Cage, CellId, Operator, Solution, Value};

/// Widths a puzzle may take, indexed by the seed hash
const WIDTHS: [usize; 4] = [3, 4, 5, 6];

/// Per-cage seed offsets keeping the growth, neighbor, and operator choices
/// independent of one another
const GROWTH_STRIDE: f64 = 100.0;
const NEIGHBOR_STRIDE: f64 = 200.0;
const OPERATOR_STRIDE: f64 = 300.0;

pub(crate) fn puzzle_width(seed: &Seed) -> usize {
    WIDTHS[seed.hash().unsigned_abs() as usize % WIDTHS.len()]
}

pub(crate) fn generate_puzzle(seed: &Seed) -> (usize, Vec<Cage>, Solution) {
    let width = puzzle_width(seed);
    let solution = latin_square(seed, width);
    debug!("solution for seed \"{}\":\n{}", seed.text(), solution);
    let cages = build_cages(seed, width, &solution);
    (width, cages, solution)
}

/// A Latin square by construction: a cyclic base grid, then whole-row swaps,
/// both of which preserve the row/column permutation property
fn latin_square(seed: &Seed, width: usize) -> Solution {
    let hash = f64::from(seed.hash());
    let offset = (unit_rand(hash) * width as f64) as usize;
    let mut square = Square::with_width_and_value(width, 0);
    for (row, cells) in square.rows_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            *cell = ((row + col + offset) % width + 1) as Value;
        }
    }
    for row in 0..width {
        let swap = (unit_rand(hash + row as f64) * width as f64) as usize;
        square.swap_rows(row, swap);
    }
    square
}

/// Partitions the grid into connected cages by a row-major scan: each
/// unclaimed cell starts a cage, which grows one or two times toward the
/// last-added cell's right or down neighbor while one is unclaimed
fn build_cages(seed: &Seed, width: usize, solution: &Solution) -> Vec<Cage> {
    let hash = f64::from(seed.hash());
    let mut claimed = vec![false; width * width];
    let mut cages = Vec::new();
    for cell in 0..width * width {
        if claimed[cell] {
            continue;
        }
        claimed[cell] = true;
        let cage_id = cages.len() as f64;
        let mut cells: Vec<CellId> = vec![cell];
        let growth = (unit_rand(hash + cage_id * GROWTH_STRIDE) * 2.0) as usize + 1;
        for attempt in 0..growth {
            let last = *cells.last().unwrap();
            let mut candidates = Vec::with_capacity(2);
            if (last + 1) % width != 0 && !claimed[last + 1] {
                candidates.push(last + 1); // right neighbor
            }
            if last + width < width * width && !claimed[last + width] {
                candidates.push(last + width); // down neighbor
            }
            let next = match *candidates.as_slice() {
                [] => break,
                [only] => only,
                _ => {
                    let pick = unit_rand(hash + cage_id * NEIGHBOR_STRIDE + attempt as f64);
                    candidates[(pick * candidates.len() as f64) as usize]
                }
            };
            claimed[next] = true;
            cells.push(next);
        }
        let values: Vec<Value> = cells.iter().map(|&id| solution[id]).collect();
        let (operator, target) = assign_operator(hash, cage_id, &values);
        cages.push(Cage::new(cells, operator, target));
    }
    cages
}

fn assign_operator(hash: f64, cage_id: f64, values: &[Value]) -> (Operator, Value) {
    if values.len() == 1 {
        return (Operator::Nop, values[0]);
    }
    const OPERATORS: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];
    let pick = (unit_rand(hash + cage_id * OPERATOR_STRIDE) * OPERATORS.len() as f64) as usize;
    resolve_operator(OPERATORS[pick], values)
}

/// A division cage whose quotient would be fractional becomes an addition
/// cage instead, before the cage is finalized
fn resolve_operator(operator: Operator, values: &[Value]) -> (Operator, Value) {
    let operator = match operator {
        Operator::Divide => {
            let (min, max) = super::cage::min_max(values);
            if max % min == 0 {
                Operator::Divide
            } else {
                Operator::Add
            }
        }
        operator => operator,
    };
    (operator, operator.apply(values))
}

#[cfg(test)]
mod tests {
    use super::{puzzle_width, resolve_operator, WIDTHS};
    use crate::puzzle::seed::Seed;
    use crate::puzzle::Operator;

    #[test]
    fn width_comes_from_the_table() {
        for text in &["2024-1-10-games", "2024-1-11-games", "anything at all"] {
            let width = puzzle_width(&Seed::new(*text));
            assert!(WIDTHS.contains(&width));
        }
    }

    #[test]
    fn fractional_division_falls_back_to_addition() {
        assert_eq!((Operator::Add, 5), resolve_operator(Operator::Divide, &[2, 3]));
        assert_eq!(
            (Operator::Divide, 2),
            resolve_operator(Operator::Divide, &[2, 4])
        );
    }

    #[test]
    fn other_operators_resolve_unchanged() {
        assert_eq!((Operator::Add, 7), resolve_operator(Operator::Add, &[3, 4]));
        assert_eq!(
            (Operator::Subtract, 1),
            resolve_operator(Operator::Subtract, &[3, 4])
        );
        assert_eq!(
            (Operator::Multiply, 12),
            resolve_operator(Operator::Multiply, &[3, 4])
        );
    }
}
