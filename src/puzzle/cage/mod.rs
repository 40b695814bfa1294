pub use self::operator::Operator;

pub(crate) use self::operator::min_max;

use crate::puzzle::{CellId, Value};

mod operator;

/// A cage in a puzzle
///
/// Every cell in a puzzle belongs to exactly one cage.
/// Every cage has an operator and a target number.
#[derive(Debug, PartialEq)]
pub struct Cage {
    /// The cells in this cage, in the order the generator claimed them.
    /// The order matters: subtraction targets are computed from the first
    /// two cells.
    cell_ids: Box<[CellId]>,

    /// The math operator that must be used with the numbers in the cage
    /// to produce the target number
    operator: Operator,

    /// The target number that must be produced using the numbers in this cage
    target: Value,
}

impl Cage {
    pub(crate) fn new(cell_ids: impl Into<Box<[CellId]>>, operator: Operator, target: Value) -> Self {
        let cage = Cage {
            cell_ids: cell_ids.into(),
            operator,
            target,
        };
        debug_assert!(!cage.cell_ids.is_empty());
        debug_assert!((cage.operator == Operator::Nop) == (cage.cell_ids.len() == 1));
        cage
    }

    /// The number on the cage
    pub fn target(&self) -> Value {
        self.target
    }

    /// The math operator on the cage
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The IDs of the cells in the cage
    pub fn cell_ids(&self) -> &[CellId] {
        &self.cell_ids
    }

    pub fn cell_count(&self) -> usize {
        self.cell_ids.len()
    }

    /// The label shown on the cage, e.g. `12+`, or just the target for a
    /// single-cell cage
    pub fn label(&self) -> String {
        match self.operator.symbol() {
            Some(symbol) => format!("{}{}", self.target, symbol),
            None => self.target.to_string(),
        }
    }
}
