use crate::puzzle::Value;

/// The `Operator` enum represents each of the possible math operators
/// that can be in a cage.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Nop,
}

impl Operator {
    /// Retrieve the character representation of the symbol
    pub fn symbol(&self) -> Option<char> {
        let symbol = match *self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Nop => return None,
        };
        Some(symbol)
    }

    /// The target produced by applying this operator to cage values, given
    /// in cage cell order.
    ///
    /// Subtraction uses the first two values only, even when the cage has
    /// more cells. Division assumes the caller has ensured an integral
    /// quotient.
    pub(crate) fn apply(self, values: &[Value]) -> Value {
        match self {
            Operator::Add => values.iter().sum(),
            Operator::Subtract => (values[0] - values[1]).abs(),
            Operator::Multiply => values.iter().product(),
            Operator::Divide => {
                let (min, max) = min_max(values);
                max / min
            }
            Operator::Nop => values[0],
        }
    }
}

pub(crate) fn min_max<T>(slice: &[T]) -> (T, T)
where
    T: Copy + PartialOrd,
{
    let mut min = slice[0];
    let mut max = slice[0];
    for &e in &slice[1..] {
        if e < min {
            min = e
        }
        if e > max {
            max = e
        }
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::Operator;

    #[test]
    fn subtract_is_pairwise() {
        assert_eq!(3, Operator::Subtract.apply(&[1, 4]));
        assert_eq!(3, Operator::Subtract.apply(&[4, 1]));
        // only the first two values participate
        assert_eq!(3, Operator::Subtract.apply(&[5, 2, 1]));
    }

    #[test]
    fn divide_uses_extremes() {
        assert_eq!(2, Operator::Divide.apply(&[2, 4]));
        assert_eq!(3, Operator::Divide.apply(&[6, 2]));
    }

    #[test]
    fn add_and_multiply_fold_all_values() {
        assert_eq!(9, Operator::Add.apply(&[2, 3, 4]));
        assert_eq!(24, Operator::Multiply.apply(&[2, 3, 4]));
    }
}
