//! Statically dispatched arithmetic "overloads".
//!
//! `divide(a, b)` resolves to one `Divide` implementation from the operand
//! types at compile time, the same way an overloaded method is chosen.

use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Integer arithmetic failures surfaced instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    DivisionByZero,
    Overflow,
    InvalidNumber(String),
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::Overflow => write!(f, "integer overflow"),
            Self::InvalidNumber(value) => write!(f, "not an integer: `{value}`"),
        }
    }
}

impl Error for ArithmeticError {}

/// One operand-pair variant of division.
pub trait Divide {
    type Output;
    /// Which variant ran, as printed by the demo.
    const VARIANT: &'static str;

    fn quotient(self) -> Self::Output;
}

impl Divide for (i32, i32) {
    type Output = Result<i32, ArithmeticError>;
    const VARIANT: &'static str = "From int parameter method";

    fn quotient(self) -> Self::Output {
        checked_int_div(self.0, self.1)
    }
}

impl Divide for (f64, f64) {
    type Output = f64;
    const VARIANT: &'static str = "From double parameter method";

    fn quotient(self) -> Self::Output {
        self.0 / self.1
    }
}

impl Divide for (f32, f32) {
    type Output = f32;
    const VARIANT: &'static str = "From float parameter method";

    fn quotient(self) -> Self::Output {
        self.0 / self.1
    }
}

impl Divide for (f32, i32) {
    type Output = f32;
    const VARIANT: &'static str = "From float & int parameter method";

    fn quotient(self) -> Self::Output {
        self.0 / self.1 as f32
    }
}

impl Divide for (&str, &str) {
    type Output = Result<i32, ArithmeticError>;
    const VARIANT: &'static str = "From string parameter method";

    /// Only the dividend is trimmed; the divisor must be a bare integer.
    fn quotient(self) -> Self::Output {
        let dividend = parse_operand(self.0.trim())?;
        let divisor = parse_operand(self.1)?;
        checked_int_div(dividend, divisor)
    }
}

/// Divides using the implementation selected by the operand types.
pub fn divide<A, B>(a: A, b: B) -> <(A, B) as Divide>::Output
where
    (A, B): Divide,
{
    debug!(
        "event=divide module=console status=ok variant=\"{}\"",
        <(A, B) as Divide>::VARIANT
    );
    (a, b).quotient()
}

/// Returns the variant `divide` would pick for these operand types.
pub fn divide_variant<A, B>() -> &'static str
where
    (A, B): Divide,
{
    <(A, B) as Divide>::VARIANT
}

/// Adds two integers after widening, so the result cannot overflow.
pub fn add(first: i32, second: i32) -> i64 {
    i64::from(first) + i64::from(second)
}

fn checked_int_div(dividend: i32, divisor: i32) -> Result<i32, ArithmeticError> {
    if divisor == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    dividend.checked_div(divisor).ok_or(ArithmeticError::Overflow)
}

fn parse_operand(value: &str) -> Result<i32, ArithmeticError> {
    value
        .parse::<i32>()
        .map_err(|_| ArithmeticError::InvalidNumber(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{add, divide, divide_variant, ArithmeticError};

    #[test]
    fn operand_types_pick_the_variant() {
        assert_eq!(divide_variant::<i32, i32>(), "From int parameter method");
        assert_eq!(divide_variant::<f64, f64>(), "From double parameter method");
        assert_eq!(divide_variant::<f32, f32>(), "From float parameter method");
        assert_eq!(
            divide_variant::<f32, i32>(),
            "From float & int parameter method"
        );
        assert_eq!(
            divide_variant::<&str, &str>(),
            "From string parameter method"
        );
    }

    #[test]
    fn integer_division_truncates() {
        assert_eq!(divide(7_i32, 2_i32), Ok(3));
        assert_eq!(divide(-7_i32, 2_i32), Ok(-3));
    }

    #[test]
    fn floating_division_keeps_fraction() {
        assert_eq!(divide(7.0_f64, 2.0_f64), 3.5);
        assert_eq!(divide(7.0_f32, 2.0_f32), 3.5);
        assert_eq!(divide(7.0_f32, 2_i32), 3.5);
    }

    #[test]
    fn integer_failures_are_errors_not_panics() {
        assert_eq!(divide(1_i32, 0_i32), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide(i32::MIN, -1_i32), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn string_operands_trim_only_the_dividend() {
        assert_eq!(divide(" 10 ", "5"), Ok(2));
        assert_eq!(
            divide("10", " 5"),
            Err(ArithmeticError::InvalidNumber(" 5".to_string()))
        );
        assert_eq!(divide("10", "0"), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn add_widens_before_summing() {
        assert_eq!(add(i32::MAX, 1), i64::from(i32::MAX) + 1);
    }
}
