use super::val::format_number;
use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Binary operations
///
/// All operators bind identically and chain left to right; the
/// evaluator applies them in source order with no folding.

pub struct Operation {}

impl Operation {
    /// `+` concatenates when either side is a string, adds otherwise.
    pub fn sum(lhs: Val, rhs: Val) -> Val {
        match (&lhs, &rhs) {
            (Val::String(_), _) | (_, Val::String(_)) => {
                let mut s = lhs.string().to_string();
                s.push_str(&rhs.string());
                Val::String(s.into())
            }
            _ => Val::Number(lhs.number() + rhs.number()),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Val {
        Val::Number(lhs.number() - rhs.number())
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Val {
        Val::Number(lhs.number() * rhs.number())
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let divisor = rhs.number();
        if divisor == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Number(lhs.number() / divisor))
    }

    pub fn modulo(lhs: Val, rhs: Val) -> Result<Val> {
        let divisor = rhs.number();
        if divisor == 0.0 {
            return Err(error!(ModuloByZero));
        }
        Ok(Val::Number(lhs.number() % divisor))
    }

    pub fn power(lhs: Val, rhs: Val) -> Val {
        Val::Number(lhs.number().powf(rhs.number()))
    }

    pub fn and(lhs: Val, rhs: Val) -> Val {
        Val::Number(truth(lhs.number() != 0.0 && rhs.number() != 0.0))
    }

    pub fn or(lhs: Val, rhs: Val) -> Val {
        Val::Number(truth(lhs.number() != 0.0 || rhs.number() != 0.0))
    }

    pub fn less(lhs: Val, rhs: Val) -> Val {
        Val::Number(truth(lhs.number() < rhs.number()))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Val {
        Val::Number(truth(lhs.number() > rhs.number()))
    }

    /// Top-level `=` is numeric equality. The assignment reading of
    /// `=` exists only in statement position and inside paren-blocks.
    pub fn equal(lhs: Val, rhs: Val) -> Val {
        Val::Number(truth(lhs.number() == rhs.number()))
    }

    /// Paren-block equality: bytewise for two strings, numeric
    /// otherwise.
    pub fn block_equal(lhs: &Val, rhs: &Val) -> Val {
        match (lhs, rhs) {
            (Val::String(l), Val::String(r)) => Val::Number(truth(l == r)),
            _ => Val::Number(truth(lhs.number() == rhs.number())),
        }
    }

    pub fn negate(val: Val) -> Val {
        Val::Number(-val.number())
    }

    pub fn not(val: Val) -> Val {
        Val::Number(truth(val.number() == 0.0))
    }

    /// The printable form of a value assigned in the REPL echo.
    pub fn echo_form(val: &Val) -> String {
        match val {
            Val::Number(num) => format_number(*num),
            Val::String(s) => format!("\"{}\"", s),
            Val::Undefined => "undefined".to_string(),
        }
    }
}

fn truth(yes: bool) -> f64 {
    if yes {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_concatenates_strings() {
        let out = Operation::sum(Val::Number(1.0), Val::String("x".into()));
        match out {
            Val::String(s) => assert_eq!(&*s, "1x"),
            other => panic!("expected string, got {:?}", other),
        }
        let out = Operation::sum(Val::Number(2.0), Val::Number(3.0));
        assert_eq!(out.number(), 5.0);
    }

    #[test]
    fn test_divide_by_zero_is_an_error() {
        assert!(Operation::divide(Val::Number(1.0), Val::Number(0.0)).is_err());
        assert!(Operation::modulo(Val::Number(1.0), Val::Number(0.0)).is_err());
        let out = Operation::divide(Val::Number(7.0), Val::Number(2.0)).unwrap();
        assert_eq!(out.number(), 3.5);
    }

    #[test]
    fn test_logic_is_eager_zero_one() {
        assert_eq!(Operation::and(Val::Number(2.0), Val::Number(3.0)).number(), 1.0);
        assert_eq!(Operation::and(Val::Number(2.0), Val::Number(0.0)).number(), 0.0);
        assert_eq!(Operation::or(Val::Number(0.0), Val::Number(9.0)).number(), 1.0);
        assert_eq!(Operation::not(Val::Number(0.0)).number(), 1.0);
        assert_eq!(Operation::not(Val::Number(5.0)).number(), 0.0);
    }

    #[test]
    fn test_block_equal_compares_strings_bytewise() {
        let l = Val::String("ab".into());
        let r = Val::String("ab".into());
        assert_eq!(Operation::block_equal(&l, &r).number(), 1.0);
        let r = Val::String("ac".into());
        assert_eq!(Operation::block_equal(&l, &r).number(), 0.0);
    }
}
