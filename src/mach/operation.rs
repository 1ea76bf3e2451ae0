use super::Value;

/// ## Arithmetic
///
/// Machine values are `i64` and every operation wraps on overflow.
/// Division and remainder round toward negative infinity, and a zero
/// divisor yields zero rather than a fault.

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Value, rhs: Value) -> Value {
        lhs.wrapping_add(rhs)
    }

    pub fn subtract(lhs: Value, rhs: Value) -> Value {
        lhs.wrapping_sub(rhs)
    }

    pub fn multiply(lhs: Value, rhs: Value) -> Value {
        lhs.wrapping_mul(rhs)
    }

    pub fn divide(lhs: Value, rhs: Value) -> Value {
        if rhs == 0 {
            return 0;
        }
        let quotient = lhs.wrapping_div(rhs);
        if lhs.wrapping_rem(rhs) != 0 && ((lhs < 0) != (rhs < 0)) {
            quotient.wrapping_sub(1)
        } else {
            quotient
        }
    }

    pub fn remainder(lhs: Value, rhs: Value) -> Value {
        if rhs == 0 {
            return 0;
        }
        let remainder = lhs.wrapping_rem(rhs);
        if remainder != 0 && ((remainder < 0) != (rhs < 0)) {
            remainder.wrapping_add(rhs)
        } else {
            remainder
        }
    }

    pub fn not(val: Value) -> Value {
        if val == 0 {
            1
        } else {
            0
        }
    }

    pub fn greater(lhs: Value, rhs: Value) -> Value {
        if lhs > rhs {
            1
        } else {
            0
        }
    }
}
