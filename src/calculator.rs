//! Basic arithmetic helpers.
//!
//! Operations are generic over the standard operator traits and carry the
//! native semantics of the operand type (no coercion, no overflow checks).
use std::ops::{Add, Mul, Sub};

/// Calculator with the two instance operations
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    /// Sum of `a` and `b`
    pub fn add<T: Add<Output = T>>(&self, a: T, b: T) -> T {
        a + b
    }

    /// Difference of `a` and `b`
    pub fn subtract<T: Sub<Output = T>>(&self, a: T, b: T) -> T {
        a - b
    }
}

pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    Calculator.add(a, b)
}

pub fn subtract<T: Sub<Output = T>>(a: T, b: T) -> T {
    Calculator.subtract(a, b)
}

/// Product of `a` and `b`
pub fn multiply<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}
