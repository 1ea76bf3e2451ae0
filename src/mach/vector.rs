use super::Value;
use std::ops::{Add, Neg, Sub};

/// ## Funge-space coordinate
///
/// One component per dimension, x first. Arithmetic wraps like every other
/// machine value.

#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Vector(Vec<Value>);

impl Vector {
    pub fn new(components: Vec<Value>) -> Vector {
        Vector(components)
    }

    pub fn zero(dimension: usize) -> Vector {
        Vector(vec![0; dimension])
    }

    /// Unit vector along `axis`, pointing toward negative values when
    /// `negative` is set.
    pub fn unit(dimension: usize, axis: usize, negative: bool) -> Vector {
        let mut vector = Vector::zero(dimension);
        if axis < dimension {
            vector.0[axis] = if negative { -1 } else { 1 };
        }
        vector
    }

    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    pub fn components(&self) -> &[Value] {
        &self.0
    }

    pub fn get(&self, axis: usize) -> Value {
        self.0.get(axis).copied().unwrap_or(0)
    }

    pub fn set(&mut self, axis: usize, value: Value) {
        if let Some(component) = self.0.get_mut(axis) {
            *component = value;
        }
    }

    pub fn x(&self) -> Value {
        self.get(0)
    }

    pub fn y(&self) -> Value {
        self.get(1)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|c| *c == 0)
    }

    /// Quarter turn counter-clockwise on screen, where y grows downward.
    pub fn turn_left(&self) -> Vector {
        match self.0.as_slice() {
            [x, y] => Vector(vec![*y, x.wrapping_neg()]),
            _ => self.clone(),
        }
    }

    /// Quarter turn clockwise on screen.
    pub fn turn_right(&self) -> Vector {
        match self.0.as_slice() {
            [x, y] => Vector(vec![y.wrapping_neg(), *x]),
            _ => self.clone(),
        }
    }
}

impl From<Vec<Value>> for Vector {
    fn from(components: Vec<Value>) -> Vector {
        Vector(components)
    }
}

impl From<[Value; 2]> for Vector {
    fn from(components: [Value; 2]) -> Vector {
        Vector(components.to_vec())
    }
}

impl From<[Value; 1]> for Vector {
    fn from(components: [Value; 1]) -> Vector {
        Vector(components.to_vec())
    }
}

impl<'a> Add<&'a Vector> for &'a Vector {
    type Output = Vector;
    fn add(self, rhs: &Vector) -> Vector {
        Vector(
            self.0
                .iter()
                .zip(rhs.0.iter())
                .map(|(l, r)| l.wrapping_add(*r))
                .collect(),
        )
    }
}

impl<'a> Sub<&'a Vector> for &'a Vector {
    type Output = Vector;
    fn sub(self, rhs: &Vector) -> Vector {
        Vector(
            self.0
                .iter()
                .zip(rhs.0.iter())
                .map(|(l, r)| l.wrapping_sub(*r))
                .collect(),
        )
    }
}

impl<'a> Neg for &'a Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector(self.0.iter().map(|c| c.wrapping_neg()).collect())
    }
}

impl std::fmt::Debug for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "({})", s.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns() {
        let east = Vector::from([1, 0]);
        assert_eq!(east.turn_right(), Vector::from([0, 1]));
        assert_eq!(east.turn_left(), Vector::from([0, -1]));
        assert_eq!(east.turn_left().turn_left(), -&east);
    }

    #[test]
    fn test_wrapping_add() {
        let v = &Vector::from([Value::max_value(), 0]) + &Vector::from([1, 1]);
        assert_eq!(v, Vector::from([Value::min_value(), 1]));
    }
}
