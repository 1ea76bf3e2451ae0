use super::{Stack, Value, Vector};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack of stacks
///
/// Stacks live in an arena and `depth` indexes the active one, the TOSS.
/// The stack below it is the SOSS. Entering a block moves the cursor up and
/// reuses whatever stack was left there; leaving a block clears it and moves
/// the cursor down. The root stack at index 0 is never removed.

#[derive(Debug, Clone)]
pub struct StackMachine {
    arena: Vec<Stack<Value>>,
    depth: usize,
    dimension: usize,
}

impl StackMachine {
    pub fn new(dimension: usize) -> StackMachine {
        StackMachine {
            arena: vec![Stack::new()],
            depth: 0,
            dimension,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stacks on the stack of stacks.
    pub fn depth(&self) -> usize {
        self.depth + 1
    }

    pub fn toss(&self) -> &Stack<Value> {
        &self.arena[self.depth]
    }

    pub fn soss(&self) -> Option<&Stack<Value>> {
        if self.depth == 0 {
            None
        } else {
            self.arena.get(self.depth - 1)
        }
    }

    fn toss_mut(&mut self) -> &mut Stack<Value> {
        &mut self.arena[self.depth]
    }

    fn soss_mut(&mut self) -> Option<&mut Stack<Value>> {
        if self.depth == 0 {
            None
        } else {
            self.arena.get_mut(self.depth - 1)
        }
    }

    /// Both top stacks at once, TOSS first.
    fn pair_mut(&mut self) -> Option<(&mut Stack<Value>, &mut Stack<Value>)> {
        if self.depth == 0 {
            return None;
        }
        let (lower, upper) = self.arena.split_at_mut(self.depth);
        Some((&mut upper[0], &mut lower[self.depth - 1]))
    }

    fn push_stack(&mut self) {
        self.depth += 1;
        if self.arena.len() == self.depth {
            self.arena.push(Stack::new());
        }
        debug_assert!(self.arena[self.depth].is_empty());
    }

    fn pop_stack(&mut self) {
        debug_assert!(self.depth > 0);
        self.arena[self.depth].clear();
        self.depth -= 1;
    }

    pub fn pop(&mut self) -> Value {
        self.toss_mut().pop()
    }

    pub fn pop_n(&mut self, len: usize) -> Vec<Value> {
        self.toss_mut().pop_n(len)
    }

    pub fn push(&mut self, val: Value) {
        self.toss_mut().push(val)
    }

    pub fn extend<I: IntoIterator<Item = Value>>(&mut self, vals: I) {
        self.toss_mut().extend(vals)
    }

    pub fn duplicate(&mut self) {
        let val = self.pop();
        self.extend(vec![val, val]);
    }

    pub fn discard(&mut self) {
        self.pop();
    }

    /// `[a]` becomes `[a, 0]` and an empty stack becomes `[0]`.
    pub fn swap(&mut self) {
        if self.toss().is_empty() {
            self.push(0);
            return;
        }
        let (one, two) = self.toss_mut().pop_2();
        self.extend(vec![two, one]);
    }

    pub fn clear(&mut self) {
        self.toss_mut().clear()
    }

    /// Pops a vector pushed x first, so y comes off the stack first.
    pub fn pop_vector(&mut self) -> Vector {
        let dimension = self.dimension;
        Vector::new(self.pop_n(dimension))
    }

    pub fn push_vector(&mut self, vector: &Vector) {
        self.extend(vector.components().iter().copied())
    }

    pub fn begin_block(&mut self, storage_offset: &Vector) -> Result<()> {
        if storage_offset.dimension() != self.dimension {
            return Err(error!(IpDimensionMismatch; &format!(
                "{} given, {} expected",
                storage_offset.dimension(),
                self.dimension
            )));
        }
        let n = self.pop();
        let len = match count(n) {
            Some(len) => len,
            None => return self.restore(n),
        };
        if n < 0 && !self.toss_mut().fill(len) {
            return self.restore(n);
        }
        self.push_stack();
        if n > 0 {
            let moved = match self.pair_mut() {
                Some((toss, soss)) => soss.transfer(toss, len),
                None => false,
            };
            if !moved {
                self.pop_stack();
                return self.restore(n);
            }
        }
        if let Some(soss) = self.soss_mut() {
            soss.extend(storage_offset.components().iter().copied());
        }
        tracing::debug!(n, depth = self.depth(), "begin block");
        Ok(())
    }

    /// Returns the storage offset saved by the matching
    /// [`begin_block`](StackMachine::begin_block). Fails with `NoSoss`,
    /// leaving the stack untouched, when there is no block to leave.
    pub fn end_block(&mut self) -> Result<Vector> {
        if self.depth == 0 {
            return Err(error!(NoSoss));
        }
        let n = self.pop();
        let len = match count(n) {
            Some(len) => len,
            None => return self.restore(n),
        };
        let dimension = self.dimension;
        let (toss, soss) = match self.pair_mut() {
            Some(pair) => pair,
            None => return Err(error!(NoSoss)),
        };
        let storage_offset = Vector::new(soss.pop_n(dimension));
        if n > 0 {
            if !toss.transfer(soss, len) {
                soss.extend(storage_offset.components().iter().copied());
                return self.restore(n);
            }
        } else {
            soss.drop_n(len);
        }
        self.pop_stack();
        tracing::debug!(n, depth = self.depth(), "end block");
        Ok(storage_offset)
    }

    pub fn stack_under_stack(&mut self) -> Result<()> {
        if self.depth == 0 {
            return Err(error!(NoSoss));
        }
        let n = self.pop();
        let len = match count(n) {
            Some(len) => len,
            None => return self.restore(n),
        };
        let moved = match self.pair_mut() {
            Some((toss, soss)) if n > 0 => soss.transfer(toss, len),
            Some((toss, soss)) => toss.transfer(soss, len),
            None => return Err(error!(NoSoss)),
        };
        if moved {
            Ok(())
        } else {
            self.restore(n)
        }
    }

    /// Puts back a count that could not be honoured.
    fn restore<T>(&mut self, n: Value) -> Result<T> {
        self.push(n);
        tracing::debug!(n, "stack cannot grow");
        Err(error!(OutOfMemory; &n.to_string()))
    }
}

fn count(n: Value) -> Option<usize> {
    use std::convert::TryFrom;
    usize::try_from(n.unsigned_abs()).ok()
}
