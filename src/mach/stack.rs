/// ## Zero-filling stack
///
/// Popping an empty stack yields the default value instead of failing.
/// Funge programs rely on this: an empty stack behaves as if it held an
/// endless supply of zeros.

#[derive(Clone, Default, PartialEq)]
pub struct Stack<T> {
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T: Copy + Default> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { vec: vec![] }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.vec.get(idx)
    }
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }
    pub fn push(&mut self, val: T) {
        self.vec.push(val);
    }
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, vals: I) {
        self.vec.extend(vals);
    }
    pub fn pop(&mut self) -> T {
        self.vec.pop().unwrap_or_default()
    }
    pub fn pop_2(&mut self) -> (T, T) {
        let two = self.pop();
        let one = self.pop();
        (one, two)
    }
    /// Removes the top `len` values and returns them in push order. When
    /// the stack is short, the bottom of the result is padded with defaults.
    pub fn pop_n(&mut self, len: usize) -> Vec<T> {
        let available = len.min(self.vec.len());
        let range = (self.vec.len() - available)..;
        let mut vals = vec![T::default(); len - available];
        vals.extend(self.vec.drain(range));
        vals
    }
    /// Moves the top `len` values onto `to`, keeping their order. When the
    /// stack is short, defaults arrive first. Returns false without moving
    /// anything when `to` cannot grow by `len`.
    pub fn transfer(&mut self, to: &mut Stack<T>, len: usize) -> bool {
        if to.vec.try_reserve(len).is_err() {
            return false;
        }
        let available = len.min(self.vec.len());
        let range = (self.vec.len() - available)..;
        to.vec.resize(to.vec.len() + len - available, T::default());
        to.vec.extend(self.vec.drain(range));
        true
    }
    /// Pushes `len` defaults, or returns false when the stack cannot grow.
    pub fn fill(&mut self, len: usize) -> bool {
        if self.vec.try_reserve(len).is_err() {
            return false;
        }
        self.vec.resize(self.vec.len() + len, T::default());
        true
    }
    /// Discards up to `len` values from the top.
    pub fn drop_n(&mut self, len: usize) {
        let keep = self.vec.len().saturating_sub(len);
        self.vec.truncate(keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(values: &[i64]) -> Stack<i64> {
        let mut s = Stack::new();
        s.extend(values.iter().copied());
        s
    }

    #[test]
    fn test_pop_empty() {
        let mut s: Stack<i64> = Stack::new();
        assert_eq!(s.pop(), 0);
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn test_pop_n_pads_bottom() {
        let mut s: Stack<i64> = Stack::new();
        s.extend(vec![7, 8]);
        assert_eq!(s.pop_n(4), vec![0, 0, 7, 8]);
        assert!(s.is_empty());
    }

    #[test]
    fn test_pop_n_keeps_order() {
        let mut s: Stack<i64> = Stack::new();
        s.extend(vec![1, 2, 3, 4]);
        assert_eq!(s.pop_n(2), vec![3, 4]);
        assert_eq!(s.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_transfer_pads_and_keeps_order() {
        let mut from = stack(&[1, 2, 3]);
        let mut to = stack(&[9]);
        assert!(from.transfer(&mut to, 2));
        assert_eq!(from.as_slice(), &[1]);
        assert_eq!(to.as_slice(), &[9, 2, 3]);
        assert!(from.transfer(&mut to, 3));
        assert!(from.is_empty());
        assert_eq!(to.as_slice(), &[9, 2, 3, 0, 0, 1]);
    }

    #[test]
    fn test_transfer_too_large() {
        let mut from = stack(&[1, 2]);
        let mut to: Stack<i64> = Stack::new();
        assert!(!from.transfer(&mut to, usize::max_value()));
        assert_eq!(from.as_slice(), &[1, 2]);
        assert!(to.is_empty());
    }

    #[test]
    fn test_fill() {
        let mut s = stack(&[5]);
        assert!(s.fill(2));
        assert_eq!(s.as_slice(), &[5, 0, 0]);
        assert!(!s.fill(usize::max_value()));
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_drop_n_stops_at_bottom() {
        let mut s = stack(&[1, 2, 3]);
        s.drop_n(2);
        assert_eq!(s.as_slice(), &[1]);
        s.drop_n(usize::max_value());
        assert!(s.is_empty());
    }
}
