use super::{Value, Vector};
use crate::error;
use crate::lang::{Dialect, Error, Source};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

pub const SPACE: u8 = b' ';

/// ## Program space
///
/// Cells are bytes keyed by coordinate; anything never written reads as a
/// space. The known extent is the inclusive box `min..=max` covering every
/// loaded or written cell. Befunge-93 fixes the extent at load time and
/// motion wraps around it as a torus. Funge-98 grows the extent when a
/// write lands outside it, and motion wraps to the opposite edge of the
/// extent as it stands.

#[derive(Debug, Clone)]
pub struct ProgramSpace {
    dialect: Dialect,
    cells: HashMap<Vector, u8>,
    min: Vector,
    max: Vector,
    complete: bool,
}

impl ProgramSpace {
    pub fn load(source: &Source) -> ProgramSpace {
        let mut space = ProgramSpace::interactive(source.dialect());
        if space.dimension() == 1 {
            let line: String = source.rows().concat();
            space.insert_row(0, &line);
        } else {
            for (y, row) in source.rows().iter().enumerate() {
                space.insert_row(y as Value, row);
            }
        }
        space.complete = true;
        space
    }

    /// An empty space that accepts rows with
    /// [`append_row`](ProgramSpace::append_row) until it is completed.
    pub fn interactive(dialect: Dialect) -> ProgramSpace {
        let dimension = dialect.dimension();
        ProgramSpace {
            dialect,
            cells: HashMap::new(),
            min: Vector::zero(dimension),
            max: Vector::new(vec![-1; dimension]),
            complete: false,
        }
    }

    fn insert_row(&mut self, y: Value, row: &str) {
        let width = row.len() as Value;
        match self.dimension() {
            1 => {
                let start = self.max.x() + 1;
                for (x, byte) in row.bytes().enumerate() {
                    self.set_cell(Vector::from([start + x as Value]), byte);
                }
                self.max.set(0, start + width - 1);
            }
            _ => {
                for (x, byte) in row.bytes().enumerate() {
                    self.set_cell(Vector::from([x as Value, y]), byte);
                }
                self.max.set(0, self.max.x().max(width - 1));
                self.max.set(1, self.max.y().max(y));
            }
        }
    }

    fn set_cell(&mut self, coord: Vector, byte: u8) {
        if byte == SPACE {
            self.cells.remove(&coord);
        } else {
            self.cells.insert(coord, byte);
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn dimension(&self) -> usize {
        self.min.dimension()
    }

    pub fn extent(&self) -> (&Vector, &Vector) {
        (&self.min, &self.max)
    }

    pub fn width(&self) -> usize {
        self.size(0)
    }

    pub fn height(&self) -> usize {
        if self.dimension() < 2 {
            self.size(0).min(1)
        } else {
            self.size(1)
        }
    }

    fn size(&self, axis: usize) -> usize {
        let size = self
            .max
            .get(axis)
            .wrapping_sub(self.min.get(axis))
            .wrapping_add(1);
        if size < 0 {
            0
        } else {
            size as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        (0..self.dimension()).any(|axis| self.size(axis) == 0)
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn contains(&self, coord: &Vector) -> bool {
        coord.dimension() == self.dimension()
            && (0..self.dimension()).all(|axis| {
                (self.min.get(axis)..=self.max.get(axis)).contains(&coord.get(axis))
            })
    }

    /// The cell at `coord` without wrapping; unset cells read as a space.
    pub fn peek(&self, coord: &Vector) -> u8 {
        self.cells.get(coord).copied().unwrap_or(SPACE)
    }

    /// The cell at `coord`, wrapping coordinates outside the known extent
    /// back into it.
    pub fn get(&self, coord: &Vector) -> u8 {
        if self.contains(coord) {
            self.peek(coord)
        } else {
            self.peek(&self.wrap(coord))
        }
    }

    /// Writes the low byte of `value`. Befunge-93 never writes outside
    /// its torus: an invalid coordinate writes `'0'` at the origin instead.
    /// Funge-98 grows the known extent to cover the new cell.
    pub fn put(&mut self, coord: &Vector, value: Value) {
        let byte = value as u8;
        if self.contains(coord) {
            self.set_cell(coord.clone(), byte);
        } else if self.dialect.is_bounded() {
            tracing::debug!(%coord, value, "put outside the torus");
            let origin = self.min.clone();
            self.set_cell(origin, b'0');
        } else if coord.dimension() == self.dimension() {
            for axis in 0..self.dimension() {
                let c = coord.get(axis);
                if c < self.min.get(axis) {
                    self.min.set(axis, c);
                }
                if c > self.max.get(axis) {
                    self.max.set(axis, c);
                }
            }
            self.set_cell(coord.clone(), byte);
        }
    }

    fn wrap(&self, coord: &Vector) -> Vector {
        let mut wrapped = coord.clone();
        for axis in 0..self.dimension() {
            let size = self.size(axis) as Value;
            if size > 0 {
                let min = self.min.get(axis);
                wrapped.set(axis, (coord.get(axis).wrapping_sub(min)).rem_euclid(size) + min);
            }
        }
        wrapped
    }

    /// Where an IP at `position` moving by `delta` lands next.
    ///
    /// On the torus every axis wraps independently. In Lahey space a step
    /// that leaves the extent lands on the farthest cell behind `position`
    /// along `delta`.
    pub fn step(&self, position: &Vector, delta: &Vector) -> Vector {
        let next = position + delta;
        if self.contains(&next) || self.is_empty() {
            return next;
        }
        if self.dialect.is_bounded() {
            return self.wrap(&next);
        }
        match self.reach(position, delta) {
            Some((back, _)) => along(position, delta, -(back as i128)),
            None => self.wrap(&next),
        }
    }

    /// Where an IP lands after `steps` moves along `delta`.
    pub fn travel(&self, position: &Vector, delta: &Vector, steps: u64) -> Vector {
        if steps == 0 || delta.is_zero() {
            return position.clone();
        }
        if self.is_empty() {
            return along(position, delta, steps as i128);
        }
        if self.dialect.is_bounded() {
            let mut landed = position.clone();
            for axis in 0..self.dimension() {
                let size = self.size(axis) as i128;
                let min = self.min.get(axis) as i128;
                let moved = position.get(axis) as i128 - min
                    + (steps as i128 % size) * delta.get(axis) as i128;
                landed.set(axis, (moved.rem_euclid(size) + min) as Value);
            }
            return landed;
        }
        match self.reach(position, delta) {
            Some((back, ahead)) => {
                let period = back as i128 + ahead as i128 + 1;
                let index = (back as i128 + steps as i128) % period;
                along(position, delta, index - back as i128)
            }
            None => {
                let next = self.step(position, delta);
                self.travel(&next, delta, steps - 1)
            }
        }
    }

    /// Whole moves along `delta` that keep `position` inside the extent,
    /// counted backward and then ahead.
    pub fn reach(&self, position: &Vector, delta: &Vector) -> Option<(u64, u64)> {
        if delta.is_zero() || !self.contains(position) {
            return None;
        }
        let mut reach = (u64::MAX, u64::MAX);
        for axis in 0..self.dimension() {
            let d = delta.get(axis);
            if d == 0 {
                continue;
            }
            let p = position.get(axis) as i128;
            let stride = d.unsigned_abs() as u128;
            let below = ((p - self.min.get(axis) as i128) as u128 / stride) as u64;
            let above = ((self.max.get(axis) as i128 - p) as u128 / stride) as u64;
            let (back, ahead) = if d > 0 { (below, above) } else { (above, below) };
            reach = (reach.0.min(back), reach.1.min(ahead));
        }
        Some(reach)
    }

    /// Number of cells inside the known extent.
    pub fn area(&self) -> u64 {
        (0..self.dimension()).fold(1u64, |area, axis| area.saturating_mul(self.size(axis) as u64))
    }

    /// Upper bound on the distinct cells a walk from `position` along
    /// `delta` can visit.
    pub fn orbit(&self, position: &Vector, delta: &Vector) -> u64 {
        match self.reach(position, delta) {
            Some((back, ahead)) if !self.dialect.is_bounded() => {
                back.saturating_add(ahead).saturating_add(1)
            }
            _ => self.area(),
        }
    }

    /// Accretes one row below the rows already present.
    pub fn append_row(&mut self, row: &str) -> Result<()> {
        if self.complete {
            return Err(error!(CompleteGridAlteration));
        }
        if row.is_empty() {
            return self.complete();
        }
        if self.dialect.is_bounded() {
            if !self.is_empty() && row.len() != self.width() {
                return Err(error!(CodeNotRectangular; &format!(
                    "row {} is {} wide, expected {}",
                    self.height() + 1,
                    row.len(),
                    self.width()
                )));
            }
            if self.height() + 1 > Dialect::MAX_HEIGHT || row.len() > Dialect::MAX_WIDTH {
                return Err(error!(CodeFileOutOfBounds));
            }
        }
        let y = if self.is_empty() { 0 } else { self.max.y() + 1 };
        self.insert_row(y, row);
        tracing::debug!(y, width = row.len(), "appended row");
        Ok(())
    }

    /// Marks an interactive grid as finished.
    pub fn complete(&mut self) -> Result<()> {
        if self.complete {
            return Err(error!(CompleteGridAlteration));
        }
        if self.is_empty() {
            return Err(error!(GridNotDefined));
        }
        self.complete = true;
        Ok(())
    }

    /// Text of row `y` across the known extent.
    pub fn row(&self, y: Value) -> String {
        let (min_x, max_x) = (self.min.x(), self.max.x());
        (min_x..=max_x)
            .map(|x| {
                let coord = if self.dimension() == 1 {
                    Vector::from([x])
                } else {
                    Vector::from([x, y])
                };
                self.peek(&coord) as char
            })
            .collect()
    }
}

/// `position + k * delta`, for results known to fit.
fn along(position: &Vector, delta: &Vector, k: i128) -> Vector {
    let components = position
        .components()
        .iter()
        .enumerate()
        .map(|(axis, p)| (*p as i128 + k * delta.get(axis) as i128) as Value)
        .collect();
    Vector::new(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn space(rows: &[&str], dialect: Dialect) -> ProgramSpace {
        ProgramSpace::load(&Source::from_lines(rows, dialect).unwrap())
    }

    #[test]
    fn test_get_unset_is_space() {
        let s = space(&["a  b"], Dialect::Befunge93);
        assert_eq!(s.get(&Vector::from([1, 0])), SPACE);
        assert_eq!(s.get(&Vector::from([3, 0])), b'b');
    }

    #[test]
    fn test_put_then_get() {
        let mut s = space(&["....", "...."], Dialect::Befunge93);
        for (x, y, v) in &[(0, 0, 65), (3, 1, 255), (2, 0, 32)] {
            let c = Vector::from([*x, *y]);
            s.put(&c, *v);
            assert_eq!(s.get(&c) as Value, *v);
        }
    }

    #[test]
    fn test_put_truncates_to_byte() {
        let mut s = space(&["."], Dialect::Befunge93);
        s.put(&Vector::from([0, 0]), 256 + 66);
        assert_eq!(s.get(&Vector::from([0, 0])), b'B');
    }

    #[test]
    fn test_put_outside_torus_falls_back() {
        let mut s = space(&["ab", "cd"], Dialect::Befunge93);
        s.put(&Vector::from([5, 0]), 65);
        assert_eq!(s.row(0), "0b");
        assert_eq!(s.extent().1, &Vector::from([1, 1]));
    }

    #[test]
    fn test_torus_wrap() {
        let s = space(&["abc", "def"], Dialect::Befunge93);
        assert_eq!(s.get(&Vector::from([3, 0])), b'a');
        assert_eq!(s.get(&Vector::from([-1, -1])), b'f');
        let east = Vector::from([1, 0]);
        let mut p = Vector::from([1, 1]);
        for _ in 0..s.width() {
            p = s.step(&p, &east);
        }
        assert_eq!(p, Vector::from([1, 1]));
    }

    #[test]
    fn test_lahey_growth() {
        let mut s = space(&["ab"], Dialect::Befunge98);
        s.put(&Vector::from([-2, 3]), b'z' as Value);
        assert_eq!(s.extent(), (&Vector::from([-2, 0]), &Vector::from([1, 3])));
        assert_eq!(s.peek(&Vector::from([-2, 3])), b'z');
    }

    #[test]
    fn test_lahey_wrap_uses_extent() {
        let mut s = space(&["abcd"], Dialect::Befunge98);
        s.put(&Vector::from([-3, 0]), b'q' as Value);
        let p = s.step(&Vector::from([3, 0]), &Vector::from([1, 0]));
        assert_eq!(p, Vector::from([-3, 0]));
        let p = s.step(&Vector::from([-3, 0]), &Vector::from([-2, 0]));
        assert_eq!(p, Vector::from([3, 0]));
    }

    #[test]
    fn test_lahey_wrap_to_distant_edge() {
        let far = 1_000_000_000_000_000;
        let mut s = space(&["a"], Dialect::Befunge98);
        s.put(&Vector::from([far, 0]), b'z' as Value);
        let p = s.step(&Vector::zero(2), &Vector::from([-1, 0]));
        assert_eq!(p, Vector::from([far, 0]));
        let p = s.step(&Vector::zero(2), &Vector::from([-2, 0]));
        assert_eq!(p, Vector::from([far, 0]));
        assert_eq!(s.orbit(&Vector::zero(2), &Vector::from([1, 0])), far as u64 + 1);
    }

    #[test]
    fn test_travel() {
        let s = space(&["abc", "def"], Dialect::Befunge93);
        let east = Vector::from([1, 0]);
        assert_eq!(s.travel(&Vector::from([1, 1]), &east, 3), Vector::from([1, 1]));
        assert_eq!(s.travel(&Vector::from([1, 1]), &east, 4), Vector::from([2, 1]));
        let diagonal = Vector::from([2, 1]);
        assert_eq!(s.travel(&Vector::zero(2), &diagonal, 2), Vector::from([1, 0]));
        let s = space(&["abcd"], Dialect::Befunge98);
        assert_eq!(s.travel(&Vector::zero(2), &east, 6), Vector::from([2, 0]));
        assert_eq!(s.travel(&Vector::zero(2), &-&east, 1), Vector::from([3, 0]));
        assert_eq!(s.travel(&Vector::zero(2), &east, u64::MAX), Vector::from([3, 0]));
    }

    #[test]
    fn test_unefunge_concatenates_rows() {
        let s = space(&["ab", "cd"], Dialect::Unefunge98);
        assert_eq!(s.row(0), "abcd");
        assert_eq!(s.height(), 1);
    }

    #[test]
    fn test_append_row() {
        let mut s = ProgramSpace::interactive(Dialect::Befunge93);
        s.append_row("12v").unwrap();
        s.append_row("@<<").unwrap();
        assert_eq!((s.width(), s.height()), (3, 2));
        let error = s.append_row("1").unwrap_err();
        assert_eq!(error.code(), ErrorCode::CodeNotRectangular);
        s.append_row("").unwrap();
        assert!(s.is_complete());
        let error = s.append_row("123").unwrap_err();
        assert_eq!(error.code(), ErrorCode::CompleteGridAlteration);
    }

    #[test]
    fn test_complete_empty_grid() {
        let mut s = ProgramSpace::interactive(Dialect::Befunge93);
        assert_eq!(s.complete().unwrap_err().code(), ErrorCode::GridNotDefined);
    }
}
