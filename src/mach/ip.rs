use super::{ProgramSpace, Value, Vector};

/// Compass heading of the cardinal direction instructions. North is up
/// the screen, toward smaller y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    East,
    West,
    North,
    South,
}

impl Heading {
    /// East and west first, so a one-dimensional space can take a prefix.
    pub const ALL: [Heading; 4] = [Heading::East, Heading::West, Heading::North, Heading::South];

    pub fn delta(self, dimension: usize) -> Vector {
        match self {
            Heading::East => Vector::unit(dimension, 0, false),
            Heading::West => Vector::unit(dimension, 0, true),
            Heading::North => Vector::unit(dimension, 1, true),
            Heading::South => Vector::unit(dimension, 1, false),
        }
    }
}

/// ## Instruction pointer

#[derive(Debug, Clone, PartialEq)]
pub struct InstructionPointer {
    position: Vector,
    delta: Vector,
    string_mode: bool,
    storage_offset: Vector,
}

impl InstructionPointer {
    pub fn new(dimension: usize) -> InstructionPointer {
        InstructionPointer {
            position: Vector::zero(dimension),
            delta: Heading::East.delta(dimension),
            string_mode: false,
            storage_offset: Vector::zero(dimension),
        }
    }

    pub fn position(&self) -> &Vector {
        &self.position
    }

    pub fn delta(&self) -> &Vector {
        &self.delta
    }

    pub fn storage_offset(&self) -> &Vector {
        &self.storage_offset
    }

    pub fn is_string_mode(&self) -> bool {
        self.string_mode
    }

    pub fn set_delta(&mut self, delta: Vector) {
        self.delta = delta;
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.delta = heading.delta(self.position.dimension());
    }

    pub fn set_storage_offset(&mut self, offset: Vector) {
        self.storage_offset = offset;
    }

    pub fn toggle_string_mode(&mut self) {
        self.string_mode = !self.string_mode;
    }

    pub fn reflect(&mut self) {
        self.delta = -&self.delta;
    }

    pub fn turn_left(&mut self) {
        self.delta = self.delta.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.delta = self.delta.turn_right();
    }

    /// The cell one step ahead, wrapped into the space.
    pub fn ahead(&self, space: &ProgramSpace) -> Vector {
        space.step(&self.position, &self.delta)
    }

    pub fn advance(&mut self, space: &ProgramSpace) {
        self.position = self.ahead(space);
    }

    /// Moves `count` cells along the delta, backward when negative.
    pub fn jump(&mut self, count: Value, space: &ProgramSpace) {
        let delta = if count < 0 {
            -&self.delta
        } else {
            self.delta.clone()
        };
        self.position = space.travel(&self.position, &delta, count.unsigned_abs());
    }
}
