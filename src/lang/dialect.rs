/// ## Language dialect
///
/// `Befunge93` is the basic dialect: a fixed 80×25 torus, one stack, and
/// unknown instructions stop the program. The Funge-98 dialects add the
/// stack of stacks, growable space and the extended instruction set.

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Dialect {
    Befunge93,
    Unefunge98,
    Befunge98,
}

/// What the runtime does with a byte that is not an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownPolicy {
    /// Report the character with its row and column, then halt.
    Halt,
    /// Treat the character as a no-op.
    Ignore,
}

impl Default for Dialect {
    fn default() -> Dialect {
        Dialect::Befunge93
    }
}

impl Dialect {
    pub const MAX_HEIGHT: usize = 25;
    pub const MAX_WIDTH: usize = 80;

    pub fn dimension(self) -> usize {
        match self {
            Dialect::Unefunge98 => 1,
            Dialect::Befunge93 | Dialect::Befunge98 => 2,
        }
    }

    pub fn is_extended(self) -> bool {
        self != Dialect::Befunge93
    }

    pub fn is_bounded(self) -> bool {
        !self.is_extended()
    }

    pub fn unknown_policy(self) -> UnknownPolicy {
        if self.is_extended() {
            UnknownPolicy::Ignore
        } else {
            UnknownPolicy::Halt
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Dialect::Befunge93 => write!(f, "Befunge-93"),
            Dialect::Unefunge98 => write!(f, "Unefunge-98"),
            Dialect::Befunge98 => write!(f, "Befunge-98"),
        }
    }
}
