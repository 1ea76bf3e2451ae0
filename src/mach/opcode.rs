use super::Heading;
use crate::lang::Dialect;

/// ## Virtual machine instruction set
///
/// Every byte of program space decodes to exactly one opcode through a
/// 256 entry table per dialect. The tables are built at compile time so
/// dispatch is a single index.
///
/// Binary operations pop `a` then `b` and push `a op b`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // *** Literals
    /// Push the value of a digit, `0`–`9` and in Funge-98 `a`–`f`.
    Digit(u8),
    /// Toggle string mode.
    Quote,
    /// Push the next cell and skip over it.
    Fetch,
    /// Pop a value into the next cell and skip over it.
    Store,

    // *** Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Not,
    Greater,

    // *** Stack manipulation
    Dup,
    Swap,
    Discard,
    Clear,
    BeginBlock,
    EndBlock,
    StackUnderStack,

    // *** Flow control
    Go(Heading),
    Random,
    /// `_` pop and head east on zero, west otherwise.
    IfHorizontal,
    /// `|` pop and head south on zero, north otherwise.
    IfVertical,
    Trampoline,
    Reflect,
    TurnLeft,
    TurnRight,
    Compare,
    SetDelta,
    JumpForward,
    JumpOver,
    Nop,

    // *** Program space
    Put,
    Get,

    // *** I/O
    PrintNumber,
    PrintChar,
    ReadNumber,
    ReadChar,

    // *** Termination
    Halt,
    Quit,

    Unknown,
}

const fn befunge93(byte: u8) -> Opcode {
    use Opcode::*;
    match byte {
        b'0'..=b'9' => Digit(byte - b'0'),
        b'"' => Quote,
        b'+' => Add,
        b'-' => Sub,
        b'*' => Mul,
        b'/' => Div,
        b'%' => Mod,
        b'!' => Not,
        b'`' => Greater,
        b':' => Dup,
        b'\\' => Swap,
        b'$' => Discard,
        b'>' => Go(Heading::East),
        b'<' => Go(Heading::West),
        b'^' => Go(Heading::North),
        b'v' => Go(Heading::South),
        b'?' => Random,
        b'_' => IfHorizontal,
        b'|' => IfVertical,
        b'#' => Trampoline,
        b' ' => Nop,
        b'p' => Put,
        b'g' => Get,
        b'.' => PrintNumber,
        b',' => PrintChar,
        b'&' => ReadNumber,
        b'~' => ReadChar,
        b'@' => Halt,
        _ => Unknown,
    }
}

const fn befunge98(byte: u8) -> Opcode {
    use Opcode::*;
    match byte {
        b'a'..=b'f' => Digit(byte - b'a' + 10),
        b'\'' => Fetch,
        b's' => Store,
        b'n' => Clear,
        b'{' => BeginBlock,
        b'}' => EndBlock,
        b'u' => StackUnderStack,
        b'r' => Reflect,
        b'[' => TurnLeft,
        b']' => TurnRight,
        b'w' => Compare,
        b'x' => SetDelta,
        b'j' => JumpForward,
        b';' => JumpOver,
        b'z' => Nop,
        b'q' => Quit,
        _ => befunge93(byte),
    }
}

/// Unefunge has no second axis, so the instructions that need one are
/// left undefined.
const fn unefunge98(byte: u8) -> Opcode {
    match byte {
        b'^' | b'v' | b'|' | b'[' | b']' | b'w' => Opcode::Unknown,
        _ => befunge98(byte),
    }
}

const fn build(dialect: Dialect) -> [Opcode; 256] {
    let mut table = [Opcode::Unknown; 256];
    let mut byte = 0;
    while byte < 256 {
        table[byte] = match dialect {
            Dialect::Befunge93 => befunge93(byte as u8),
            Dialect::Unefunge98 => unefunge98(byte as u8),
            Dialect::Befunge98 => befunge98(byte as u8),
        };
        byte += 1;
    }
    table
}

static BEFUNGE93: [Opcode; 256] = build(Dialect::Befunge93);
static UNEFUNGE98: [Opcode; 256] = build(Dialect::Unefunge98);
static BEFUNGE98: [Opcode; 256] = build(Dialect::Befunge98);

impl Opcode {
    fn table(dialect: Dialect) -> &'static [Opcode; 256] {
        match dialect {
            Dialect::Befunge93 => &BEFUNGE93,
            Dialect::Unefunge98 => &UNEFUNGE98,
            Dialect::Befunge98 => &BEFUNGE98,
        }
    }

    pub fn decode(dialect: Dialect, byte: u8) -> Opcode {
        Opcode::table(dialect)[byte as usize]
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Digit(d) => write!(f, "DIGIT({})", d),
            Quote => write!(f, "QUOTE"),
            Fetch => write!(f, "FETCH"),
            Store => write!(f, "STORE"),

            Add => write!(f, "ADD"),
            Sub => write!(f, "SUB"),
            Mul => write!(f, "MUL"),
            Div => write!(f, "DIV"),
            Mod => write!(f, "MOD"),
            Not => write!(f, "NOT"),
            Greater => write!(f, "GT"),

            Dup => write!(f, "DUP"),
            Swap => write!(f, "SWAP"),
            Discard => write!(f, "DISCARD"),
            Clear => write!(f, "CLEAR"),
            BeginBlock => write!(f, "BEGIN"),
            EndBlock => write!(f, "END"),
            StackUnderStack => write!(f, "UNDER"),

            Go(h) => write!(f, "GO({:?})", h),
            Random => write!(f, "RANDOM"),
            IfHorizontal => write!(f, "IFH"),
            IfVertical => write!(f, "IFV"),
            Trampoline => write!(f, "TRAMPOLINE"),
            Reflect => write!(f, "REFLECT"),
            TurnLeft => write!(f, "LEFT"),
            TurnRight => write!(f, "RIGHT"),
            Compare => write!(f, "COMPARE"),
            SetDelta => write!(f, "DELTA"),
            JumpForward => write!(f, "JUMP"),
            JumpOver => write!(f, "JUMPOVER"),
            Nop => write!(f, "NOP"),

            Put => write!(f, "PUT"),
            Get => write!(f, "GET"),

            PrintNumber => write!(f, "PRINTNUM"),
            PrintChar => write!(f, "PRINTCHR"),
            ReadNumber => write!(f, "READNUM"),
            ReadChar => write!(f, "READCHR"),

            Halt => write!(f, "HALT"),
            Quit => write!(f, "QUIT"),

            Unknown => write!(f, "UNKNOWN"),
        }
    }
}
