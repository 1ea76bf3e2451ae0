use crate::mach::Vector;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    location: Option<Vector>,
    command: Option<char>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $at:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at($at)
    };
    ($err:ident, $at:expr, $cmd:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at($at)
            .command($cmd)
    };
    ($err:ident, $at:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at($at)
            .message($msg)
    };
    ($err:ident, $at:expr, $cmd:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at($at)
            .command($cmd)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            location: None,
            command: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn location(&self) -> Option<&Vector> {
        self.location.as_ref()
    }

    pub fn get_command(&self) -> Option<char> {
        self.command
    }

    pub fn is_load_error(&self) -> bool {
        (self.code as u16) < 10
    }

    /// Stack-stack failures that turn the IP around instead of stopping it.
    pub fn reflects(&self) -> bool {
        matches!(self.code, ErrorCode::NoSoss | ErrorCode::OutOfMemory)
    }

    pub fn at(self, location: &Vector) -> Error {
        debug_assert!(self.location.is_none());
        Error {
            location: Some(location.clone()),
            ..self
        }
    }

    pub fn command(self, command: char) -> Error {
        Error {
            command: Some(command),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }

    /// Attach the instruction and its location unless the error already
    /// names one.
    pub fn in_instruction(self, location: &Vector, command: char) -> Error {
        if self.location.is_some() {
            self
        } else {
            self.at(location).command(command)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    CodeFileNotFound = 1,
    CodeFileOutOfBounds = 2,
    CodeNotRectangular = 3,
    CodeSourceEmpty = 4,
    WrongLoadMode = 5,
    GridNotDefined = 6,
    CompleteGridAlteration = 7,
    IpDimensionMismatch = 10,
    NoSoss = 11,
    InvalidInstruction = 12,
    InvalidNumber = 13,
    InputPastEnd = 14,
    Interrupted = 15,
    OutOfMemory = 16,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            CodeFileNotFound => "The code file is not found",
            CodeFileOutOfBounds => "The code width or height is out of 25×80 bounds",
            CodeNotRectangular => "The code is not rectangular",
            CodeSourceEmpty => "The code source contains an empty row",
            WrongLoadMode => {
                "The load mode is wrong, should be 'f' for files or 's' for string list"
            }
            GridNotDefined => "The interactive grid is empty",
            CompleteGridAlteration => "The complete interactive grid cannot be altered",
            IpDimensionMismatch => {
                "The storage offset given to 'begin block' does not match the space dimension"
            }
            NoSoss => "There is no second stack on the stack stack",
            InvalidInstruction => "Invalid instruction",
            InvalidNumber => "Invalid number",
            InputPastEnd => "Input past end",
            Interrupted => "Interrupted",
            OutOfMemory => "Out of memory",
            InternalError => "Internal error",
        };
        write!(f, "{}", code_str)?;
        if let Some(command) = self.command {
            write!(f, " [ {} ]", command)?;
        }
        if let Some(location) = &self.location {
            match location.dimension() {
                1 => write!(f, " at {} column", location.x() + 1)?,
                _ => write!(f, " at {} row, {} column", location.y() + 1, location.x() + 1)?,
            }
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
