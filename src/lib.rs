//! # Funge
//!
//! Befunge-93 and Funge-98 as they were meant to be played: a program is a
//! block of characters on a grid, an instruction pointer walks it, and a
//! stack holds everything else.
//!
//! ```text
//! 64+"!dlroW ,olleH">:#,_@
//! ```
//!
//! Run a program with `funge hello.bf`. Without a file the grid is typed in
//! row by row and ends with an empty line.
//!
//! The [lang] module loads and validates program text. The [mach] module is
//! the machine: program space, stack of stacks, instruction pointer and the
//! event driven runtime that ties them together.

pub mod lang;
pub mod mach;
