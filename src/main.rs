//! # Funge
//!
//! Command line interpreter for Befunge-93 and Funge-98.
//!

mod term;

fn main() {
    term::main()
}
