/*!
## Rust Machine Module

This Rust module is the virtual machine for Funge programs: program space,
stack of stacks, instruction pointer and the runtime that drives them.

*/

pub type Value = i64;

mod channel;
mod ip;
mod machine;
mod opcode;
mod operation;
mod runtime;
mod space;
mod stack;
mod trace;
mod vector;

#[cfg(test)]
mod tests;

pub use channel::Buffer;
pub use channel::Channel;
pub use ip::Heading;
pub use ip::InstructionPointer;
pub use machine::StackMachine;
pub use opcode::Opcode;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Input;
pub use runtime::Output;
pub use runtime::Runtime;
pub use runtime::State;
pub use space::ProgramSpace;
pub use space::SPACE;
pub use stack::Stack;
pub use trace::Trace;
pub use vector::Vector;
