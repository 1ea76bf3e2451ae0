/*!
# Rust Language Module

This Rust module loads Funge program text, checks it against the rules
of a dialect, and defines the errors every other module reports.

*/

#[macro_use]
mod error;
mod dialect;
mod source;

pub use dialect::Dialect;
pub use dialect::UnknownPolicy;
pub use error::Error;
pub use error::ErrorCode;
pub use source::LoadMode;
pub use source::Source;
