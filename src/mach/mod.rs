/*!
## Rust Machine Module

This Rust module stores and runs BASIC programs.

*/

mod eval;
mod exec;
mod listing;
mod runtime;
mod var;

pub use exec::parse_input;
pub use exec::Context;
pub use exec::Evaluated;
pub use exec::Flow;
pub use listing::Entry;
pub use listing::Listing;
pub use runtime::Event;
pub use runtime::Runtime;
pub use var::Var;

#[cfg(test)]
mod tests;
