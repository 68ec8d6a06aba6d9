/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

*/

pub type LineNumber = u32;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::line_number;
pub use line::Line;
pub use parse::parse;
pub use parse::parse_command;
pub use token::{Operator, Token, Word};

pub mod ast;

#[cfg(test)]
mod tests;
