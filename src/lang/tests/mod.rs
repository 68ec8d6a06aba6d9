use super::*;

mod lex_test;
mod line_test;
