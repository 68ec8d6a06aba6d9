//! # Line BASIC
//!
//! A small integer BASIC in the style of the line-numbered
//! interpreters of the 8-bit era.
//!
//! Lines typed with a leading number are stored as the program; other
//! lines run immediately.
//! ```text
//! 10 LET X = 10
//! 20 IF X > 5 THEN 40
//! 30 PRINT 0
//! 40 PRINT 1
//! RUN
//! 1
//! ```
//!
//! The `lang` module turns text into statements and the `mach` module
//! stores and runs them. A front end drives a [`mach::Runtime`] by
//! entering lines and acting on the [`mach::Event`]s it returns.

pub mod lang;
pub mod mach;
