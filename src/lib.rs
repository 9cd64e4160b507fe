//! # ITL
//!
//! ITL ("Incredibly Tiny Language") as it was in the VTL-2 era.
//! ```text
//! ITL (Incredibly Tiny Language) REPL v0.5.0
//! 1> █
//! ```
//!
//! ## Installation
//!
//! Requires [Rust](https://www.rust-lang.org/tools/install) then
//! the command `cargo install itl`.
//!
//! ## Getting Started
//!
//! Run `itl` for the interactive REPL, or `itl program.itl` to run a
//! source file. Every line is a statement and almost every statement
//! is an assignment: to one of 27 single-letter variables, to the
//! line counter `#` (a jump), to an array cell, or to the screen.
//!
//! This is the manual. Every statement form and builtin is documented.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
