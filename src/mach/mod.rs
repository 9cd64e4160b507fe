/*!
## Rust Machine Module

This Rust module is the ITL engine: the value model, the variable
environment, the expression evaluator, the statement executor, and
the line-indexed control driver, all behind the host capability seam.

*/

mod command;
mod eval;
mod exec;
mod function;
mod host;
mod operation;
mod rng;
mod runtime;
mod screen;
mod val;
mod var;

pub use function::Function;
pub use host::Host;
pub use host::Pointer;
pub use operation::Operation;
pub use rng::Rng;
pub use runtime::Runtime;
pub use val::Val;
pub use var::Var;
