//! Type checking implementation modules.

mod control_flow;
mod core;
mod declarations;
mod functions;
mod helpers;
mod loops;
mod program;
mod resolve;
mod statements;

pub use core::TypeChecker;
