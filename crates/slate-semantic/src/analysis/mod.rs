//! Function body analyses run by the checker.

pub mod control_paths;
pub mod returns;

pub use control_paths::{ControlKind, ControlPathTree, NodeId, returns_on_all_paths};
pub use returns::{FunctionReturnsChecker, ReturnMismatch};
