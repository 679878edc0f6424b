//! Standard listener implementations.

mod func;
mod traced;

pub use func::{FnListener, from_fn};
pub use traced::Traced;
