//! X11 connection context and trigger window operations

mod context;
mod ops;

pub use context::{AppContext, CachedAtoms};
pub use ops::*;
