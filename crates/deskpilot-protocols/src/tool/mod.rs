//! Tool protocol definitions.
//!
//! Tools are the unit the server dispatches external requests to.

mod context;
mod definition;
mod result;
mod traits;

pub use context::*;
pub use definition::*;
pub use result::*;
pub use traits::*;
