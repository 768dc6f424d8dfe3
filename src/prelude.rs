//!
//! globally-available parts
//!
pub use crate::error::{Error, Result};
pub use crate::sequence::{Sequence, SequenceIter};
