//!
//! Growable ordered sequence with push/pop and visiting helpers.
//!
//! ```
//! use veclike::prelude::*;
//!
//! let mut s: Sequence<u32> = Sequence::new();
//! s.push(1).push(2).push(3);
//! assert_eq!(s.pop(), Ok(3));
//! assert_eq!(s, [1, 2]);
//! ```
pub mod error;
pub mod prelude;
pub mod sequence;

pub use error::{Error, Result};
pub use sequence::Sequence;
