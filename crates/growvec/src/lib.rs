#![doc = include_str!("../README.md")]

mod cursor;
mod error;
mod sequence;
mod sort;
mod value;

pub use cursor::*;
pub use error::*;
pub use sequence::*;
pub use sort::*;
pub use value::*;
