pub mod error;
pub mod id;
pub mod value;

mod base;

pub use base::*;
