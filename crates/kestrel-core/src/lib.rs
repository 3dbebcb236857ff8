pub mod batch;
pub mod error;
pub mod records;
pub mod roster;
pub mod search;

pub use error::{Error, Result};
