pub mod error;
pub mod result;
pub mod sanitize;

pub use error::*;
pub use result::*;
