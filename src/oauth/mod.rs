pub mod twitter;
pub mod types;

pub use twitter::*;
pub use types::*;
