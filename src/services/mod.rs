pub mod accounts;
pub mod bearer_token;
pub mod client;
pub mod events;
pub mod tweets;
pub mod types;

pub use client::*;
pub use types::*;
