//! Request handlers.

pub mod health;
pub mod lookup;

pub use health::*;
pub use lookup::*;
