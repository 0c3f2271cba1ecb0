// src/core/models/mod.rs

pub mod account;
pub mod budget;
pub mod preferences;

pub use account::*;
pub use budget::*;
pub use preferences::*;
