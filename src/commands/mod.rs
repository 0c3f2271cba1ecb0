// src/commands/mod.rs

pub mod cli;
