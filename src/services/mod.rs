// src/services/mod.rs

pub mod finance;
