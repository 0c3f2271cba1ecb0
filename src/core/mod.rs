// src/core/mod.rs

pub mod file_system;
pub mod models;
pub mod runway;
