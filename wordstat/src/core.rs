// src/core.rs
pub mod analyzer;
pub mod scanner;
