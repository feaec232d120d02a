// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Args, Settings, run};
pub use config::{Config, OutputFormat, load_config};
pub use crate::core::analyzer::{TARGET_TOKENS, analyze, count_occurrences};
pub use crate::core::scanner::aggregate_directory;
pub use error::ScanError;
pub use models::{AnalysisResult, SkipReason, SkippedFile, WordStats};
pub use utils::{TextReport, render_report, render_text};
