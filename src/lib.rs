pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStore, CliConfig};
pub use core::{engine::ScanEngine, pipeline::ScanPipeline, OperationRecord};
pub use utils::error::{Result, ScanError};
