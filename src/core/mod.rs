pub mod discover;
pub mod engine;
pub mod extract;
pub mod loader;
pub mod matcher;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::{Declaration, OperationRecord, SourceModule};
pub use crate::domain::ports::{ConfigProvider, Pipeline, SourceStore};
pub use crate::utils::error::Result;
