pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{scan_directory, CrosstermTerminal, PandocRenderer, SystemViewer};
pub use config::{CliConfig, FileConfig, Settings};
pub use crate::core::orchestrator::BatchOrchestrator;
pub use domain::model::{ConversionLedger, DirectoryContext, RunReport, SourceDocument};
pub use utils::error::{ConvertError, Result};
pub use utils::timing::time_it;
