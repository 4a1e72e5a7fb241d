pub mod document;
pub mod orchestrator;
pub mod prompt;
pub mod selection;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{
    ConversionLedger, ConversionMode, DirectoryContext, DocumentState, Flow, Outcome,
    RenderStatus, RunReport, SourceDocument,
};
pub use crate::domain::ports::{ConfigProvider, KeyPress, Renderer, Terminal, Viewer};
pub use crate::utils::error::Result;
