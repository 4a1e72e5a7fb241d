// Adapters layer: concrete implementations for external systems (terminal, pandoc, viewer, filesystem).

pub mod directory;
pub mod pandoc;
pub mod terminal;
pub mod viewer;

pub use directory::scan_directory;
pub use pandoc::{require_tool, PandocRenderer};
pub use terminal::CrosstermTerminal;
pub use viewer::SystemViewer;
