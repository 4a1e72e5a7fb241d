pub mod settings;
pub mod toml_config;

pub use settings::Settings;
pub use toml_config::FileConfig;

#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "mdconvert"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Interactively convert Markdown files in a directory to PDF with pandoc")
)]
pub struct CliConfig {
    /// Directory containing the Markdown files
    #[cfg_attr(feature = "cli", arg(default_value = "."))]
    pub directory: String,

    /// Path to TOML configuration file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// pandoc binary to run
    #[cfg_attr(feature = "cli", arg(long))]
    pub pandoc: Option<String>,

    /// pandoc input format
    #[cfg_attr(feature = "cli", arg(long))]
    pub from: Option<String>,

    /// LaTeX template name
    #[cfg_attr(feature = "cli", arg(long))]
    pub template: Option<String>,

    /// Syntax highlight style
    #[cfg_attr(feature = "cli", arg(long))]
    pub highlight_style: Option<String>,

    /// Program used to open converted files
    #[cfg_attr(feature = "cli", arg(long))]
    pub viewer: Option<String>,

    /// Do not list the directory contents before starting
    #[cfg_attr(feature = "cli", arg(long))]
    pub quiet_listing: bool,

    /// Print the run report as JSON after the summary
    #[cfg_attr(feature = "cli", arg(long))]
    pub json: bool,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub verbose: bool,
}
