use crate::domain::model::{RenderStatus, SourceDocument};
use crate::domain::ports::{ConfigProvider, Renderer};
use crate::utils::error::{ConvertError, Result};
use std::path::PathBuf;
use std::process::Command;

pub const DEFAULT_PROGRAM: &str = "pandoc";
pub const DEFAULT_INPUT_FORMAT: &str = "markdown";
pub const DEFAULT_TEMPLATE: &str = "eisvogel";
pub const DEFAULT_HIGHLIGHT_STYLE: &str = "tango";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PandocRenderer {
    program: String,
    input_format: String,
    template: String,
    highlight_style: String,
}

impl Default for PandocRenderer {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            input_format: DEFAULT_INPUT_FORMAT.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            highlight_style: DEFAULT_HIGHLIGHT_STYLE.to_string(),
        }
    }
}

impl PandocRenderer {
    pub fn new(program: &str, input_format: &str, template: &str, highlight_style: &str) -> Self {
        Self {
            program: program.to_string(),
            input_format: input_format.to_string(),
            template: template.to_string(),
            highlight_style: highlight_style.to_string(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(
            config.pandoc_program(),
            config.input_format(),
            config.template(),
            config.highlight_style(),
        )
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// `<source> --output <destination> --from <format> --template <name> --highlight-style <style>`
    pub fn arguments(&self, document: &SourceDocument) -> Vec<String> {
        vec![
            document.source_path().to_string(),
            "--output".to_string(),
            document.destination_path().to_string(),
            "--from".to_string(),
            self.input_format.clone(),
            "--template".to_string(),
            self.template.clone(),
            "--highlight-style".to_string(),
            self.highlight_style.clone(),
        ]
    }
}

impl Renderer for PandocRenderer {
    fn render(&self, document: &SourceDocument) -> Result<RenderStatus> {
        let args = self.arguments(document);
        tracing::debug!("Executing: {} {:?}", self.program, args);

        // stdio 沿用終端，讓 pandoc 自己的錯誤訊息直接顯示
        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|source| ConvertError::ToolSpawn {
                program: self.program.clone(),
                source,
            })?;

        Ok(RenderStatus::from_code(status.code()))
    }
}

/// 確認外部工具存在於 PATH，回傳其路徑
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| ConvertError::ToolNotFound {
        tool: name.to_string(),
    })
}
