use crate::adapters::pandoc::{
    DEFAULT_HIGHLIGHT_STYLE, DEFAULT_INPUT_FORMAT, DEFAULT_PROGRAM, DEFAULT_TEMPLATE,
};
use crate::config::{CliConfig, FileConfig};
use crate::domain::model::{DEFAULT_SOURCE_EXTENSION, DEFAULT_TARGET_EXTENSION};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_distinct_extensions, validate_extension, validate_non_empty_string, validate_path,
    Validate,
};

/// 合併後的設定：命令列 > 設定檔 > 預設值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub directory: String,
    pub pandoc_program: String,
    pub input_format: String,
    pub template: String,
    pub highlight_style: String,
    pub source_extension: String,
    pub target_extension: String,
    pub viewer_program: Option<String>,
    pub echo_contents: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            pandoc_program: DEFAULT_PROGRAM.to_string(),
            input_format: DEFAULT_INPUT_FORMAT.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            highlight_style: DEFAULT_HIGHLIGHT_STYLE.to_string(),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            target_extension: DEFAULT_TARGET_EXTENSION.to_string(),
            viewer_program: None,
            echo_contents: true,
        }
    }
}

impl Settings {
    pub fn resolve(cli: &CliConfig, file: Option<&FileConfig>) -> Self {
        let defaults = Settings::default();
        let file = file.cloned().unwrap_or_default();

        Self {
            directory: cli.directory.clone(),
            pandoc_program: cli
                .pandoc
                .clone()
                .or(file.pandoc.program)
                .unwrap_or(defaults.pandoc_program),
            input_format: cli
                .from
                .clone()
                .or(file.pandoc.from)
                .unwrap_or(defaults.input_format),
            template: cli
                .template
                .clone()
                .or(file.pandoc.template)
                .unwrap_or(defaults.template),
            highlight_style: cli
                .highlight_style
                .clone()
                .or(file.pandoc.highlight_style)
                .unwrap_or(defaults.highlight_style),
            source_extension: file
                .files
                .source_extension
                .unwrap_or(defaults.source_extension),
            target_extension: file
                .files
                .target_extension
                .unwrap_or(defaults.target_extension),
            viewer_program: cli.viewer.clone().or(file.viewer.program),
            echo_contents: !cli.quiet_listing
                && file.viewer.echo_contents.unwrap_or(defaults.echo_contents),
        }
    }

    /// 讀取 `--config` 指定的檔案（若有）後合併
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let file = FileConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };
        Ok(Self::resolve(cli, file.as_ref()))
    }
}

impl ConfigProvider for Settings {
    fn directory(&self) -> &str {
        &self.directory
    }

    fn pandoc_program(&self) -> &str {
        &self.pandoc_program
    }

    fn input_format(&self) -> &str {
        &self.input_format
    }

    fn template(&self) -> &str {
        &self.template
    }

    fn highlight_style(&self) -> &str {
        &self.highlight_style
    }

    fn source_extension(&self) -> &str {
        &self.source_extension
    }

    fn target_extension(&self) -> &str {
        &self.target_extension
    }

    fn viewer_program(&self) -> Option<&str> {
        self.viewer_program.as_deref()
    }

    fn echo_contents(&self) -> bool {
        self.echo_contents
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("directory", &self.directory)?;
        validate_non_empty_string("pandoc.program", &self.pandoc_program)?;
        validate_non_empty_string("pandoc.from", &self.input_format)?;
        validate_non_empty_string("pandoc.template", &self.template)?;
        validate_non_empty_string("pandoc.highlight_style", &self.highlight_style)?;
        validate_extension("files.source_extension", &self.source_extension)?;
        validate_extension("files.target_extension", &self.target_extension)?;
        validate_distinct_extensions(&self.source_extension, &self.target_extension)?;
        if let Some(viewer) = &self.viewer_program {
            validate_non_empty_string("viewer.program", viewer)?;
        }
        Ok(())
    }
}
