use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_extension, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定檔，所有區段與欄位皆可省略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub pandoc: PandocSection,
    #[serde(default)]
    pub files: FilesSection,
    #[serde(default)]
    pub viewer: ViewerSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PandocSection {
    pub program: Option<String>,
    pub from: Option<String>,
    pub template: Option<String>,
    pub highlight_style: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilesSection {
    pub source_extension: Option<String>,
    pub target_extension: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewerSection {
    pub program: Option<String>,
    pub echo_contents: Option<bool>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ConvertError::ConfigError {
            message: format!("Cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PANDOC_TEMPLATE})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConvertError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        let strings = [
            ("pandoc.program", &self.pandoc.program),
            ("pandoc.from", &self.pandoc.from),
            ("pandoc.template", &self.pandoc.template),
            ("pandoc.highlight_style", &self.pandoc.highlight_style),
            ("viewer.program", &self.viewer.program),
        ];
        for (field, value) in strings {
            if let Some(value) = value {
                validate_non_empty_string(field, value)?;
            }
        }

        if let Some(ext) = &self.files.source_extension {
            validate_extension("files.source_extension", ext)?;
        }
        if let Some(ext) = &self.files.target_extension {
            validate_extension("files.target_extension", ext)?;
        }
        Ok(())
    }
}
