use crate::utils::error::{ConvertError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 副檔名不含點，例如 `md`、`pdf`
pub fn validate_extension(field_name: &str, extension: &str) -> Result<()> {
    validate_non_empty_string(field_name, extension)?;

    if extension.contains('.') {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension must not contain dots".to_string(),
        });
    }

    if !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension must be ASCII letters or digits".to_string(),
        });
    }

    Ok(())
}

pub fn validate_distinct_extensions(source: &str, target: &str) -> Result<()> {
    if source.eq_ignore_ascii_case(target) {
        return Err(ConvertError::ConfigValidationError {
            field: "files.target_extension".to_string(),
            message: format!(
                "Target extension '{}' would overwrite the source files",
                target
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("directory", ".").is_ok());
        assert!(validate_path("directory", "/tmp/notes").is_ok());
        assert!(validate_path("directory", "").is_err());
        assert!(validate_path("directory", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("pandoc.template", "eisvogel").is_ok());
        assert!(validate_non_empty_string("pandoc.template", "   ").is_err());
    }

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension("files.source_extension", "md").is_ok());
        assert!(validate_extension("files.source_extension", "markdown").is_ok());
        assert!(validate_extension("files.source_extension", ".md").is_err());
        assert!(validate_extension("files.source_extension", "m d").is_err());
        assert!(validate_extension("files.source_extension", "").is_err());
    }

    #[test]
    fn test_validate_distinct_extensions() {
        assert!(validate_distinct_extensions("md", "pdf").is_ok());
        assert!(validate_distinct_extensions("md", "MD").is_err());
    }
}
