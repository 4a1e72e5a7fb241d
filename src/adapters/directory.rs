use crate::domain::model::{strip_extension, DirectoryContext};
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::path::Path;

/// 取得目錄的絕對路徑，列出副檔名相符（不分大小寫）的一般檔案並依名稱排序
pub fn scan_directory<P: AsRef<Path>>(path: P, extension: &str) -> Result<DirectoryContext> {
    let path = path.as_ref();
    let directory_error = |message: String| ConvertError::DirectoryError {
        path: path.display().to_string(),
        message,
    };

    let absolute = fs::canonicalize(path).map_err(|e| directory_error(e.to_string()))?;
    if !absolute.is_dir() {
        return Err(directory_error("Not a directory".to_string()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(&absolute)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                tracing::warn!("Skipping non UTF-8 file name: {:?}", raw);
                continue;
            }
        };
        if strip_extension(&name, extension).is_some() {
            files.push(name);
        }
    }
    files.sort();

    let absolute = absolute.to_string_lossy().into_owned();
    tracing::debug!("Found {} .{} files in {}", files.len(), extension, absolute);
    Ok(DirectoryContext::new(absolute, extension, files))
}
