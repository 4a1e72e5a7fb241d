use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;

pub const DEFAULT_SOURCE_EXTENSION: &str = "md";
pub const DEFAULT_TARGET_EXTENSION: &str = "pdf";

/// 單一來源文件與其輸出路徑，建構後不可變
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    parent_directory: String,
    source_name: String,
    source_path: String,
    destination_name: String,
    destination_path: String,
}

impl SourceDocument {
    pub fn new(source_name: &str, parent_directory: &str) -> Self {
        Self::with_extensions(
            source_name,
            parent_directory,
            DEFAULT_SOURCE_EXTENSION,
            DEFAULT_TARGET_EXTENSION,
        )
    }

    pub fn with_extensions(
        source_name: &str,
        parent_directory: &str,
        source_extension: &str,
        target_extension: &str,
    ) -> Self {
        let destination_name = destination_name_for(source_name, source_extension, target_extension);
        Self {
            parent_directory: parent_directory.to_string(),
            source_name: source_name.to_string(),
            source_path: format!("{}/{}", parent_directory, source_name),
            destination_path: format!("{}/{}", parent_directory, destination_name),
            destination_name,
        }
    }

    pub fn parent_directory(&self) -> &str {
        &self.parent_directory
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    pub fn destination_name(&self) -> &str {
        &self.destination_name
    }

    pub fn destination_path(&self) -> &str {
        &self.destination_path
    }
}

impl fmt::Display for SourceDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File Name : {}\nParent directory : {}",
            self.source_name, self.parent_directory
        )
    }
}

/// 去掉結尾的 `.{extension}`（不分大小寫），沒有則回傳 None
pub fn strip_extension<'a>(name: &'a str, extension: &str) -> Option<&'a str> {
    let suffix_len = extension.len() + 1;
    if name.len() <= suffix_len || !name.is_char_boundary(name.len() - suffix_len) {
        return None;
    }
    let (stem, suffix) = name.split_at(name.len() - suffix_len);
    let matches = suffix.starts_with('.') && suffix[1..].eq_ignore_ascii_case(extension);
    matches.then_some(stem)
}

/// 只替換結尾的副檔名；不符合時直接附加目標副檔名，避免覆寫來源檔
pub fn destination_name_for(source_name: &str, source_extension: &str, target_extension: &str) -> String {
    match strip_extension(source_name, source_extension) {
        Some(stem) => format!("{}.{}", stem, target_extension),
        None => format!("{}.{}", source_name, target_extension),
    }
}

/// 目錄掃描結果：絕對路徑與依序排列的候選檔名
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryContext {
    pub path: String,
    pub extension: String,
    pub files: Vec<String>,
}

impl DirectoryContext {
    pub fn new(path: impl Into<String>, extension: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            path: path.into(),
            extension: extension.into(),
            files,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    pub fn listing(&self) -> String {
        let mut out = format!(
            "Found {} {} files in {}:\n",
            self.files.len(),
            self.extension,
            self.path
        );
        for name in &self.files {
            out.push_str(&format!("    {}\n", name));
        }
        out
    }
}

/// 成功轉換紀錄：來源檔名 -> 目標檔名，保留插入順序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionLedger {
    entries: Vec<(String, String)>,
}

impl ConversionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已存在的來源會就地更新，不改變順序
    pub fn record(&mut self, source_name: &str, destination_name: &str) {
        match self.entries.iter_mut().find(|(source, _)| source == source_name) {
            Some(entry) => entry.1 = destination_name.to_string(),
            None => self
                .entries
                .push((source_name.to_string(), destination_name.to_string())),
        }
    }

    pub fn get(&self, source_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(source, _)| source == source_name)
            .map(|(_, destination)| destination.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(source, destination)| (source.as_str(), destination.as_str()))
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(source, _)| source.as_str()).collect()
    }
}

impl Serialize for ConversionLedger {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (source, destination) in &self.entries {
            map.serialize_entry(source, destination)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMode {
    BatchAll,
    SelectSubset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentState {
    Pending,
    Skipped,
    Succeeded,
    Failed,
}

/// 文件處理後回傳給協調器的取消訊號
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub state: DocumentState,
    pub flow: Flow,
}

impl Outcome {
    pub fn skipped() -> Self {
        Self {
            state: DocumentState::Skipped,
            flow: Flow::Continue,
        }
    }

    pub fn succeeded() -> Self {
        Self {
            state: DocumentState::Succeeded,
            flow: Flow::Continue,
        }
    }

    pub fn failed(flow: Flow) -> Self {
        Self {
            state: DocumentState::Failed,
            flow,
        }
    }

    pub fn is_abort(&self) -> bool {
        self.flow == Flow::Abort
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    pub source_name: String,
    pub state: DocumentState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    Succeeded,
    Failed { code: Option<i32> },
}

impl RenderStatus {
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => RenderStatus::Succeeded,
            other => RenderStatus::Failed { code: other },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RenderStatus::Succeeded)
    }
}

/// 一次執行的結果
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub directory: String,
    pub mode: Option<ConversionMode>,
    pub converted: ConversionLedger,
    pub attempts: Vec<DocumentRecord>,
    pub cancelled: bool,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn attempted_names(&self) -> Vec<&str> {
        self.attempts
            .iter()
            .filter(|record| record.state != DocumentState::Skipped)
            .map(|record| record.source_name.as_str())
            .collect()
    }

    pub fn count(&self, state: DocumentState) -> usize {
        self.attempts.iter().filter(|record| record.state == state).count()
    }
}
