use crate::domain::model::{RenderStatus, SourceDocument};
use crate::domain::ports::{KeyPress, Renderer, Terminal, Viewer};
use crate::utils::error::{ConvertError, Result};
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};

/// 依序回放預先排好的按鍵，並記錄所有輸出
#[derive(Debug, Default)]
pub(crate) struct ScriptedTerminal {
    pub keys: VecDeque<KeyPress>,
    pub output: Vec<String>,
    pub clears: usize,
    pub prompts: usize,
}

impl ScriptedTerminal {
    pub fn new(keys: &[KeyPress]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }
}

impl Terminal for ScriptedTerminal {
    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn read_key(&mut self) -> Result<KeyPress> {
        self.prompts += 1;
        self.keys.pop_front().ok_or_else(|| {
            ConvertError::IoError(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "no scripted key left",
            ))
        })
    }
}

/// 指定檔名會失敗，其餘成功；記錄每次呼叫
#[derive(Debug, Default)]
pub(crate) struct FakeRenderer {
    failing: HashSet<String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeRenderer {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing_on(names: &[&str]) -> Self {
        Self {
            failing: names.iter().map(|name| name.to_string()).collect(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Renderer for FakeRenderer {
    fn render(&self, document: &SourceDocument) -> Result<RenderStatus> {
        self.calls.borrow_mut().push(document.source_name().to_string());
        if self.failing.contains(document.source_name()) {
            Ok(RenderStatus::Failed { code: Some(43) })
        } else {
            Ok(RenderStatus::Succeeded)
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingViewer {
    pub opened: RefCell<Vec<String>>,
}

impl RecordingViewer {
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl Viewer for RecordingViewer {
    fn open(&self, path: &str) {
        self.opened.borrow_mut().push(path.to_string());
    }
}
