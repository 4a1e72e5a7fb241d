use anyhow::Result;
use mdconvert::core::{KeyPress, RenderStatus, Renderer, Terminal, Viewer};
use mdconvert::domain::model::{ConversionMode, DocumentState};
use mdconvert::{scan_directory, BatchOrchestrator, SourceDocument};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use tempfile::TempDir;

struct ScriptedTerminal {
    keys: VecDeque<KeyPress>,
    output: Vec<String>,
}

impl ScriptedTerminal {
    fn new(keys: &[KeyPress]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            output: Vec::new(),
        }
    }
}

impl Terminal for ScriptedTerminal {
    fn clear(&mut self) -> mdconvert::Result<()> {
        Ok(())
    }

    fn print(&mut self, text: &str) -> mdconvert::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn read_key(&mut self) -> mdconvert::Result<KeyPress> {
        self.keys.pop_front().ok_or(mdconvert::ConvertError::Interrupted)
    }
}

/// 模擬 pandoc：寫出目標檔，檔名含 "broken" 的視為失敗
#[derive(Default)]
struct FileWritingRenderer {
    calls: RefCell<Vec<String>>,
}

impl Renderer for FileWritingRenderer {
    fn render(&self, document: &SourceDocument) -> mdconvert::Result<RenderStatus> {
        self.calls.borrow_mut().push(document.source_name().to_string());
        if document.source_name().contains("broken") {
            return Ok(RenderStatus::Failed { code: Some(43) });
        }
        let markdown = fs::read_to_string(document.source_path())?;
        fs::write(document.destination_path(), format!("%PDF {}", markdown))?;
        Ok(RenderStatus::Succeeded)
    }
}

#[derive(Default)]
struct NullViewer {
    opened: RefCell<Vec<String>>,
}

impl Viewer for NullViewer {
    fn open(&self, path: &str) {
        self.opened.borrow_mut().push(path.to_string());
    }
}

fn write_docs(dir: &TempDir, names: &[&str]) {
    for name in names {
        fs::write(dir.path().join(name), format!("# {}\n", name)).unwrap();
    }
}

#[test]
fn test_end_to_end_batch_all_writes_every_pdf() -> Result<()> {
    let dir = TempDir::new()?;
    write_docs(&dir, &["intro.md", "chapter.1.md", "notes.txt"]);

    let context = scan_directory(dir.path(), "md")?;
    let mut terminal = ScriptedTerminal::new(&[KeyPress::Enter]);
    let renderer = FileWritingRenderer::default();
    let viewer = NullViewer::default();

    let report = BatchOrchestrator::new(context, &mut terminal, &renderer, &viewer).run()?;

    assert_eq!(report.mode, Some(ConversionMode::BatchAll));
    assert_eq!(
        report.converted.iter().collect::<Vec<_>>(),
        vec![("chapter.1.md", "chapter.1.pdf"), ("intro.md", "intro.pdf")]
    );
    assert!(dir.path().join("chapter.1.pdf").exists());
    assert!(dir.path().join("intro.pdf").exists());
    assert!(!dir.path().join("notes.pdf").exists());

    let summary = terminal.output.last().unwrap();
    assert!(summary.starts_with("Finished processing all md files in"));
    assert!(summary.contains("    chapter.1.md ----> chapter.1.pdf\n"));
    assert!(summary.contains("        intro.md ----> intro.pdf\n"));
    Ok(())
}

#[test]
fn test_end_to_end_abort_preserves_earlier_successes() -> Result<()> {
    let dir = TempDir::new()?;
    write_docs(&dir, &["a.md", "b-broken.md", "c.md"]);

    let context = scan_directory(dir.path(), "md")?;
    let mut terminal = ScriptedTerminal::new(&[KeyPress::Enter, KeyPress::Other]);
    let renderer = FileWritingRenderer::default();
    let viewer = NullViewer::default();

    let report = BatchOrchestrator::new(context, &mut terminal, &renderer, &viewer).run()?;

    assert!(report.cancelled);
    assert_eq!(*renderer.calls.borrow(), vec!["a.md", "b-broken.md"]);
    assert_eq!(report.converted.source_names(), vec!["a.md"]);
    assert!(!dir.path().join("c.pdf").exists());
    assert!(terminal
        .output
        .iter()
        .any(|line| line.contains("b-broken.md failed to convert.")));
    Ok(())
}

#[test]
fn test_end_to_end_select_subset_and_open() -> Result<()> {
    let dir = TempDir::new()?;
    write_docs(&dir, &["a.md", "b.md"]);

    let context = scan_directory(dir.path(), "md")?;
    let expected_pdf = format!("{}/b.pdf", context.path);
    let keys = [
        KeyPress::Other, // 逐檔
        KeyPress::Other, // 不選 a.md
        KeyPress::Enter, // 選 b.md
        KeyPress::Enter, // 確認轉換
        KeyPress::Enter, // 開啟
    ];
    let mut terminal = ScriptedTerminal::new(&keys);
    let renderer = FileWritingRenderer::default();
    let viewer = NullViewer::default();

    let report = BatchOrchestrator::new(context, &mut terminal, &renderer, &viewer).run()?;

    assert_eq!(report.mode, Some(ConversionMode::SelectSubset));
    assert_eq!(report.attempted_names(), vec!["b.md"]);
    assert_eq!(report.count(DocumentState::Succeeded), 1);
    assert_eq!(*viewer.opened.borrow(), vec![expected_pdf]);
    assert!(!dir.path().join("a.pdf").exists());
    Ok(())
}

#[test]
fn test_end_to_end_empty_directory() -> Result<()> {
    let dir = TempDir::new()?;
    write_docs(&dir, &["readme.txt"]);

    let context = scan_directory(dir.path(), "md")?;
    let mut terminal = ScriptedTerminal::new(&[]);
    let renderer = FileWritingRenderer::default();
    let viewer = NullViewer::default();

    let report = BatchOrchestrator::new(context, &mut terminal, &renderer, &viewer).run()?;

    assert!(report.converted.is_empty());
    assert!(renderer.calls.borrow().is_empty());
    assert_eq!(terminal.output, vec!["No md files were converted.\n"]);
    Ok(())
}

#[test]
fn test_report_serializes_to_json() -> Result<()> {
    let dir = TempDir::new()?;
    write_docs(&dir, &["a.md"]);

    let context = scan_directory(dir.path(), "md")?;
    let mut terminal = ScriptedTerminal::new(&[KeyPress::Enter]);
    let renderer = FileWritingRenderer::default();
    let viewer = NullViewer::default();

    let report = BatchOrchestrator::new(context, &mut terminal, &renderer, &viewer).run()?;
    let json: serde_json::Value = serde_json::to_value(&report)?;

    assert_eq!(json["mode"], "batch_all");
    assert_eq!(json["converted"]["a.md"], "a.pdf");
    assert_eq!(json["attempts"][0]["state"], "succeeded");
    assert_eq!(json["cancelled"], false);
    Ok(())
}
