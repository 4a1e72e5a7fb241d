use crate::core::prompt::prompt_choice;
use crate::core::selection::choose_multiple;
use crate::core::summary::render_summary;
use crate::domain::model::{
    ConversionLedger, ConversionMode, DirectoryContext, DocumentRecord, RunReport,
    SourceDocument, DEFAULT_SOURCE_EXTENSION, DEFAULT_TARGET_EXTENSION,
};
use crate::domain::ports::{ConfigProvider, Renderer, Terminal, Viewer};
use crate::utils::error::Result;

pub struct BatchOrchestrator<T: Terminal, R: Renderer, V: Viewer> {
    context: DirectoryContext,
    terminal: T,
    renderer: R,
    viewer: V,
    source_extension: String,
    target_extension: String,
    echo_contents: bool,
}

impl<T: Terminal, R: Renderer, V: Viewer> BatchOrchestrator<T, R, V> {
    pub fn new(context: DirectoryContext, terminal: T, renderer: R, viewer: V) -> Self {
        Self {
            context,
            terminal,
            renderer,
            viewer,
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            target_extension: DEFAULT_TARGET_EXTENSION.to_string(),
            echo_contents: false,
        }
    }

    pub fn with_extensions(mut self, source: &str, target: &str) -> Self {
        self.source_extension = source.to_string();
        self.target_extension = target.to_string();
        self
    }

    /// 開始前先列出目錄內容
    pub fn with_listing(mut self, echo_contents: bool) -> Self {
        self.echo_contents = echo_contents;
        self
    }

    pub fn configure<C: ConfigProvider + ?Sized>(self, config: &C) -> Self {
        self.with_extensions(config.source_extension(), config.target_extension())
            .with_listing(config.echo_contents())
    }

    fn document(&self, name: &str) -> SourceDocument {
        SourceDocument::with_extensions(
            name,
            &self.context.path,
            &self.source_extension,
            &self.target_extension,
        )
    }

    pub fn run(&mut self) -> Result<RunReport> {
        tracing::info!(
            "Starting conversion in {} ({} candidates)",
            self.context.path,
            self.context.files.len()
        );

        let mut ledger = ConversionLedger::new();
        let mut attempts = Vec::new();
        let mut cancelled = false;
        let mut mode = None;

        if self.context.is_empty() {
            tracing::warn!("No {} files found in {}", self.source_extension, self.context.path);
        } else {
            if self.echo_contents {
                let listing = self.context.listing();
                self.terminal.print(&listing)?;
            }

            let chosen = prompt_choice(
                &mut self.terminal,
                &format!(
                    "\nAttempting to convert {ext} files to {target} format...\n\n    ENTER : converts all {ext} files\n    ANY OTHER KEY : converts only select {ext} files one at a time",
                    ext = self.source_extension,
                    target = self.target_extension
                ),
                ConversionMode::BatchAll,
                ConversionMode::SelectSubset,
            )?;
            tracing::info!("Conversion mode: {:?}", chosen);
            mode = Some(chosen);

            let names = match chosen {
                ConversionMode::BatchAll => {
                    self.terminal.clear()?;
                    self.context.files.clone()
                }
                ConversionMode::SelectSubset => {
                    choose_multiple(&mut self.terminal, &self.context.files)?
                }
            };

            for name in &names {
                let document = self.document(name);
                let outcome = match chosen {
                    ConversionMode::BatchAll => {
                        document.convert_silent(&mut self.terminal, &self.renderer, &mut ledger)?
                    }
                    ConversionMode::SelectSubset => document.convert_interactive(
                        &mut self.terminal,
                        &self.renderer,
                        &self.viewer,
                        &mut ledger,
                    )?,
                };

                attempts.push(DocumentRecord {
                    source_name: name.clone(),
                    state: outcome.state,
                });

                if outcome.is_abort() {
                    tracing::warn!(
                        "Batch aborted after {}; {} document(s) left unprocessed",
                        name,
                        names.len() - attempts.len()
                    );
                    cancelled = true;
                    break;
                }
            }
        }

        self.terminal.clear()?;
        let summary = render_summary(&ledger, &self.context.path, &self.source_extension);
        self.terminal.print(&summary)?;
        tracing::info!("📁 Converted {} file(s)", ledger.len());

        Ok(RunReport {
            directory: self.context.path.clone(),
            mode,
            converted: ledger,
            attempts,
            cancelled,
            finished_at: chrono::Utc::now(),
        })
    }
}
