use crate::core::prompt::prompt_choice;
use crate::domain::model::{
    ConversionLedger, DocumentState, Flow, Outcome, RenderStatus, SourceDocument,
};
use crate::domain::ports::{Renderer, Terminal, Viewer};
use crate::utils::error::Result;
use crate::utils::timing::time_it;

impl SourceDocument {
    fn arrow_line(&self) -> String {
        format!("{}  ---->  {}", self.source_name(), self.destination_name())
    }

    /// Enter 確認轉換，其他按鍵略過
    pub fn request_confirmation<T: Terminal + ?Sized>(&self, terminal: &mut T) -> Result<bool> {
        terminal.print(&format!("Attempting to convert {}...", self.arrow_line()))?;
        prompt_choice(
            terminal,
            &format!(
                "\n\n    ENTER : convert file to {}\n    ANY OTHER KEY : continue without converting",
                target_label(self)
            ),
            true,
            false,
        )
    }

    /// 逐檔確認模式
    pub fn convert_interactive<T, R, V>(
        &self,
        terminal: &mut T,
        renderer: &R,
        viewer: &V,
        ledger: &mut ConversionLedger,
    ) -> Result<Outcome>
    where
        T: Terminal + ?Sized,
        R: Renderer + ?Sized,
        V: Viewer + ?Sized,
    {
        terminal.clear()?;
        if !self.request_confirmation(terminal)? {
            tracing::debug!("Skipped {}", self.source_name());
            return Ok(Outcome::skipped());
        }

        terminal.print(&format!("\n{:^50}", format!("Converting {}...", self.arrow_line())))?;
        let outcome = self.convert(terminal, renderer, ledger)?;
        if outcome.state != DocumentState::Succeeded {
            return Ok(outcome);
        }

        let open_requested = prompt_choice(
            terminal,
            &format!(
                "\nFinished converting {}.\n\n    ENTER : open {}\n    ANY OTHER KEY : continue without opening\n",
                self.destination_name(),
                target_label(self)
            ),
            true,
            false,
        )?;
        if open_requested {
            viewer.open(self.destination_path());
            terminal.clear()?;
        }

        Ok(outcome)
    }

    /// 全部轉換模式：不逐檔確認，只顯示進度
    pub fn convert_silent<T, R>(
        &self,
        terminal: &mut T,
        renderer: &R,
        ledger: &mut ConversionLedger,
    ) -> Result<Outcome>
    where
        T: Terminal + ?Sized,
        R: Renderer + ?Sized,
    {
        terminal.print(&format!(
            "Converting {} ----> {}",
            self.source_name(),
            self.destination_name()
        ))?;
        let outcome = self.convert(terminal, renderer, ledger)?;
        if outcome.state == DocumentState::Succeeded {
            terminal.print(&format!("Finished converting {}\n\n", self.destination_name()))?;
        }
        Ok(outcome)
    }

    /// 呼叫外部工具；成功才寫入 ledger，失敗時詢問要繼續還是中止整批
    pub fn convert<T, R>(
        &self,
        terminal: &mut T,
        renderer: &R,
        ledger: &mut ConversionLedger,
    ) -> Result<Outcome>
    where
        T: Terminal + ?Sized,
        R: Renderer + ?Sized,
    {
        let status = time_it(&format!("render {}", self.source_name()), || {
            renderer.render(self)
        })?;

        match status {
            RenderStatus::Succeeded => {
                ledger.record(self.source_name(), self.destination_name());
                tracing::info!(
                    "✅ Converted {} -> {}",
                    self.source_name(),
                    self.destination_name()
                );
                Ok(Outcome::succeeded())
            }
            RenderStatus::Failed { code } => {
                tracing::warn!(
                    "❌ {} failed to convert (exit code: {:?})",
                    self.source_name(),
                    code
                );
                let flow = prompt_choice(
                    terminal,
                    &format!(
                        "\n\n{} failed to convert.\n\n    ENTER : continue converting files\n    ANY OTHER KEY : quit",
                        self.source_name()
                    ),
                    Flow::Continue,
                    Flow::Abort,
                )?;
                if flow == Flow::Abort {
                    tracing::info!("Operator aborted the batch after {}", self.source_name());
                }
                Ok(Outcome::failed(flow))
            }
        }
    }
}

fn target_label(document: &SourceDocument) -> &str {
    document
        .destination_name()
        .rsplit_once('.')
        .map(|(_, extension)| extension)
        .unwrap_or("output")
}
