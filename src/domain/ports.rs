use crate::domain::model::{RenderStatus, SourceDocument};
use crate::utils::error::Result;

/// 單鍵輸入的兩種結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Enter,
    Other,
}

/// 互動終端：清畫面、輸出文字、阻塞讀取單一按鍵
pub trait Terminal {
    fn clear(&mut self) -> Result<()>;
    fn print(&mut self, text: &str) -> Result<()>;
    fn read_key(&mut self) -> Result<KeyPress>;
}

/// 外部轉換工具。只有無法啟動時才回傳 Err，非零結束碼以 `RenderStatus::Failed` 表示
pub trait Renderer {
    fn render(&self, document: &SourceDocument) -> Result<RenderStatus>;
}

/// 以系統預設程式開啟輸出檔，不等待結束
pub trait Viewer {
    fn open(&self, path: &str);
}

pub trait ConfigProvider {
    fn directory(&self) -> &str;
    fn pandoc_program(&self) -> &str;
    fn input_format(&self) -> &str;
    fn template(&self) -> &str;
    fn highlight_style(&self) -> &str;
    fn source_extension(&self) -> &str;
    fn target_extension(&self) -> &str;
    fn viewer_program(&self) -> Option<&str>;
    fn echo_contents(&self) -> bool;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn print(&mut self, text: &str) -> Result<()> {
        (**self).print(text)
    }

    fn read_key(&mut self) -> Result<KeyPress> {
        (**self).read_key()
    }
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(&self, document: &SourceDocument) -> Result<RenderStatus> {
        (**self).render(document)
    }
}

impl<V: Viewer + ?Sized> Viewer for &V {
    fn open(&self, path: &str) {
        (**self).open(path)
    }
}
