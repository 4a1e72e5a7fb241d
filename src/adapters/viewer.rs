use crate::domain::ports::{ConfigProvider, Viewer};
use std::process::{Command, Stdio};

#[derive(Debug, Clone, Default)]
pub struct SystemViewer {
    program: Option<String>,
}

impl SystemViewer {
    pub fn new(program: Option<String>) -> Self {
        Self { program }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.viewer_program().map(str::to_string))
    }

    /// 回傳要執行的程式與參數
    pub fn command_line(&self, path: &str) -> (String, Vec<String>) {
        if let Some(program) = &self.program {
            return (program.clone(), vec![path.to_string()]);
        }

        if cfg!(target_os = "macos") {
            ("open".to_string(), vec!["-g".to_string(), path.to_string()])
        } else if cfg!(target_os = "windows") {
            (
                "cmd".to_string(),
                vec![
                    "/C".to_string(),
                    "start".to_string(),
                    String::new(),
                    path.to_string(),
                ],
            )
        } else {
            ("xdg-open".to_string(), vec![path.to_string()])
        }
    }
}

impl Viewer for SystemViewer {
    fn open(&self, path: &str) {
        let (program, args) = self.command_line(path);
        tracing::debug!("Opening {} with {} {:?}", path, program, args);

        let spawned = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        if let Err(e) = spawned {
            tracing::warn!("Failed to open {} with {}: {}", path, program, e);
        }
    }
}
