use crate::core::prompt::prompt_choice;
use crate::domain::ports::Terminal;
use crate::utils::error::Result;

/// 逐一詢問每個候選檔案是否加入，回傳依原順序挑選的檔名
pub fn choose_multiple<T: Terminal + ?Sized>(
    terminal: &mut T,
    candidates: &[String],
) -> Result<Vec<String>> {
    let mut chosen = Vec::new();

    for (index, name) in candidates.iter().enumerate() {
        terminal.clear()?;
        let selected = prompt_choice(
            terminal,
            &format!(
                "Select files to convert ({}/{})\n\n    ENTER : select {}\n    ANY OTHER KEY : skip",
                index + 1,
                candidates.len(),
                name
            ),
            true,
            false,
        )?;
        if selected {
            chosen.push(name.clone());
        }
    }

    tracing::debug!("Selected {} of {} files", chosen.len(), candidates.len());
    Ok(chosen)
}
