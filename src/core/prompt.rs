use crate::domain::ports::{KeyPress, Terminal};
use crate::utils::error::Result;

/// 顯示訊息並等待單一按鍵：Enter 對應 `on_enter`，其他任何按鍵對應 `on_other`
pub fn prompt_choice<T, V>(terminal: &mut T, message: &str, on_enter: V, on_other: V) -> Result<V>
where
    T: Terminal + ?Sized,
{
    terminal.print(message)?;
    let key = terminal.read_key()?;
    tracing::debug!("Key pressed: {:?}", key);
    Ok(match key {
        KeyPress::Enter => on_enter,
        KeyPress::Other => on_other,
    })
}
