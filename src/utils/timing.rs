use std::time::{Duration, Instant};

/// 執行 `f` 並回傳結果與耗時
pub fn timed<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// 執行 `f`，以 debug 等級記錄 `label` 的耗時後回傳結果
pub fn time_it<T, F>(label: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let (value, elapsed) = timed(f);
    tracing::debug!("⏱️ {} took {:?}", label, elapsed);
    value
}
