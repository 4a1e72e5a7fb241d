use crate::domain::model::ConversionLedger;

/// 結束時的摘要；來源檔名依最長者靠右對齊
pub fn render_summary(ledger: &ConversionLedger, directory: &str, extension: &str) -> String {
    if ledger.is_empty() {
        return format!("No {} files were converted.\n", extension);
    }

    let width = ledger
        .iter()
        .map(|(source, _)| source.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!("Finished processing all {} files in {}.\n\n", extension, directory);
    for (source, destination) in ledger.iter() {
        out.push_str(&format!("    {:>width$} ----> {}\n", source, destination, width = width));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let ledger = ConversionLedger::new();
        assert_eq!(render_summary(&ledger, "/docs", "md"), "No md files were converted.\n");
    }

    #[test]
    fn test_summary_right_aligns_sources() {
        let mut ledger = ConversionLedger::new();
        ledger.record("a.md", "a.pdf");
        ledger.record("longer.md", "longer.pdf");

        let summary = render_summary(&ledger, "/docs", "md");

        assert_eq!(
            summary,
            "Finished processing all md files in /docs.\n\n         a.md ----> a.pdf\n    longer.md ----> longer.pdf\n"
        );
    }
}
