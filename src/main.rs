use anyhow::Context;
use clap::Parser;
use mdconvert::adapters::require_tool;
use mdconvert::domain::ports::ConfigProvider;
use mdconvert::utils::error::ErrorSeverity;
use mdconvert::utils::{logger, validation::Validate};
use mdconvert::{
    scan_directory, BatchOrchestrator, CliConfig, ConvertError, CrosstermTerminal,
    PandocRenderer, Settings, SystemViewer,
};

fn main() {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting mdconvert");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            let exit_code = match e.downcast_ref::<ConvertError>() {
                Some(err) => report_error(err),
                None => {
                    tracing::error!("❌ {:#}", e);
                    eprintln!("❌ {:#}", e);
                    1
                }
            };
            std::process::exit(exit_code);
        }
    }
}

fn run(args: &CliConfig) -> anyhow::Result<()> {
    let settings = Settings::load(args)?;
    settings.validate()?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let pandoc_path = require_tool(settings.pandoc_program())?;
    tracing::info!("🔧 Using {}", pandoc_path.display());

    let context = scan_directory(settings.directory(), settings.source_extension())
        .with_context(|| format!("scanning {}", settings.directory()))?;

    let renderer = PandocRenderer::from_config(&settings);
    let viewer = SystemViewer::from_config(&settings);
    let mut orchestrator =
        BatchOrchestrator::new(context, CrosstermTerminal::new(), renderer, viewer)
            .configure(&settings);

    let report = orchestrator.run()?;

    if report.cancelled {
        tracing::info!("Batch cancelled by operator; {} file(s) converted", report.converted.len());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(ConvertError::from)?;
        println!("{}", json);
    }

    Ok(())
}

/// 記錄錯誤並依嚴重程度回傳結束碼
fn report_error(e: &ConvertError) -> i32 {
    tracing::error!(
        "❌ mdconvert failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    match (e, e.severity()) {
        (ConvertError::Interrupted, _) => 130,
        (_, ErrorSeverity::Low) | (_, ErrorSeverity::High) => 1,
        (_, ErrorSeverity::Medium) => 2,
        (_, ErrorSeverity::Critical) => 3,
    }
}
