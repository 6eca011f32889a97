use clap::Parser;
use enrollment_stats::utils::{logger, validation::Validate};
use enrollment_stats::{CliConfig, LocalStorage, ReportEngine, ReportPipeline};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting enrollment-stats CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 Monitoring enabled");
    }

    let pipeline = ReportPipeline::new(LocalStorage::new("."), config);
    let engine = ReportEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Enrollment report completed");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
