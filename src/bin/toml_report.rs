use anyhow::Context;
use clap::Parser;
use enrollment_stats::core::ConfigProvider;
use enrollment_stats::utils::{logger, validation::Validate};
use enrollment_stats::{LocalStorage, ReportEngine, ReportPipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Enrollment report driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "report-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Override the input file from config
    #[arg(long)]
    input: Option<String>,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Validate the configuration and input without writing any output
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    // 應用命令列覆蓋設定
    if let Some(input) = args.input {
        config.source.path = input;
    }
    if let Some(monitor) = args.monitor {
        config.set_monitoring_enabled(monitor);
    }

    config.validate().map_err(|e| {
        anyhow::anyhow!("{} ({})", e.user_friendly_message(), e.recovery_suggestion())
    })?;

    if args.json_logs {
        logger::init_json_logger(args.verbose, config.log_level());
    } else {
        logger::init_cli_logger_with_level(args.verbose, config.log_level());
    }

    tracing::info!("📁 Loaded configuration '{}' from {}", config.report.name, args.config);

    display_config_summary(&config);

    let monitor_enabled = config.monitoring_enabled();
    if monitor_enabled {
        tracing::info!("🔍 Monitoring enabled");
    }

    let pipeline = ReportPipeline::new(LocalStorage::new("."), config);

    if args.dry_run {
        use enrollment_stats::core::Pipeline;

        tracing::info!("🔍 DRY RUN MODE - no report files will be written");
        let courses = pipeline.extract().await.context("Failed to read course snapshots")?;
        let result = pipeline.transform(courses).await?;
        println!(
            "Would report {} courses ({} full, {} limited, {} available)",
            result.summary.total_courses,
            result.summary.full_courses,
            result.summary.limited_courses,
            result.summary.available_courses
        );
        return Ok(());
    }

    let output_path = ReportEngine::new_with_monitoring(pipeline, monitor_enabled)
        .run()
        .await
        .context("Enrollment report failed")?;

    println!("✅ Enrollment report completed");
    println!("📁 Output saved to: {}", output_path);
    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Report: {}", config.report.name);
    if let Some(description) = &config.report.description {
        tracing::info!("   {}", description);
    }
    tracing::info!("   Input: {}", config.input_path());
    tracing::info!("   Output: {} ({})", config.output_path(), config.output_formats().join(", "));

    let filter = config.category_filter().unwrap_or_default();
    if !filter.is_empty() {
        let labels: Vec<&str> = filter.iter().map(|c| c.label()).collect();
        tracing::info!("   Categories: {}", labels.join(", "));
    }
}
