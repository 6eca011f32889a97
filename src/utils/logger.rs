use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 未設定 RUST_LOG 時使用的過濾規則；verbose 優先於設定檔的 log_level
pub fn level_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    match (verbose, level) {
        (true, _) => EnvFilter::new("enrollment_stats=debug,info"),
        (false, Some(level)) => EnvFilter::new(format!("enrollment_stats={}", level)),
        (false, None) => EnvFilter::new("enrollment_stats=info"),
    }
}

fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(verbose, level))
}

pub fn init_cli_logger(verbose: bool) {
    init_cli_logger_with_level(verbose, None);
}

pub fn init_cli_logger_with_level(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(default_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// 給需要機器解析日誌的環境使用
pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(default_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(filter: EnvFilter) -> String {
        filter.to_string().to_lowercase()
    }

    #[test]
    fn test_level_filter_uses_configured_level() {
        assert_eq!(rendered(level_filter(false, Some("warn"))), "enrollment_stats=warn");
        assert_eq!(rendered(level_filter(false, Some("error"))), "enrollment_stats=error");
        assert_eq!(rendered(level_filter(false, None)), "enrollment_stats=info");
    }

    #[test]
    fn test_verbose_overrides_configured_level() {
        assert!(rendered(level_filter(true, Some("error"))).contains("enrollment_stats=debug"));
    }
}
