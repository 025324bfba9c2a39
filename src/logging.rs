use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, opt_format,
};

use crate::config::LoggingConfig;

/// Log to rotating files. Used while the TUI owns the terminal.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn setup_file_logging(config: &LoggingConfig) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(&config.level)?
        .log_to_file(
            FileSpec::default()
                .directory(&config.directory)
                .basename("connect-four"),
        )
        .format(opt_format)
        .rotate(
            Criterion::Size(1024 * 1024),
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()
}

/// Log to stderr, leaving stdout for replay output.
pub fn setup_stderr_logging(config: &LoggingConfig) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(&config.level)?
        .format(flexi_logger::colored_default_format)
        .start()
}
