use crate::config::get_config;
use crate::errors::{CadenciaError, CadenciaResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};

/// Starts file logging under `~/.config/cadencia/logs/`. The TUI owns the
/// terminal, so nothing may log to stdout/stderr while it runs. The returned
/// handle must stay alive for the duration of the program.
pub fn init() -> CadenciaResult<LoggerHandle> {
    let config = get_config();

    let log_dir = dirs::home_dir()
        .ok_or_else(|| CadenciaError::config_error("Could not determine home directory"))?
        .join(".config")
        .join("cadencia")
        .join("logs");

    Logger::try_with_str(&config.log_level)
        .map_err(|e| CadenciaError::config_error(format!("Invalid log level: {e}")))?
        .log_to_file(FileSpec::default().directory(log_dir).basename("cadencia"))
        .write_mode(WriteMode::BufferAndFlush)
        .start()
        .map_err(|e| CadenciaError::config_error(format!("Failed to start logger: {e}")))
}
