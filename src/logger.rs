use color_eyre::eyre::Result;
use log::LevelFilter;
use tui_logger::{init_logger, set_default_level, set_log_file, TuiLoggerFile};

pub fn setup_logger() -> Result<()> {
    init_logger(LevelFilter::Trace)?;
    set_default_level(LevelFilter::Debug);

    const LOG_FILE: &str = concat!(env!("CARGO_PKG_NAME"), ".log");
    set_log_file(TuiLoggerFile::new(LOG_FILE));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The one place allowed to install the global logger; keep it that way.
    #[test]
    fn logger_initializes_with_file_sink() {
        assert!(setup_logger().is_ok());
    }
}
