// src/logging.rs
use crate::errors::LoggingError;
use log::LevelFilter;
use std::path::Path;

pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    level.trim().parse::<LevelFilter>().map_err(|_| LoggingError::UnknownLevel(level.to_string()))
}

/// Sends `log` records to `log_file`. Nothing is opened when the level is `off`.
pub fn init_logging<P: AsRef<Path>>(log_file: P, level: &str) -> Result<(), LoggingError> {
    let level = parse_level(level)?;
    if level == LevelFilter::Off {
        return Ok(());
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(fern::log_file(log_file)?)
        .apply()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("WARN").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
    }

    #[test]
    fn test_unknown_level() {
        assert!(matches!(parse_level("loud"), Err(LoggingError::UnknownLevel(_))));
    }

    #[test]
    fn test_off_skips_the_log_file() {
        let path = std::env::temp_dir().join("podshelf-logging-off-test.log");
        let _ = std::fs::remove_file(&path);
        init_logging(&path, "off").unwrap();
        assert!(!path.exists());
    }
}
