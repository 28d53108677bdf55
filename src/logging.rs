use crate::error::LoggingError;
use env_logger::{Builder, Target};
use std::env;
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Where log records are written.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// Append to a file. Used while the TUI owns the terminal.
    File(&'a Path),
    Stderr,
}

/// Filter string in effect: `RUST_LOG` if set, else the configured level, else `info`.
pub fn effective_filter(configured: Option<&str>) -> String {
    env::var("RUST_LOG")
        .ok()
        .or_else(|| configured.map(str::to_string))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "info".to_string())
}

/// Builder with `filter` applied as `RUST_LOG` directives. Modules the
/// directives do not name stay at their defaults.
fn filtered_builder(filter: &str) -> Builder {
    let mut builder = Builder::new();
    builder.parse_filters(filter);
    builder
}

/// Installs the global `env_logger` backend.
pub fn init_logging(target: LogTarget<'_>, configured: Option<&str>) -> Result<(), LoggingError> {
    let mut builder = filtered_builder(&effective_filter(configured));

    match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
    }

    builder.try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, LevelFilter, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn module_directive_does_not_raise_other_crates() {
        let logger = filtered_builder("medichat=debug").build();
        assert!(enabled(&logger, "medichat::ui::app", Level::Debug));
        assert!(!enabled(&logger, "mio::poll", Level::Debug));
        assert!(!enabled(&logger, "crossterm::event", Level::Info));
    }

    #[test]
    fn bare_level_applies_everywhere() {
        let logger = filtered_builder("info").build();
        assert_eq!(logger.filter(), LevelFilter::Info);
        assert!(enabled(&logger, "crossterm::event", Level::Info));
        assert!(!enabled(&logger, "medichat", Level::Debug));
    }

    #[test]
    fn mixed_directives_keep_their_own_levels() {
        let logger = filtered_builder("warn,medichat=trace").build();
        assert!(enabled(&logger, "medichat::session", Level::Trace));
        assert!(enabled(&logger, "mio::poll", Level::Warn));
        assert!(!enabled(&logger, "mio::poll", Level::Info));
    }
}
