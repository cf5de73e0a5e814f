use crate::error::{CliError, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::Subscriber;
use tracing_subscriber::{Layer, filter::LevelFilter, fmt, prelude::*, registry::LookupSpan};

/// Maps `-v` counts to a level; `-q` lowers it to errors only.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn console_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
}

fn file_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
}

fn open_log_file(path: &Path) -> Result<File> {
    File::create(path).map_err(CliError::Io)
}

/// Installs the global subscriber: compact stderr output, plus a plain-text copy in
/// `log_file` when one is given.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let file = log_file.as_deref().map(open_log_file).transpose()?;

    tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(console_layer())
        .with(file.map(|f| file_layer(f)))
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tracing::{debug, error, trace, warn};

    fn capture_to_file(filter: LevelFilter, path: &Path, emit: impl FnOnce()) -> String {
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(file_layer(open_log_file(path).unwrap()));
        tracing::subscriber::with_default(subscriber, emit);
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn verbosity_maps_to_level_filters() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(9, false), LevelFilter::TRACE);
        assert_eq!(level_filter(3, true), LevelFilter::ERROR);
    }

    #[test]
    fn quiet_mode_keeps_errors_and_drops_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let content = capture_to_file(level_filter(0, true), &dir.path().join("quiet.log"), || {
            warn!("Reaction table defines 1 asymmetric pair(s)");
            error!("Command failed: unknown substance 'xyz'");
        });
        assert!(content.contains("unknown substance 'xyz'"));
        assert!(content.contains("ERROR"));
        assert!(!content.contains("asymmetric"));
    }

    #[test]
    fn debug_verbosity_writes_plain_text_without_trace() {
        let dir = tempfile::tempdir().unwrap();
        let content = capture_to_file(level_filter(2, false), &dir.path().join("debug.log"), || {
            debug!("Mixed 'Beaker': pH 6.00 (weak-acid-orange)");
            trace!(solution = "Beaker", "Recomputed solution pH");
        });
        assert!(content.contains("pH 6.00"));
        assert!(content.contains("DEBUG"));
        assert!(!content.contains("Recomputed"));
        assert!(!content.contains('\u{1b}'));
    }

    #[test]
    fn log_file_that_cannot_be_created_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(open_log_file(dir.path()), Err(CliError::Io(_))));
        let missing_parent = dir.path().join("no-such-dir").join("run.log");
        assert!(matches!(
            setup_logging(0, false, Some(missing_parent)),
            Err(CliError::Io(_))
        ));
    }

    #[test]
    #[serial]
    fn setup_logging_copies_events_to_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("elementa.log");
        setup_logging(1, false, Some(path.clone())).unwrap();

        tracing::info!("Placing [\"Na\", \"Cl\"] in the reaction zone.");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("reaction zone"));
        assert!(content.contains("elementa_cli::logging"));
    }
}
