use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "REMOCON_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs to a file. The TUI owns the terminal, so nothing may be written to it.
pub fn init_file(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("remocon.log"))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

/// File logging for the TUI. Failing to open the log is not fatal: the
/// remote keeps running without logs. Returns whether logging is on.
pub fn init_tui(dir: Option<&Path>) -> bool {
    let Some(dir) = dir else {
        return false;
    };
    match init_file(dir) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("warning: logging disabled, cannot open {}: {e:#}", dir.display());
            false
        }
    }
}

pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_log_dir_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("remocon");
        std::fs::write(&blocker, "not a directory").unwrap();

        assert!(init_file(&blocker).is_err());
        assert!(!init_tui(Some(&blocker)));
        assert!(!init_tui(None));
    }
}
