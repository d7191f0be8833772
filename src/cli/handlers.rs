use std::path::{Path, PathBuf};

use crate::cli::commands::Cli;
use crate::io::config_io::{config_dir, load_config};
use crate::io::recovery::{read_recovery_entries, recovery_log_path};
use crate::io::todo_io::{TodoFileError, load_todo_file};
use crate::ops::navigation::NavStack;

/// Error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("no todo file specified\n  Set TODOMD_FILE environment variable, or use -f/--file flag")]
    NoFile,
    #[error(transparent)]
    Load(#[from] TodoFileError),
    #[error("{0}")]
    Tui(String),
}

/// Entry point after argument parsing
pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    if cli.recovery {
        println!("{}", recovery_summary(&config_dir()));
        return Ok(());
    }

    let path = resolve_file(cli.file.as_deref())?;
    let file = load_todo_file(&path)?;
    let nav = return_stack(&cli.return_paths);
    let config = load_config();

    crate::tui::run(file, nav, config.ui, Some(config_dir()))
        .map_err(|e| CliError::Tui(e.to_string()))
}

/// The file to open, or a hint on how to name one
pub fn resolve_file(file: Option<&Path>) -> Result<PathBuf, CliError> {
    match file {
        Some(p) if !p.as_os_str().is_empty() => Ok(p.to_path_buf()),
        _ => Err(CliError::NoFile),
    }
}

/// Build the initial back stack, skipping paths that do not exist
pub fn return_stack(raw_paths: &[String]) -> NavStack {
    let mut paths = Vec::new();
    for raw in raw_paths {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let path = PathBuf::from(trimmed);
        if !path.exists() {
            eprintln!("warning: return path not found: {}", trimmed);
            continue;
        }
        paths.push(path);
    }
    NavStack::from_paths(paths)
}

/// Log location plus how many entries it holds
pub fn recovery_summary(log_dir: &Path) -> String {
    let count = read_recovery_entries(log_dir, None).len();
    let noun = if count == 1 { "entry" } else { "entries" };
    format!(
        "{} ({} {})",
        recovery_log_path(log_dir).display(),
        count,
        noun
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::recovery::{RecoveryCategory, RecoveryEntry, log_recovery};
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_an_error_with_hint() {
        let err = resolve_file(None).unwrap_err();
        assert!(err.to_string().contains("-f/--file"));
        assert!(matches!(
            resolve_file(Some(Path::new(""))),
            Err(CliError::NoFile)
        ));
        assert_eq!(
            resolve_file(Some(Path::new("todo.md"))).unwrap(),
            PathBuf::from("todo.md")
        );
    }

    #[test]
    fn return_stack_skips_missing_and_blank_paths() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.md");
        let b = tmp.path().join("b.md");
        std::fs::write(&a, "").unwrap();
        std::fs::write(&b, "").unwrap();

        let raw = vec![
            format!(" {} ", a.display()),
            String::new(),
            tmp.path().join("gone.md").display().to_string(),
            b.display().to_string(),
        ];
        let nav = return_stack(&raw);
        let paths: Vec<_> = nav.entries().iter().map(|e| e.path.clone()).collect();
        assert_eq!(paths, vec![a, b]);
        assert!(nav.entries().iter().all(|e| e.cursor == 0));
    }

    #[test]
    fn recovery_summary_counts_entries() {
        let tmp = TempDir::new().unwrap();
        assert!(recovery_summary(tmp.path()).ends_with("(0 entries)"));

        log_recovery(
            tmp.path(),
            RecoveryEntry::new(RecoveryCategory::Write, "save failed").body("- [ ] a\n"),
        );
        let summary = recovery_summary(tmp.path());
        assert!(summary.starts_with(&recovery_log_path(tmp.path()).display().to_string()));
        assert!(summary.ends_with("(1 entry)"));
    }
}
