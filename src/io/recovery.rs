use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Header written at the top of a new recovery log.
const FILE_HEADER: &str = "\
<!-- todomd recovery log: content todomd could not save normally.
     Entries are appended, newest last. Safe to delete. -->

---
";

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// Category of a recovery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryCategory {
    /// A save failed; the body holds the content that was not written
    Write,
    /// A linked file failed to load during navigation
    Load,
}

impl fmt::Display for RecoveryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryCategory::Write => write!(f, "write"),
            RecoveryCategory::Load => write!(f, "load"),
        }
    }
}

impl RecoveryCategory {
    pub fn parse_category(s: &str) -> Option<Self> {
        match s {
            "write" => Some(RecoveryCategory::Write),
            "load" => Some(RecoveryCategory::Load),
            _ => None,
        }
    }
}

/// A single entry in the recovery log.
#[derive(Debug, Clone)]
pub struct RecoveryEntry {
    pub timestamp: DateTime<Utc>,
    pub category: RecoveryCategory,
    pub description: String,
    pub fields: Vec<(String, String)>,
    pub body: String,
}

/// Return the path to the recovery log file.
pub fn recovery_log_path(log_dir: &Path) -> PathBuf {
    log_dir.join("recovery.log")
}

// ---------------------------------------------------------------------------
// Atomic file write
// ---------------------------------------------------------------------------

/// Sibling temp path used by [`atomic_write`]: `<path>.tmp`
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write `content` to `<path>.tmp`, then rename it over `path`.
///
/// If the rename fails the temp file is removed and `path` is left as it was.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let tmp = temp_path(path);
    fs::write(&tmp, content)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry formatting
// ---------------------------------------------------------------------------

impl RecoveryEntry {
    pub fn new(category: RecoveryCategory, description: impl Into<String>) -> Self {
        RecoveryEntry {
            timestamp: Utc::now(),
            category,
            description: description.into(),
            fields: Vec::new(),
            body: String::new(),
        }
    }

    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields.push((key.to_string(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Format this entry as a markdown block for the recovery log.
    fn to_markdown(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "## {} {}: {}\n",
            self.timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            self.category,
            self.description,
        ));
        out.push('\n');

        for (key, value) in &self.fields {
            out.push_str(&format!("{}: {}\n", key, value));
        }

        if !self.body.is_empty() {
            out.push('\n');
            out.push_str("````text\n");
            out.push_str(&self.body);
            if !self.body.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("````\n");
        }

        out.push('\n');
        out.push_str("---\n");
        out
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Append a recovery entry to the log. Errors are swallowed and printed to stderr.
pub fn log_recovery(log_dir: &Path, entry: RecoveryEntry) {
    if let Err(e) = log_recovery_inner(log_dir, entry) {
        eprintln!("warning: could not write to recovery log: {}", e);
    }
}

fn log_recovery_inner(log_dir: &Path, entry: RecoveryEntry) -> io::Result<()> {
    fs::create_dir_all(log_dir)?;
    let path = recovery_log_path(log_dir);

    let needs_header = fs::metadata(&path).map_or(true, |m| m.len() == 0);

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    if needs_header {
        file.write_all(FILE_HEADER.as_bytes())?;
    }
    file.write_all(entry.to_markdown().as_bytes())?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Reading entries
// ---------------------------------------------------------------------------

/// Read recovery entries, most recent first, keeping at most `limit`.
pub fn read_recovery_entries(log_dir: &Path, limit: Option<usize>) -> Vec<RecoveryEntry> {
    let content = match fs::read_to_string(recovery_log_path(log_dir)) {
        Ok(c) => c,
        Err(_) => return Vec::new(),
    };

    let mut entries = parse_entries(&content);
    if let Some(n) = limit {
        let skip = entries.len().saturating_sub(n);
        entries.drain(..skip);
    }
    entries.reverse();
    entries
}

/// Parse all entries from the log content, oldest first.
fn parse_entries(content: &str) -> Vec<RecoveryEntry> {
    let mut entries = Vec::new();
    let mut lines = content.lines();

    while let Some(line) = lines.next() {
        let Some(header) = line.strip_prefix("## ") else {
            continue;
        };
        let Some((timestamp, category, description)) = parse_entry_header(header) else {
            continue;
        };

        let mut fields = Vec::new();
        let mut body_lines: Vec<&str> = Vec::new();
        let mut in_code_block = false;

        for line in lines.by_ref() {
            if in_code_block {
                if line == "````" {
                    in_code_block = false;
                } else {
                    body_lines.push(line);
                }
                continue;
            }
            if line == "---" {
                break;
            }
            if line.starts_with("````") {
                in_code_block = true;
                continue;
            }
            if let Some((key, value)) = line.trim().split_once(": ") {
                fields.push((key.to_string(), value.to_string()));
            }
        }

        entries.push(RecoveryEntry {
            timestamp,
            category,
            description,
            fields,
            body: body_lines.join("\n"),
        });
    }

    entries
}

/// Parse an entry header: `<timestamp> <category>: <description>`
fn parse_entry_header(header: &str) -> Option<(DateTime<Utc>, RecoveryCategory, String)> {
    let (timestamp_str, rest) = header.split_once(' ')?;
    let timestamp = DateTime::parse_from_rfc3339(timestamp_str)
        .ok()?
        .with_timezone(&Utc);
    let (category_str, description) = rest.split_once(": ")?;
    let category = RecoveryCategory::parse_category(category_str)?;
    Some((timestamp, category, description.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_replaces_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("list.md");
        fs::write(&path, "old").unwrap();

        atomic_write(&path, b"new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn atomic_write_failure_leaves_original() {
        let tmp = TempDir::new().unwrap();
        // A directory in place of the target makes the rename fail
        let path = tmp.path().join("dir.md");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        assert!(atomic_write(&path, b"content").is_err());
        assert!(path.is_dir());
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn temp_path_appends_suffix() {
        assert_eq!(
            temp_path(Path::new("/a/b/list.md")),
            PathBuf::from("/a/b/list.md.tmp")
        );
    }

    #[test]
    fn log_and_read_round_trip() {
        let tmp = TempDir::new().unwrap();
        log_recovery(
            tmp.path(),
            RecoveryEntry::new(RecoveryCategory::Write, "save failed")
                .field("Target", "/x/list.md")
                .field("Error", "permission denied")
                .body("# List\n- [ ] a\n"),
        );
        log_recovery(
            tmp.path(),
            RecoveryEntry::new(RecoveryCategory::Load, "link failed").field("Target", "b.md"),
        );

        let content = fs::read_to_string(recovery_log_path(tmp.path())).unwrap();
        assert!(content.starts_with("<!-- todomd recovery log"));

        let entries = read_recovery_entries(tmp.path(), None);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].category, RecoveryCategory::Load);
        assert_eq!(entries[1].category, RecoveryCategory::Write);
        assert_eq!(entries[1].description, "save failed");
        assert_eq!(
            entries[1].fields,
            vec![
                ("Target".to_string(), "/x/list.md".to_string()),
                ("Error".to_string(), "permission denied".to_string()),
            ]
        );
        assert_eq!(entries[1].body, "# List\n- [ ] a");
    }

    #[test]
    fn body_with_code_fence_survives() {
        let tmp = TempDir::new().unwrap();
        log_recovery(
            tmp.path(),
            RecoveryEntry::new(RecoveryCategory::Write, "save failed")
                .body("```\n---\n```"),
        );
        let entries = read_recovery_entries(tmp.path(), None);
        assert_eq!(entries[0].body, "```\n---\n```");
    }

    #[test]
    fn read_with_limit_keeps_newest() {
        let tmp = TempDir::new().unwrap();
        for i in 0..4 {
            log_recovery(
                tmp.path(),
                RecoveryEntry::new(RecoveryCategory::Write, format!("entry {}", i)),
            );
        }
        let entries = read_recovery_entries(tmp.path(), Some(2));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description, "entry 3");
        assert_eq!(entries[1].description, "entry 2");
    }

    #[test]
    fn read_missing_log_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(read_recovery_entries(tmp.path(), None).is_empty());
    }

    #[test]
    fn category_round_trip() {
        for cat in [RecoveryCategory::Write, RecoveryCategory::Load] {
            assert_eq!(RecoveryCategory::parse_category(&cat.to_string()), Some(cat));
        }
        assert_eq!(RecoveryCategory::parse_category("bogus"), None);
    }
}
