use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::io::recovery::atomic_write;
use crate::model::todo_file::TodoFile;

/// Error type for reading and writing todo files
#[derive(Debug, thiserror::Error)]
pub enum TodoFileError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Read and parse a markdown file
pub fn load_todo_file(path: &Path) -> Result<TodoFile, TodoFileError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            TodoFileError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            TodoFileError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    Ok(TodoFile::from_content(path, &content))
}

/// Write the whole line buffer back to the file's path atomically
pub fn save_todo_file(file: &TodoFile) -> Result<(), TodoFileError> {
    atomic_write(&file.path, file.content().as_bytes()).map_err(|e| TodoFileError::Write {
        path: file.path.clone(),
        source: e,
    })
}
