//! File I/O utilities for the line-oriented ledger file
//!
//! Every helper opens its own handle and drops it before returning, on the
//! error path as well. Rewrites go through a temp file and a rename so the
//! ledger is either fully replaced or left untouched.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::LedgerError;

/// Create an empty file at `path` if nothing exists there yet
///
/// The parent directory must already exist; it is not created here.
pub fn ensure_file<P: AsRef<Path>>(path: P) -> Result<(), LedgerError> {
    let path = path.as_ref();

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    Ok(())
}

/// Read all lines, each keeping its trailing newline
///
/// A final line without a newline is returned as-is. The file must exist.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LedgerError> {
    let path = path.as_ref();

    let mut file = File::open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| LedgerError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(contents.split_inclusive('\n').map(str::to_string).collect())
}

/// Append a single line to the end of the file
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<(), LedgerError> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    file.write_all(line.as_bytes())
        .map_err(|e| LedgerError::Io(format!("Failed to append to {}: {}", path.display(), e)))?;

    file.flush()
        .map_err(|e| LedgerError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Replace the file contents with `lines` atomically (write to temp, then rename)
pub fn write_lines_atomic<P, S>(path: P, lines: &[S]) -> Result<(), LedgerError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();

    // Same directory as the target, rename is only atomic within a filesystem
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writer
            .write_all(line.as_ref().as_bytes())
            .map_err(|e| LedgerError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
