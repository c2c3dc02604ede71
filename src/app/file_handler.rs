//! File system helpers for the driver: checking and opening graph files,
//! and writing the final report.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Error as IoError, Write};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;
use crate::graph::GraphReader;

/// Checks that `graph_file_path` exists and is a regular file.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is missing or not a file.
pub fn validate_graph_file(graph_file_path: &Path, quiet_mode: bool) -> Result<(), AppError> {
    if !graph_file_path.exists() {
        let error_msg = format!("File not found: {}", graph_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !graph_file_path.is_file() {
        let error_msg = format!("Path is not a file: {}", graph_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    Ok(())
}

/// Opens a graph file for reading descriptions one after another.
///
/// # Errors
/// Returns an `IoError` if the file cannot be opened.
pub fn open_graph_file(graph_file_path: &Path) -> Result<GraphReader<BufReader<File>>, IoError> {
    let file = File::open(graph_file_path)?;
    Ok(GraphReader::new(BufReader::new(file)))
}

/// Writes string content to a specified file, creating or overwriting it.
///
/// # Errors
/// Returns an `IoError` if any file operation (opening, writing, flushing) fails.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}
