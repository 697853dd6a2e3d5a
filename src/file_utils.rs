use anyhow::{Result, Context};
use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::errors::AppError;

// @module: File and directory utilities

/// Directory holding the secondary-language trees
pub const LOCALES_DIR: &str = "locales";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, AppError> {
        let path = path.as_ref();
        fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.display().to_string(),
            source,
        })
    }

    /// Write a string to a file.
    ///
    /// The content is written to a temporary file next to the destination
    /// and then moved over it, so the destination is either replaced
    /// entirely or left untouched.
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), AppError> {
        let path = path.as_ref();
        let write_error = |source: io::Error| AppError::Write {
            path: path.display().to_string(),
            source,
        };

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Self::ensure_dir(parent).map_err(write_error)?;

        let mut temp = NamedTempFile::new_in(parent).map_err(write_error)?;
        temp.write_all(content.as_bytes()).map_err(write_error)?;
        temp.persist(path).map_err(|e| write_error(e.error))?;

        Ok(())
    }

    /// Find markdown files below a directory, skipping any `locales` tree
    pub fn find_markdown_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        let walker = WalkDir::new(dir.as_ref())
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != LOCALES_DIR);

        for entry in walker {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case("md") {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Output paths of both editions for a source file at `relative` below the source root.
    ///
    /// The primary edition mirrors the source tree under `output_root`, the
    /// secondary edition lives under `output_root/locales/<locale_tag>/`.
    pub fn edition_paths<P1: AsRef<Path>, P2: AsRef<Path>>(
        output_root: P1,
        relative: P2,
        locale_tag: &str,
    ) -> (PathBuf, PathBuf) {
        let output_root = output_root.as_ref();
        let relative = relative.as_ref();
        (
            output_root.join(relative),
            output_root.join(LOCALES_DIR).join(locale_tag).join(relative),
        )
    }

    /// Relative markdown link from the document at `from_file` to `to_file`.
    ///
    /// Purely lexical: neither file needs to exist.
    pub fn relative_link<P1: AsRef<Path>, P2: AsRef<Path>>(from_file: P1, to_file: P2) -> String {
        let from_file = from_file.as_ref();
        let to_file = to_file.as_ref();

        // Leading `..` only resolves against the working directory
        let escapes_base = |path: &Path| normalize_components(path).first().is_some_and(|c| c == "..");
        let anchored = from_file.is_absolute() != to_file.is_absolute()
            || escapes_base(from_file)
            || escapes_base(to_file);

        let (from_file, to_file) = if !anchored {
            (from_file.to_path_buf(), to_file.to_path_buf())
        } else {
            (
                std::path::absolute(from_file).unwrap_or_else(|_| from_file.to_path_buf()),
                std::path::absolute(to_file).unwrap_or_else(|_| to_file.to_path_buf()),
            )
        };

        let from_dir = normalize_components(from_file.parent().unwrap_or(Path::new("")));
        let target = normalize_components(&to_file);

        let common = from_dir
            .iter()
            .zip(target.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut parts: Vec<String> = vec!["..".to_string(); from_dir.len() - common];
        parts.extend(target[common..].iter().cloned());
        parts.join("/")
    }
}

// @normalizes: Path into components with `.` and resolvable `..` removed
fn normalize_components(path: &Path) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().map(String::as_str) {
                Some("..") | None => parts.push("..".to_string()),
                // `/..` is still `/`
                Some("/") => {}
                Some(_) => {
                    parts.pop();
                }
            },
            other => parts.push(other.as_os_str().to_string_lossy().into_owned()),
        }
    }
    parts
}
