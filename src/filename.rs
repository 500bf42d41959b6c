//! Filename sanitization, suffix inspection, and byte-accurate truncation
//!
//! This module treats a filename as a stem followed by a suffix run (the
//! concatenation of all trailing dot-separated extensions, e.g. `.tar.gz`).
//! Truncation preserves the suffix run and never splits a multi-byte character.

use crate::error::{PathError, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Conventional filename byte budget (ext4 and most other filesystems)
pub const MAX_FILENAME_BYTES: usize = 255;

/// Replacement string used by [`sanitize_filename`]
pub const DEFAULT_REPLACEMENT: &str = "_";

/// Characters that are reserved in filenames on at least one major OS
const RESERVED_CHARS: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Replace OS-reserved characters in a filename with `_`
///
/// The same character set is replaced regardless of the target operating
/// system, so the result is portable across Windows, Linux, and macOS.
/// Sanitizing an already-sanitized string returns it unchanged.
///
/// # Examples
/// ```
/// use path_prep::sanitize_filename;
///
/// assert_eq!(sanitize_filename("file?name"), "file_name");
/// assert_eq!(sanitize_filename("a/b\\c"), "a_b_c");
/// assert_eq!(sanitize_filename("already_clean.txt"), "already_clean.txt");
/// ```
pub fn sanitize_filename(text: &str) -> String {
    sanitize_filename_with(text, DEFAULT_REPLACEMENT)
}

/// Replace OS-reserved characters in a filename with a custom replacement
///
/// # Examples
/// ```
/// use path_prep::sanitize_filename_with;
///
/// assert_eq!(sanitize_filename_with("a:b", "-"), "a-b");
/// assert_eq!(sanitize_filename_with("a|b", ""), "ab");
/// ```
pub fn sanitize_filename_with(text: &str, replacement: &str) -> String {
    let mut sanitized = String::with_capacity(text.len());
    for c in text.chars() {
        if RESERVED_CHARS.contains(&c) {
            sanitized.push_str(replacement);
        } else {
            sanitized.push(c);
        }
    }
    sanitized
}

/// Return the ordered suffixes of a path's filename, each with its leading dot
///
/// Leading dots of hidden files do not start a suffix, and a filename ending
/// in a bare dot has no suffixes.
///
/// # Examples
/// ```
/// use path_prep::suffixes;
///
/// assert_eq!(suffixes("archive.tar.gz"), vec![".tar", ".gz"]);
/// assert_eq!(suffixes("notes.txt"), vec![".txt"]);
/// assert!(suffixes(".hidden").is_empty());
/// assert!(suffixes("plain").is_empty());
/// ```
pub fn suffixes<P: AsRef<Path>>(path: P) -> Vec<String> {
    let name = match path.as_ref().file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return Vec::new(),
    };
    if name.ends_with('.') {
        return Vec::new();
    }
    name.trim_start_matches('.')
        .split('.')
        .skip(1)
        .map(|part| format!(".{part}"))
        .collect()
}

/// Return the final suffix of a path's filename, or an empty string
///
/// # Examples
/// ```
/// use path_prep::suffix;
///
/// assert_eq!(suffix("archive.tar.gz"), ".gz");
/// assert_eq!(suffix("plain"), "");
/// ```
pub fn suffix<P: AsRef<Path>>(path: P) -> String {
    suffixes(path).pop().unwrap_or_default()
}

/// Return the concatenated suffix run of a path's filename
///
/// # Examples
/// ```
/// use path_prep::suffix_run;
///
/// assert_eq!(suffix_run("archive.tar.gz"), ".tar.gz");
/// assert_eq!(suffix_run("plain"), "");
/// ```
pub fn suffix_run<P: AsRef<Path>>(path: P) -> String {
    suffixes(path).concat()
}

/// Replace the final suffix of a path, or append one if there is none
///
/// The suffix argument carries its leading dot, e.g. `".txt"`. An empty
/// suffix removes the final suffix.
///
/// # Errors
/// Returns [`PathError::InvalidArguments`] for a non-empty suffix that does
/// not start with a dot, and for a bare `"."` — a dotless suffix would be
/// glued onto the stem instead of replacing anything.
///
/// # Examples
/// ```
/// use path_prep::with_suffix;
/// use std::path::PathBuf;
///
/// assert_eq!(with_suffix("notes.md", ".txt").unwrap(), PathBuf::from("notes.txt"));
/// assert_eq!(with_suffix("notes", ".txt").unwrap(), PathBuf::from("notes.txt"));
/// assert_eq!(with_suffix("archive.tar.gz", ".bz2").unwrap(), PathBuf::from("archive.tar.bz2"));
/// assert!(with_suffix("notes.md", "txt").is_err());
/// ```
pub fn with_suffix<P: AsRef<Path>>(path: P, new_suffix: &str) -> Result<PathBuf> {
    if new_suffix == "." || (!new_suffix.is_empty() && !new_suffix.starts_with('.')) {
        return Err(PathError::InvalidArguments {
            message: format!("invalid suffix '{new_suffix}', expected '.<extension>' or empty"),
        });
    }
    let path = path.as_ref();
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return Ok(path.to_path_buf()),
    };
    let current = suffix(path);
    let stem = name.strip_suffix(current.as_str()).unwrap_or(&name);
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(parent.join(format!("{stem}{new_suffix}")))
}

/// Truncate a path's filename so it fits within a byte budget
///
/// The suffix run is always preserved in full; only the stem is shortened,
/// one whole character at a time, so the result is valid UTF-8 and never
/// splits a multi-byte character. Non-ASCII stems may therefore lose more
/// bytes than the strict minimum. A filename that already fits is returned
/// unchanged, and an empty stem after trimming is permitted.
///
/// # Errors
/// Returns [`PathError::TruncationImpossible`] when the suffix run alone
/// occupies the whole budget, leaving no room for any stem content.
///
/// # Examples
/// ```
/// use path_prep::{truncate_filename, MAX_FILENAME_BYTES};
/// use std::path::PathBuf;
///
/// let short = truncate_filename("notes.txt", MAX_FILENAME_BYTES).unwrap();
/// assert_eq!(short, PathBuf::from("notes.txt"));
///
/// let long = format!("{}.tar.gz", "a".repeat(260));
/// let truncated = truncate_filename(&long, MAX_FILENAME_BYTES).unwrap();
/// assert_eq!(truncated, PathBuf::from(format!("{}.tar.gz", "a".repeat(248))));
/// ```
pub fn truncate_filename<P: AsRef<Path>>(path: P, max_length_bytes: usize) -> Result<PathBuf> {
    let path = path.as_ref();
    let filename = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return Ok(path.to_path_buf()),
    };
    if filename.len() <= max_length_bytes {
        return Ok(path.to_path_buf());
    }
    let run = suffix_run(path);
    if run.len() >= max_length_bytes {
        return Err(PathError::TruncationImpossible {
            path: path.display().to_string(),
        });
    }
    let stem_budget = max_length_bytes - run.len();
    let mut stem = filename
        .strip_suffix(run.as_str())
        .unwrap_or(&filename)
        .to_string();
    while stem.len() > stem_budget {
        stem.pop();
    }
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let result = parent.join(format!("{stem}{run}"));
    info!("Truncated path: {} -> {}", path.display(), result.display());
    Ok(result)
}
