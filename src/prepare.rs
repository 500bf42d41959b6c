//! Input and output path validation
//!
//! These helpers verify a path before it is used for reading or writing:
//! the right kind of entry, an optional suffix check or coercion, required
//! access, and (for outputs) creation of missing directory chains.
//!
//! Suffix arguments carry their leading dot (`".txt"`). The expected-suffix
//! check and the suffix coercion are mutually exclusive.

use crate::error::{PathError, Result};
use crate::filename;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

fn access_error(err: io::Error, path: &Path) -> PathError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => PathError::PermissionDenied {
            path: path.display().to_string(),
        },
        io::ErrorKind::NotFound => PathError::NotFound {
            path: path.display().to_string(),
        },
        _ => err.into(),
    }
}

// Counterpart of Permissions::readonly for the read direction: no read bit
// set for anyone. Probing with open/read_dir alone is not enough because
// privileged processes bypass mode bits.
#[cfg(unix)]
fn is_unreadable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o444 == 0
}

#[cfg(not(unix))]
fn is_unreadable(_metadata: &fs::Metadata) -> bool {
    false
}

fn apply_suffix_options(
    path: &Path,
    expected_suffix: Option<&str>,
    coerced_suffix: Option<&str>,
) -> Result<PathBuf> {
    if expected_suffix.is_some() && coerced_suffix.is_some() {
        return Err(PathError::InvalidArguments {
            message: "at most one of expected_suffix and coerced_suffix can be specified"
                .to_string(),
        });
    }
    if let Some(expected) = expected_suffix {
        if filename::suffix(path) != expected {
            return Err(PathError::SuffixMismatch {
                expected: expected.to_string(),
                path: path.display().to_string(),
            });
        }
    }
    Ok(match coerced_suffix {
        Some(suffix) => filename::with_suffix(path, suffix)?,
        None => path.to_path_buf(),
    })
}

/// Verify a directory path before reading from it
///
/// # Errors
/// - [`PathError::NotFound`] when the path does not exist
/// - [`PathError::NotADirectory`] when it exists but is not a directory
/// - [`PathError::PermissionDenied`] when the directory cannot be read
pub fn prepare_input_dir<P: AsRef<Path>>(p: P) -> Result<PathBuf> {
    let p = p.as_ref();
    if !p.is_dir() {
        if p.exists() {
            return Err(PathError::NotADirectory {
                path: p.display().to_string(),
            });
        }
        return Err(PathError::NotFound {
            path: p.display().to_string(),
        });
    }
    let metadata = fs::metadata(p).map_err(|e| access_error(e, p))?;
    if is_unreadable(&metadata) {
        return Err(PathError::PermissionDenied {
            path: p.display().to_string(),
        });
    }
    fs::read_dir(p).map_err(|e| access_error(e, p))?;
    Ok(p.to_path_buf())
}

/// Verify a file path before reading from it
///
/// The expected-suffix check runs against the path as given, before any
/// coercion, so a mismatch is reported even for paths that do not exist.
///
/// # Errors
/// - [`PathError::InvalidArguments`] when both suffix options are given
/// - [`PathError::SuffixMismatch`] when the final suffix differs from `expected_suffix`
/// - [`PathError::NotFound`] when the (possibly coerced) path does not exist
/// - [`PathError::NotAFile`] when it exists but is not a regular file
/// - [`PathError::PermissionDenied`] when the file cannot be opened for reading
pub fn prepare_input_file<P: AsRef<Path>>(
    p: P,
    expected_suffix: Option<&str>,
    coerced_suffix: Option<&str>,
) -> Result<PathBuf> {
    let p = apply_suffix_options(p.as_ref(), expected_suffix, coerced_suffix)?;
    if !p.is_file() {
        if p.exists() {
            return Err(PathError::NotAFile {
                path: p.display().to_string(),
            });
        }
        return Err(PathError::NotFound {
            path: p.display().to_string(),
        });
    }
    let metadata = fs::metadata(&p).map_err(|e| access_error(e, &p))?;
    if is_unreadable(&metadata) {
        return Err(PathError::PermissionDenied {
            path: p.display().to_string(),
        });
    }
    fs::File::open(&p).map_err(|e| access_error(e, &p))?;
    Ok(p)
}

/// Verify a directory path before writing into it
///
/// A missing directory is created together with its ancestors when `create`
/// is true; with `create` false the missing path is returned untouched so the
/// caller can decide what to do.
///
/// # Errors
/// - [`PathError::NotADirectory`] when the path exists but is not a directory
/// - [`PathError::PermissionDenied`] when the directory is read-only or
///   creation is denied
pub fn prepare_output_dir<P: AsRef<Path>>(p: P, create: bool) -> Result<PathBuf> {
    let p = p.as_ref();
    if p.exists() {
        if !p.is_dir() {
            return Err(PathError::NotADirectory {
                path: p.display().to_string(),
            });
        }
        let metadata = fs::metadata(p).map_err(|e| access_error(e, p))?;
        if metadata.permissions().readonly() {
            return Err(PathError::PermissionDenied {
                path: p.display().to_string(),
            });
        }
    } else if create {
        fs::create_dir_all(p).map_err(|e| access_error(e, p))?;
        debug!("Created output directory: {}", p.display());
    }
    Ok(p.to_path_buf())
}

/// Verify a file path before writing to it
///
/// Suffix rules are the same as [`prepare_input_file`]. When the path is
/// missing and `create` is true, the parent directory chain is created; the
/// file itself never is.
///
/// # Errors
/// - [`PathError::InvalidArguments`] when both suffix options are given
/// - [`PathError::SuffixMismatch`] when the final suffix differs from `expected_suffix`
/// - [`PathError::NotAFile`] when the path exists but is not a regular file
/// - [`PathError::PermissionDenied`] when the existing file is read-only or
///   parent creation is denied
pub fn prepare_output_file<P: AsRef<Path>>(
    p: P,
    expected_suffix: Option<&str>,
    coerced_suffix: Option<&str>,
    create: bool,
) -> Result<PathBuf> {
    let p = apply_suffix_options(p.as_ref(), expected_suffix, coerced_suffix)?;
    if p.exists() {
        if !p.is_file() {
            return Err(PathError::NotAFile {
                path: p.display().to_string(),
            });
        }
        let metadata = fs::metadata(&p).map_err(|e| access_error(e, &p))?;
        if metadata.permissions().readonly() {
            return Err(PathError::PermissionDenied {
                path: p.display().to_string(),
            });
        }
    } else if create {
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| access_error(e, parent))?;
                debug!("Created parent directory: {}", parent.display());
            }
        }
    }
    Ok(p)
}
