//! Overwrite decisions for existing paths
//!
//! Given a path that already exists and an [`OverwriteMode`], this module
//! decides whether to write in place, skip, or divert to a collision-free
//! renamed target. Interactive confirmation goes through the [`Confirm`]
//! trait so automated callers can answer programmatically instead of
//! blocking on real standard input.

use crate::error::{PathError, Result};
use crate::filename::suffix;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Policy controlling whether an existing path may be replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverwriteMode {
    /// Overwrite unconditionally
    Always,
    /// Never overwrite
    Never,
    /// Ask the user before overwriting
    Prompt,
    /// Keep the existing path and write to a renamed target instead
    Rename,
}

impl OverwriteMode {
    /// The string names of all modes, in declaration order
    pub const VALUES: [&'static str; 4] = ["always", "never", "prompt", "rename"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OverwriteMode::Always => "always",
            OverwriteMode::Never => "never",
            OverwriteMode::Prompt => "prompt",
            OverwriteMode::Rename => "rename",
        }
    }
}

impl std::fmt::Display for OverwriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverwriteMode {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "always" => Ok(OverwriteMode::Always),
            "never" => Ok(OverwriteMode::Never),
            "prompt" => Ok(OverwriteMode::Prompt),
            "rename" => Ok(OverwriteMode::Rename),
            other => Err(PathError::InvalidArguments {
                message: format!(
                    "unknown overwrite mode '{}', expected one of: {}",
                    other,
                    OverwriteMode::VALUES.join(", ")
                ),
            }),
        }
    }
}

/// A source of yes/no answers for overwrite confirmation
///
/// Implemented by [`StdinConfirm`] for interactive use and by any
/// `FnMut(&Path) -> bool` closure for programmatic callers.
pub trait Confirm {
    /// Whether the user affirms overwriting `path`
    fn confirm(&mut self, path: &Path) -> bool;
}

impl<F: FnMut(&Path) -> bool> Confirm for F {
    fn confirm(&mut self, path: &Path) -> bool {
        self(path)
    }
}

/// Blocking confirmation over standard input
///
/// Writes `Path '<path>' already exists. Overwrite? (y/N): ` to stdout and
/// reads one line. Only a trimmed, case-insensitive `y` counts as yes; an
/// empty line, any other token, or a read failure counts as no.
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, path: &Path) -> bool {
        print!("Path '{}' already exists. Overwrite? (y/N): ", path.display());
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input).is_err() {
            return false;
        }
        input.trim().eq_ignore_ascii_case("y")
    }
}

/// Decide whether an existing path should be overwritten
///
/// Interactive: `Prompt` mode blocks on standard input. Use
/// [`overwrite_existing_path_with`] to supply a programmatic answer.
///
/// `Rename` mode always answers false here; combine it with
/// [`resolve_output_path`] to obtain the diverted target.
///
/// # Errors
/// Returns [`PathError::NotFound`] when the path does not exist. The caller
/// asserts existence by calling this; nothing is ever created here.
pub fn overwrite_existing_path<P: AsRef<Path>>(path: P, mode: OverwriteMode) -> Result<bool> {
    overwrite_existing_path_with(path, mode, &mut StdinConfirm)
}

/// [`overwrite_existing_path`] with an injected confirmation provider
pub fn overwrite_existing_path_with<P: AsRef<Path>, C: Confirm + ?Sized>(
    path: P,
    mode: OverwriteMode,
    confirm: &mut C,
) -> Result<bool> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PathError::NotFound {
            path: path.display().to_string(),
        });
    }
    let overwrite = match mode {
        OverwriteMode::Always => true,
        OverwriteMode::Never | OverwriteMode::Rename => false,
        OverwriteMode::Prompt => confirm.confirm(path),
    };
    if overwrite {
        info!("Overwriting path: {}", path.display());
    } else {
        info!("Not overwriting path: {}", path.display());
    }
    Ok(overwrite)
}

/// Resolve where output for an existing path should go, if anywhere
///
/// Returns the original path to write in place, a renamed path when the mode
/// diverts, or `None` to skip writing entirely.
///
/// # Errors
/// Returns [`PathError::NotFound`] when the path does not exist.
pub fn resolve_output_path<P: AsRef<Path>>(
    path: P,
    mode: OverwriteMode,
) -> Result<Option<PathBuf>> {
    resolve_output_path_with(path, mode, &mut StdinConfirm)
}

/// [`resolve_output_path`] with an injected confirmation provider
pub fn resolve_output_path_with<P: AsRef<Path>, C: Confirm + ?Sized>(
    path: P,
    mode: OverwriteMode,
    confirm: &mut C,
) -> Result<Option<PathBuf>> {
    let path = path.as_ref();
    if mode == OverwriteMode::Rename {
        if !path.exists() {
            return Err(PathError::NotFound {
                path: path.display().to_string(),
            });
        }
        return Ok(Some(safe_path(path)));
    }
    Ok(if overwrite_existing_path_with(path, mode, confirm)? {
        Some(path.to_path_buf())
    } else {
        None
    })
}

/// Find a collision-free variant of a path
///
/// A path that does not exist is returned unchanged. Otherwise a counter is
/// inserted immediately before the final suffix (`file.txt` -> `file.1.txt`,
/// `dir` -> `dir.1`) and incremented until an unused candidate is found.
///
/// The probe is a linear scan with no upper bound, matching the number of
/// pre-existing numbered collisions. Existence checks are not atomic with any
/// subsequent write; callers needing that must use exclusive-create semantics.
pub fn safe_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if !path.exists() {
        return path.to_path_buf();
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let last = suffix(path);
    let stem = name.strip_suffix(last.as_str()).unwrap_or(&name);
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let mut counter: u64 = 1;
    loop {
        let candidate = parent.join(format!("{stem}.{counter}{last}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
