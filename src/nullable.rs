//! An optional path value with path-like accessors
//!
//! [`NullablePath`] represents "a path or no path" as an explicit sum type.
//! Accessors delegate to the inner path when present and fall back to empty
//! defaults when absent, so callers can thread an optional path through
//! name/suffix/join chains without unwrapping at every step.

use crate::filename;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// A path that may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NullablePath(Option<PathBuf>);

impl NullablePath {
    /// The absent value
    pub fn empty() -> Self {
        NullablePath(None)
    }

    /// Wrap a present path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        NullablePath(Some(path.into()))
    }

    /// Whether a path is present
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// The inner path, if present
    pub fn as_path(&self) -> Option<&Path> {
        self.0.as_deref()
    }

    /// The final path component, or an empty string when absent
    pub fn name(&self) -> String {
        match &self.0 {
            Some(p) => p
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    /// The filename without its final suffix, or an empty string when absent
    pub fn stem(&self) -> String {
        match &self.0 {
            Some(p) => {
                let name = self.name();
                let suffix = filename::suffix(p);
                name.strip_suffix(suffix.as_str()).unwrap_or(&name).to_string()
            }
            None => String::new(),
        }
    }

    /// The final suffix with its leading dot, or an empty string
    pub fn suffix(&self) -> String {
        match &self.0 {
            Some(p) => filename::suffix(p),
            None => String::new(),
        }
    }

    /// The filesystem root separator, or an empty string for relative or
    /// absent paths
    pub fn root(&self) -> String {
        match &self.0 {
            Some(p) if p.has_root() => MAIN_SEPARATOR.to_string(),
            _ => String::new(),
        }
    }

    /// The anchor: drive prefix plus root, or an empty string
    ///
    /// On Unix this equals [`root`](Self::root); on Windows it includes the
    /// drive or UNC prefix, e.g. `C:\`.
    pub fn anchor(&self) -> String {
        let mut anchor = String::new();
        if let Some(p) = &self.0 {
            for component in p.components() {
                match component {
                    Component::Prefix(prefix) => {
                        anchor.push_str(&prefix.as_os_str().to_string_lossy());
                    }
                    Component::RootDir => anchor.push(MAIN_SEPARATOR),
                    _ => break,
                }
            }
        }
        anchor
    }

    /// The parent path; absent when this value is absent or has no parent
    pub fn parent(&self) -> NullablePath {
        match &self.0 {
            Some(p) => match p.parent() {
                Some(parent) => NullablePath::new(parent),
                None => NullablePath::empty(),
            },
            None => NullablePath::empty(),
        }
    }

    /// The chain of ancestor paths, nearest first; empty when absent
    pub fn parents(&self) -> Vec<NullablePath> {
        match &self.0 {
            Some(p) => p
                .ancestors()
                .skip(1)
                .map(NullablePath::new)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Whether the path is present and exists on the filesystem
    pub fn exists(&self) -> bool {
        self.0.as_deref().is_some_and(Path::exists)
    }

    /// Whether the path is present and is a regular file
    pub fn is_file(&self) -> bool {
        self.0.as_deref().is_some_and(Path::is_file)
    }

    /// Whether the path is present and is a directory
    pub fn is_dir(&self) -> bool {
        self.0.as_deref().is_some_and(Path::is_dir)
    }

    /// Join with another optional path; absent if either side is absent
    pub fn join(&self, other: &NullablePath) -> NullablePath {
        match (&self.0, &other.0) {
            (Some(base), Some(tail)) => NullablePath::new(base.join(tail)),
            _ => NullablePath::empty(),
        }
    }
}

impl From<PathBuf> for NullablePath {
    fn from(path: PathBuf) -> Self {
        NullablePath(Some(path))
    }
}

impl From<&Path> for NullablePath {
    fn from(path: &Path) -> Self {
        NullablePath(Some(path.to_path_buf()))
    }
}

impl From<&str> for NullablePath {
    fn from(path: &str) -> Self {
        NullablePath(Some(PathBuf::from(path)))
    }
}

impl From<Option<PathBuf>> for NullablePath {
    fn from(path: Option<PathBuf>) -> Self {
        NullablePath(path)
    }
}

impl std::fmt::Display for NullablePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(p) => write!(f, "{}", p.display()),
            None => Ok(()),
        }
    }
}
