//! # path-prep
//!
//! Filename sanitization, byte-accurate truncation, and safe overwrite
//! helpers for local filesystem workflows.
//!
//! This crate wraps the standard path primitives with the checks that real
//! file-writing tools need: making arbitrary strings safe to use as
//! filenames on any OS, shrinking over-long filenames to a byte budget
//! without splitting multi-byte characters, deciding whether an existing
//! path may be overwritten, and validating input/output paths before use.
//! Everything is synchronous and operates only on its arguments plus the
//! local filesystem.
//!
//! ## Features
//!
//! - **Sanitization**: replace OS-reserved characters uniformly across platforms
//! - **Truncation**: fit filenames into a byte budget, preserving the suffix run
//! - **Overwrite policy**: always / never / prompt / rename, with an injectable
//!   confirmation provider and a collision-free renamer
//! - **Path preparation**: verify kind, suffix, and access for inputs and
//!   outputs, creating missing directory chains on request
//!
//! ## Examples
//!
//! ### Sanitizing and truncating filenames
//!
//! ```rust
//! use path_prep::{sanitize_filename, truncate_filename, MAX_FILENAME_BYTES};
//! use std::path::PathBuf;
//!
//! assert_eq!(sanitize_filename("file?name"), "file_name");
//!
//! let long = format!("{}.tar.gz", "a".repeat(300));
//! let fitted = truncate_filename(&long, MAX_FILENAME_BYTES).unwrap();
//! assert!(fitted.file_name().unwrap().len() <= MAX_FILENAME_BYTES);
//! ```
//!
//! ### Resolving overwrites without blocking on stdin
//!
//! ```rust
//! use path_prep::{resolve_output_path_with, OverwriteMode};
//! use std::path::Path;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let target = dir.path().join("report.txt");
//! std::fs::write(&target, b"v1").unwrap();
//!
//! let mut approve = |_: &Path| true;
//! let resolved = resolve_output_path_with(&target, OverwriteMode::Prompt, &mut approve).unwrap();
//! assert_eq!(resolved, Some(target.clone()));
//!
//! let diverted = resolve_output_path_with(&target, OverwriteMode::Rename, &mut approve).unwrap();
//! assert_eq!(diverted, Some(dir.path().join("report.1.txt")));
//! ```
//!
//! ### Preparing paths before use
//!
//! ```rust
//! use path_prep::prepare_output_file;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let target = dir.path().join("nested/out/report.json");
//! let prepared = prepare_output_file(&target, Some(".json"), None, true).unwrap();
//! assert!(prepared.parent().unwrap().is_dir());
//! ```

mod error;
mod filename;
mod nullable;
mod overwrite;
mod prepare;

// Re-export main public API
pub use error::{PathError, Result};
pub use filename::{
    sanitize_filename, sanitize_filename_with, suffix, suffix_run, suffixes, truncate_filename,
    with_suffix, DEFAULT_REPLACEMENT, MAX_FILENAME_BYTES,
};
pub use nullable::NullablePath;
pub use overwrite::{
    overwrite_existing_path, overwrite_existing_path_with, resolve_output_path,
    resolve_output_path_with, safe_path, Confirm, OverwriteMode, StdinConfirm,
};
pub use prepare::{
    prepare_input_dir, prepare_input_file, prepare_output_dir, prepare_output_file,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
