use std::fmt;
use std::io;
use thiserror::Error;

pub mod style;
pub use style::{Decorate, PlainDecorator, Style};

/// help-tool specific error types
#[derive(Error, Debug)]
pub enum HelpError {
    #[error("IO operation failed: {0}")]
    Io(#[from] io::Error),
}

impl HelpError {
    /// True when the reader of stdout went away (e.g. `help | head -1`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, HelpError::Io(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type HelpResult<T> = std::result::Result<T, HelpError>;

/// One row of the command registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Lowercase category key, also the filter key
    pub section: &'static str,
    /// Literal command text shown to the user
    pub command: &'static str,
    /// Human readable description
    pub details: &'static str,
}

impl Entry {
    pub const fn new(section: &'static str, command: &'static str, details: &'static str) -> Self {
        Self {
            section,
            command,
            details,
        }
    }
}

/// Metadata baked in at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub build_date: &'static str,
    pub git_hash: &'static str,
}

impl BuildInfo {
    pub const DEFAULT_BUILD_DATE: &'static str = "Unknown";
    pub const DEFAULT_GIT_HASH: &'static str = "unknown";

    pub const fn new(build_date: &'static str, git_hash: &'static str) -> Self {
        Self {
            build_date,
            git_hash,
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BUILD_DATE, Self::DEFAULT_GIT_HASH)
    }
}

/// Renders as `<git hash> (<build date>)`.
impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.git_hash, self.build_date)
    }
}
