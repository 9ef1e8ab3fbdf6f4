//! File layout of a report directory
//!
//! Every record kind that is stored per component maps to a [`Domain`], which
//! owns the file-name prefix and extension. Paths are a pure function of the
//! report root, the domain and the component reference.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const METADATA_FILE: &str = "metadata.pb";

/// Per-component record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Component,
    Issues,
    IssuesOnDeleted,
    Measures,
    Scm,
    Duplications,
    SyntaxHighlighting,
    Symbols,
    Coverage,
    Tests,
    CoverageDetails,
    Source,
}

impl Domain {
    pub const ALL: [Domain; 12] = [
        Domain::Component,
        Domain::Issues,
        Domain::IssuesOnDeleted,
        Domain::Measures,
        Domain::Scm,
        Domain::Duplications,
        Domain::SyntaxHighlighting,
        Domain::Symbols,
        Domain::Coverage,
        Domain::Tests,
        Domain::CoverageDetails,
        Domain::Source,
    ];

    /// File-name prefix, including the trailing separator.
    #[must_use]
    pub fn file_prefix(self) -> &'static str {
        match self {
            Domain::Component => "component-",
            Domain::Issues => "issues-",
            Domain::IssuesOnDeleted => "issues-deleted-",
            Domain::Measures => "measures-",
            Domain::Scm => "scm-",
            Domain::Duplications => "duplications-",
            Domain::SyntaxHighlighting => "syntax-highlighting-",
            Domain::Symbols => "symbol-",
            Domain::Coverage => "coverage-",
            Domain::Tests => "tests-",
            Domain::CoverageDetails => "coverage-details-",
            Domain::Source => "source-",
        }
    }

    #[must_use]
    pub fn file_extension(self) -> &'static str {
        match self {
            Domain::Source => "txt",
            _ => "pb",
        }
    }

    /// Human-readable name used in logs and error messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Domain::Component => "component",
            Domain::Issues => "issues",
            Domain::IssuesOnDeleted => "deleted component issues",
            Domain::Measures => "measures",
            Domain::Scm => "scm",
            Domain::Duplications => "duplications",
            Domain::SyntaxHighlighting => "syntax highlighting",
            Domain::Symbols => "symbols",
            Domain::Coverage => "coverage",
            Domain::Tests => "tests",
            Domain::CoverageDetails => "coverage details",
            Domain::Source => "source",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolves record files inside a report directory.
#[derive(Debug, Clone)]
pub struct FileStructure {
    root: PathBuf,
}

impl FileStructure {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the report directory if it does not exist yet.
    pub fn ensure_root(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root)
    }

    #[must_use]
    pub fn metadata_file(&self) -> PathBuf {
        self.root.join(METADATA_FILE)
    }

    #[must_use]
    pub fn file_for(&self, domain: Domain, component_ref: i32) -> PathBuf {
        self.root.join(format!(
            "{}{component_ref}.{}",
            domain.file_prefix(),
            domain.file_extension()
        ))
    }
}
