//! Report reader: lazy, per-call access to a report directory
//!
//! Accessors re-open their file on every call and hold no state beyond the
//! report root, so a reader can be shared across threads. What a missing
//! file means depends on the record kind:
//!
//! - metadata, component, deleted-component issues and source lines are
//!   required and fail with [`Error::MissingFile`];
//! - issues, measures, duplications, highlighting and symbols yield an empty
//!   iterator;
//! - scm, coverage, tests and coverage details yield `None`, which is distinct
//!   from a present but empty record set.

use super::codec::{self, RecordIter};
use super::structure::{Domain, FileStructure};
use crate::models::{
    Component, Coverage, CoverageDetail, DeletedComponentIssues, Duplication, Issue, Measure,
    Metadata, Scm, Symbol, SyntaxHighlightingRule, Test,
};
use crate::{Error, ReportOptions, Result};
use prost::Message;
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

pub struct BatchReportReader {
    structure: FileStructure,
    options: ReportOptions,
}

impl BatchReportReader {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self::with_options(dir, ReportOptions::default())
    }

    pub fn with_options<P: AsRef<Path>>(dir: P, options: ReportOptions) -> Self {
        Self {
            structure: FileStructure::new(dir),
            options,
        }
    }

    #[must_use]
    pub fn file_structure(&self) -> &FileStructure {
        &self.structure
    }

    pub fn read_metadata(&self) -> Result<Metadata> {
        self.read_single("metadata", &self.structure.metadata_file())
    }

    pub fn read_component(&self, component_ref: i32) -> Result<Component> {
        let path = self.structure.file_for(Domain::Component, component_ref);
        self.read_single(Domain::Component.label(), &path)
    }

    /// Issues of a deleted component.
    ///
    /// Callers enumerate deleted components from the metadata, so a missing
    /// file is a protocol violation. An empty file reads as no issues.
    pub fn read_deleted_component_issues(
        &self,
        component_ref: i32,
    ) -> Result<DeletedComponentIssues> {
        let path = self
            .structure
            .file_for(Domain::IssuesOnDeleted, component_ref);
        let file = open_required(Domain::IssuesOnDeleted.label(), &path)?;

        if file.metadata()?.len() == 0 {
            return Ok(DeletedComponentIssues {
                component_ref,
                ..DeletedComponentIssues::default()
            });
        }

        let mut reader = BufReader::with_capacity(self.options.buffer_capacity, file);
        codec::decode_single(&mut reader, &path)
    }

    pub fn read_component_issues(&self, component_ref: i32) -> Result<RecordIter<Issue>> {
        self.read_sequence_or_empty(Domain::Issues, component_ref)
    }

    pub fn read_component_measures(&self, component_ref: i32) -> Result<RecordIter<Measure>> {
        self.read_sequence_or_empty(Domain::Measures, component_ref)
    }

    /// Source-control data, or `None` when the component has none.
    pub fn read_component_scm(&self, component_ref: i32) -> Result<Option<Scm>> {
        let path = self.structure.file_for(Domain::Scm, component_ref);
        let Some(file) = open(&path)? else {
            return Ok(None);
        };

        let mut reader = BufReader::with_capacity(self.options.buffer_capacity, file);
        codec::decode_single(&mut reader, &path).map(Some)
    }

    pub fn read_component_duplications(
        &self,
        component_ref: i32,
    ) -> Result<RecordIter<Duplication>> {
        self.read_sequence_or_empty(Domain::Duplications, component_ref)
    }

    pub fn read_component_syntax_highlighting(
        &self,
        component_ref: i32,
    ) -> Result<RecordIter<SyntaxHighlightingRule>> {
        self.read_sequence_or_empty(Domain::SyntaxHighlighting, component_ref)
    }

    pub fn read_component_symbols(&self, component_ref: i32) -> Result<RecordIter<Symbol>> {
        self.read_sequence_or_empty(Domain::Symbols, component_ref)
    }

    /// Line coverage, or `None` when the file carries no coverage information.
    pub fn read_file_coverage(&self, component_ref: i32) -> Result<Option<RecordIter<Coverage>>> {
        self.read_sequence(Domain::Coverage, component_ref)
    }

    pub fn read_tests(&self, test_file_ref: i32) -> Result<Option<RecordIter<Test>>> {
        self.read_sequence(Domain::Tests, test_file_ref)
    }

    pub fn read_coverage_details(
        &self,
        test_file_ref: i32,
    ) -> Result<Option<RecordIter<CoverageDetail>>> {
        self.read_sequence(Domain::CoverageDetails, test_file_ref)
    }

    /// Source text of a component, one item per line.
    pub fn read_source_lines(&self, component_ref: i32) -> Result<SourceLines> {
        let path = self.structure.file_for(Domain::Source, component_ref);
        let file = open_required(Domain::Source.label(), &path)?;
        log::debug!("Reading source lines from {}", path.display());

        Ok(SourceLines {
            reader: Some(BufReader::with_capacity(self.options.buffer_capacity, file)),
            path,
        })
    }

    fn read_single<M: Message + Default>(&self, kind: &'static str, path: &Path) -> Result<M> {
        let file = open_required(kind, path)?;
        let mut reader = BufReader::with_capacity(self.options.buffer_capacity, file);
        codec::decode_single(&mut reader, path)
    }

    fn read_sequence<M>(&self, domain: Domain, component_ref: i32) -> Result<Option<RecordIter<M>>>
    where
        M: Message + Default,
    {
        let path = self.structure.file_for(domain, component_ref);
        let Some(file) = open(&path)? else {
            log::trace!("No {domain} file for component #{component_ref}");
            return Ok(None);
        };

        log::debug!("Reading {domain} records from {}", path.display());
        Ok(Some(RecordIter::new(
            file,
            path,
            self.options.buffer_capacity,
        )))
    }

    fn read_sequence_or_empty<M>(&self, domain: Domain, component_ref: i32) -> Result<RecordIter<M>>
    where
        M: Message + Default,
    {
        Ok(self
            .read_sequence(domain, component_ref)?
            .unwrap_or_else(RecordIter::empty))
    }
}

/// Open a file, mapping "not found" to `None`.
fn open(path: &Path) -> Result<Option<File>> {
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn open_required(kind: &'static str, path: &Path) -> Result<File> {
    open(path)?.ok_or_else(|| {
        let err = Error::MissingFile {
            kind,
            path: path.to_path_buf(),
        };
        log::warn!("{err}");
        err
    })
}

/// Lazy iterator over the lines of a component's source file.
///
/// Lines end at `\n`; a `\r` right before it is dropped as well.
#[derive(Debug)]
pub struct SourceLines {
    reader: Option<BufReader<File>>,
    path: PathBuf,
}

impl SourceLines {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn fail(&mut self, err: io::Error) -> Error {
        self.reader = None;
        if err.kind() == ErrorKind::InvalidData {
            Error::Decode {
                path: self.path.clone(),
                reason: "source file is not valid UTF-8".to_string(),
            }
        } else {
            Error::Io(err)
        }
    }
}

impl Iterator for SourceLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;
        let mut line = String::new();

        match reader.read_line(&mut line) {
            Ok(0) => {
                self.reader = None;
                None
            }
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(e) => Some(Err(self.fail(e))),
        }
    }
}

impl std::iter::FusedIterator for SourceLines {}
