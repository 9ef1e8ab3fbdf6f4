//! Report writer: persists analysis results, one file per (kind, component)
//!
//! Every operation creates or truncates its target file, writes all frames,
//! flushes and closes it before returning. Writing the same kind twice for a
//! component replaces the earlier content.

use super::codec;
use super::structure::{Domain, FileStructure};
use crate::models::{
    Component, Coverage, CoverageDetail, DeletedComponentIssues, Duplication, Issue, Measure,
    Metadata, Scm, Symbol, SyntaxHighlightingRule, Test,
};
use crate::{Error, ReportOptions, Result};
use prost::Message;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::iter;
use std::path::{Path, PathBuf};

pub struct BatchReportWriter {
    structure: FileStructure,
    options: ReportOptions,
}

impl BatchReportWriter {
    /// Create a writer over `dir`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::with_options(dir, ReportOptions::default())
    }

    pub fn with_options<P: AsRef<Path>>(dir: P, options: ReportOptions) -> Result<Self> {
        let structure = FileStructure::new(dir);
        structure.ensure_root()?;
        Ok(Self { structure, options })
    }

    #[must_use]
    pub fn file_structure(&self) -> &FileStructure {
        &self.structure
    }

    /// Whether a file of the given kind was already written for the component.
    #[must_use]
    pub fn has_component_data(&self, domain: Domain, component_ref: i32) -> bool {
        self.structure.file_for(domain, component_ref).exists()
    }

    pub fn write_metadata(&self, metadata: &Metadata) -> Result<()> {
        let path = self.structure.metadata_file();
        self.write_records("metadata", &path, iter::once(metadata))
    }

    pub fn write_component(&self, component: &Component) -> Result<()> {
        let path = self.path(Domain::Component, component.r#ref);
        self.write_records(Domain::Component.label(), &path, iter::once(component))
    }

    pub fn write_component_issues<'a>(
        &self,
        component_ref: i32,
        issues: impl IntoIterator<Item = &'a Issue>,
    ) -> Result<()> {
        let path = self.path(Domain::Issues, component_ref);
        self.write_records(Domain::Issues.label(), &path, issues)
    }

    /// Write the issues of a component removed since the previous analysis.
    ///
    /// The issues are stored together with the deleted component's uuid in a
    /// single record.
    pub fn write_deleted_component_issues<'a>(
        &self,
        component_ref: i32,
        component_uuid: &str,
        issues: impl IntoIterator<Item = &'a Issue>,
    ) -> Result<()> {
        let record = DeletedComponentIssues {
            component_ref,
            issue: issues.into_iter().cloned().collect(),
            component_uuid: component_uuid.to_string(),
        };
        let path = self.path(Domain::IssuesOnDeleted, component_ref);
        self.write_records(Domain::IssuesOnDeleted.label(), &path, iter::once(&record))
    }

    pub fn write_component_measures<'a>(
        &self,
        component_ref: i32,
        measures: impl IntoIterator<Item = &'a Measure>,
    ) -> Result<()> {
        let path = self.path(Domain::Measures, component_ref);
        self.write_records(Domain::Measures.label(), &path, measures)
    }

    /// Write source-control data, keyed by `scm.component_ref`.
    pub fn write_component_scm(&self, scm: &Scm) -> Result<()> {
        let path = self.path(Domain::Scm, scm.component_ref);
        self.write_records(Domain::Scm.label(), &path, iter::once(scm))
    }

    pub fn write_component_duplications<'a>(
        &self,
        component_ref: i32,
        duplications: impl IntoIterator<Item = &'a Duplication>,
    ) -> Result<()> {
        let path = self.path(Domain::Duplications, component_ref);
        self.write_records(Domain::Duplications.label(), &path, duplications)
    }

    pub fn write_component_syntax_highlighting<'a>(
        &self,
        component_ref: i32,
        rules: impl IntoIterator<Item = &'a SyntaxHighlightingRule>,
    ) -> Result<()> {
        let path = self.path(Domain::SyntaxHighlighting, component_ref);
        self.write_records(Domain::SyntaxHighlighting.label(), &path, rules)
    }

    pub fn write_component_symbols<'a>(
        &self,
        component_ref: i32,
        symbols: impl IntoIterator<Item = &'a Symbol>,
    ) -> Result<()> {
        let path = self.path(Domain::Symbols, component_ref);
        self.write_records(Domain::Symbols.label(), &path, symbols)
    }

    pub fn write_file_coverage<'a>(
        &self,
        component_ref: i32,
        coverage: impl IntoIterator<Item = &'a Coverage>,
    ) -> Result<()> {
        let path = self.path(Domain::Coverage, component_ref);
        self.write_records(Domain::Coverage.label(), &path, coverage)
    }

    /// Write the test cases declared in a test file.
    pub fn write_tests<'a>(
        &self,
        test_file_ref: i32,
        tests: impl IntoIterator<Item = &'a Test>,
    ) -> Result<()> {
        let path = self.path(Domain::Tests, test_file_ref);
        self.write_records(Domain::Tests.label(), &path, tests)
    }

    /// Write per-test line coverage for the test cases of a test file.
    pub fn write_coverage_details<'a>(
        &self,
        test_file_ref: i32,
        details: impl IntoIterator<Item = &'a CoverageDetail>,
    ) -> Result<()> {
        let path = self.path(Domain::CoverageDetails, test_file_ref);
        self.write_records(Domain::CoverageDetails.label(), &path, details)
    }

    /// Write the source text of a component as UTF-8, one `\n`-terminated
    /// line per entry.
    ///
    /// Every line is checked before the file is opened: a line containing
    /// `\n` or `\r` fails the call and leaves earlier content untouched.
    pub fn write_component_source_lines<I, S>(&self, component_ref: i32, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = Vec::new();
        let mut count = 0usize;

        for line in lines {
            let line = line.as_ref();
            if line.contains(['\n', '\r']) {
                return Err(Error::InvalidInput(format!(
                    "source line {} of component #{component_ref} contains a line break",
                    count + 1
                )));
            }
            text.extend_from_slice(line.as_bytes());
            text.push(b'\n');
            count += 1;
        }

        let path = self.path(Domain::Source, component_ref);
        let mut writer = self.create(&path)?;
        writer.write_all(&text)?;
        self.finish(writer)?;
        log::debug!("Wrote {count} source line(s) to {}", path.display());
        Ok(())
    }

    fn path(&self, domain: Domain, component_ref: i32) -> PathBuf {
        self.structure.file_for(domain, component_ref)
    }

    fn create(&self, path: &Path) -> Result<BufWriter<File>> {
        let file = File::create(path)?;
        Ok(BufWriter::with_capacity(self.options.buffer_capacity, file))
    }

    fn finish(&self, mut writer: BufWriter<File>) -> Result<()> {
        writer.flush()?;
        if self.options.sync_on_write {
            writer.get_ref().sync_data()?;
        }
        Ok(())
    }

    fn write_records<'a, M, I>(&self, kind: &str, path: &Path, records: I) -> Result<()>
    where
        M: Message + 'a,
        I: IntoIterator<Item = &'a M>,
    {
        let mut writer = self.create(path)?;
        let mut count = 0usize;

        for record in records {
            codec::write_frame(&mut writer, record)?;
            count += 1;
        }

        self.finish(writer)?;
        log::debug!("Wrote {count} {kind} record(s) to {}", path.display());
        Ok(())
    }
}
