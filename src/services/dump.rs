//! Fully materialized view of one component, for display

use crate::models::{
    Component, Coverage, CoverageDetail, Duplication, Issue, Measure, Scm, Symbol,
    SyntaxHighlightingRule, Test,
};
use crate::{BatchReportReader, Result};
use serde::Serialize;

/// Everything a report stores for one component.
///
/// `None` marks kinds whose absence is distinct from an empty record set.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentDump {
    pub component: Component,
    pub issues: Vec<Issue>,
    pub measures: Vec<Measure>,
    pub duplications: Vec<Duplication>,
    pub highlighting: Vec<SyntaxHighlightingRule>,
    pub symbols: Vec<Symbol>,
    pub scm: Option<Scm>,
    pub coverage: Option<Vec<Coverage>>,
    pub tests: Option<Vec<Test>>,
    pub coverage_details: Option<Vec<CoverageDetail>>,
    /// Only loaded on request, since source is required for files only
    pub source: Option<Vec<String>>,
}

pub fn load_component(
    reader: &BatchReportReader,
    component_ref: i32,
    with_source: bool,
) -> Result<ComponentDump> {
    let component = reader.read_component(component_ref)?;

    let source = if with_source {
        Some(
            reader
                .read_source_lines(component_ref)?
                .collect::<Result<Vec<_>>>()?,
        )
    } else {
        None
    };

    Ok(ComponentDump {
        component,
        issues: reader.read_component_issues(component_ref)?.read_all()?,
        measures: reader.read_component_measures(component_ref)?.read_all()?,
        duplications: reader
            .read_component_duplications(component_ref)?
            .read_all()?,
        highlighting: reader
            .read_component_syntax_highlighting(component_ref)?
            .read_all()?,
        symbols: reader.read_component_symbols(component_ref)?.read_all()?,
        scm: reader.read_component_scm(component_ref)?,
        coverage: reader
            .read_file_coverage(component_ref)?
            .map(|lines| lines.read_all())
            .transpose()?,
        tests: reader
            .read_tests(component_ref)?
            .map(|tests| tests.read_all())
            .transpose()?,
        coverage_details: reader
            .read_coverage_details(component_ref)?
            .map(|details| details.read_all())
            .transpose()?,
        source,
    })
}
