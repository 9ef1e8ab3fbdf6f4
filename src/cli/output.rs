//! Output formatting for CLI

use crate::models::{ComponentType, HighlightingType, MeasureValueType, Severity};
use crate::services::dump::ComponentDump;
use crate::services::tree::ReportTree;
use serde::Serialize;
use std::fmt::Write;

/// Format the component tree as an indented listing
#[must_use]
pub fn format_tree_text(tree: &ReportTree) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} (analysis date {}, {} component(s), {} deleted)",
        tree.project_key,
        tree.analysis_date,
        tree.components.len(),
        tree.deleted_components_count
    );
    let _ = writeln!(out);

    if tree.components.is_empty() {
        let _ = writeln!(out, "No components found.");
        return out;
    }

    let _ = writeln!(out, "{:<50} {:>6} {:<10} Stored", "Component", "Ref", "Type");
    let _ = writeln!(out, "{}", "-".repeat(80));

    for component in &tree.components {
        let label = component
            .path
            .as_deref()
            .or(component.name.as_deref())
            .unwrap_or(component.uuid.as_str());
        let indented = format!("{}{label}", "  ".repeat(usize::from(component.depth)));
        let _ = writeln!(
            out,
            "{:<50} {:>6} {:<10} {}",
            indented,
            component.component_ref,
            component.component_type,
            component.stored.join(", ")
        );
    }

    out
}

fn measure_value(measure: &crate::models::Measure) -> String {
    let value = match MeasureValueType::try_from(measure.value_type) {
        Ok(MeasureValueType::Int) => measure.int_value.map(|v| v.to_string()),
        Ok(MeasureValueType::Long) => measure.long_value.map(|v| v.to_string()),
        Ok(MeasureValueType::Double) => measure.double_value.map(|v| v.to_string()),
        Ok(MeasureValueType::Boolean) => measure.boolean_value.map(|v| v.to_string()),
        Ok(MeasureValueType::String) | Err(_) => measure.string_value.clone(),
    };
    value.unwrap_or_else(|| "-".to_string())
}

/// Format every record of one component as text
#[must_use]
pub fn format_component_text(dump: &ComponentDump) -> String {
    let mut out = String::new();
    let component = &dump.component;

    let kind = ComponentType::try_from(component.r#type).map_or("unknown", ComponentType::as_str);
    let _ = writeln!(
        out,
        "#{} {} [{kind}{}] {}",
        component.r#ref,
        component.path.as_deref().unwrap_or("-"),
        if component.is_test { ", test" } else { "" },
        component.uuid
    );
    if !component.child_ref.is_empty() {
        let _ = writeln!(out, "children: {:?}", component.child_ref);
    }

    let _ = writeln!(out, "\nissues: {}", dump.issues.len());
    for issue in &dump.issues {
        let severity = Severity::try_from(issue.severity).map_or("?", Severity::as_str);
        let line = issue
            .line
            .map_or_else(|| "-".to_string(), |l| l.to_string());
        let _ = writeln!(
            out,
            "  {:>5} {:<8} {}:{} {}",
            line,
            severity,
            issue.rule_repository,
            issue.rule_key,
            issue.msg.as_deref().unwrap_or("")
        );
    }

    let _ = writeln!(out, "\nmeasures: {}", dump.measures.len());
    for measure in &dump.measures {
        let _ = writeln!(out, "  {:<30} {}", measure.metric_key, measure_value(measure));
    }

    let _ = writeln!(out, "\nduplications: {}", dump.duplications.len());
    for duplication in &dump.duplications {
        if let Some(origin) = &duplication.origin_position {
            let _ = writeln!(
                out,
                "  lines {}-{} duplicated {} time(s)",
                origin.start_line,
                origin.end_line,
                duplication.duplicate.len()
            );
        }
    }

    let _ = writeln!(out, "\nhighlighting rules: {}", dump.highlighting.len());
    for rule in &dump.highlighting {
        if let Some(range) = &rule.range {
            let kind = HighlightingType::try_from(rule.r#type)
                .map_or_else(|_| "?".to_string(), |t| format!("{t:?}"));
            let _ = writeln!(out, "  {}-{} {kind}", range.start_line, range.end_line);
        }
    }

    let _ = writeln!(out, "\nsymbols: {}", dump.symbols.len());

    match &dump.scm {
        Some(scm) => {
            let _ = writeln!(out, "\nscm changesets: {}", scm.changeset.len());
            for changeset in &scm.changeset {
                let _ = writeln!(
                    out,
                    "  {} {} {}",
                    changeset.revision, changeset.author, changeset.date
                );
            }
        }
        None => {
            let _ = writeln!(out, "\nscm: none");
        }
    }

    match &dump.coverage {
        Some(lines) => {
            let covered = lines.iter().filter(|l| l.ut_hits || l.it_hits).count();
            let _ = writeln!(out, "\ncoverage: {covered}/{} line(s) hit", lines.len());
        }
        None => {
            let _ = writeln!(out, "\ncoverage: none");
        }
    }

    if let Some(tests) = &dump.tests {
        let _ = writeln!(out, "\ntests: {}", tests.len());
        for test in tests {
            let _ = writeln!(
                out,
                "  {} ({} ms)",
                test.name,
                test.duration_in_ms.unwrap_or(0)
            );
        }
    }

    if let Some(details) = &dump.coverage_details {
        let _ = writeln!(out, "\ncoverage per test: {}", details.len());
    }

    if let Some(source) = &dump.source {
        let _ = writeln!(out, "\nsource:");
        for (idx, line) in source.iter().enumerate() {
            let _ = writeln!(out, "{:>5} | {line}", idx + 1);
        }
    }

    out
}

/// Format any serializable output as pretty JSON
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        log::warn!("Failed to serialize JSON output: {e}");
        "{}".to_string()
    })
}
