//! Component tree listing for a whole report

use crate::models::ComponentType;
use crate::{BatchReportReader, Domain, Error, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;

/// One component as it appears in the tree.
#[derive(Debug, Clone, Serialize)]
pub struct TreeEntry {
    pub component_ref: i32,
    pub uuid: String,
    pub component_type: String,
    pub name: Option<String>,
    pub path: Option<String>,
    pub depth: u16,
    /// Record kinds with a file for this component, besides the component itself
    pub stored: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportTree {
    pub project_key: String,
    pub analysis_date: i64,
    pub root_component_ref: i32,
    pub deleted_components_count: i32,
    pub components: Vec<TreeEntry>,
}

/// Walk the component tree depth-first from the root reference.
///
/// Returns `(ref, depth)` pairs in pre-order. A reference reachable twice
/// means the report is corrupt.
pub fn component_tree(reader: &BatchReportReader, root_ref: i32) -> Result<Vec<(i32, u16)>> {
    let mut visited = HashSet::new();
    let mut ordered = Vec::new();
    let mut stack = vec![(root_ref, 0u16)];

    while let Some((component_ref, depth)) = stack.pop() {
        if !visited.insert(component_ref) {
            return Err(Error::Decode {
                path: reader
                    .file_structure()
                    .file_for(Domain::Component, component_ref),
                reason: format!("component #{component_ref} is reachable more than once"),
            });
        }

        let component = reader.read_component(component_ref)?;
        ordered.push((component_ref, depth));

        // Reverse so children pop in declaration order
        for child in component.child_ref.iter().rev() {
            stack.push((*child, depth.saturating_add(1)));
        }
    }

    Ok(ordered)
}

/// Describe one component and the record kinds stored for it.
pub fn describe_component(
    reader: &BatchReportReader,
    component_ref: i32,
    depth: u16,
) -> Result<TreeEntry> {
    let component = reader.read_component(component_ref)?;
    let structure = reader.file_structure();
    let stored = Domain::ALL
        .into_iter()
        .filter(|domain| *domain != Domain::Component)
        .filter(|domain| structure.file_for(*domain, component_ref).is_file())
        .map(Domain::label)
        .collect();

    Ok(TreeEntry {
        component_ref,
        uuid: component.uuid,
        component_type: ComponentType::try_from(component.r#type)
            .map_or("unknown", ComponentType::as_str)
            .to_string(),
        name: component.name,
        path: component.path,
        depth,
        stored,
    })
}

/// List every component reachable from the report's root, in tree order.
///
/// Components are read in parallel; the result keeps tree order.
pub fn list_report(reader: &BatchReportReader) -> Result<ReportTree> {
    let metadata = reader.read_metadata()?;
    let tree = component_tree(reader, metadata.root_component_ref)?;
    log::debug!("Listing {} component(s)", tree.len());

    let components = tree
        .par_iter()
        .map(|&(component_ref, depth)| describe_component(reader, component_ref, depth))
        .collect::<Result<Vec<_>>>()?;

    Ok(ReportTree {
        project_key: metadata.project_key,
        analysis_date: metadata.analysis_date,
        root_component_ref: metadata.root_component_ref,
        deleted_components_count: metadata.deleted_components_count,
        components,
    })
}
