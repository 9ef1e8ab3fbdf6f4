//! Report records: one protobuf message per record kind.
//!
//! Field tags are part of the on-disk protocol and must never be renumbered.
//! Enumerations are stored as raw `i32`; use the generated getters (e.g.
//! [`Component::r#type`]) to obtain the typed value.

pub mod constants;

pub use constants::{
    ComponentLinkType, ComponentType, HighlightingType, MeasureValueType, Severity, TestStatus,
    TestType,
};

use serde::{Deserialize, Serialize};

/// Report-wide metadata, one per report.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct Metadata {
    /// Milliseconds since the Unix epoch
    #[prost(int64, tag = "1")]
    pub analysis_date: i64,
    #[prost(string, tag = "2")]
    pub project_key: String,
    #[prost(string, optional, tag = "3")]
    pub branch: Option<String>,
    #[prost(int32, tag = "4")]
    pub root_component_ref: i32,
    #[prost(int64, optional, tag = "5")]
    pub snapshot_id: Option<i64>,
    /// Number of components removed since the previous analysis
    #[prost(int32, tag = "6")]
    pub deleted_components_count: i32,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct ComponentLink {
    #[prost(enumeration = "ComponentLinkType", tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub href: String,
}

/// A unit of analyzed code, addressed by its report-local reference.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct Component {
    #[prost(int32, tag = "1")]
    pub r#ref: i32,
    #[prost(string, optional, tag = "2")]
    pub path: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub name: Option<String>,
    #[prost(enumeration = "ComponentType", tag = "4")]
    pub r#type: i32,
    #[prost(bool, tag = "5")]
    pub is_test: bool,
    #[prost(string, optional, tag = "6")]
    pub language: Option<String>,
    /// References of the direct children, in traversal order
    #[prost(int32, repeated, tag = "7")]
    pub child_ref: Vec<i32>,
    #[prost(message, repeated, tag = "8")]
    pub link: Vec<ComponentLink>,
    #[prost(string, optional, tag = "9")]
    pub version: Option<String>,
    #[prost(string, optional, tag = "10")]
    pub key: Option<String>,
    /// Identifier that stays stable across analyses
    #[prost(string, tag = "11")]
    pub uuid: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct Issue {
    #[prost(string, tag = "1")]
    pub rule_repository: String,
    #[prost(string, tag = "2")]
    pub rule_key: String,
    /// Absent for file-level issues
    #[prost(int32, optional, tag = "3")]
    pub line: Option<i32>,
    #[prost(string, optional, tag = "4")]
    pub msg: Option<String>,
    #[prost(enumeration = "Severity", tag = "5")]
    pub severity: i32,
    #[prost(string, repeated, tag = "6")]
    pub tag: Vec<String>,
    #[prost(double, optional, tag = "7")]
    pub effort_to_fix: Option<f64>,
    #[prost(bool, tag = "8")]
    pub is_new: bool,
    #[prost(string, tag = "9")]
    pub uuid: String,
    #[prost(int64, optional, tag = "10")]
    pub debt_in_minutes: Option<i64>,
    #[prost(string, optional, tag = "11")]
    pub resolution: Option<String>,
    #[prost(string, optional, tag = "12")]
    pub status: Option<String>,
    #[prost(string, optional, tag = "13")]
    pub checksum: Option<String>,
    #[prost(string, optional, tag = "14")]
    pub assignee: Option<String>,
    #[prost(string, optional, tag = "15")]
    pub author_login: Option<String>,
    #[prost(int64, optional, tag = "16")]
    pub creation_date: Option<i64>,
    #[prost(int64, optional, tag = "17")]
    pub update_date: Option<i64>,
    #[prost(int64, optional, tag = "18")]
    pub close_date: Option<i64>,
}

/// Issues of a component that no longer exists, stored as a single frame.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct DeletedComponentIssues {
    #[prost(int32, tag = "1")]
    pub component_ref: i32,
    #[prost(message, repeated, tag = "2")]
    pub issue: Vec<Issue>,
    /// Stable identifier of the deleted component
    #[prost(string, tag = "3")]
    pub component_uuid: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct Measure {
    #[prost(enumeration = "MeasureValueType", tag = "1")]
    pub value_type: i32,
    #[prost(bool, optional, tag = "2")]
    pub boolean_value: Option<bool>,
    #[prost(int32, optional, tag = "3")]
    pub int_value: Option<i32>,
    #[prost(int64, optional, tag = "4")]
    pub long_value: Option<i64>,
    #[prost(double, optional, tag = "5")]
    pub double_value: Option<f64>,
    #[prost(string, optional, tag = "6")]
    pub string_value: Option<String>,
    #[prost(string, tag = "7")]
    pub metric_key: String,
    #[prost(string, optional, tag = "8")]
    pub description: Option<String>,
    #[prost(string, optional, tag = "9")]
    pub alert_status: Option<String>,
    #[prost(string, optional, tag = "10")]
    pub alert_text: Option<String>,
    /// Differential values, one per comparison period
    #[prost(double, repeated, tag = "11")]
    pub variation_value: Vec<f64>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct Changeset {
    #[prost(string, tag = "1")]
    pub revision: String,
    #[prost(string, tag = "2")]
    pub author: String,
    /// Commit date in milliseconds since the Unix epoch
    #[prost(int64, tag = "3")]
    pub date: i64,
    #[prost(string, optional, tag = "4")]
    pub message: Option<String>,
}

/// Source-control data of one component.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct Scm {
    #[prost(int32, tag = "1")]
    pub component_ref: i32,
    #[prost(message, repeated, tag = "2")]
    pub changeset: Vec<Changeset>,
    /// For each source line (0-based), the index into `changeset`
    #[prost(int32, repeated, tag = "3")]
    pub changeset_index_by_line: Vec<i32>,
}

/// Text range; offsets are optional for whole-line ranges.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct Range {
    #[prost(int32, tag = "1")]
    pub start_line: i32,
    #[prost(int32, tag = "2")]
    pub end_line: i32,
    #[prost(int32, optional, tag = "3")]
    pub start_offset: Option<i32>,
    #[prost(int32, optional, tag = "4")]
    pub end_offset: Option<i32>,
}

impl Range {
    #[must_use]
    pub fn lines(start_line: i32, end_line: i32) -> Self {
        Self {
            start_line,
            end_line,
            ..Self::default()
        }
    }
}

/// Location of a duplicated block, either in the same file or in another one.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct Duplicate {
    /// Unset when the duplicate lives in the same file
    #[prost(int32, optional, tag = "1")]
    pub other_file_ref: Option<i32>,
    #[prost(message, optional, tag = "2")]
    pub range: Option<Range>,
    /// Used for duplicates in files outside of the analyzed project
    #[prost(string, optional, tag = "3")]
    pub other_file_key: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct Duplication {
    #[prost(message, optional, tag = "1")]
    pub origin_position: Option<Range>,
    #[prost(message, repeated, tag = "2")]
    pub duplicate: Vec<Duplicate>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct SyntaxHighlightingRule {
    #[prost(message, optional, tag = "1")]
    pub range: Option<Range>,
    #[prost(enumeration = "HighlightingType", tag = "2")]
    pub r#type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct Symbol {
    #[prost(message, optional, tag = "1")]
    pub declaration: Option<Range>,
    #[prost(message, repeated, tag = "2")]
    pub reference: Vec<Range>,
}

/// Coverage of one instrumented line.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct Coverage {
    #[prost(int32, tag = "1")]
    pub line: i32,
    /// Number of branch conditions on the line
    #[prost(int32, tag = "2")]
    pub conditions: i32,
    #[prost(bool, tag = "3")]
    pub ut_hits: bool,
    #[prost(bool, tag = "4")]
    pub it_hits: bool,
    #[prost(int32, tag = "5")]
    pub ut_covered_conditions: i32,
    #[prost(int32, tag = "6")]
    pub it_covered_conditions: i32,
    #[prost(int32, tag = "7")]
    pub overall_covered_conditions: i32,
}

/// Execution result of one test case, keyed by the test file.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct Test {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(enumeration = "TestType", tag = "2")]
    pub r#type: i32,
    #[prost(int64, optional, tag = "3")]
    pub duration_in_ms: Option<i64>,
    #[prost(string, optional, tag = "4")]
    pub stacktrace: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub msg: Option<String>,
    #[prost(enumeration = "TestStatus", tag = "6")]
    pub status: i32,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct CoveredFile {
    #[prost(int32, tag = "1")]
    pub file_ref: i32,
    #[prost(int32, repeated, tag = "2")]
    pub covered_line: Vec<i32>,
}

/// Lines hit by one test case, per covered file.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct CoverageDetail {
    #[prost(string, tag = "1")]
    pub test_name: String,
    #[prost(message, repeated, tag = "2")]
    pub covered_file: Vec<CoveredFile>,
}
