//! Closed enumerations carried as `i32` fields inside report records.

/// Kind of analyzed component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ComponentType {
    Project = 0,
    Module = 1,
    Directory = 2,
    File = 3,
}

impl ComponentType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Project => "project",
            ComponentType::Module => "module",
            ComponentType::Directory => "directory",
            ComponentType::File => "file",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ComponentLinkType {
    Home = 0,
    Scm = 1,
    ScmDev = 2,
    Issue = 3,
    Ci = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Severity {
    Info = 0,
    Minor = 1,
    Major = 2,
    Critical = 3,
    Blocker = 4,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Minor => "MINOR",
            Severity::Major => "MAJOR",
            Severity::Critical => "CRITICAL",
            Severity::Blocker => "BLOCKER",
        }
    }
}

/// Which value slot of a measure is populated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MeasureValueType {
    Int = 0,
    Long = 1,
    Double = 2,
    Boolean = 3,
    String = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum HighlightingType {
    Annotation = 0,
    Constant = 1,
    Comment = 2,
    CppDoc = 3,
    StructuredComment = 4,
    Keyword = 5,
    HighlightingString = 6,
    KeywordLight = 7,
    PreprocessDirective = 8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TestType {
    Ut = 0,
    It = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TestStatus {
    Ok = 0,
    Failure = 1,
    Error = 2,
    Skipped = 3,
}
