//! Missing required files are protocol violations

#[cfg(test)]
mod tests {
    use crate::fixtures::{issue, write_simple_report};
    use bareport::{BatchReportReader, BatchReportWriter, Domain, Error};
    use std::fs;
    use tempfile::TempDir;

    fn assert_missing<T: std::fmt::Debug>(result: bareport::Result<T>, expected_kind: &str) {
        let err = result.expect_err("expected a missing file error");
        assert!(err.is_protocol_violation());
        assert!(
            matches!(err, Error::MissingFile { kind, .. } if kind == expected_kind),
            "expected missing {expected_kind} file, got {err:?}"
        );
    }

    #[test]
    fn test_fail_if_missing_metadata_file() {
        let temp = TempDir::new().unwrap();
        let reader = BatchReportReader::new(temp.path());
        assert_missing(reader.read_metadata(), "metadata");
    }

    #[test]
    fn test_fail_if_missing_file_on_component() {
        let temp = TempDir::new().unwrap();
        write_simple_report(temp.path()).unwrap();

        let reader = BatchReportReader::new(temp.path());
        assert_missing(reader.read_component(666), Domain::Component.label());
    }

    #[test]
    fn test_fail_if_missing_file_on_deleted_component() {
        let temp = TempDir::new().unwrap();
        write_simple_report(temp.path()).unwrap();

        let reader = BatchReportReader::new(temp.path());
        assert_missing(
            reader.read_deleted_component_issues(666),
            Domain::IssuesOnDeleted.label(),
        );
    }

    #[test]
    fn test_fail_if_no_source_found() {
        let temp = TempDir::new().unwrap();
        let reader = BatchReportReader::new(temp.path());
        assert_missing(reader.read_source_lines(123), Domain::Source.label());
    }

    #[test]
    fn test_deleted_and_live_issues_differ_when_missing() {
        let temp = TempDir::new().unwrap();
        let writer = BatchReportWriter::new(temp.path()).unwrap();
        writer
            .write_component_issues(1, [&issue("ISSUE_A", Some(1))])
            .unwrap();

        let reader = BatchReportReader::new(temp.path());
        assert_eq!(reader.read_component_issues(2).unwrap().count(), 0);
        assert!(reader.read_deleted_component_issues(2).is_err());
    }

    #[test]
    fn test_deleted_component_issues_can_be_empty() {
        let temp = TempDir::new().unwrap();
        let writer = BatchReportWriter::new(temp.path()).unwrap();
        writer
            .write_deleted_component_issues(4, "gone", std::iter::empty())
            .unwrap();

        let deleted = BatchReportReader::new(temp.path())
            .read_deleted_component_issues(4)
            .unwrap();
        assert_eq!(deleted.component_uuid, "gone");
        assert_eq!(deleted.component_ref, 4);
        assert!(deleted.issue.is_empty());
    }

    #[test]
    fn test_writer_over_regular_file_fails_with_io_error() {
        let temp = TempDir::new().unwrap();
        let not_a_dir = temp.path().join("report");
        fs::write(&not_a_dir, b"occupied").unwrap();

        let err = BatchReportWriter::new(&not_a_dir)
            .err()
            .expect("expected writer creation to fail");
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_protocol_violation());
    }

    #[test]
    fn test_unwritable_target_fails_with_io_error() {
        let temp = TempDir::new().unwrap();
        let writer = BatchReportWriter::new(temp.path()).unwrap();
        let target = writer.file_structure().file_for(Domain::Issues, 1);
        fs::create_dir(&target).unwrap();

        let result = writer.write_component_issues(1, [&issue("ISSUE_A", Some(1))]);
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(target.is_dir());
    }

    #[test]
    fn test_io_error_is_not_a_protocol_violation() {
        let err = Error::from(std::io::Error::other("disk full"));
        assert!(!err.is_protocol_violation());
        assert!(err.to_string().contains("disk full"));
    }
}
