//! Reading kinds that were never written for a component

#[cfg(test)]
mod tests {
    use bareport::{BatchReportReader, BatchReportWriter, Error};
    use tempfile::TempDir;

    fn empty_report() -> (TempDir, BatchReportReader) {
        let temp = TempDir::new().unwrap();
        let reader = BatchReportReader::new(temp.path());
        (temp, reader)
    }

    #[test]
    fn test_empty_list_if_no_issue_found() {
        let (_temp, reader) = empty_report();
        assert_eq!(reader.read_component_issues(666).unwrap().count(), 0);
    }

    #[test]
    fn test_empty_list_if_no_measure_found() {
        let (_temp, reader) = empty_report();
        assert_eq!(reader.read_component_measures(666).unwrap().count(), 0);
    }

    #[test]
    fn test_empty_list_if_no_duplication_found() {
        let (_temp, reader) = empty_report();
        assert_eq!(reader.read_component_duplications(123).unwrap().count(), 0);
    }

    #[test]
    fn test_empty_list_if_no_symbol_found() {
        let (_temp, reader) = empty_report();
        assert_eq!(reader.read_component_symbols(123).unwrap().count(), 0);
    }

    #[test]
    fn test_empty_list_if_no_highlighting_found() {
        let (_temp, reader) = empty_report();
        assert_eq!(
            reader
                .read_component_syntax_highlighting(123)
                .unwrap()
                .count(),
            0
        );
    }

    #[test]
    fn test_none_if_no_scm_found() {
        let (_temp, reader) = empty_report();
        assert!(reader.read_component_scm(666).unwrap().is_none());
    }

    #[test]
    fn test_none_if_no_coverage_found() {
        let (_temp, reader) = empty_report();
        assert!(reader.read_file_coverage(123).unwrap().is_none());
    }

    #[test]
    fn test_none_if_no_tests_found() {
        let (_temp, reader) = empty_report();
        assert!(reader.read_tests(123).unwrap().is_none());
        assert!(reader.read_coverage_details(123).unwrap().is_none());
    }

    #[test]
    fn test_empty_coverage_differs_from_missing_coverage() {
        let temp = TempDir::new().unwrap();
        let writer = BatchReportWriter::new(temp.path()).unwrap();
        writer.write_file_coverage(1, std::iter::empty()).unwrap();

        let reader = BatchReportReader::new(temp.path());
        let present = reader.read_file_coverage(1).unwrap();
        assert!(present.is_some());
        assert_eq!(present.unwrap().count(), 0);
        assert!(reader.read_file_coverage(2).unwrap().is_none());
    }

    #[test]
    fn test_empty_and_missing_issues_are_equivalent() {
        let temp = TempDir::new().unwrap();
        let writer = BatchReportWriter::new(temp.path()).unwrap();
        writer.write_component_issues(1, std::iter::empty()).unwrap();

        let reader = BatchReportReader::new(temp.path());
        assert_eq!(reader.read_component_issues(1).unwrap().count(), 0);
        assert_eq!(reader.read_component_issues(2).unwrap().count(), 0);
    }

    #[test]
    fn test_absent_kinds_are_not_errors_on_missing_directory() {
        let temp = TempDir::new().unwrap();
        let reader = BatchReportReader::new(temp.path().join("never-created"));

        assert_eq!(reader.read_component_measures(1).unwrap().count(), 0);
        assert!(reader.read_component_scm(1).unwrap().is_none());
        assert!(matches!(
            reader.read_metadata(),
            Err(Error::MissingFile { .. })
        ));
    }
}
