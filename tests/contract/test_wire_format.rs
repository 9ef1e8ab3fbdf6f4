//! On-disk bytes match protobuf length-delimited framing

#[cfg(test)]
mod tests {
    use crate::fixtures::{coverage, issue};
    use bareport::models::{Coverage, Metadata};
    use bareport::{BatchReportReader, BatchReportWriter, Domain};
    use prost::Message;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_metadata_file_bytes() {
        let temp = TempDir::new().unwrap();
        let writer = BatchReportWriter::new(temp.path()).unwrap();
        writer
            .write_metadata(&Metadata {
                analysis_date: 15_000_000,
                project_key: "P".to_string(),
                root_component_ref: 1,
                deleted_components_count: 1,
                ..Metadata::default()
            })
            .unwrap();

        let bytes = fs::read(writer.file_structure().metadata_file()).unwrap();
        assert_eq!(
            bytes,
            vec![
                0x0C, // payload length
                0x08, 0xC0, 0xC3, 0x93, 0x07, // analysis_date
                0x12, 0x01, b'P', // project_key
                0x20, 0x01, // root_component_ref
                0x30, 0x01, // deleted_components_count
            ]
        );
    }

    #[test]
    fn test_sequence_file_is_plain_frame_concatenation() {
        let temp = TempDir::new().unwrap();
        let writer = BatchReportWriter::new(temp.path()).unwrap();
        let first = coverage(1, 1, true, false);
        let second = coverage(2, 5, false, false);
        writer.write_file_coverage(1, [&first, &second]).unwrap();

        let bytes = fs::read(writer.file_structure().file_for(Domain::Coverage, 1)).unwrap();
        assert_eq!(
            bytes,
            vec![
                0x06, 0x08, 0x01, 0x10, 0x01, 0x18, 0x01, // line 1
                0x04, 0x08, 0x02, 0x10, 0x05, // line 2
            ]
        );

        // Any protobuf delimited reader decodes the same stream
        let mut buf = bytes.as_slice();
        assert_eq!(Coverage::decode_length_delimited(&mut buf).unwrap(), first);
        assert_eq!(Coverage::decode_length_delimited(&mut buf).unwrap(), second);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_externally_framed_records_are_readable() {
        let temp = TempDir::new().unwrap();
        let writer = BatchReportWriter::new(temp.path()).unwrap();
        let path = writer.file_structure().file_for(Domain::Issues, 3);

        let mut bytes = Vec::new();
        for uuid in ["A", "B", "C"] {
            issue(uuid, Some(0))
                .encode_length_delimited(&mut bytes)
                .unwrap();
        }
        fs::write(path, bytes).unwrap();

        let issues = BatchReportReader::new(temp.path())
            .read_component_issues(3)
            .unwrap()
            .read_all()
            .unwrap();
        let uuids: Vec<_> = issues.iter().map(|i| i.uuid.as_str()).collect();
        assert_eq!(uuids, vec!["A", "B", "C"]);
        // Explicit zero survives, distinct from an absent line
        assert_eq!(issues[0].line, Some(0));
    }

    #[test]
    fn test_source_file_is_plain_text() {
        let temp = TempDir::new().unwrap();
        let writer = BatchReportWriter::new(temp.path()).unwrap();
        writer
            .write_component_source_lines(1, ["line one", "line two"])
            .unwrap();

        let path = writer.file_structure().file_for(Domain::Source, 1);
        assert!(path.to_string_lossy().ends_with("source-1.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "line one\nline two\n");
    }
}
