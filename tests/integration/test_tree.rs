//! Component tree walking and listing

#[cfg(test)]
mod tests {
    use crate::fixtures::{component, write_simple_report, write_tree_report};
    use bareport::models::ComponentType;
    use bareport::services::dump::load_component;
    use bareport::cli::output::format_tree_text;
    use bareport::services::tree::{component_tree, list_report};
    use bareport::{BatchReportReader, BatchReportWriter, Error};
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    #[test]
    fn test_tree_is_walked_in_declaration_order() {
        let temp = TempDir::new().unwrap();
        write_tree_report(temp.path()).unwrap();

        let reader = BatchReportReader::new(temp.path());
        let tree = component_tree(&reader, 1).unwrap();
        assert_eq!(tree, vec![(1, 0), (2, 1), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_listing_reports_stored_kinds_in_tree_order() {
        let temp = TempDir::new().unwrap();
        write_tree_report(temp.path()).unwrap();

        let tree = list_report(&BatchReportReader::new(temp.path())).unwrap();
        assert_eq!(tree.project_key, "PROJECT_TREE");
        let refs: Vec<_> = tree.components.iter().map(|c| c.component_ref).collect();
        assert_eq!(refs, vec![1, 2, 3, 4]);

        let file_a = &tree.components[2];
        assert_eq!(file_a.component_type, "file");
        assert_eq!(file_a.depth, 2);
        assert_eq!(file_a.stored, vec!["coverage", "source"]);
        assert_eq!(tree.components[3].stored, vec!["issues", "source"]);

        let directory = &tree.components[1];
        assert_eq!(directory.component_type, "directory");
        assert!(directory.stored.is_empty());
    }

    #[test]
    fn test_tree_text_is_indented_by_depth() {
        let temp = TempDir::new().unwrap();
        write_tree_report(temp.path()).unwrap();

        let tree = list_report(&BatchReportReader::new(temp.path())).unwrap();
        let text = format_tree_text(&tree);
        assert!(text.starts_with("PROJECT_TREE"));
        assert!(text.contains("    src/a.xoo"));
        assert!(text.contains("coverage, source"));
    }

    #[test]
    fn test_cycle_in_component_tree_is_rejected() {
        let temp = TempDir::new().unwrap();
        let writer = BatchReportWriter::new(temp.path()).unwrap();
        writer
            .write_component(&component(1, "A", ComponentType::Project, &[2]))
            .unwrap();
        writer
            .write_component(&component(2, "B", ComponentType::Directory, &[1]))
            .unwrap();

        let result = component_tree(&BatchReportReader::new(temp.path()), 1);
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn test_missing_child_component_fails_listing() {
        let temp = TempDir::new().unwrap();
        write_tree_report(temp.path()).unwrap();
        let writer = BatchReportWriter::new(temp.path()).unwrap();
        writer
            .write_component(&component(2, "D", ComponentType::Directory, &[3, 4, 99]))
            .unwrap();

        let result = list_report(&BatchReportReader::new(temp.path()));
        assert!(matches!(result, Err(Error::MissingFile { .. })));
    }

    #[test]
    fn test_concurrent_reads_share_one_reader() {
        let temp = TempDir::new().unwrap();
        write_tree_report(temp.path()).unwrap();
        let reader = Arc::new(BatchReportReader::new(temp.path()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let reader = Arc::clone(&reader);
                thread::spawn(move || {
                    let component_ref = if i % 2 == 0 { 3 } else { 4 };
                    reader
                        .read_source_lines(component_ref)
                        .unwrap()
                        .count()
                })
            })
            .collect();

        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts, vec![2, 1, 2, 1, 2, 1, 2, 1]);
    }

    #[test]
    fn test_load_component_materializes_everything() {
        let temp = TempDir::new().unwrap();
        write_simple_report(temp.path()).unwrap();
        let reader = BatchReportReader::new(temp.path());

        let dump = load_component(&reader, 1, false).unwrap();
        assert_eq!(dump.component.uuid, "UUID_A");
        assert_eq!(dump.issues.len(), 1);
        assert_eq!(dump.measures.len(), 1);
        assert!(dump.scm.is_some());
        assert!(dump.coverage.is_none());
        assert!(dump.source.is_none());

        // Source is required once asked for
        assert!(matches!(
            load_component(&reader, 1, true),
            Err(Error::MissingFile { .. })
        ));
    }
}
