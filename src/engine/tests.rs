#[cfg(test)]
mod tests {
    use crate::{list_files, Dispatcher, HandlerRegistry, MemoryReporter, Outcome};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn dispatcher() -> Dispatcher<MemoryReporter> {
        Dispatcher::with_reporter(HandlerRegistry::with_defaults(), MemoryReporter::new())
    }

    fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    // ========================================================================
    // process_all Tests
    // ========================================================================

    #[test]
    fn test_one_outcome_per_path() {
        let dir = TempDir::new().unwrap();
        let paths = vec![
            write_input(&dir, "a.json", r#"{"k": "v"}"#),
            dir.path().join("missing.json"),
            write_input(&dir, "notes.txt", "plain"),
            write_input(&dir, "bad.xml", "<menu>"),
        ];

        let dispatcher = dispatcher();
        let outcomes = dispatcher.process_all(&paths);

        assert_eq!(outcomes.len(), paths.len());
        assert!(outcomes[0].is_processed());
        assert_eq!(outcomes[1], Outcome::NotFound);
        assert_eq!(outcomes[2], Outcome::Skipped);
        assert!(matches!(
            &outcomes[3],
            Outcome::Failed { handler, .. } if handler == "XML"
        ));
    }

    #[test]
    fn test_reports_in_input_order() {
        let dir = TempDir::new().unwrap();
        let json = write_input(&dir, "a.json", r#"{"k": "v"}"#);
        let missing = dir.path().join("gone.csv");
        let broken = write_input(&dir, "b.json", "{oops");

        let dispatcher = dispatcher();
        dispatcher.process_all([&json, &missing, &broken]);

        let lines = dispatcher.reporter().lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            format!("File processed successfully: {}", json.display())
        );
        assert_eq!(lines[1], format!("File not found: {}", missing.display()));
        assert!(lines[2].starts_with("Error processing JSON file: Invalid JSON"));
    }

    #[test]
    fn test_failure_does_not_stop_batch() {
        let dir = TempDir::new().unwrap();
        let broken = write_input(&dir, "first.xml", "<menu><item>");
        let good = write_input(&dir, "second.csv", "1,2,3,4,5,6\n");

        let dispatcher = dispatcher();
        let outcomes = dispatcher.process_all([&broken, &good]);

        assert!(matches!(outcomes[0], Outcome::Failed { .. }));
        assert!(outcomes[1].is_processed());
        assert!(dir.path().join("second_out.txt").exists());
    }

    #[test]
    fn test_missing_file_creates_no_output() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("ghost.json");

        let dispatcher = dispatcher();
        let outcomes = dispatcher.process_all([&missing]);

        assert_eq!(outcomes, vec![Outcome::NotFound]);
        assert!(!dir.path().join("ghost_out.txt").exists());
    }

    #[test]
    fn test_directory_path_is_not_found() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("nested.json");
        fs::create_dir(&sub).unwrap();

        let dispatcher = dispatcher();
        assert_eq!(dispatcher.process_all([&sub]), vec![Outcome::NotFound]);
    }

    #[test]
    fn test_unmatched_extension_is_silent() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "readme.md", "# title");

        let dispatcher = dispatcher();
        let outcomes = dispatcher.process_all([&input]);

        assert_eq!(outcomes, vec![Outcome::Skipped]);
        assert!(dispatcher.reporter().lines().is_empty());
        assert!(!dir.path().join("readme_out.txt").exists());
    }

    #[test]
    fn test_uppercase_extension_dispatched() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "DATA.JSON", r#"{"a": 1}"#);

        let dispatcher = dispatcher();
        let outcomes = dispatcher.process_all([&input]);

        assert!(outcomes[0].is_processed());
        assert!(dir.path().join("DATA_out.txt").exists());
    }

    #[test]
    fn test_empty_registry_skips_everything() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "a.json", r#"{"a": 1}"#);

        let dispatcher = Dispatcher::with_reporter(HandlerRegistry::new(), MemoryReporter::new());
        assert_eq!(dispatcher.process_all([&input]), vec![Outcome::Skipped]);
    }

    // ========================================================================
    // Directory Tests
    // ========================================================================

    #[test]
    fn test_list_files_sorted_and_flat() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, "b.xml", "<menu/>");
        write_input(&dir, "a.json", "{}");
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.csv"), "1,2,3,4,5,6").unwrap();

        let files = list_files(dir.path()).unwrap();

        assert_eq!(
            files,
            vec![dir.path().join("a.json"), dir.path().join("b.xml")]
        );
    }

    #[test]
    fn test_list_files_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = list_files(&dir.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("Failed to read directory"));
    }

    #[test]
    fn test_process_directory_and_rerun() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, "menu.xml", "<menu><item><name>Tea</name><price>2</price><uom>cup</uom></item></menu>");
        write_input(&dir, "rows.csv", "a,b,c,d,e,f,g\na,b,c\n");
        write_input(&dir, "doc.json", r#"{"a": 1, "b": [2, 3]}"#);

        let dispatcher = dispatcher();
        let outcomes = dispatcher.process_directory(dir.path()).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| o.is_processed()));

        let json_out = fs::read_to_string(dir.path().join("doc_out.txt")).unwrap();
        assert_eq!(
            json_out,
            "This is the JSON file processing output:\nLine#1 :Field#a=1\nLine#2 :Field#b=[2,3]\n"
        );

        // Second run sees the *_out.txt files too; they are skipped silently
        // and the outputs are rewritten byte for byte
        let before = fs::read(dir.path().join("rows_out.txt")).unwrap();
        let rerun = dispatcher.process_directory(dir.path()).unwrap();

        assert_eq!(rerun.len(), 6);
        assert_eq!(rerun.iter().filter(|o| **o == Outcome::Skipped).count(), 3);
        assert_eq!(fs::read(dir.path().join("rows_out.txt")).unwrap(), before);
        assert_eq!(dispatcher.reporter().lines().len(), 6);
    }
}
