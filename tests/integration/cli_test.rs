//! Integration tests for the command-line binary

#[cfg(test)]
mod cli_tests {
    use rusqlite::Connection;
    use std::fs;
    use std::process::Command;
    use tempfile::tempdir;

    fn run_fileplay(args: &[&str]) -> (bool, String, String) {
        let output = Command::new(env!("CARGO_BIN_EXE_fileplay"))
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run fileplay");

        (
            output.status.success(),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        )
    }

    fn prepare_root(input: &str) -> tempfile::TempDir {
        let root = tempdir().unwrap();
        fs::write(root.path().join("gemeinden.txt"), input).unwrap();
        Connection::open(root.path().join("gemeinden.sqlite"))
            .unwrap()
            .execute_batch("CREATE TABLE DISTRICTS (ID TEXT PRIMARY KEY, NAME TEXT);")
            .unwrap();
        root
    }

    #[test]
    fn test_successful_run_prints_completion() {
        let root = prepare_root("20101 Klagenfurt\n10101 Eisenstadt\n");
        let (ok, stdout, stderr) = run_fileplay(&[root.path().to_str().unwrap()]);

        assert!(ok, "run failed: {}", stderr);
        assert!(stdout.contains("All done."));
        assert!(root.path().join("gemeinden.csv").exists());
        assert!(root.path().join("gemeinden.json").exists());
    }

    #[test]
    fn test_quiet_suppresses_stdout() {
        let root = prepare_root("10101 Eisenstadt\n");
        let (ok, stdout, _) = run_fileplay(&[root.path().to_str().unwrap(), "--quiet"]);

        assert!(ok);
        assert!(stdout.is_empty());
    }

    #[test]
    fn test_stats_flag_prints_report() {
        let root = prepare_root("10101 Eisenstadt\n");
        let (ok, stdout, _) = run_fileplay(&[root.path().to_str().unwrap(), "--stats"]);

        assert!(ok);
        assert!(stdout.contains("Pipeline Statistics:"));
        assert!(stdout.contains("db committed"));
    }

    #[test]
    fn test_malformed_input_exits_non_zero() {
        let root = prepare_root("10101 Eisenstadt\n42\n");
        let (ok, stdout, stderr) = run_fileplay(&[root.path().to_str().unwrap()]);

        assert!(!ok);
        assert!(!stdout.contains("All done."));
        assert!(stderr.contains("line 2"), "stderr was: {}", stderr);
    }

    #[test]
    fn test_missing_input_exits_non_zero() {
        let root = tempdir().unwrap();
        let (ok, _, stderr) = run_fileplay(&[root.path().to_str().unwrap()]);

        assert!(!ok);
        assert!(stderr.contains("Input file does not exist"));
    }
}
