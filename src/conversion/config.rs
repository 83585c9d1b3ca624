//! Pipeline configuration: where each stage reads and writes

use std::path::{Path, PathBuf};

/// Conventional file names inside a project root.
pub const INPUT_FILE_NAME: &str = "gemeinden.txt";
pub const CSV_FILE_NAME: &str = "gemeinden.csv";
pub const JSON_FILE_NAME: &str = "gemeinden.json";
pub const DATABASE_FILE_NAME: &str = "gemeinden.sqlite";

/// Paths used by the pipeline, resolved by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Fixed-width source file
    pub input_path: PathBuf,
    /// CSV file, written then read back
    pub csv_path: PathBuf,
    /// JSON output file
    pub json_path: PathBuf,
    /// SQLite database file
    pub database_path: PathBuf,
    /// Show a progress bar while inserting rows
    pub show_progress: bool,
}

impl PipelineConfig {
    /// Derive all four paths from a project root using the conventional names.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            input_path: root.join(INPUT_FILE_NAME),
            csv_path: root.join(CSV_FILE_NAME),
            json_path: root.join(JSON_FILE_NAME),
            database_path: root.join(DATABASE_FILE_NAME),
            show_progress: false,
        }
    }

    /// Set the input path
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the CSV path
    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = path.into();
        self
    }

    /// Set the JSON path
    pub fn with_json_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_path = path.into();
        self
    }

    /// Set the database path
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Enable/disable the insert progress bar
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.input_path.is_file() {
            return Err(format!(
                "Input file does not exist: {}",
                self.input_path.display()
            ));
        }

        let outputs = [&self.csv_path, &self.json_path, &self.database_path];
        if outputs.iter().any(|p| **p == self.input_path) {
            return Err("Output paths must differ from the input path".to_string());
        }
        if self.csv_path == self.json_path
            || self.csv_path == self.database_path
            || self.json_path == self.database_path
        {
            return Err("CSV, JSON and database paths must be distinct".to_string());
        }

        Ok(())
    }
}
