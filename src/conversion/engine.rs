//! The five-stage conversion pipeline
//!
//! Each stage takes the previous stage's records by value or slice and returns
//! a new collection; nothing is shared between stages except what is passed.

use crate::conversion::config::PipelineConfig;
use crate::conversion::stats::{PipelineReport, PipelineStage, StageStatistics};
use crate::error::{PipelineError, PipelineResult};
use crate::formatter::{write_csv_file, write_json_file};
use crate::model::District;
use crate::parser::{read_csv_file, read_districts};
use crate::storage::DistrictStore;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::{error, info, info_span};

/// Main pipeline runner
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every stage in order, stopping at the first failure.
    pub fn run(&self) -> PipelineResult<PipelineReport> {
        let _span = info_span!("pipeline", input = %self.config.input_path.display()).entered();
        let mut report = PipelineReport::new();

        match self.run_stages(&mut report) {
            Ok(()) => {
                info!(
                    stages = report.stages.len(),
                    elapsed_ms = report.total_elapsed().as_millis() as u64,
                    "pipeline finished"
                );
                Ok(report)
            }
            Err(err) => {
                error!(
                    reached = %report.final_stage(),
                    state = %PipelineStage::Failed,
                    "pipeline aborted: {}",
                    err
                );
                Err(err)
            }
        }
    }

    fn run_stages(&self, report: &mut PipelineReport) -> PipelineResult<()> {
        let parsed = self.stage(report, PipelineStage::LinesParsed, || {
            let districts = read_districts(&self.config.input_path)?;
            Ok((districts, None))
        })?;

        let parsed = self.stage(report, PipelineStage::CsvWritten, || {
            let bytes = write_csv_file(&self.config.csv_path, &parsed)?;
            Ok((parsed, Some(bytes)))
        })?;

        // The CSV read replaces the collection from the first stage entirely.
        drop(parsed);
        let reparsed = self.stage(report, PipelineStage::CsvReparsed, || {
            Ok((read_csv_file(&self.config.csv_path)?, None))
        })?;

        let reparsed = self.stage(report, PipelineStage::JsonWritten, || {
            let bytes = write_json_file(&self.config.json_path, &reparsed)?;
            Ok((reparsed, Some(bytes)))
        })?;

        self.stage(report, PipelineStage::DbCommitted, || {
            self.store(&reparsed)?;
            Ok((reparsed, None))
        })?;

        report.record(StageStatistics {
            stage: PipelineStage::Done,
            records: report.stages.last().map(|s| s.records).unwrap_or(0),
            bytes_written: None,
            elapsed: Default::default(),
        });
        Ok(())
    }

    /// Time one stage and record its statistics once it succeeds.
    fn stage<F>(
        &self,
        report: &mut PipelineReport,
        stage: PipelineStage,
        body: F,
    ) -> PipelineResult<Vec<District>>
    where
        F: FnOnce() -> PipelineResult<(Vec<District>, Option<u64>)>,
    {
        debug_assert_eq!(report.final_stage().next(), stage);
        let start = Instant::now();
        let (districts, bytes_written) = body()?;

        info!(stage = %stage, records = districts.len(), "stage complete");
        report.record(StageStatistics {
            stage,
            records: districts.len(),
            bytes_written,
            elapsed: start.elapsed(),
        });
        Ok(districts)
    }

    fn store(&self, districts: &[District]) -> PipelineResult<usize> {
        let mut store = DistrictStore::open(&self.config.database_path)?;
        if self.config.show_progress {
            let progress = ProgressBar::new(districts.len() as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
            {
                progress.set_style(style.progress_chars("#>-"));
            }
            progress.set_message("inserting");
            store.insert_all_with_progress(districts, &progress)
        } else {
            store.insert_all(districts)
        }
    }
}

/// Run the pipeline described by `config`
pub fn run_pipeline(config: PipelineConfig) -> PipelineResult<PipelineReport> {
    config.validate().map_err(PipelineError::configuration)?;
    Pipeline::new(config).run()
}
