//! Per-stage statistics for a pipeline run

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Pipeline states, in the order a successful run visits them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PipelineStage {
    Init,
    LinesParsed,
    CsvWritten,
    CsvReparsed,
    JsonWritten,
    DbCommitted,
    Done,
    Failed,
}

impl PipelineStage {
    /// State reached after this one on success. `Done` and `Failed` are terminal.
    pub fn next(self) -> Self {
        match self {
            PipelineStage::Init => PipelineStage::LinesParsed,
            PipelineStage::LinesParsed => PipelineStage::CsvWritten,
            PipelineStage::CsvWritten => PipelineStage::CsvReparsed,
            PipelineStage::CsvReparsed => PipelineStage::JsonWritten,
            PipelineStage::JsonWritten => PipelineStage::DbCommitted,
            PipelineStage::DbCommitted => PipelineStage::Done,
            PipelineStage::Done => PipelineStage::Done,
            PipelineStage::Failed => PipelineStage::Failed,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineStage::Done | PipelineStage::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PipelineStage::Init => "init",
            PipelineStage::LinesParsed => "lines parsed",
            PipelineStage::CsvWritten => "csv written",
            PipelineStage::CsvReparsed => "csv reparsed",
            PipelineStage::JsonWritten => "json written",
            PipelineStage::DbCommitted => "db committed",
            PipelineStage::Done => "done",
            PipelineStage::Failed => "failed",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one completed stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageStatistics {
    /// State the pipeline entered when the stage finished
    pub stage: PipelineStage,
    /// Records handled by the stage
    pub records: usize,
    /// Bytes written, for stages that write a file
    pub bytes_written: Option<u64>,
    /// Wall-clock time spent in the stage
    pub elapsed: Duration,
}

/// Summary of a whole run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineReport {
    pub stages: Vec<StageStatistics>,
}

impl PipelineReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stats: StageStatistics) {
        self.stages.push(stats);
    }

    /// Last state reached; `Init` before any stage completed.
    pub fn final_stage(&self) -> PipelineStage {
        self.stages
            .last()
            .map(|s| s.stage)
            .unwrap_or(PipelineStage::Init)
    }

    /// Rows committed to the database, if that stage ran.
    pub fn rows_committed(&self) -> Option<usize> {
        self.stages
            .iter()
            .find(|s| s.stage == PipelineStage::DbCommitted)
            .map(|s| s.records)
    }

    pub fn total_elapsed(&self) -> Duration {
        self.stages.iter().map(|s| s.elapsed).sum()
    }
}
