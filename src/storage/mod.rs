//! SQLite writer for the `DISTRICTS` table
//!
//! The table is expected to exist already. All inserts of one batch share a
//! single transaction: the batch is committed as a whole or not at all.

use crate::error::{PipelineError, PipelineResult};
use crate::model::District;
use indicatif::ProgressBar;
use rusqlite::{named_params, Connection};
use std::path::Path;
use tracing::{debug, info};

const INSERT_DISTRICT_SQL: &str = "INSERT INTO DISTRICTS (ID, NAME) VALUES (:id, :name)";
const COUNT_DISTRICTS_SQL: &str = "SELECT COUNT(*) FROM DISTRICTS";
const SELECT_DISTRICTS_SQL: &str = "SELECT ID, NAME FROM DISTRICTS ORDER BY ID";

/// Connection wrapper for writing districts.
pub struct DistrictStore {
    conn: Connection,
}

impl DistrictStore {
    /// Open the database at `path`, creating the file if it does not exist.
    pub fn open(path: &Path) -> PipelineResult<Self> {
        let conn = Connection::open(path).map_err(|e| {
            PipelineError::database(format!("open database at {}", path.display()), e)
        })?;
        debug!(path = %path.display(), "opened database");
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Insert every district inside one transaction and commit.
    ///
    /// # Errors
    /// Returns an error when any insert or the commit fails. Nothing from the
    /// batch is committed in that case; the transaction rolls back on drop.
    pub fn insert_all(&mut self, districts: &[District]) -> PipelineResult<usize> {
        self.insert_all_with_progress(districts, &ProgressBar::hidden())
    }

    /// Same as [`insert_all`](Self::insert_all), ticking `progress` once per row.
    pub fn insert_all_with_progress(
        &mut self,
        districts: &[District],
        progress: &ProgressBar,
    ) -> PipelineResult<usize> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| PipelineError::database("start transaction", e))?;

        {
            let mut stmt = tx
                .prepare(INSERT_DISTRICT_SQL)
                .map_err(|e| PipelineError::database("prepare insert", e))?;

            for district in districts {
                stmt.execute(named_params! {
                    ":id": district.id(),
                    ":name": district.name(),
                })
                .map_err(|e| PipelineError::database(format!("insert district {}", district.id()), e))?;
                progress.inc(1);
            }
        }

        tx.commit()
            .map_err(|e| PipelineError::database("commit transaction", e))?;
        progress.finish_and_clear();

        info!(rows = districts.len(), "committed districts");
        Ok(districts.len())
    }

    /// Number of rows currently in the table.
    pub fn count(&self) -> PipelineResult<u64> {
        self.conn
            .query_row(COUNT_DISTRICTS_SQL, [], |row| row.get::<_, i64>(0))
            .map(|n| n as u64)
            .map_err(|e| PipelineError::database("count districts", e))
    }

    /// All rows ordered by ID.
    pub fn load_all(&self) -> PipelineResult<Vec<District>> {
        let mut stmt = self
            .conn
            .prepare(SELECT_DISTRICTS_SQL)
            .map_err(|e| PipelineError::database("prepare select", e))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(District::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(|e| PipelineError::database("select districts", e))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| PipelineError::database("read district row", e))
    }
}

/// Open the database at `path`, insert all districts in one transaction, close.
pub fn write_database(path: &Path, districts: &[District]) -> PipelineResult<usize> {
    let mut store = DistrictStore::open(path)?;
    store.insert_all(districts)
}
