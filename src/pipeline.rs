use serde::Serialize;
use tracing::{info, instrument};

use crate::cleaner;
use crate::error::Result;
use crate::types::{CleanedTable, IncidentSource};

/// Counts describing one complete run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub source: String,
    pub fetched_rows: usize,
    pub cleaned_rows: usize,
    pub quarantined_rows: usize,
}

/// Everything a run hands back: the cleaned table plus its counts.
#[derive(Debug)]
pub struct PipelineRun {
    pub table: CleanedTable,
    pub summary: RunSummary,
}

pub struct Pipeline;

impl Pipeline {
    /// Run one fetch-then-clean pass against `source`. The stages are
    /// strictly sequential and the first error aborts the run; there is no
    /// retry and no partial output.
    #[instrument(skip(source), fields(source = %source.source_id()))]
    pub async fn run(source: &dyn IncidentSource, limit: u32) -> Result<PipelineRun> {
        let source_id = source.source_id();

        // Step 1: one bounded fetch
        info!("starting fetch");
        println!("📡 Accessing {source_id}...");
        println!("⬇️  Requesting up to {limit} rows...");
        let raw = source.fetch_raw(limit).await?;
        info!(rows = raw.len(), "fetch complete");
        println!("✅ Fetched {} raw rows", raw.len());

        // Step 2: clean
        println!("🧹 Cleaning...");
        let table = cleaner::clean(&raw)?;

        let summary = RunSummary {
            source: source_id,
            fetched_rows: raw.len(),
            cleaned_rows: table.incidents.len(),
            quarantined_rows: table.quarantined.len(),
        };
        Ok(PipelineRun { table, summary })
    }
}
