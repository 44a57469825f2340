//! Detection reports: a self-describing record of one run, exportable as
//! JSON (round-trippable, schema-versioned) or as a CSV point list.
//!
//! Two BLAKE3 fingerprints identify the run:
//! - `config_hash`: canonical JSON of the analysis config
//! - `dataset_hash`: little-endian bytes of the raw samples

use crate::config::AnalysisConfig;
use crate::domain::{ExtremaResult, ExtremaType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer: {0}")]
    Buffer(String),

    #[error("unsupported schema version {found} (max supported: {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },
}

/// One confirmed extremum with the sample value it was found at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportPoint {
    pub index: usize,
    pub kind: ExtremaType,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    pub config: AnalysisConfig,
    pub config_hash: String,
    pub dataset_hash: String,
    pub sample_count: usize,
    pub result: ExtremaResult,
    /// Interleaved extrema; values come from the series the engine saw
    /// (smoothed, when smoothing is configured).
    pub points: Vec<ReportPoint>,
}

impl DetectionReport {
    /// Build a report. `raw` feeds the dataset hash, `analysed` supplies the
    /// point values.
    pub fn new(config: &AnalysisConfig, raw: &[f64], analysed: &[f64], result: ExtremaResult) -> Self {
        let points = result
            .points()
            .into_iter()
            .filter_map(|p| {
                let index = usize::try_from(p.index).ok()?;
                let value = *analysed.get(index)?;
                Some(ReportPoint {
                    index,
                    kind: p.kind,
                    value,
                })
            })
            .collect();

        Self {
            schema_version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            config: config.clone(),
            config_hash: config_hash(config),
            dataset_hash: dataset_hash(raw),
            sample_count: raw.len(),
            result,
            points,
        }
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a report, rejecting schema versions newer than this build.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(json)?;
        if report.schema_version > SCHEMA_VERSION {
            return Err(ReportError::UnsupportedSchema {
                found: report.schema_version,
                supported: SCHEMA_VERSION,
            });
        }
        Ok(report)
    }

    /// `index,kind,value` rows in index order.
    pub fn points_csv(&self) -> Result<String, ReportError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(["index", "kind", "value"])?;
        for p in &self.points {
            wtr.write_record([
                p.index.to_string(),
                p.kind.to_string(),
                format!("{:.6}", p.value),
            ])?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| ReportError::Buffer(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ReportError::Buffer(e.to_string()))
    }
}

/// BLAKE3 of the config's canonical JSON.
pub fn config_hash(config: &AnalysisConfig) -> String {
    // Struct fields serialize in declaration order, so the JSON is stable.
    let json = serde_json::to_string(config).unwrap_or_default();
    blake3::hash(json.as_bytes()).to_hex().to_string()
}

/// BLAKE3 of the samples as little-endian f64 bytes.
pub fn dataset_hash(samples: &[f64]) -> String {
    let mut hasher = blake3::Hasher::new();
    for v in samples {
        hasher.update(&v.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}
