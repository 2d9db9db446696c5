//! Workforce analytics over the personnel dataset the prediction model was trained on.
//!
//! The CSV is read once with serde rows and reduced to four chart-ready series:
//! headcount by rank, an age histogram, service years against mission success,
//! and mission success spread per rank. A missing file is a normal state, not an error.

pub mod handlers;

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Number of bins in the age histogram.
pub const AGE_BINS: usize = 15;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("dataset could not be opened: {0}")]
    Io(#[from] io::Error),

    #[error("dataset is malformed: {0}")]
    Csv(#[from] csv::Error),
}

/// One personnel record. Columns not listed here are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatasetRow {
    pub rank: String,
    pub age: u32,
    pub years_of_service: u32,
    pub mission_success_rate: f64,
    #[serde(default)]
    pub attrition_risk: Option<String>,
    #[serde(default)]
    pub leadership_potential: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicePoint {
    pub years_of_service: u32,
    pub mission_success_rate: f64,
}

/// Five-number summary of mission success for one rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankSpread {
    pub rank: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkforceAnalytics {
    pub total_personnel: usize,
    /// Most common rank first; this order is reused by `mission_success_by_rank`.
    pub rank_distribution: Vec<LabelCount>,
    pub age_histogram: Vec<HistogramBin>,
    pub service_vs_mission: Vec<ServicePoint>,
    pub mission_success_by_rank: Vec<RankSpread>,
    pub attrition_risk_distribution: Vec<LabelCount>,
    pub leadership_potential_distribution: Vec<LabelCount>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalyticsState {
    Loaded { analytics: WorkforceAnalytics },
    NotLoaded { message: String },
}

/// Reads the dataset. `Ok(None)` when the file does not exist.
pub fn load_dataset(path: &Path) -> Result<Option<Vec<DatasetRow>>, AnalyticsError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<DatasetRow>, csv::Error>>()?;

    info!("Loaded {} personnel records from {}", rows.len(), path.display());
    Ok(Some(rows))
}

pub fn summarize(rows: &[DatasetRow]) -> WorkforceAnalytics {
    let rank_distribution = count_labels(rows.iter().map(|r| r.rank.clone()));

    let mission_success_by_rank = rank_distribution
        .iter()
        .map(|rc| {
            let mut rates: Vec<f64> = rows
                .iter()
                .filter(|r| r.rank == rc.label)
                .map(|r| r.mission_success_rate)
                .collect();
            rates.sort_by(f64::total_cmp);
            RankSpread {
                rank: rc.label.clone(),
                count: rates.len(),
                min: rates[0],
                q1: quantile(&rates, 0.25),
                median: quantile(&rates, 0.5),
                q3: quantile(&rates, 0.75),
                max: rates[rates.len() - 1],
            }
        })
        .collect();

    WorkforceAnalytics {
        total_personnel: rows.len(),
        age_histogram: age_histogram(rows),
        service_vs_mission: rows
            .iter()
            .map(|r| ServicePoint {
                years_of_service: r.years_of_service,
                mission_success_rate: r.mission_success_rate,
            })
            .collect(),
        mission_success_by_rank,
        attrition_risk_distribution: count_labels(
            rows.iter()
                .filter_map(|r| r.attrition_risk.as_deref())
                .map(title_case),
        ),
        leadership_potential_distribution: count_labels(
            rows.iter()
                .filter_map(|r| r.leadership_potential.as_deref())
                .map(title_case),
        ),
        rank_distribution,
    }
}

/// Counts occurrences, most frequent first, ties by label.
fn count_labels(labels: impl Iterator<Item = String>) -> Vec<LabelCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let mut out: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount { label, count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    out
}

/// Equal-width bins spanning the observed ages; the last bin is closed.
fn age_histogram(rows: &[DatasetRow]) -> Vec<HistogramBin> {
    let (Some(min), Some(max)) = (
        rows.iter().map(|r| r.age).min(),
        rows.iter().map(|r| r.age).max(),
    ) else {
        return Vec::new();
    };

    let (min, max) = (min as f64, max as f64);
    let width = if max > min {
        (max - min) / AGE_BINS as f64
    } else {
        1.0
    };

    let mut bins: Vec<HistogramBin> = (0..AGE_BINS)
        .map(|i| HistogramBin {
            start: min + width * i as f64,
            end: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for row in rows {
        let idx = (((row.age as f64 - min) / width) as usize).min(AGE_BINS - 1);
        bins[idx].count += 1;
    }
    bins
}

/// Linear-interpolated quantile of a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// "very HIGH" -> "Very High".
fn title_case(label: &str) -> String {
    label
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
