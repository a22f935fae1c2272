//! Benchmark results table
//!
//! One [`Record`] per `(Cipher, Operation, Filename)` measurement, loaded verbatim
//! from the CSV written by the cipher benchmark. Cipher and operation labels are
//! kept as sorted [`Categories`] so every chart orders and colors them the same way.

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs::{read, try_exists};
use tracing::{debug, warn};

use crate::util::{find_duplicates, unique_in_order};

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("{} not found.", path.display())]
    MissingInput { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse benchmark results: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid filename marker {marker:?}: {source}")]
    InvalidMarker {
        marker: String,
        #[source]
        source: regex::Error,
    },
}

type Result<T> = core::result::Result<T, DatasetError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Cipher")]
    pub cipher: String,
    #[serde(rename = "Operation")]
    pub operation: String,
    #[serde(rename = "Filename")]
    pub filename: String,
    #[serde(rename = "FileSize(Bytes)", default)]
    pub file_size: Option<u64>,
    #[serde(rename = "Runs", default)]
    pub runs: Option<u32>,
    #[serde(rename = "MeanTime(ms)")]
    pub mean_time_ms: f64,
    #[serde(rename = "StdDev(ms)")]
    pub stddev_ms: f64,
    #[serde(rename = "Throughput(MB/s)")]
    pub throughput_mbps: f64,
}

impl Record {
    /// Timing deviation carried over to the throughput scale:
    /// `throughput / mean_time * stddev`.
    ///
    /// `None` when the mean time is zero or the result is not finite.
    pub fn throughput_stddev(&self) -> Option<f64> {
        if self.mean_time_ms == 0.0 {
            return None;
        }
        let value = self.throughput_mbps / self.mean_time_ms * self.stddev_ms;
        value.is_finite().then_some(value)
    }

    pub fn key(&self) -> (&str, &str, &str) {
        (&self.cipher, &self.operation, &self.filename)
    }
}

/// Ordered, duplicate free set of labels
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Categories(Vec<String>);

impl Categories {
    /// Lexicographically sorted labels
    pub fn sorted<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        Self(
            labels
                .into_iter()
                .sorted_unstable()
                .dedup()
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Labels in order of first appearance
    pub fn in_order<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        Self(
            unique_in_order(labels)
                .into_iter()
                .map(str::to_owned)
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    ciphers: Categories,
    operations: Categories,
}

impl Dataset {
    /// Reads the benchmark results CSV at `path`
    ///
    /// Fails with [`DatasetError::MissingInput`] before touching the file if it does not exist.
    pub async fn load(path: &Path) -> Result<Self> {
        let exists = try_exists(path).await.map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if !exists {
            return Err(DatasetError::MissingInput {
                path: path.to_path_buf(),
            });
        }

        let data = read(path).await.map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(data.as_slice())?;
        debug!(
            "Loaded {} records from {}: ciphers {:?}, operations {:?}",
            dataset.records.len(),
            path.display(),
            dataset.ciphers.as_slice(),
            dataset.operations.as_slice()
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let records = reader
            .deserialize()
            .collect::<core::result::Result<Vec<Record>, _>>()?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        let ciphers = Categories::sorted(records.iter().map(|r| r.cipher.as_str()));
        let operations = Categories::sorted(records.iter().map(|r| r.operation.as_str()));
        let dataset = Self {
            records,
            ciphers,
            operations,
        };
        for (cipher, operation, filename) in dataset.duplicate_keys() {
            warn!("Duplicate results for {cipher} {operation} {filename}, using the first row");
        }
        for record in &dataset.records {
            if let (Some(size), Some(runs)) = (record.file_size, record.runs) {
                debug!(
                    "{} {} {}: {size} bytes over {runs} runs",
                    record.cipher, record.operation, record.filename
                );
            }
        }
        dataset
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn ciphers(&self) -> &Categories {
        &self.ciphers
    }

    pub fn operations(&self) -> &Categories {
        &self.operations
    }

    /// Distinct filenames in order of first appearance
    pub fn filenames(&self) -> Categories {
        Categories::in_order(self.records.iter().map(|r| r.filename.as_str()))
    }

    /// First row for the given key
    pub fn find(&self, cipher: &str, operation: &str, filename: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.key() == (cipher, operation, filename))
    }

    /// Keys that occur on more than one row
    pub fn duplicate_keys(&self) -> Vec<(String, String, String)> {
        find_duplicates(self.records.iter().map(Record::key))
            .into_iter()
            .map(|(c, o, f)| (c.to_owned(), o.to_owned(), f.to_owned()))
            .collect()
    }

    /// Copy of the rows whose filename contains a match of the `marker` regex
    pub fn filter_filename(&self, marker: &str) -> Result<Subset> {
        let regex = Regex::new(marker).map_err(|source| DatasetError::InvalidMarker {
            marker: marker.to_owned(),
            source,
        })?;
        Ok(self.subset(|r| regex.is_match(&r.filename)))
    }

    /// Copy of the rows with exactly this filename
    pub fn for_filename(&self, filename: &str) -> Subset {
        self.subset(|r| r.filename == filename)
    }

    fn subset(&self, filter: impl Fn(&Record) -> bool) -> Subset {
        Subset {
            records: self.records.iter().filter(|r| filter(r)).cloned().collect(),
            ciphers: self.ciphers.clone(),
            operations: self.operations.clone(),
        }
    }
}

/// Filtered copy of a [`Dataset`]
///
/// Keeps the label sets of the full dataset, so bars line up across charts even when
/// a cipher or operation has no rows in the subset.
#[derive(Debug, Clone, Default)]
pub struct Subset {
    records: Vec<Record>,
    ciphers: Categories,
    operations: Categories,
}

impl Subset {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn ciphers(&self) -> &Categories {
        &self.ciphers
    }

    pub fn operations(&self) -> &Categories {
        &self.operations
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The derived `Throughput_StdDev` column, aligned with [`Subset::records`]
    pub fn throughput_stddev(&self) -> Vec<Option<f64>> {
        self.records.iter().map(Record::throughput_stddev).collect()
    }
}
