//! Streaming validation of delimited files of identity numbers.
//!
//! Rows are read one at a time, so arbitrarily large files can be checked
//! without loading them into memory. A rejected identity number is reported
//! in [`BatchRecord::outcome`]; only I/O and file-structure problems surface
//! as [`BatchError`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

use csv::{ByteRecord, Reader, ReaderBuilder};
use sa_id_types::{Gender, SaIdNumber};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::types::{
    BatchConfig, BatchError, BatchResult, BatchStats, IdColumn, ValidationError,
    ValidationResult,
};
use crate::validator::validate;

/// Outcome of validating one row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchRecord {
    /// One-based line number in the input.
    pub line: u64,
    /// The raw field value.
    pub input: String,
    /// The decoded number, or why it was rejected.
    pub outcome: Result<SaIdNumber, ValidationError>,
}

impl BatchRecord {
    /// Returns true if the row passed every check.
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// A streaming validator over a delimited file.
///
/// # Example
///
/// ```
/// use sa_id_validator::{BatchConfig, BatchValidator};
///
/// let input = "id\n2001014800086\n2001014800087\n";
/// let validator = BatchValidator::from_reader(input.as_bytes(), BatchConfig::default()).unwrap();
/// let (records, stats) = validator.validate_all().unwrap();
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(stats.valid, 1);
/// assert_eq!(stats.invalid, 1);
/// ```
pub struct BatchValidator<R: Read> {
    reader: Reader<R>,
    config: BatchConfig,
    column: usize,
    stats: BatchStats,
    started: Instant,
}

impl BatchValidator<BufReader<File>> {
    /// Opens a batch validator on a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or the ID column cannot
    /// be resolved from its header.
    pub fn from_path<P: AsRef<Path>>(path: P, config: BatchConfig) -> BatchResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BatchError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        tracing::debug!(path = %path.display(), "opened batch input");
        Self::from_reader(BufReader::new(file), config)
    }
}

impl<R: Read> BatchValidator<R> {
    /// Creates a batch validator from a reader.
    pub fn from_reader(reader: R, config: BatchConfig) -> BatchResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(config.delimiter)
            .has_headers(config.has_headers)
            .flexible(true)
            .trim(csv::Trim::None)
            .from_reader(reader);

        let column = Self::resolve_column(&mut csv_reader, &config)?;
        tracing::debug!(
            column,
            delimiter = %char::from(config.delimiter).escape_default(),
            "batch column resolved"
        );

        Ok(Self {
            reader: csv_reader,
            config,
            column,
            stats: BatchStats::default(),
            started: Instant::now(),
        })
    }

    fn resolve_column(reader: &mut Reader<R>, config: &BatchConfig) -> BatchResult<usize> {
        match &config.column {
            IdColumn::Index(index) => Ok(*index),
            IdColumn::Name(name) => {
                if !config.has_headers {
                    return Err(BatchError::HeadersRequired {
                        column: name.clone(),
                    });
                }
                let headers = reader.headers()?;
                headers
                    .iter()
                    // Handle UTF-8 BOM at start of file
                    .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
                    .ok_or_else(|| BatchError::MissingColumn {
                        column: name.clone(),
                    })
            }
        }
    }

    /// Returns the batch configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Returns the zero-based index of the ID column.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the statistics gathered so far.
    pub fn stats(&self) -> &BatchStats {
        &self.stats
    }

    fn finish(mut self) -> BatchStats {
        self.stats.elapsed_ms = self.started.elapsed().as_millis() as u64;
        tracing::debug!(
            total = self.stats.total,
            valid = self.stats.valid,
            invalid = self.stats.invalid,
            skipped = self.stats.skipped,
            elapsed_ms = self.stats.elapsed_ms,
            "batch validation finished"
        );
        self.stats
    }

    /// Validates every row, returning the records and final statistics.
    ///
    /// Note: This keeps all records in memory.
    pub fn validate_all(mut self) -> BatchResult<(Vec<BatchRecord>, BatchStats)> {
        let mut records = Vec::new();
        for record in self.by_ref() {
            records.push(record?);
        }
        Ok((records, self.finish()))
    }

    /// Validates rows in batches of `batch_size`, calling the callback for
    /// each batch.
    pub fn validate_batched<F>(mut self, mut callback: F) -> BatchResult<BatchStats>
    where
        F: FnMut(Vec<BatchRecord>) -> BatchResult<()>,
    {
        let batch_size = self.config.batch_size.max(1);
        let mut batch = Vec::with_capacity(batch_size);

        for record in self.by_ref() {
            batch.push(record?);
            if batch.len() >= batch_size {
                callback(std::mem::replace(&mut batch, Vec::with_capacity(batch_size)))?;
            }
        }

        if !batch.is_empty() {
            callback(batch)?;
        }

        Ok(self.finish())
    }

    fn record_outcome(&mut self, line: u64, outcome: &ValidationResult<SaIdNumber>) {
        self.stats.total += 1;
        match outcome {
            Ok(number) => {
                self.stats.valid += 1;
                match number.gender() {
                    Gender::Female => self.stats.female += 1,
                    Gender::Male => self.stats.male += 1,
                    Gender::Unknown => {}
                }
            }
            Err(err) => {
                self.stats.invalid += 1;
                // Identity numbers are personal data; log position and reason only.
                tracing::trace!(line, stage = %err.stage(), reason = %err, "rejected");
            }
        }
    }
}

impl<R: Read> Iterator for BatchValidator<R> {
    type Item = BatchResult<BatchRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = ByteRecord::new();
            match self.reader.read_byte_record(&mut record) {
                Ok(true) => {
                    let line = record.position().map_or(0, |p| p.line());

                    let Some(field) = record.get(self.column) else {
                        // A short row with only blank fields is a blank row.
                        if self.config.skip_blank && record.iter().all(is_blank) {
                            self.stats.skipped += 1;
                            continue;
                        }
                        return Some(Err(BatchError::ColumnOutOfRange {
                            line,
                            index: self.column,
                            width: record.len(),
                        }));
                    };

                    if self.config.skip_blank && is_blank(field) {
                        self.stats.skipped += 1;
                        continue;
                    }

                    // Undecodable bytes become U+FFFD and fail the format check.
                    let input = String::from_utf8_lossy(field).into_owned();
                    let outcome = validate(Some(&input));
                    self.record_outcome(line, &outcome);
                    return Some(Ok(BatchRecord {
                        line,
                        input,
                        outcome,
                    }));
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

fn is_blank(field: &[u8]) -> bool {
    String::from_utf8_lossy(field).trim().is_empty()
}

/// Validates a slice of identity numbers in order.
pub fn validate_many<S: AsRef<str>>(ids: &[S]) -> Vec<ValidationResult<SaIdNumber>> {
    ids.iter().map(|id| validate(Some(id.as_ref()))).collect()
}

/// Validates a slice of identity numbers across rayon's thread pool.
///
/// Results are in input order. Validation shares no state, so no locking is
/// involved.
#[cfg(feature = "parallel")]
pub fn validate_many_parallel<S: AsRef<str> + Sync>(
    ids: &[S],
) -> Vec<ValidationResult<SaIdNumber>> {
    ids.par_iter().map(|id| validate(Some(id.as_ref()))).collect()
}
