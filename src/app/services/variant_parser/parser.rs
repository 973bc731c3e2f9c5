//! Core variant parser implementation
//!
//! This module provides the parser entry point, handling input file
//! location, lazy line iteration, progress reporting and the end-of-run skip
//! summary.

use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use super::line_counter::{count_lines, count_reader_lines};
use super::record_parser::parse_line;
use super::stats::{ParseStats, SkipReason};
use crate::app::models::VariantRecord;
use crate::config::ParserConfig;
use crate::constants::PROGRESS_TEMPLATE;
use crate::{Error, Result};

/// Parser for delimited variant files
///
/// The parser itself holds only configuration. Each call to
/// [`VariantParser::load_data`] opens the input afresh and returns an
/// independent, forward-only [`VariantRecords`] iterator.
#[derive(Debug, Clone)]
pub struct VariantParser {
    config: ParserConfig,
}

impl VariantParser {
    /// Create a parser after validating its configuration
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Path of the input file inside `data_folder`
    pub fn input_path(&self, data_folder: &Path) -> PathBuf {
        data_folder.join(&self.config.filename)
    }

    /// Open the configured file in `data_folder` and stream its records
    ///
    /// Fails with [`Error::FileNotFound`] before any line is read when the
    /// file is missing.
    pub fn load_data(&self, data_folder: impl AsRef<Path>) -> Result<VariantRecords> {
        let input_file = self.input_path(data_folder.as_ref());

        if !input_file.is_file() {
            error!("Cannot find input file: {}", input_file.display());
            return Err(Error::file_not_found(input_file.display().to_string()));
        }

        // Total line count drives the progress percentage
        let total_lines = count_lines(&input_file)?;

        let file = File::open(&input_file).map_err(|e| {
            Error::io(format!("Failed to open {}", input_file.display()), e)
        })?;

        info!("start reading file: {}", self.config.filename);
        debug!(
            "{} has {} lines, delimiter {:?}",
            input_file.display(),
            total_lines,
            self.config.delimiter
        );

        Ok(VariantRecords::new(
            BufReader::new(file),
            self.config.clone(),
            total_lines,
        ))
    }

    /// Stream records from in-memory content
    pub fn parse_str<'a>(&self, content: &'a str) -> VariantRecords<&'a [u8]> {
        let bytes = content.as_bytes();
        // Counting a byte slice cannot fail
        let total_lines = count_reader_lines(bytes).unwrap_or(0);
        VariantRecords::new(bytes, self.config.clone(), total_lines)
    }

    /// Stream records from any buffered reader with a known line count
    pub fn parse_reader<R: BufRead>(&self, reader: R, total_lines: usize) -> VariantRecords<R> {
        VariantRecords::new(reader, self.config.clone(), total_lines)
    }
}

/// Lazy iterator over the records of one input
///
/// Yields `Ok(record)` for every valid data line. Comment, blank and
/// malformed lines are logged and recorded in [`ParseStats`] instead. A read
/// failure is yielded once as `Err` and ends the iteration. The underlying
/// reader is released when the iterator is dropped.
#[derive(Debug)]
pub struct VariantRecords<R = BufReader<File>> {
    reader: R,
    config: ParserConfig,
    stats: ParseStats,
    buffer: String,
    progress: ProgressBar,
    finished: bool,
}

impl<R: BufRead> VariantRecords<R> {
    fn new(reader: R, config: ParserConfig, total_lines: usize) -> Self {
        let progress = if config.show_progress {
            let pb = ProgressBar::new(total_lines as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(PROGRESS_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb.set_message(config.filename.clone());
            pb
        } else {
            ProgressBar::hidden()
        };

        Self {
            reader,
            config,
            stats: ParseStats::new(total_lines),
            buffer: String::new(),
            progress,
            finished: false,
        }
    }

    /// Statistics of the lines consumed so far
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Consume the remaining lines, discarding records, and return final statistics
    pub fn finish(mut self) -> Result<ParseStats> {
        for record in self.by_ref() {
            record?;
        }
        Ok(std::mem::take(&mut self.stats))
    }

    /// Log the skip summary once the input is exhausted
    fn complete(&mut self) {
        self.finished = true;
        self.progress.finish_and_clear();

        info!(
            "parse completed, {}/{} lines skipped.",
            self.stats.skipped_count(),
            self.stats.total_lines
        );
        for skipped in &self.stats.skipped {
            info!("skipped line: {}", skipped.content);
        }
    }
}

impl<R: BufRead> Iterator for VariantRecords<R> {
    type Item = Result<VariantRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => {
                    self.complete();
                    return None;
                }
                Ok(_) => {}
                Err(e) => {
                    self.finished = true;
                    self.progress.abandon();
                    let line_number = self.stats.lines_read + 1;
                    error!("failed to read line {}: {}", line_number, e);
                    return Some(Err(Error::io(
                        format!("Failed to read line {}", line_number),
                        e,
                    )));
                }
            }

            // Every line counts towards progress, including the ones skipped below
            self.stats.lines_read += 1;
            let line_number = self.stats.lines_read;
            self.progress.inc(1);
            debug!(
                "reading line {} ({:.2}%)",
                line_number,
                self.stats.progress_percent()
            );

            let line = self.buffer.trim_end_matches(['\n', '\r']);
            match parse_line(line, &self.config) {
                Ok(record) => {
                    self.stats.records_emitted += 1;
                    return Some(Ok(record));
                }
                Err(reason) => {
                    log_skip(line_number, line, &reason);
                    self.stats.record_skip(line_number, line.trim(), reason);
                }
            }
        }
    }
}

impl<R: BufRead> FusedIterator for VariantRecords<R> {}

impl<R> Drop for VariantRecords<R> {
    fn drop(&mut self) {
        if !self.finished {
            debug!(
                "stopped reading {} after {} of {} lines",
                self.config.filename, self.stats.lines_read, self.stats.total_lines
            );
            self.progress.abandon();
        }
    }
}

fn log_skip(line_number: usize, line: &str, reason: &SkipReason) {
    match reason {
        SkipReason::Comment | SkipReason::Blank => {
            debug!("skipping line {} ({})", line_number, reason);
        }
        SkipReason::FieldCount { fields, .. } => {
            warn!("failed to unpack line {}: {}", line_number, line);
            warn!("got: {:?}", fields);
        }
        SkipReason::InvalidValue { .. } => {
            warn!("failed to cast type for line {}: {} ({})", line_number, line, reason);
        }
    }
}
