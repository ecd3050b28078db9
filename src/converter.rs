//! Batch phrasing of CSV amount rows.
//!
//! Reads `amount,currency` rows in streaming fashion and writes each phrased
//! row as soon as it is produced, so memory use does not grow with the input.

use crate::error::Result;
use crate::record::{AmountInWords, AmountRecord};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::{debug, warn};
use std::io::{Read, Write};

/// Output columns, in the field order of [`AmountInWords`].
const HEADER: [&str; 3] = ["amount", "currency", "amount_in_word"];

/// Phrases amounts read from CSV and writes them out as CSV.
///
/// Rows that cannot be parsed or phrased are logged at warn level and
/// skipped; the rest of the stream is still processed. Output rows keep the
/// input order.
pub struct Converter<W: Write> {
    /// Output sink; the header is written on creation.
    writer: csv::Writer<W>,

    /// Number of phrased rows written so far.
    rows_written: usize,
}

impl<W: Write> Converter<W> {
    /// Creates a converter writing to `writer` and emits the header row.
    ///
    /// The header is written even if no rows follow.
    pub fn new(writer: W) -> Result<Self> {
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
        csv_writer.write_record(HEADER)?;

        Ok(Converter {
            writer: csv_writer,
            rows_written: 0,
        })
    }

    /// Processes amount rows from a CSV reader, writing each phrased row.
    ///
    /// Only output failures are returned as errors.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<AmountRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => match record.parse() {
                    Some((amount, currency)) => match AmountInWords::new(amount, currency) {
                        Ok(words) => self.write_row(&words, row_num)?,
                        Err(e) => warn!("Row {}: {}", row_num, e),
                    },
                    None => warn!("Row {}: Missing amount or currency", row_num),
                },
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    /// Flushes buffered output rows to the underlying writer.
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of phrased rows written so far.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    fn write_row(&mut self, words: &AmountInWords, row: usize) -> Result<()> {
        self.writer.serialize(words)?;
        self.rows_written += 1;
        debug!(
            "Row {}: {} {} -> {}",
            row, words.amount, words.currency, words.amount_in_word
        );
        Ok(())
    }
}
