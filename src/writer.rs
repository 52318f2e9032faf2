use std::io::Write;

use crate::config::WriterConfig;
use crate::error::Result;
use crate::value::FieldValue;

/// Phase of a [`CsvWriter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriterState {
    /// Field names are being declared; values are ignored.
    Collecting,
    /// The header is written; values go straight to the sink.
    Emitting,
}

/// Writes statistics as CSV: one header row of field names, then one row per
/// measurement cycle.
///
/// The first cycle declares fields with [`field`](Self::field) and ends with
/// [`close_row`](Self::close_row), which writes the header. Values inserted
/// during that first cycle are dropped. Every later cycle emits values with
/// [`value`](Self::value) in the same order and ends with `close_row`.
///
/// ```
/// use statcsv_rs::CsvWriter;
///
/// let mut out = Vec::new();
/// let mut csv = CsvWriter::new(&mut out);
/// csv.field("Bandwidth").field("Latency");
/// csv.close_row()?;
/// csv.value(1.5)?.value(15)?;
/// csv.close_row()?;
/// drop(csv);
/// assert_eq!(out, b"Bandwidth,Latency,\n1.5,15,\n");
/// # Ok::<(), statcsv_rs::StatCsvError>(())
/// ```
///
/// Both rows keep a trailing comma. Nothing is quoted or escaped.
///
/// The sink is owned by the writer; pass `&mut sink` to keep it with the caller.
#[derive(Debug)]
pub struct CsvWriter<W: Write> {
    output: W,
    config: WriterConfig,
    field_names: Vec<String>,
    state: WriterState,
    pending: usize,
    rows: u64,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(output: W) -> Self {
        Self::with_config(output, WriterConfig::default())
    }

    pub fn with_config(output: W, config: WriterConfig) -> Self {
        Self {
            output,
            config,
            field_names: Vec::new(),
            state: WriterState::Collecting,
            pending: 0,
            rows: 0,
        }
    }

    /// Declare the next column.
    ///
    /// Only recorded before the header is committed; afterwards the name is
    /// discarded, so a cycle may keep naming its values.
    pub fn field(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        match self.state {
            WriterState::Collecting => self.field_names.push(name),
            WriterState::Emitting => tracing::trace!(%name, "header committed, field name ignored"),
        }
        self
    }

    /// Declare several columns in order.
    pub fn fields<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.field(name);
        }
        self
    }

    /// Write one value of the current row.
    ///
    /// Ignored until the header has been committed.
    pub fn value(&mut self, value: impl Into<FieldValue>) -> Result<&mut Self> {
        let value = value.into();
        match self.state {
            WriterState::Collecting => {
                tracing::trace!(%value, "header not committed, value ignored");
            }
            WriterState::Emitting => {
                write!(self.output, "{value},")?;
                self.pending += 1;
            }
        }
        Ok(self)
    }

    /// Write several values of the current row in order.
    pub fn values<I, V>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        for value in values {
            self.value(value)?;
        }
        Ok(self)
    }

    /// End the current cycle.
    ///
    /// The first call writes and flushes the header. Later calls terminate the
    /// data row; a row whose value count differs from the field count is
    /// still written, with a warning.
    ///
    /// On a sink error the state is left unchanged but the sink may already
    /// hold part of the header or row. Do not keep writing to it.
    pub fn close_row(&mut self) -> Result<()> {
        match self.state {
            WriterState::Collecting => {
                for name in &self.field_names {
                    write!(self.output, "{name},")?;
                }
                self.output.write_all(b"\n")?;
                self.output.flush()?;
                self.state = WriterState::Emitting;
                tracing::debug!(fields = self.field_names.len(), "csv header committed");
            }
            WriterState::Emitting => {
                if self.pending != self.field_names.len() {
                    tracing::warn!(
                        fields = self.field_names.len(),
                        values = self.pending,
                        row = self.rows,
                        "number of values doesn't match fields, check each value has a field name"
                    );
                }
                self.pending = 0;
                self.output.write_all(b"\n")?;
                if self.config.flush_rows {
                    self.output.flush()?;
                }
                self.rows += 1;
            }
        }
        Ok(())
    }

    pub fn state(&self) -> WriterState {
        self.state
    }

    pub fn is_header_committed(&self) -> bool {
        self.state == WriterState::Emitting
    }

    /// Column names in header order.
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// Values written to the row that is still open.
    pub fn pending_values(&self) -> usize {
        self.pending
    }

    /// Data rows closed so far, not counting the header.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Settings this writer was built with.
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// The underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.output
    }

    /// The underlying sink, mutably. Writing to it directly breaks the row layout.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Unwrap the sink. An unclosed row stays unterminated.
    pub fn into_inner(self) -> W {
        self.output
    }
}
