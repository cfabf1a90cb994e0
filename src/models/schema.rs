use crate::errors::LoadTrendError;
use super::record::ReportRecord;

/// A column every report file must expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Samples,
    Label,
    Throughput,
    Average,
    Median,
    P90,
    P95,
    P99,
    ReceivedKbps,
    SentKbps,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::Samples,
        Column::Label,
        Column::Throughput,
        Column::Average,
        Column::Median,
        Column::P90,
        Column::P95,
        Column::P99,
        Column::ReceivedKbps,
        Column::SentKbps,
    ];

    /// Header text as written by JMeter's summary report.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Samples => "# Samples",
            Column::Label => "Label",
            Column::Throughput => "Throughput",
            Column::Average => "Average",
            Column::Median => "Median",
            Column::P90 => "90% Line",
            Column::P95 => "95% Line",
            Column::P99 => "99% Line",
            Column::ReceivedKbps => "Received KB/sec",
            Column::SentKbps => "Sent KB/sec",
        }
    }

    fn position(&self) -> usize {
        *self as usize
    }
}

/// Positions of the required columns within one file's header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: [usize; 10],
    width: usize,
}

impl ColumnIndex {
    /// Resolve every required column against a header row. Extra columns are
    /// ignored; when a header repeats a name the first occurrence wins.
    pub fn resolve<S: AsRef<str>>(header: &[S]) -> Result<Self, LoadTrendError> {
        let mut positions = [0usize; 10];
        let mut missing = Vec::new();

        for column in Column::ALL {
            match header.iter().position(|h| h.as_ref().trim() == column.header()) {
                Some(idx) => positions[column.position()] = idx,
                None => missing.push(column.header().to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(LoadTrendError::Schema { missing });
        }

        Ok(Self {
            positions,
            width: header.len(),
        })
    }

    /// Number of fields every data row must carry.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn index_of(&self, column: Column) -> usize {
        self.positions[column.position()]
    }

    /// Coerce one data row into a typed record.
    pub fn record<S: AsRef<str>>(
        &self,
        fields: &[S],
        line: usize,
        source_file: &str,
    ) -> Result<ReportRecord, LoadTrendError> {
        if fields.len() != self.width {
            return Err(LoadTrendError::parse(
                line,
                format!("expected {} fields, found {}", self.width, fields.len()),
            ));
        }

        let cell = |column: Column| fields[self.index_of(column)].as_ref().trim();
        let number = |column: Column| -> Result<f64, LoadTrendError> {
            let raw = cell(column);
            raw.parse::<f64>().map_err(|_| {
                LoadTrendError::parse(
                    line,
                    format!("column '{}' is not numeric: '{}'", column.header(), raw),
                )
            })
        };

        let raw_samples = cell(Column::Samples);
        let samples = raw_samples.parse::<u64>().map_err(|_| {
            LoadTrendError::parse(
                line,
                format!(
                    "column '{}' is not an integer: '{}'",
                    Column::Samples.header(),
                    raw_samples
                ),
            )
        })?;

        Ok(ReportRecord {
            samples,
            label: cell(Column::Label).to_string(),
            throughput: number(Column::Throughput)?,
            average: number(Column::Average)?,
            median: number(Column::Median)?,
            p90: number(Column::P90)?,
            p95: number(Column::P95)?,
            p99: number(Column::P99)?,
            received_kbps: number(Column::ReceivedKbps)?,
            sent_kbps: number(Column::SentKbps)?,
            source_file: source_file.to_string(),
        })
    }
}
