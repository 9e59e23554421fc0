//! Parsing of historical GDP series into typed, chronologically ordered records.
//!
//! **WARNING**: This library is gdpchart's internal library and there are no
//! plans to stabilize it. The API may break at any time without notice.

mod filter;
mod record;

pub mod error;
pub mod raw;

use std::io::Read;

use chrono::NaiveDate;

pub use crate::filter::RecordFilter;
pub use crate::record::DATE_FORMAT;
pub use crate::record::Record;
pub use crate::record::parse;

use crate::error::ParseError;
use crate::raw::RawPayload;

/// A non-empty sequence of GDP records in source order.
///
/// The records are never re-sorted; the source is expected to list
/// them chronologically.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Result<Dataset, ParseError> {
        if records.is_empty() {
            return Err(ParseError::EmptyDataset);
        }

        Ok(Self {
            records,
            name: None,
            description: None,
        })
    }

    pub fn from_payload(payload: &RawPayload) -> Result<Dataset, ParseError> {
        let records = parse(&payload.data)?;
        let mut dataset = Dataset::new(records)?;
        dataset.name = payload.name.clone();
        dataset.description = payload.description.clone();

        Ok(dataset)
    }

    pub fn from_json(json: &str) -> Result<Dataset, ParseError> {
        let payload: RawPayload = serde_json::from_str(json)?;
        Dataset::from_payload(&payload)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, ParseError> {
        let payload: RawPayload = serde_json::from_reader(reader)?;
        Dataset::from_payload(&payload)
    }

    /// Keeps only the records inside the filter's date window.
    pub fn filter(self, filter: &RecordFilter) -> Result<Dataset, ParseError> {
        let records = self
            .records
            .into_iter()
            .filter(|r| filter.by_date(r))
            .collect::<Vec<Record>>();

        let mut dataset = Dataset::new(records)?;
        dataset.name = self.name;
        dataset.description = self.description;

        Ok(dataset)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The earliest and the latest date of the dataset.
    pub fn date_extent(&self) -> (NaiveDate, NaiveDate) {
        let first = self.records[0].date();

        self.records
            .iter()
            .fold((first, first), |(min, max), r| (min.min(r.date()), max.max(r.date())))
    }

    /// The smallest and the largest value of the dataset.
    pub fn value_extent(&self) -> (f64, f64) {
        let first = self.records[0].value();

        self.records
            .iter()
            .fold((first, first), |(min, max), r| (min.min(r.value()), max.max(r.value())))
    }
}
