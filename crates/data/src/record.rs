use chrono::Datelike;
use chrono::NaiveDate;

use crate::error::ParseError;
use crate::raw::RawRecord;
use crate::raw::RawValue;

/// The date format of the raw records, e.g. `1990-10-01`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single GDP measurement.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Record {
    date: NaiveDate,
    value: f64,
}

impl Record {
    pub fn new(date: NaiveDate, value: f64) -> Record {
        Self { date, value }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// The zero-based month of the measurement, January being `0`.
    pub fn month0(&self) -> u32 {
        self.date.month0()
    }

    pub(crate) fn from_raw(index: usize, raw: &RawRecord) -> Result<Record, ParseError> {
        let RawRecord(date, value) = raw;

        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|error| {
            ParseError::Date {
                index,
                input: date.clone(),
                error,
            }
        })?;

        let value_err = || ParseError::Value {
            index,
            input: value.to_string(),
        };
        let value = match value {
            RawValue::Number(n) => *n,
            RawValue::Text(s) => s.trim().parse::<f64>().map_err(|_| value_err())?,
        };

        if !value.is_finite() {
            return Err(value_err());
        }

        Ok(Record { date, value })
    }
}

/// Parses every raw record, preserving the input order.
///
/// Fails on the first record whose date or value cannot be parsed.
pub fn parse(raw: &[RawRecord]) -> Result<Vec<Record>, ParseError> {
    raw.iter()
        .enumerate()
        .map(|(index, record)| Record::from_raw(index, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_preserves_length_and_order() -> Result<(), ParseError> {
        let raw = vec![
            RawRecord::new("1990-10-01", "5000"),
            RawRecord::new("1991-01-01", 5200.0),
            RawRecord::new("1991-04-01", " 5310.5 "),
        ];

        let records = parse(&raw)?;

        assert_eq!(records.len(), raw.len());
        assert_eq!(records[0].date(), NaiveDate::from_ymd_opt(1990, 10, 1).unwrap());
        assert_eq!(records[0].value(), 5000.0);
        assert_eq!(records[0].month0(), 9);
        assert_eq!(records[1].date(), NaiveDate::from_ymd_opt(1991, 1, 1).unwrap());
        assert_eq!(records[1].value(), 5200.0);
        assert_eq!(records[1].month0(), 0);
        assert_eq!(records[2].value(), 5310.5);

        Ok(())
    }

    #[test]
    fn parse_rejects_malformed_date() {
        let raw = vec![
            RawRecord::new("1990-10-01", 1.0),
            RawRecord::new("10/01/1990", 2.0),
        ];

        match parse(&raw) {
            Err(ParseError::Date { index, input, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(input, "10/01/1990");
            }
            other => panic!("expected a date error, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_padded_date() {
        let raw = vec![RawRecord::new(" 1990-10-01 ", 1.0)];

        match parse(&raw) {
            Err(ParseError::Date { index, input, .. }) => {
                assert_eq!(index, 0);
                assert_eq!(input, " 1990-10-01 ");
            }
            other => panic!("expected a date error, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_non_numeric_value() {
        let raw = vec![RawRecord::new("1990-10-01", "n/a")];

        match parse(&raw) {
            Err(ParseError::Value { index, input }) => {
                assert_eq!(index, 0);
                assert_eq!(input, "n/a");
            }
            other => panic!("expected a value error, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_non_finite_value() {
        let raw = vec![RawRecord::new("1990-10-01", "inf")];

        assert!(matches!(parse(&raw), Err(ParseError::Value { .. })));
    }

    #[test]
    fn parse_empty_input() -> Result<(), ParseError> {
        assert!(parse(&[])?.is_empty());
        Ok(())
    }
}
