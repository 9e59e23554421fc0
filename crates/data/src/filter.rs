use chrono::NaiveDate;

use crate::record::Record;

/// Restricts a dataset to an inclusive date window.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordFilter {
    pub(crate) from: Option<NaiveDate>,
    pub(crate) to: Option<NaiveDate>,
}

impl RecordFilter {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub(crate) fn by_date(&self, record: &Record) -> bool {
        let date = record.date();

        match (self.from, self.to) {
            (None, None) => true,
            (None, Some(ref to)) => date.le(to),
            (Some(ref from), None) => date.ge(from),
            (Some(ref from), Some(ref to)) => date.ge(from) && date.le(to),
        }
    }
}
