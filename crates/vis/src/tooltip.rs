use std::fmt::Display;

use gdpchart_data::DATE_FORMAT;
use gdpchart_data::Record;
use serde::Serialize;

/// A quarter of the calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// Quarterly series are dated on the first month of each quarter
    /// (months 0, 3, 6 and 9); any other month falls into its calendar quarter.
    pub fn from_month0(month0: u32) -> Quarter {
        match month0 / 3 {
            0 => Quarter::Q1,
            1 => Quarter::Q2,
            2 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }
}

impl Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let quarter = match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        };

        f.write_str(quarter)
    }
}

/// The text shown when hovering a bar, e.g. `1990 Q4 5000`.
pub fn format_tooltip(record: &Record) -> String {
    let quarter = Quarter::from_month0(record.month0());
    format!("{} {quarter} {}", record.year(), record.value())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipContent {
    pub label: String,
    pub date: String,
}

impl TooltipContent {
    pub fn new(record: &Record) -> TooltipContent {
        Self {
            label: format_tooltip(record),
            date: record.date().format(DATE_FORMAT).to_string(),
        }
    }
}
