//! Axis ticks for the year axis and the value axis.

use chrono::NaiveDate;
use gdpchart_data::Record;
use serde::Serialize;

use crate::geometry::Scales;
use crate::scale::LinearScale;

/// The first record of a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearTick {
    pub year: i32,
    pub date: NaiveDate,
    pub index: usize,
}

/// A labeled reference point, positioned in plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// One tick per distinct year, at the first record of that year.
pub fn year_ticks(records: &[Record]) -> Vec<YearTick> {
    let mut ticks: Vec<YearTick> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let year = record.year();

        if ticks.last().is_none_or(|t| t.year != year) {
            ticks.push(YearTick {
                year,
                date: record.date(),
                index,
            });
        }
    }

    ticks
}

/// One tick every `stride` records.
///
/// Only equivalent to [year_ticks] for strictly regular input starting
/// at the beginning of a year, e.g. a stride of 4 over quarterly data.
pub fn year_ticks_strided(records: &[Record], stride: usize) -> Vec<YearTick> {
    records
        .iter()
        .enumerate()
        .step_by(stride.max(1))
        .map(|(index, record)| YearTick {
            year: record.year(),
            date: record.date(),
            index,
        })
        .collect()
}

/// Labels only every fifth year, leaving the other ticks blank.
pub fn format_tick_label(year: i32) -> String {
    if year.rem_euclid(5) == 0 {
        year.to_string()
    } else {
        String::new()
    }
}

pub fn x_axis_ticks(ticks: &[YearTick], records: &[Record], scales: &Scales) -> Vec<AxisTick> {
    ticks
        .iter()
        .map(|tick| AxisTick {
            position: scales.x(&records[tick.index], tick.index),
            label: format_tick_label(tick.year),
        })
        .collect()
}

pub fn value_axis_ticks(scale: &LinearScale, count: usize) -> Vec<AxisTick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|value| AxisTick {
            position: scale.map(value),
            label: format_value_label(value),
        })
        .collect()
}

// Groups the integer digits by thousands, e.g. `20000` becomes `20,000`.
fn format_value_label(value: f64) -> String {
    if value.fract() != 0.0 || value.abs() >= 1e15 {
        return value.to_string();
    }

    let digits = (value.abs() as u64).to_string();
    let mut label = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0.0 {
        label.push('-');
    }

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            label.push(',');
        }
        label.push(digit);
    }

    label
}
