//! Linear and time scales that map data values to plot pixels.

use chrono::NaiveDate;
use gdpchart_data::DATE_FORMAT;
use gdpchart_data::Dataset;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ScaleError;

/// The number of ticks a scale aims for when it is made nice or ticked.
pub const DEFAULT_TICK_COUNT: usize = 10;

// Thresholds for rounding a raw tick step to 1, 2, 5 or 10 times a power of ten.
const E10: f64 = 7.0710678118654755;
const E5: f64 = 3.1622776601683795;
const E2: f64 = std::f64::consts::SQRT_2;

/// How the value axis domain is derived from the data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueDomain {
    /// `[0, max(value)]`, so bar heights are measured against a true zero baseline.
    #[default]
    Zero,

    /// `[min(value), max(value)]` extended outwards to round numbers.
    Nice,
}

/// Linear interpolation from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Result<LinearScale, ScaleError> {
        if domain.iter().chain(range.iter()).any(|v| !v.is_finite()) {
            return Err(ScaleError::NonFinite);
        }

        if domain[0] == domain[1] {
            return Err(ScaleError::DegenerateDomain {
                min: domain[0].to_string(),
                max: domain[1].to_string(),
            });
        }

        Ok(Self { domain, range })
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    #[inline]
    pub fn map(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;

        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Extends the domain so that it starts and ends on round values.
    pub fn nice(self, count: usize) -> LinearScale {
        let [d0, d1] = self.domain;
        let reversed = d1 < d0;
        let (mut start, mut stop) = if reversed { (d1, d0) } else { (d0, d1) };
        let mut previous_step = None;

        for _ in 0..10 {
            let step = tick_increment(start, stop, count);

            if previous_step == Some(step) {
                break;
            }

            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }

            previous_step = Some(step);
        }

        let domain = if reversed { [stop, start] } else { [start, stop] };

        Self {
            domain,
            range: self.range,
        }
    }

    /// Round values inside the domain, in ascending order, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let [d0, d1] = self.domain;
        let (start, stop) = if d1 < d0 { (d1, d0) } else { (d0, d1) };
        let step = tick_increment(start, stop, count);

        if !step.is_finite() || step == 0.0 {
            return Vec::new();
        }

        if step > 0.0 {
            let first = (start / step).ceil() as i64;
            let last = (stop / step).floor() as i64;
            (first..=last).map(|i| i as f64 * step).collect()
        } else {
            let inverse = -step;
            let first = (start * inverse).ceil() as i64;
            let last = (stop * inverse).floor() as i64;
            (first..=last).map(|i| i as f64 / inverse).collect()
        }
    }
}

// A positive result is the step itself; a negative result is the inverse
// of a fractional step, which keeps the arithmetic exact for steps below one.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);

    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Linear interpolation from a date domain onto a pixel range,
/// proportional to the elapsed days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: [NaiveDate; 2],
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: [NaiveDate; 2], range: [f64; 2]) -> Result<TimeScale, ScaleError> {
        let [start, end] = domain;

        if start == end {
            return Err(ScaleError::DegenerateDomain {
                min: start.format(DATE_FORMAT).to_string(),
                max: end.format(DATE_FORMAT).to_string(),
            });
        }

        let span = (end - start).num_days() as f64;
        let inner = LinearScale::new([0.0, span], range)?;

        Ok(Self { domain, inner })
    }

    pub fn domain(&self) -> [NaiveDate; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.inner.range()
    }

    #[inline]
    pub fn map(&self, date: NaiveDate) -> f64 {
        let elapsed = (date - self.domain[0]).num_days() as f64;
        self.inner.map(elapsed)
    }
}

/// Builds the time scale over the date extent of the dataset.
pub fn time_scale(dataset: &Dataset, range: [f64; 2]) -> Result<TimeScale, ScaleError> {
    let (min, max) = dataset.date_extent();
    TimeScale::new([min, max], range)
}

/// Builds the value scale of the dataset, inverted over `[plot_height, 0]`
/// so that larger values are drawn closer to the top.
pub fn value_scale(
    dataset: &Dataset,
    domain: ValueDomain,
    plot_height: f64,
) -> Result<LinearScale, ScaleError> {
    let (min, max) = dataset.value_extent();
    let range = [plot_height, 0.0];

    match domain {
        // An all-negative series keeps the zero baseline as its upper bound.
        ValueDomain::Zero => LinearScale::new([0.0, max.max(0.0)], range),
        ValueDomain::Nice => Ok(LinearScale::new([min, max], range)?.nice(DEFAULT_TICK_COUNT)),
    }
}
