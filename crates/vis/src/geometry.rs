//! Maps records to bar rectangles in plot coordinates.

use gdpchart_data::Dataset;
use gdpchart_data::Record;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ScaleError;
use crate::scale::LinearScale;
use crate::scale::TimeScale;
use crate::scale::ValueDomain;
use crate::scale::time_scale;
use crate::scale::value_scale;
use crate::tooltip::TooltipContent;

/// How bars are placed along the horizontal axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XLayout {
    /// Equal partition by record index, regardless of the date spacing.
    #[default]
    Index,

    /// Proportional to the elapsed time since the first record.
    Time,
}

/// The drawable area inside the chart margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XScale {
    Index { band: f64 },
    Time(TimeScale),
}

/// The horizontal and vertical scales of one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    pub x: XScale,
    pub y: LinearScale,
}

impl Scales {
    /// In the time layout the time scale spans the left edges of the bars,
    /// `[0, plot.width - band]`, so the last bar ends on the right plot edge.
    pub fn build(
        dataset: &Dataset,
        plot: PlotArea,
        layout: XLayout,
        domain: ValueDomain,
    ) -> Result<Scales, ScaleError> {
        let band = bar_width(dataset.len(), plot);

        let x = match layout {
            XLayout::Index => XScale::Index { band },
            XLayout::Time => XScale::Time(time_scale(dataset, [0.0, plot.width - band])?),
        };
        let y = value_scale(dataset, domain, plot.height)?;

        Ok(Self { x, y })
    }

    #[inline]
    pub fn x(&self, record: &Record, index: usize) -> f64 {
        match self.x {
            XScale::Index { band } => band * index as f64,
            XScale::Time(ref scale) => scale.map(record.date()),
        }
    }
}

fn bar_width(count: usize, plot: PlotArea) -> f64 {
    plot.width / count.max(1) as f64
}

/// Computes the rectangle of the record at `index`.
///
/// The bar width is the same for every record. The top edge is clamped
/// into the plot, so the height is never negative and the bar never
/// extends below the baseline.
pub fn map_to_rect(
    records: &[Record],
    index: usize,
    scales: &Scales,
    plot: PlotArea,
) -> RectGeometry {
    let record = &records[index];
    let width = bar_width(records.len(), plot);
    let x = scales.x(record, index);
    let y = scales.y.map(record.value()).min(plot.height).max(0.0);

    RectGeometry {
        x,
        y,
        width,
        height: plot.height - y,
    }
}

/// A bar with the attributes the page exposes for each record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    #[serde(flatten)]
    pub rect: RectGeometry,
    pub date: String,
    pub gdp: f64,
    /// The value as shown in the tooltip, e.g. `5000` rather than `5000.0`.
    pub gdp_label: String,
    pub tooltip: String,
}

pub fn layout_bars(dataset: &Dataset, scales: &Scales, plot: PlotArea) -> Vec<Bar> {
    let records = dataset.records();

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let TooltipContent { label, date } = TooltipContent::new(record);

            Bar {
                rect: map_to_rect(records, index, scales, plot),
                date,
                gdp: record.value(),
                gdp_label: record.value().to_string(),
                tooltip: label,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Months;
    use chrono::NaiveDate;
    use gdpchart_data::raw::RawPayload;
    use gdpchart_data::raw::RawRecord;

    use super::*;

    const PLOT: PlotArea = PlotArea {
        width: 730.0,
        height: 360.0,
    };

    fn quarterly(start_year: i32, values: &[f64]) -> Dataset {
        let start = NaiveDate::from_ymd_opt(start_year, 1, 1).unwrap();
        let records = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Record::new(start + Months::new(3 * i as u32), v))
            .collect();

        Dataset::new(records).unwrap()
    }

    #[test]
    fn end_to_end_zero_domain() -> Result<(), Box<dyn std::error::Error>> {
        let payload = RawPayload {
            data: vec![
                RawRecord::new("1990-10-01", "5000"),
                RawRecord::new("1991-01-01", "5200"),
            ],
            name: None,
            description: None,
        };
        let dataset = Dataset::from_payload(&payload)?;
        let scales = Scales::build(&dataset, PLOT, XLayout::Index, ValueDomain::Zero)?;

        assert_eq!(scales.y.domain(), [0.0, 5200.0]);

        let rect = map_to_rect(dataset.records(), 0, &scales, PLOT);
        let expected = PLOT.height * 5000.0 / 5200.0;

        assert!((rect.height - expected).abs() < 1e-9);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.width, PLOT.width / 2.0);

        let rect = map_to_rect(dataset.records(), 1, &scales, PLOT);
        assert_eq!(rect.x, PLOT.width / 2.0);
        assert!(rect.y.abs() < 1e-9);

        Ok(())
    }

    #[test]
    fn bars_stay_inside_the_plot() -> Result<(), ScaleError> {
        let dataset = quarterly(1950, &[281.2, 290.7, 308.5, 320.3, 336.4, 344.5, 351.8]);

        for domain in [ValueDomain::Zero, ValueDomain::Nice] {
            for layout in [XLayout::Index, XLayout::Time] {
                let scales = Scales::build(&dataset, PLOT, layout, domain)?;

                for bar in layout_bars(&dataset, &scales, PLOT) {
                    assert!(bar.rect.height >= 0.0);
                    assert!(bar.rect.y >= 0.0);
                    assert!(bar.rect.y + bar.rect.height <= PLOT.height + 1e-9);
                    assert!(bar.rect.x >= 0.0);
                    assert!(bar.rect.x + bar.rect.width <= PLOT.width + 1e-9);
                }
            }
        }

        Ok(())
    }

    #[test]
    fn negative_values_are_clamped_to_the_baseline() -> Result<(), ScaleError> {
        let dataset = quarterly(2008, &[-120.0, 80.0, 100.0]);
        let scales = Scales::build(&dataset, PLOT, XLayout::Index, ValueDomain::Zero)?;
        let rect = map_to_rect(dataset.records(), 0, &scales, PLOT);

        assert_eq!(rect.y, PLOT.height);
        assert_eq!(rect.height, 0.0);

        Ok(())
    }

    #[test]
    fn negative_series_has_no_zero_anchored_bars() {
        let dataset = quarterly(2008, &[-100.0, -50.0]);
        let scales = Scales::build(&dataset, PLOT, XLayout::Index, ValueDomain::Zero);

        assert!(matches!(scales, Err(ScaleError::DegenerateDomain { .. })));
    }

    #[test]
    fn negative_series_stands_on_the_nice_baseline() -> Result<(), ScaleError> {
        let dataset = quarterly(2008, &[-100.0, -50.0]);
        let scales = Scales::build(&dataset, PLOT, XLayout::Index, ValueDomain::Nice)?;
        let bars = layout_bars(&dataset, &scales, PLOT);

        assert_eq!(scales.y.domain(), [-100.0, -50.0]);
        assert_eq!(bars[0].rect.height, 0.0);
        assert_eq!(bars[1].rect.height, PLOT.height);

        Ok(())
    }

    #[test]
    fn index_layout_widths_fill_the_plot() -> Result<(), ScaleError> {
        let values = (0..275).map(|i| 243.1 + i as f64 * 65.0).collect::<Vec<f64>>();
        let dataset = quarterly(1947, &values);
        let scales = Scales::build(&dataset, PLOT, XLayout::Index, ValueDomain::Zero)?;
        let bars = layout_bars(&dataset, &scales, PLOT);

        let total: f64 = bars.iter().map(|b| b.rect.width).sum();
        assert!((total - PLOT.width).abs() < 1e-6);

        let last = bars.last().unwrap();
        assert!((last.rect.x + last.rect.width - PLOT.width).abs() < 1e-6);

        Ok(())
    }

    #[test]
    fn time_layout_follows_the_dates() -> Result<(), ScaleError> {
        let records = vec![
            Record::new(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), 1.0),
            Record::new(NaiveDate::from_ymd_opt(2000, 1, 2).unwrap(), 2.0),
            Record::new(NaiveDate::from_ymd_opt(2000, 1, 11).unwrap(), 3.0),
        ];
        let dataset = Dataset::new(records).unwrap();
        let plot = PlotArea {
            width: 300.0,
            height: 100.0,
        };
        let scales = Scales::build(&dataset, plot, XLayout::Time, ValueDomain::Zero)?;
        let bars = layout_bars(&dataset, &scales, plot);

        assert_eq!(bars[0].rect.x, 0.0);
        assert!((bars[1].rect.x - 20.0).abs() < 1e-9);
        assert!((bars[2].rect.x - 200.0).abs() < 1e-9);
        assert_eq!(bars[2].rect.width, 100.0);

        Ok(())
    }

    #[test]
    fn single_record_needs_index_layout() {
        let dataset = quarterly(2000, &[10.0]);

        assert!(Scales::build(&dataset, PLOT, XLayout::Index, ValueDomain::Zero).is_ok());
        assert!(matches!(
            Scales::build(&dataset, PLOT, XLayout::Time, ValueDomain::Zero),
            Err(ScaleError::DegenerateDomain { .. })
        ));
    }

    #[test]
    fn bars_carry_record_attributes() -> Result<(), ScaleError> {
        let dataset = quarterly(1990, &[5000.0, 5200.0, 5300.5]);
        let scales = Scales::build(&dataset, PLOT, XLayout::Index, ValueDomain::Zero)?;
        let bars = layout_bars(&dataset, &scales, PLOT);

        assert_eq!(bars[2].date, "1990-07-01");
        assert_eq!(bars[2].gdp, 5300.5);
        assert_eq!(bars[2].gdp_label, "5300.5");
        assert_eq!(bars[0].gdp_label, "5000");
        assert_eq!(bars[2].tooltip, "1990 Q3 5300.5");

        Ok(())
    }
}
