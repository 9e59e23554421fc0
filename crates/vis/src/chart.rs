use gdpchart_data::Dataset;
use serde::Serialize;
use tracing::debug;

use crate::axis::AxisTick;
use crate::axis::value_axis_ticks;
use crate::axis::x_axis_ticks;
use crate::axis::year_ticks;
use crate::error::Result;
use crate::error::VisError;
use crate::geometry::Bar;
use crate::geometry::PlotArea;
use crate::geometry::Scales;
use crate::geometry::XLayout;
use crate::geometry::layout_bars;
use crate::scale::DEFAULT_TICK_COUNT;
use crate::scale::ValueDomain;

/// The space between the outer chart bounds and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        // The left margin leaves room for the value axis labels.
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 20.0,
            left: 50.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub layout: XLayout,
    pub value_domain: ValueDomain,
}

impl ChartOptions {
    pub const DEFAULT_TITLE: &str = "Gross Domestic Product";

    pub fn plot_area(&self) -> PlotArea {
        PlotArea {
            width: self.width - self.margin.left - self.margin.right,
            height: self.height - self.margin.top - self.margin.bottom,
        }
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: String::from(Self::DEFAULT_TITLE),
            width: 800.0,
            height: 400.0,
            margin: Margin::default(),
            layout: XLayout::default(),
            value_domain: ValueDomain::default(),
        }
    }
}

/// Everything needed to draw the bar chart, in pixel coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub title: String,
    pub caption: Option<String>,
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub plot: PlotArea,
    pub layout: XLayout,
    pub value_domain: ValueDomain,
    pub bars: Vec<Bar>,
    pub x_axis: Vec<AxisTick>,
    pub y_axis: Vec<AxisTick>,
}

impl Chart {
    pub fn build(dataset: &Dataset, options: &ChartOptions) -> Result<Chart> {
        let plot = options.plot_area();

        if !(plot.width > 0.0 && plot.height > 0.0) {
            return Err(VisError::Plot {
                width: plot.width,
                height: plot.height,
            });
        }

        let scales = Scales::build(dataset, plot, options.layout, options.value_domain)?;
        debug!(
            records = dataset.len(),
            y_domain = ?scales.y.domain(),
            "built chart scales"
        );

        let bars = layout_bars(dataset, &scales, plot);
        let years = year_ticks(dataset.records());
        let x_axis = x_axis_ticks(&years, dataset.records(), &scales);
        let y_axis = value_axis_ticks(&scales.y, DEFAULT_TICK_COUNT);

        Ok(Self {
            title: options.title.clone(),
            caption: dataset.description.clone(),
            width: options.width,
            height: options.height,
            margin: options.margin,
            plot,
            layout: options.layout,
            value_domain: options.value_domain,
            bars,
            x_axis,
            y_axis,
        })
    }
}
