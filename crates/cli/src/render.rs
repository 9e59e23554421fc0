use gdpchart_data::RecordFilter;
use gdpchart_vis::chart::Chart;
use gdpchart_vis::chart::ChartOptions;
use gdpchart_vis::chart::Margin;
use gdpchart_vis::layout::VisLayout;
use tracing::info;

use crate::cli::PathExt;
use crate::cli::RenderArgs;
use crate::error::CliError;
use crate::fetch::load_dataset;

pub(crate) fn render(args: RenderArgs) -> Result<(), CliError> {
    let source = args.source();
    let output_path = args.output_path.clone().or_current_dir()?;

    let filter = RecordFilter::new(args.from, args.to);
    let dataset = load_dataset(&source)?.filter(&filter)?;
    info!(records = dataset.len(), "loaded GDP records");

    let options = chart_options(&args);
    let chart = Chart::build(&dataset, &options)?;

    let vis = VisLayout::init(&output_path)?;
    vis.generate_report(&chart)?;

    println!(
        "gdpchart rendered {} bars in: `{}`",
        chart.bars.len(),
        vis.index_file_path().display()
    );

    Ok(())
}

fn chart_options(args: &RenderArgs) -> ChartOptions {
    ChartOptions {
        title: args
            .title
            .clone()
            .unwrap_or_else(|| String::from(ChartOptions::DEFAULT_TITLE)),
        width: args.width,
        height: args.height,
        margin: Margin::default(),
        layout: args.layout.into(),
        value_domain: args.domain.into(),
    }
}
