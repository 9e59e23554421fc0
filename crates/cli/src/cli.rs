use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use gdpchart_vis::geometry::XLayout;
use gdpchart_vis::scale::ValueDomain;

use crate::error::CliError;
use crate::fetch::Source;

pub(crate) const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render the GDP series as a bar chart page.
    Render(RenderArgs),
    /// Download the raw GDP document.
    Fetch(FetchArgs),
}

#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Specify the URL of the GDP document.
    #[arg(short, long, env = "GDPCHART_URL", default_value = DEFAULT_URL)]
    pub(crate) url: String,

    /// Read the GDP document from a local file instead of the URL.
    #[arg(short, long, value_parser(parse_file))]
    pub(crate) input: Option<PathBuf>,

    /// Specify the path where the generated chart will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,

    /// The outer width of the chart, margins included.
    #[arg(long, default_value_t = 800.0)]
    pub(crate) width: f64,

    /// The outer height of the chart, margins included.
    #[arg(long, default_value_t = 400.0)]
    pub(crate) height: f64,

    /// Specify how the bars are placed along the horizontal axis.
    #[arg(short, long, value_enum, default_value_t = Layout::Index)]
    pub(crate) layout: Layout,

    /// Specify how the value axis domain is derived.
    #[arg(short, long, value_enum, default_value_t = Domain::Zero)]
    pub(crate) domain: Domain,

    /// Only chart the records on or after this date (YYYY-MM-DD).
    #[arg(short, long)]
    pub(crate) from: Option<NaiveDate>,

    /// Only chart the records on or before this date (YYYY-MM-DD).
    #[arg(short, long)]
    pub(crate) to: Option<NaiveDate>,

    /// The chart title. Defaults to "Gross Domestic Product".
    #[arg(long)]
    pub(crate) title: Option<String>,
}

impl RenderArgs {
    pub(crate) fn source(&self) -> Source {
        match self.input {
            Some(ref path) => Source::File(path.clone()),
            None => Source::Url(self.url.clone()),
        }
    }
}

#[derive(Args)]
pub(crate) struct FetchArgs {
    /// Specify the URL of the GDP document.
    #[arg(short, long, env = "GDPCHART_URL", default_value = DEFAULT_URL)]
    pub(crate) url: String,

    /// Specify the file where the GDP document will be stored.
    #[arg(short, long, default_value = "gdp-data.json")]
    pub(crate) output: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Layout {
    /// Equal-width bars placed by record index.
    Index,
    /// Bars placed proportionally to their dates.
    Time,
}

impl From<Layout> for XLayout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Index => XLayout::Index,
            Layout::Time => XLayout::Time,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Domain {
    /// From zero to the largest value.
    Zero,
    /// From the smallest to the largest value, rounded outwards.
    Nice,
}

impl From<Domain> for ValueDomain {
    fn from(domain: Domain) -> Self {
        match domain {
            Domain::Zero => ValueDomain::Zero,
            Domain::Nice => ValueDomain::Nice,
        }
    }
}

fn parse_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

fn parse_file(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.is_file() {
        return Err(format!("The `{}` path must point to a file.", path.display()));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}
