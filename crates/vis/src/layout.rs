use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tracing::info;

use crate::chart::Chart;
use crate::error::Result;
use crate::render::HtmlPage;
use crate::render::JsonDocument;
use crate::render::Render;
use crate::render::STYLESHEET;
use crate::render::TOOLTIP_SCRIPT;
use crate::render::output::OutputFile;

/// The chart directory is structured as follows:
///
/// ./chart/index.html
/// ./chart/chart.json
/// ./chart/style.css
/// ./chart/tooltip.js
///
/// The __index__ file is the chart page and the entry point into the visualization.
/// The __chart.json__ file holds the same bars and ticks for other consumers.
pub struct VisLayout {
    root_path: PathBuf,
    index_file_path: PathBuf,
    data_file_path: PathBuf,
}

impl VisLayout {
    const MAIN_DIR_NAME: &str = "chart";
    const INDEX_FILE_NAME: &str = "index.html";
    const DATA_FILE_NAME: &str = "chart.json";
    const STYLE_FILE_NAME: &str = "style.css";
    const SCRIPT_FILE_NAME: &str = "tooltip.js";

    pub fn init(path: &Path) -> Result<VisLayout> {
        let root_path = path.join(Self::MAIN_DIR_NAME);
        let index_file_path = root_path.join(Self::INDEX_FILE_NAME);
        let data_file_path = root_path.join(Self::DATA_FILE_NAME);

        fs::create_dir_all(&root_path)?;

        Ok(Self {
            root_path,
            index_file_path,
            data_file_path,
        })
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn index_file_path(&self) -> &Path {
        &self.index_file_path
    }

    pub fn generate_report(&self, chart: &Chart) -> Result<()> {
        let mut index = OutputFile::create(&self.index_file_path)?;
        HtmlPage(chart).render(&mut index)?;
        index.flush()?;

        let mut data = OutputFile::create(&self.data_file_path)?;
        JsonDocument(chart).render(&mut data)?;
        data.flush()?;

        fs::write(self.root_path.join(Self::STYLE_FILE_NAME), STYLESHEET)?;
        fs::write(self.root_path.join(Self::SCRIPT_FILE_NAME), TOOLTIP_SCRIPT)?;

        info!(
            path = %self.root_path.display(),
            bars = chart.bars.len(),
            "generated chart"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gdpchart_data::Dataset;
    use tempfile::TempDir;

    use super::*;
    use crate::chart::ChartOptions;

    #[test]
    fn generate_report_files() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let dataset = Dataset::from_json(r#"{ "data": [["1947-01-01", 243.1], ["1947-04-01", 246.3]] }"#)?;
        let chart = Chart::build(&dataset, &ChartOptions::default())?;

        let layout = VisLayout::init(dir.path())?;
        layout.generate_report(&chart)?;

        let root = dir.path().join("chart");
        assert_eq!(layout.root_path(), root);

        let index = fs::read_to_string(layout.index_file_path())?;
        assert_eq!(index.matches(r#"class="bar""#).count(), 2);

        let data: serde_json::Value = serde_json::from_str(&fs::read_to_string(root.join("chart.json"))?)?;
        assert_eq!(data["bars"][1]["tooltip"], "1947 Q2 246.3");

        assert!(root.join("style.css").is_file());
        assert!(root.join("tooltip.js").is_file());

        Ok(())
    }

    #[test]
    fn init_reuses_existing_directory() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;

        VisLayout::init(dir.path())?;
        VisLayout::init(dir.path())?;

        Ok(())
    }
}
