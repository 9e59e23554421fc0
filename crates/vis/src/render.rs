//! Renders a [Chart] as an HTML page or as a JSON document.

pub mod output;

use tinytemplate::TinyTemplate;

use crate::chart::Chart;
use crate::error::Result;

const INDEX_TEMPLATE_NAME: &str = "index";
const INDEX_TEMPLATE: &str = include_str!("./render/template/index.html.tt");

/// The stylesheet referenced by the page.
pub const STYLESHEET: &str = include_str!("./render/template/style.css");

/// The script showing the tooltip of the hovered bar.
pub const TOOLTIP_SCRIPT: &str = include_str!("./render/template/tooltip.js");

pub trait OutputStream {
    fn write(&mut self, data: &str) -> Result<()>;
}

impl OutputStream for String {
    fn write(&mut self, data: &str) -> Result<()> {
        self.push_str(data);
        Ok(())
    }
}

pub trait Render {
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream;
}

/// The chart as a standalone HTML page with an inline SVG.
pub struct HtmlPage<'a>(pub &'a Chart);

impl Render for HtmlPage<'_> {
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream,
    {
        let mut template = TinyTemplate::new();
        template.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;

        let text = template.render(INDEX_TEMPLATE_NAME, self.0)?;
        output.write(&text)
    }
}

/// The chart model, bars and ticks included, as pretty-printed JSON.
pub struct JsonDocument<'a>(pub &'a Chart);

impl Render for JsonDocument<'_> {
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream,
    {
        let text = serde_json::to_string_pretty(self.0)?;
        output.write(&text)
    }
}
