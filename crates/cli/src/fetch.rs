mod client;
pub(crate) mod error;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use gdpchart_data::Dataset;
use tracing::info;

use crate::cli::FetchArgs;
use crate::error::CliError;
use crate::fetch::client::GdpClient;

/// Where the GDP document is read from.
pub(crate) enum Source {
    Url(String),
    File(PathBuf),
}

pub(crate) fn load_dataset(source: &Source) -> Result<Dataset, CliError> {
    let dataset = match source {
        Source::Url(url) => {
            info!(url = url.as_str(), "fetching GDP data");
            let payload = GdpClient::new().get_payload(url)?;
            Dataset::from_payload(&payload)?
        }
        Source::File(path) => {
            info!(path = %path.display(), "reading GDP data");
            let file = File::open(path).map_err(|e| CliError::Path(format!("{}: {e}", path.display())))?;
            Dataset::from_reader(BufReader::new(file))?
        }
    };

    Ok(dataset)
}

pub(crate) fn fetch(args: FetchArgs) -> Result<(), CliError> {
    info!(url = args.url.as_str(), path = %args.output.display(), "downloading GDP data");

    let bytes = GdpClient::new().download(&args.url, &args.output)?;

    info!(bytes, "download completed");
    Ok(())
}
