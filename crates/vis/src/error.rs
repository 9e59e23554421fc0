//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;
use std::io::Error as IoError;

use tinytemplate::error::Error as TinyTemplateError;

/// The result type that uses [VisError] as the error type.
pub type Result<T> = std::result::Result<T, VisError>;

/// The error type for laying out and rendering a chart.
#[derive(Debug)]
pub enum VisError {
    /// A [std::io::Error] encountered while writing the chart files.
    Io(IoError),

    /// A [tinytemplate::error::Error] encountered while rendering
    /// the page template.
    TemplateError(TinyTemplateError),

    /// A [serde_json::Error] encountered while serializing the chart model.
    Json(serde_json::Error),

    /// A [ScaleError] encountered while building the chart scales.
    Scale(ScaleError),

    /// The margins leave no room for the plot area.
    Plot { width: f64, height: f64 },
}

impl Error for VisError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VisError::Io(error) => Some(error),
            VisError::TemplateError(error) => Some(error),
            VisError::Json(error) => Some(error),
            VisError::Scale(error) => Some(error),
            VisError::Plot { .. } => None,
        }
    }
}

impl Display for VisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vis_error = "vis error:";

        match self {
            VisError::Io(error) => write!(f, "{vis_error} I/O error: {error}"),
            VisError::TemplateError(error) => write!(f, "{vis_error} template error: {error}"),
            VisError::Json(error) => write!(f, "{vis_error} JSON serialization error: {error}"),
            VisError::Scale(error) => write!(f, "{vis_error} {error}"),
            VisError::Plot { width, height } => write!(
                f,
                "{vis_error} the plot area {width}x{height} is empty; reduce the margins or enlarge the chart"
            ),
        }
    }
}

impl From<TinyTemplateError> for VisError {
    fn from(error: TinyTemplateError) -> Self {
        VisError::TemplateError(error)
    }
}

impl From<IoError> for VisError {
    fn from(error: IoError) -> Self {
        VisError::Io(error)
    }
}

impl From<serde_json::Error> for VisError {
    fn from(error: serde_json::Error) -> Self {
        VisError::Json(error)
    }
}

impl From<ScaleError> for VisError {
    fn from(error: ScaleError) -> Self {
        VisError::Scale(error)
    }
}

/// The error type for building a scale.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleError {
    /// The lower and the upper bound of the domain are equal,
    /// e.g. a single record or a constant series.
    DegenerateDomain { min: String, max: String },

    /// A domain or range bound is `NaN` or infinite.
    NonFinite,
}

impl Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scale_error = "scale error:";

        match self {
            ScaleError::DegenerateDomain { min, max } => write!(
                f,
                "{scale_error} the domain [{min}, {max}] is empty and cannot be interpolated"
            ),
            ScaleError::NonFinite => write!(f, "{scale_error} the scale bounds must be finite"),
        }
    }
}

impl Error for ScaleError {}
