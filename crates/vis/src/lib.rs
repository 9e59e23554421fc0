//! gdpchart's visualization library.
//!
//! Turns a [gdpchart_data::Dataset] into bar geometry, axis ticks and tooltip
//! labels, and renders them as a static HTML page.
//!
//! **WARNING**: This library is gdpchart's internal visualization library and
//! there are no plans to stabilize it. The API may break at any time without notice.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod scale;
pub mod tooltip;
