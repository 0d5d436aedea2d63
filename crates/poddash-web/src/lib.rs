//! Presentation layer for poddash.
//!
//! Stateless transforms from aggregated series to Plotly figure
//! specifications, the view models returned by the JSON API, and the HTML
//! page that hosts the charts in the browser.

pub mod charts;
pub mod page;
pub mod views;

pub use poddash_core as core;
