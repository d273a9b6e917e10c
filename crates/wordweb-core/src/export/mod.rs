//! Rendering of graphs and analysis results
//!
//! - `dot`: Graphviz dot text for the whole graph
//! - `report`: component histogram and diameter reports
//! - `format`: output format selection (human or JSON)

pub mod dot;
pub mod format;
pub mod report;

pub use dot::{escape_label, render_dot};
pub use format::OutputFormat;
pub use report::{write_diameter, write_histogram};
