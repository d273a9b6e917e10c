//! Graph algorithm implementations
//!
//! - `components`: connected-component partitioning and size histograms
//! - `diameter`: heuristic diameter estimation via per-node BFS

pub mod components;
pub mod diameter;

pub use components::{component_sizes, connected_components, Component, ComponentHistogram};
pub use diameter::{canonical_route, diameter_routes, Diameter, RouteSelection, ROUTE_SEPARATOR};
