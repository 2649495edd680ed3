pub mod depth_chart;

pub use depth_chart::{DepthChart, DepthChartRenderer, compute_geometry};
