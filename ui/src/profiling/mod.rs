//! Profiling dashboard: stats shaping plus the chart components built on it.

pub mod aggregate;
pub mod cache;
pub mod series;

mod charts;
pub use charts::{AreaChart, ProfileCharts};

mod highlights;
pub use highlights::ProfileHighlights;

mod hooks;
pub use hooks::use_profile_stats;

pub mod option;
