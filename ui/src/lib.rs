//! Shared UI crate for Traceboard. Views and the chart data-shaping core live here.

pub mod core;
pub mod profiling;
pub mod views;

mod navbar;
pub mod components {
    pub use super::navbar::Navbar;
}
