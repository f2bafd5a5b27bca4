pub(crate) mod app;
pub(crate) mod chart;
pub(crate) mod render;
pub(crate) mod screens;
pub(crate) mod theme;
pub(crate) mod util;


#[cfg(test)]
#[path = "chart_tests.rs"]
mod chart_tests;
